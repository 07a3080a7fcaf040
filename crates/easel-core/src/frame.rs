//! Drawn geometry produced by one render.
//!
//! A `Frame` is a flat, ordered list of primitives in canvas coordinates.
//! Lines come first, then labels, so painting in list order layers every
//! label over every line.

use crate::replay::Surface;
use kurbo::{Affine, Point, Rect};
use serde::Serialize;

/// A boxed text label, already positioned in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    /// Tight glyph box the text occupies.
    pub text_rect: Rect,
    /// Bordered background box: `text_rect` grown by the label margin.
    pub frame: Rect,
    /// Left end of the text baseline.
    pub baseline: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line { from: Point, to: Point },
    Label(Label),
}

/// Output of `Easel::render`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Canvas area the frame was laid out for.
    pub canvas: Rect,
    /// Centering translation applied to drawing space.
    pub camera: Affine,
    /// Bounding box of the whole recording, in drawing space.
    pub bounds: Rect,
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn new(canvas: Rect, camera: Affine, bounds: Rect) -> Self {
        Self {
            canvas,
            camera,
            bounds,
            primitives: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line { from, to } => Some((*from, *to)),
            Primitive::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label(label) => Some(label),
            Primitive::Line { .. } => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Surface for Frame {
    fn line(&mut self, from: Point, to: Point) {
        self.primitives.push(Primitive::Line { from, to });
    }

    fn label(&mut self, label: Label) {
        self.primitives.push(Primitive::Label(label));
    }
}
