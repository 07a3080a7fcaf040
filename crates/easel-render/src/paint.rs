//! Frame → Vello drawing commands.
//!
//! Paints a rendered `Frame` in list order: background, every line, then
//! every label box. Frames already hold lines before labels, so labels
//! cover the lines beneath them.
//!
//! Labels render as bordered boxes only. Vello needs a font context to
//! draw glyphs, so label text is left to hosts that have one (the WASM
//! bridge paints it with Canvas2D `fillText` or SVG `<text>`).

use easel_core::{Frame, Label, Primitive};
use kurbo::{Affine, Cap, Join, Line, Point, Rect, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Colours and stroke widths used by the painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub background: Color,
    pub ink: Color,
    pub label_fill: Color,
    pub line_width: f64,
    pub border_width: f64,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(255, 255, 255),
            ink: Color::from_rgb8(0, 0, 0),
            label_fill: Color::from_rgb8(255, 255, 255),
            line_width: 1.0,
            border_width: 1.0,
        }
    }
}

/// Paint `frame` into `scene`.
pub fn paint_frame(scene: &mut Scene, frame: &Frame, style: &PaintStyle) {
    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        style.background,
        None,
        &frame.canvas,
    );

    for primitive in &frame.primitives {
        match primitive {
            Primitive::Line { from, to } => paint_line(scene, *from, *to, style),
            Primitive::Label(label) => paint_label(scene, label, style),
        }
    }
}

// ─── Primitive painters ──────────────────────────────────────────────────────

fn paint_line(scene: &mut Scene, from: Point, to: Point, style: &PaintStyle) {
    log::trace!("LINE {from:?} → {to:?}");
    scene.stroke(
        &line_stroke(style.line_width),
        Affine::IDENTITY,
        style.ink,
        None,
        &Line::new(from, to),
    );
}

fn paint_label(scene: &mut Scene, label: &Label, style: &PaintStyle) {
    let frame: Rect = label.frame;
    scene.fill(Fill::NonZero, Affine::IDENTITY, style.label_fill, None, &frame);
    scene.stroke(
        &border_stroke(style.border_width),
        Affine::IDENTITY,
        style.ink,
        None,
        &frame,
    );
    log::trace!(
        "LABEL {:?} baseline ({}, {})",
        label.text,
        label.baseline.x,
        label.baseline.y
    );
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn line_stroke(width: f64) -> Stroke {
    Stroke {
        width,
        join: Join::Round,
        start_cap: Cap::Round,
        end_cap: Cap::Round,
        ..Default::default()
    }
}

fn border_stroke(width: f64) -> Stroke {
    Stroke {
        width,
        join: Join::Miter,
        start_cap: Cap::Butt,
        end_cap: Cap::Butt,
        ..Default::default()
    }
}
