//! Action log → bounds and drawn primitives.
//!
//! The replay engine walks the log in recorded order, threading one live
//! pose and a `TransformStack`. A render uses three walks:
//!
//! 1. bounds: nothing drawn, every position and label box accumulated
//! 2. lines: only `DrawForward` emitted, stops at the cursor
//! 3. labels: only `DrawTextLabel` emitted, stops at the cursor
//!
//! Splitting lines and labels into separate walks keeps labels on top of
//! every line without a scene graph or z-index.

use crate::action::Action;
use crate::cursor::Cursor;
use crate::error::ReplayError;
use crate::frame::Label;
use crate::transform::{self, TransformStack};
use kurbo::{Affine, Point, Rect, Size};

// ─── Text measurement ────────────────────────────────────────────────────

/// Glyph-box measurement for label placement.
///
/// Hosts with a real text engine (Canvas2D `measureText`, a font shaper)
/// implement this; `MonospaceMetrics` is the fallback.
pub trait TextMeasure {
    /// Width and height of the ink box of `text` at the current font.
    fn glyph_box(&self, text: &str) -> Size;
}

/// Fixed-advance approximation of a sans-serif font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub font_size: f64,
    /// Horizontal advance per character, as a fraction of `font_size`.
    pub advance: f64,
    /// Cap height, as a fraction of `font_size`.
    pub cap_height: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            advance: 0.6,
            cap_height: 0.7,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn glyph_box(&self, text: &str) -> Size {
        let chars = text.chars().count();
        if chars == 0 {
            return Size::ZERO;
        }
        Size::new(
            chars as f64 * self.font_size * self.advance,
            self.font_size * self.cap_height,
        )
    }
}

// ─── Surfaces ────────────────────────────────────────────────────────────

/// Sink for drawn primitives, in output space.
pub trait Surface {
    fn line(&mut self, from: Point, to: Point);
    fn label(&mut self, label: Label);
}

/// Surface that drops everything. Used by the bounds walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Surface for Discard {
    fn line(&mut self, _from: Point, _to: Point) {}
    fn label(&mut self, _label: Label) {}
}

// ─── Bounds ──────────────────────────────────────────────────────────────

/// Running union of every point and rectangle touched by a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds(Option<Rect>);

impl Bounds {
    pub fn add_point(&mut self, p: Point) {
        self.0 = Some(match self.0 {
            Some(r) => r.union_pt(p),
            None => Rect::from_points(p, p),
        });
    }

    pub fn add_rect(&mut self, rect: Rect) {
        self.0 = Some(match self.0 {
            Some(r) => r.union(rect),
            None => rect,
        });
    }

    /// The accumulated box, or a zero-size box at the origin if nothing
    /// was touched.
    pub fn finish(self) -> Rect {
        self.0.unwrap_or(Rect::ZERO)
    }
}

// ─── Passes ──────────────────────────────────────────────────────────────

/// Which draw kind a walk emits to its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawFilter {
    Nothing,
    Lines,
    Labels,
}

/// Parameters of one walk over the log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayPass {
    pub filter: DrawFilter,
    /// Stop at the first draw action the cursor does not reveal.
    /// `None` walks the whole log.
    pub limit: Option<Cursor>,
    /// Starting pose: identity for bounds, the camera for drawing.
    pub origin: Affine,
}

impl ReplayPass {
    pub fn bounds() -> Self {
        Self {
            filter: DrawFilter::Nothing,
            limit: None,
            origin: Affine::IDENTITY,
        }
    }

    pub fn lines(camera: Affine, limit: Cursor) -> Self {
        Self {
            filter: DrawFilter::Lines,
            limit: Some(limit),
            origin: camera,
        }
    }

    pub fn labels(camera: Affine, limit: Cursor) -> Self {
        Self {
            filter: DrawFilter::Labels,
            limit: Some(limit),
            origin: camera,
        }
    }
}

/// What a walk touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayStats {
    /// Actions replayed before the walk ended.
    pub visited: usize,
    /// Draw actions replayed, drawn or not.
    pub draws_visited: usize,
    /// Saved poses left on the stack at the end of the walk.
    pub open_pushes: usize,
    /// Pose after the last replayed action.
    pub pose: Affine,
}

// ─── Engine ──────────────────────────────────────────────────────────────

/// Replays action logs with a fixed text measurer and label margin.
pub struct Replayer<'a> {
    measure: &'a dyn TextMeasure,
    label_margin: f64,
}

impl<'a> Replayer<'a> {
    pub fn new(measure: &'a dyn TextMeasure, label_margin: f64) -> Self {
        Self {
            measure,
            label_margin,
        }
    }

    /// Walk `actions` once.
    ///
    /// # Errors
    /// Returns `ReplayError::UnbalancedPop` if a `Pop` runs on an empty stack.
    pub fn replay(
        &self,
        actions: &[Action],
        pass: &ReplayPass,
        surface: &mut dyn Surface,
        mut bounds: Option<&mut Bounds>,
    ) -> Result<ReplayStats, ReplayError> {
        let mut pose = pass.origin;
        let mut stack = TransformStack::new();
        let mut stats = ReplayStats {
            visited: 0,
            draws_visited: 0,
            open_pushes: 0,
            pose,
        };

        for (index, action) in actions.iter().enumerate() {
            if action.is_draw() {
                if let Some(cursor) = pass.limit
                    && !cursor.reveals(stats.draws_visited)
                {
                    break;
                }
                stats.draws_visited += 1;
            }
            stats.visited += 1;

            match action {
                Action::MoveForward(length) | Action::DrawForward(length) => {
                    let from = transform::position(pose);
                    pose = transform::advance(pose, *length);
                    let to = transform::position(pose);
                    if let Some(acc) = bounds.as_deref_mut() {
                        acc.add_point(from);
                        acc.add_point(to);
                    }
                    if matches!(action, Action::DrawForward(_))
                        && pass.filter == DrawFilter::Lines
                    {
                        surface.line(from, to);
                    }
                }
                Action::Rotate(degrees) => {
                    pose = transform::turn(pose, *degrees);
                }
                Action::Push => stack.push(pose),
                Action::Pop => {
                    pose = stack.pop().ok_or(ReplayError::UnbalancedPop { index })?;
                }
                Action::DrawTextLabel(text) => {
                    let label = self.place_label(pose, text);
                    if let Some(acc) = bounds.as_deref_mut() {
                        acc.add_rect(label.text_rect);
                    }
                    if pass.filter == DrawFilter::Labels {
                        surface.label(label);
                    }
                }
            }
        }

        stats.open_pushes = stack.depth();
        stats.pose = pose;
        Ok(stats)
    }

    /// Center the glyph box on the turtle, ignoring its rotation.
    /// The baseline origin snaps to whole units.
    fn place_label(&self, pose: Affine, text: &str) -> Label {
        let center = transform::position(pose);
        let glyphs = self.measure.glyph_box(text);
        let baseline = Point::new(
            (center.x - glyphs.width / 2.0).round(),
            (center.y + glyphs.height / 2.0).round(),
        );
        let text_rect = Rect::new(
            baseline.x,
            baseline.y - glyphs.height.trunc(),
            baseline.x + glyphs.width.trunc(),
            baseline.y,
        );
        Label {
            text: text.to_string(),
            text_rect,
            frame: text_rect.inflate(self.label_margin, self.label_margin),
            baseline,
        }
    }
}
