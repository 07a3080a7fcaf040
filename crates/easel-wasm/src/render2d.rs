//! Canvas2D software renderer.
//!
//! Paints a rendered `Frame` to an HTML `<canvas>` via
//! `CanvasRenderingContext2d`, and measures label text with the context's
//! own `measureText` so label boxes fit the browser's font.

use easel_core::{Frame, Label, Point, Primitive, Size, TextMeasure};
use web_sys::CanvasRenderingContext2d;

/// Theme-dependent colors for the canvas renderer.
pub struct CanvasTheme {
    pub bg: &'static str,
    pub ink: &'static str,
    pub label_bg: &'static str,
    pub label_border: &'static str,
    pub font: &'static str,
}

impl CanvasTheme {
    /// Light theme — black ink on white paper.
    pub fn light() -> Self {
        Self {
            bg: "#FFFFFF",
            ink: "#000000",
            label_bg: "#FFFFFF",
            label_border: "#000000",
            font: "12px sans-serif",
        }
    }

    /// Dark theme — chalk on a slate board.
    pub fn dark() -> Self {
        Self {
            bg: "#1C1C1E",
            ink: "#F2F2F7",
            label_bg: "#2C2C2E",
            label_border: "#F2F2F7",
            font: "12px sans-serif",
        }
    }
}

// ─── Measurement ────────────────────────────────────────────────────────

/// Glyph boxes from `CanvasRenderingContext2d.measureText`.
///
/// Uses whatever font is set on the context; call `ctx.set_font` first.
/// The width spans both bearings, so `draw_label` shifts `fillText` right
/// by the left bearing to put the ink at the box's left edge.
pub struct CanvasMeasure<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasMeasure<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for CanvasMeasure<'_> {
    fn glyph_box(&self, text: &str) -> Size {
        match self.ctx.measure_text(text) {
            Ok(m) => Size::new(
                m.actual_bounding_box_left() + m.actual_bounding_box_right(),
                m.actual_bounding_box_ascent() + m.actual_bounding_box_descent(),
            ),
            Err(e) => {
                log::warn!("measureText failed for {text:?}: {e:?}");
                Size::ZERO
            }
        }
    }
}

// ─── Painting ───────────────────────────────────────────────────────────

/// Paint `frame` onto the whole canvas, clearing it first.
pub fn render_frame(ctx: &CanvasRenderingContext2d, frame: &Frame, theme: &CanvasTheme) {
    let canvas = frame.canvas;

    // Clear canvas
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(canvas.x0, canvas.y0, canvas.width(), canvas.height());

    ctx.save();
    ctx.set_stroke_style_str(theme.ink);
    ctx.set_line_width(1.0);
    ctx.set_line_cap("round");
    ctx.set_font(theme.font);
    ctx.set_text_baseline("alphabetic");

    for primitive in &frame.primitives {
        match primitive {
            Primitive::Line { from, to } => {
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            Primitive::Label(label) => draw_label(ctx, label, theme),
        }
    }

    ctx.restore();
}

fn draw_label(ctx: &CanvasRenderingContext2d, label: &Label, theme: &CanvasTheme) {
    let r = label.frame;
    ctx.set_fill_style_str(theme.label_bg);
    ctx.fill_rect(r.x0, r.y0, r.width(), r.height());

    ctx.set_stroke_style_str(theme.label_border);
    ctx.stroke_rect(r.x0, r.y0, r.width(), r.height());
    ctx.set_stroke_style_str(theme.ink);

    ctx.set_fill_style_str(theme.ink);
    let left_bearing = ctx
        .measure_text(&label.text)
        .map(|m| m.actual_bounding_box_left())
        .unwrap_or(0.0);
    let origin = text_origin(label.baseline, left_bearing);
    let _ = ctx.fill_text(&label.text, origin.x, origin.y);
}

/// Where `fillText` must start so ink reaching `left_bearing` left of the
/// text origin begins at `baseline.x`.
fn text_origin(baseline: Point, left_bearing: f64) -> Point {
    Point::new(baseline.x + left_bearing, baseline.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::{Action, Affine, Cursor, Rect, ReplayPass, Replayer};
    use pretty_assertions::assert_eq;

    /// Glyphs whose ink starts 3 units left of the pen, 10 wide, 7 tall.
    struct Overhanging;

    impl TextMeasure for Overhanging {
        fn glyph_box(&self, _text: &str) -> Size {
            Size::new(3.0 + 7.0, 7.0)
        }
    }

    #[test]
    fn text_ink_starts_at_the_label_box_edge() {
        let replayer = Replayer::new(&Overhanging, 4.0);
        let mut frame = Frame::new(Rect::ZERO, Affine::IDENTITY, Rect::ZERO);
        replayer
            .replay(
                &[Action::DrawTextLabel("j".into())],
                &ReplayPass::labels(Affine::IDENTITY, Cursor::new(1)),
                &mut frame,
                None,
            )
            .unwrap();
        let label = frame.labels().next().unwrap();

        let origin = text_origin(label.baseline, 3.0);
        assert_eq!(origin.x - 3.0, label.text_rect.x0);
        assert_eq!(origin.x + 7.0, label.text_rect.x1);
        assert_eq!(origin.y, label.baseline.y);
    }

    #[test]
    fn zero_bearing_draws_at_the_baseline() {
        let baseline = Point::new(-6.0, 4.0);
        assert_eq!(text_origin(baseline, 0.0), baseline);
    }
}
