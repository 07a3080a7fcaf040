use crate::render2d::CanvasTheme;
use easel_core::{Frame, Primitive};
use std::fmt::Write;

/// Options for `render_svg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    /// Extra space around the canvas area.
    pub padding: f64,
    pub stroke_width: f64,
    pub font_size: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            padding: 0.0,
            stroke_width: 1.0,
            font_size: 12.0,
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Export a rendered frame as a standalone SVG document.
///
/// The viewBox covers the frame's canvas plus `padding`; primitives keep
/// their canvas coordinates and paint in frame order.
pub fn render_svg(frame: &Frame, theme: &CanvasTheme, options: &SvgOptions) -> String {
    let pad = options.padding;
    let x = frame.canvas.x0 - pad;
    let y = frame.canvas.y0 - pad;
    let width = frame.canvas.width() + pad * 2.0;
    let height = frame.canvas.height() + pad * 2.0;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{x} {y} {width} {height}\">"
    );
    svg.push_str("<style>\n");
    let _ = writeln!(
        svg,
        "  text {{ font-family: sans-serif; font-size: {}px; }}",
        options.font_size
    );
    svg.push_str("</style>\n");
    let _ = writeln!(
        svg,
        "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"{}\" />",
        theme.bg
    );

    for primitive in &frame.primitives {
        match primitive {
            Primitive::Line { from, to } => {
                let _ = writeln!(
                    svg,
                    "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" />",
                    from.x, from.y, to.x, to.y, theme.ink, options.stroke_width
                );
            }
            Primitive::Label(label) => {
                let r = label.frame;
                let _ = writeln!(
                    svg,
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />",
                    r.x0,
                    r.y0,
                    r.width(),
                    r.height(),
                    theme.label_bg,
                    theme.label_border,
                    options.stroke_width
                );
                let _ = writeln!(
                    svg,
                    "  <text x=\"{}\" y=\"{}\" fill=\"{}\">{}</text>",
                    label.baseline.x,
                    label.baseline.y,
                    theme.ink,
                    escape_xml(&label.text)
                );
            }
        }
    }

    svg.push_str("</svg>");
    svg
}
