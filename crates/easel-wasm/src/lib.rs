//! WASM bridge for Easel — exposes the turtle recorder and step-through
//! controls to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the `<canvas>`
//! and the buttons; it forwards clicks and key events here and repaints
//! whenever a call reports a change.

mod render2d;
mod svg;

pub use render2d::{CanvasMeasure, CanvasTheme, render_frame};
pub use svg::{SvgOptions, render_svg};

use easel_core::{Action, CursorCommand, Easel, Frame, MonospaceMetrics, Rect, ReplayError};
use easel_editor::StepControls;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing easel.
///
/// Holds the shared easel and its step controls. All interaction from JS
/// goes through this struct.
#[wasm_bindgen]
pub struct EaselCanvas {
    controls: StepControls,
    width: f64,
    height: f64,
    /// Dark mode flag — `false` = light (default), `true` = dark.
    dark_mode: bool,
}

#[wasm_bindgen]
impl EaselCanvas {
    /// Create a new easel for a canvas of the given dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();

        Self {
            controls: StepControls::new(Arc::new(Easel::default())),
            width,
            height,
            dark_mode: false,
        }
    }

    fn easel(&self) -> &Easel {
        self.controls.easel()
    }

    fn canvas_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    fn theme(&self) -> CanvasTheme {
        if self.dark_mode {
            CanvasTheme::dark()
        } else {
            CanvasTheme::light()
        }
    }

    // ─── Recording ──────────────────────────────────────────────────────

    pub fn move_forward(&self, length: f64) {
        self.easel().move_forward(length);
    }

    pub fn draw_forward(&self, length: f64) {
        self.easel().draw_forward(length);
    }

    pub fn rotate(&self, degrees: f64) {
        self.easel().rotate(degrees);
    }

    pub fn push(&self) {
        self.easel().push();
    }

    pub fn pop(&self) {
        self.easel().pop();
    }

    pub fn draw_text_label(&self, text: &str) {
        self.easel().draw_text_label(text);
    }

    /// Append a JSON array of actions, e.g.
    /// `[{"op":"draw_forward","arg":10},{"op":"rotate","arg":90}]`.
    ///
    /// Returns JSON `{"ok":true,"draws":N}` or `{"ok":false,"error":"..."}`.
    /// Nothing is recorded when the JSON is invalid.
    pub fn record_json(&self, json: &str) -> String {
        match serde_json::from_str::<Vec<Action>>(json) {
            Ok(actions) => {
                self.easel().record(actions);
                serde_json::json!({ "ok": true, "draws": self.easel().draws() }).to_string()
            }
            Err(e) => error_json(&format!("Invalid program: {e}")),
        }
    }

    // ─── Step-through ───────────────────────────────────────────────────

    /// Run a toolbar command by name (`"start"`, `"back"`, `"next"`, `"end"`).
    /// Returns `true` if the cursor moved and the canvas needs a repaint.
    pub fn command(&self, name: &str) -> bool {
        self.controls.press_named(name).is_some()
    }

    /// Handle a key event. Returns `true` if it was bound to a step command.
    pub fn handle_key(&self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        self.controls
            .handle_key(key, ctrl, shift, alt, meta)
            .is_some()
    }

    /// Toolbar state as JSON: `[{"command":"start","label":"Start","enabled":false}, ...]`.
    pub fn toolbar_json(&self) -> String {
        serde_json::to_string(&self.controls.buttons()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Number of recorded draws, saturating at `u32::MAX`.
    pub fn draws(&self) -> u32 {
        count_for_js(self.easel().draws())
    }

    pub fn cursor(&self) -> f64 {
        self.easel().cursor() as f64
    }

    // ─── Rendering ──────────────────────────────────────────────────────

    /// Render to a Canvas2D context. Returns `false` if the recording
    /// could not be replayed (the canvas is left cleared).
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> bool {
        let theme = self.theme();
        ctx.set_font(theme.font);
        match self.easel().render(self.canvas_rect(), &CanvasMeasure::new(ctx)) {
            Ok(frame) => {
                render_frame(ctx, &frame, &theme);
                true
            }
            Err(e) => {
                log::warn!("render failed: {e}");
                let empty = Frame::new(
                    self.canvas_rect(),
                    easel_core::Affine::IDENTITY,
                    Rect::ZERO,
                );
                render_frame(ctx, &empty, &theme);
                false
            }
        }
    }

    /// The current frame as JSON, measured with fixed-width metrics.
    /// Returns `{"ok":true,"frame":{...}}` or `{"ok":false,"error":"..."}`.
    pub fn frame_json(&self) -> String {
        match self.render_headless() {
            Ok(frame) => serde_json::json!({ "ok": true, "frame": frame }).to_string(),
            Err(e) => error_json(&e.to_string()),
        }
    }

    /// The current frame as an SVG document, or an empty string on error.
    pub fn export_svg(&self) -> String {
        match self.render_headless() {
            Ok(frame) => render_svg(&frame, &self.theme(), &SvgOptions::default()),
            Err(e) => {
                log::warn!("svg export failed: {e}");
                String::new()
            }
        }
    }

    fn render_headless(&self) -> Result<Frame, ReplayError> {
        self.easel()
            .render(self.canvas_rect(), &MonospaceMetrics::default())
    }

    /// Set the canvas theme.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Resize the canvas. The drawing re-centers on the next render.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

fn count_for_js(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "ok": false, "error": message }).to_string()
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Easel WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone validation functions (no canvas needed) ──────────────────

/// Check that a JSON program parses and replays without an unbalanced pop.
/// Returns JSON: `{"ok":true,"draws":N}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_program(json: &str) -> String {
    let actions: Vec<Action> = match serde_json::from_str(json) {
        Ok(actions) => actions,
        Err(e) => return error_json(&format!("Invalid program: {e}")),
    };
    let easel = Easel::default();
    easel.record(actions);
    easel.apply(CursorCommand::End);
    match easel.render(Rect::ZERO, &MonospaceMetrics::default()) {
        Ok(_) => serde_json::json!({ "ok": true, "draws": easel.draws() }).to_string(),
        Err(e) => error_json(&e.to_string()),
    }
}
