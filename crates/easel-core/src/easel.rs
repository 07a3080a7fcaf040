//! The shared easel: recording API, step-through cursor, and render entry point.
//!
//! `Easel` owns the action log, the cached bounds, and the cursor behind a
//! single mutex. Recording calls and renders both take that lock, so a
//! render never sees a half-appended log and concurrent recorders are
//! serialized. Rendering runs to completion while the lock is held.

use crate::action::{Action, ActionLog};
use crate::camera;
use crate::cursor::{Cursor, CursorCommand};
use crate::error::ReplayError;
use crate::frame::Frame;
use crate::replay::{Bounds, Discard, ReplayPass, Replayer, TextMeasure};
use kurbo::Rect;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Called after every cursor command so the host can schedule a repaint.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

// ─── Config ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaselConfig {
    /// Padding between a label's text and its border. Default: **4.0**.
    pub label_margin: f64,
    /// Cursor value before any command arrives. Default: **1**, so the
    /// first stroke is visible on startup.
    pub initial_cursor: i64,
}

impl Default for EaselConfig {
    fn default() -> Self {
        Self {
            label_margin: 4.0,
            initial_cursor: 1,
        }
    }
}

// ─── State ────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct EaselState {
    log: ActionLog,
    /// Bounds of the full recording; `None` until the next render.
    bounds: Option<Rect>,
    cursor: Cursor,
}

impl EaselState {
    fn record(&mut self, action: Action) {
        log::trace!("record {} (#{})", action.name(), self.log.len());
        self.log.push(action);
        self.bounds = None;
    }
}

pub struct Easel {
    state: Mutex<EaselState>,
    config: EaselConfig,
    repaint: RwLock<Option<RepaintHook>>,
}

impl Default for Easel {
    fn default() -> Self {
        Self::new(EaselConfig::default())
    }
}

impl std::fmt::Debug for Easel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("Easel");
        // Formatting from inside a render (e.g. a `TextMeasure`) must not
        // wait on the lock the render already holds.
        match self.state.try_lock() {
            Some(state) => out.field("state", &*state),
            None => out.field("state", &format_args!("<locked>")),
        };
        out.field("config", &self.config).finish_non_exhaustive()
    }
}

impl Easel {
    pub fn new(config: EaselConfig) -> Self {
        Self {
            state: Mutex::new(EaselState {
                log: ActionLog::new(),
                bounds: None,
                cursor: Cursor::new(config.initial_cursor),
            }),
            config,
            repaint: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &EaselConfig {
        &self.config
    }

    // ─── Recording ────────────────────────────────────────────────────────

    /// Move `length` units along the current heading without drawing.
    pub fn move_forward(&self, length: f64) {
        self.state.lock().record(Action::MoveForward(length));
    }

    /// Draw a line `length` units along the current heading and move to its end.
    pub fn draw_forward(&self, length: f64) {
        self.state.lock().record(Action::DrawForward(length));
    }

    /// Turn the heading by `degrees`; positive is clockwise, 360 is a full turn.
    pub fn rotate(&self, degrees: f64) {
        self.state.lock().record(Action::Rotate(degrees));
    }

    /// Save the current position and heading. See [`Easel::pop`].
    pub fn push(&self) {
        self.state.lock().record(Action::Push);
    }

    /// Restore the position and heading saved by the matching [`Easel::push`].
    pub fn pop(&self) {
        self.state.lock().record(Action::Pop);
    }

    /// Stamp a boxed text label at the current position.
    pub fn draw_text_label(&self, text: impl Into<String>) {
        self.state.lock().record(Action::DrawTextLabel(text.into()));
    }

    /// Append a batch of actions under one lock acquisition.
    pub fn record(&self, actions: impl IntoIterator<Item = Action>) {
        let mut state = self.state.lock();
        for action in actions {
            state.record(action);
        }
    }

    // ─── Introspection ────────────────────────────────────────────────────

    /// Number of draw actions recorded so far.
    pub fn draws(&self) -> usize {
        self.state.lock().log.draws()
    }

    pub fn len(&self) -> usize {
        self.state.lock().log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().log.is_empty()
    }

    /// Snapshot of the recorded actions.
    pub fn actions(&self) -> Vec<Action> {
        self.state.lock().log.actions().to_vec()
    }

    /// Cached bounds of the full recording, if a render has computed them
    /// since the last mutation.
    pub fn bounds(&self) -> Option<Rect> {
        self.state.lock().bounds
    }

    pub fn cursor(&self) -> i64 {
        self.state.lock().cursor.value()
    }

    // ─── Step-through ─────────────────────────────────────────────────────

    /// Register the callback run after each cursor command.
    pub fn on_repaint(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.repaint.write() = Some(Arc::new(hook));
    }

    /// Apply a cursor command, then request a repaint.
    /// Returns the new cursor value.
    pub fn apply(&self, command: CursorCommand) -> i64 {
        let value = {
            let mut state = self.state.lock();
            let total = state.log.draws();
            state.cursor.apply(command, total)
        };
        log::debug!("cursor {} → {value}", command.name());

        let hook = self.repaint.read().clone();
        if let Some(hook) = hook {
            hook();
        }
        value
    }

    // ─── Rendering ────────────────────────────────────────────────────────

    /// Replay the log into a centered frame for `canvas`.
    ///
    /// Recomputes the bounds first if the log changed since the last render.
    /// Lines are emitted before labels so labels paint on top.
    ///
    /// # Errors
    /// Returns `ReplayError::UnbalancedPop` if the recording pops more
    /// positions than it pushed. The bounds cache stays empty in that case.
    pub fn render(&self, canvas: Rect, measure: &dyn TextMeasure) -> Result<Frame, ReplayError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let replayer = Replayer::new(measure, self.config.label_margin);
        let actions = state.log.actions();

        let bounds = match state.bounds {
            Some(bounds) => bounds,
            None => {
                let mut acc = Bounds::default();
                replayer.replay(actions, &ReplayPass::bounds(), &mut Discard, Some(&mut acc))?;
                let bounds = acc.finish();
                log::debug!("bounds recomputed over {} actions: {bounds:?}", actions.len());
                state.bounds = Some(bounds);
                bounds
            }
        };

        let camera = camera::center_on(bounds, canvas);
        let limit = state.cursor;
        let mut frame = Frame::new(canvas, camera, bounds);
        replayer.replay(actions, &ReplayPass::lines(camera, limit), &mut frame, None)?;
        replayer.replay(actions, &ReplayPass::labels(camera, limit), &mut frame, None)?;
        Ok(frame)
    }
}
