//! Step-through controls bound to a shared easel.
//!
//! Routes toolbar presses and key events to `Easel::apply`, which in turn
//! fires the host's repaint hook.

use crate::shortcuts::ShortcutMap;
use crate::toolbar::{ButtonState, toolbar_state};
use easel_core::{CursorCommand, Easel};
use std::sync::Arc;

pub struct StepControls {
    easel: Arc<Easel>,
}

impl StepControls {
    pub fn new(easel: Arc<Easel>) -> Self {
        Self { easel }
    }

    pub fn easel(&self) -> &Arc<Easel> {
        &self.easel
    }

    /// Run a toolbar command. Returns the new cursor value.
    pub fn press(&self, command: CursorCommand) -> i64 {
        self.easel.apply(command)
    }

    /// Run the host action command named `name` (`"start"`, `"back"`,
    /// `"next"`, `"end"`). Returns `None` for unknown names.
    pub fn press_named(&self, name: &str) -> Option<i64> {
        match CursorCommand::from_name(name) {
            Some(command) => Some(self.press(command)),
            None => {
                log::debug!("ignoring unknown step command {name:?}");
                None
            }
        }
    }

    /// Resolve and run a key event. Returns the new cursor value if the
    /// key is bound.
    pub fn handle_key(
        &self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<i64> {
        let command = ShortcutMap::resolve(key, ctrl, shift, alt, meta)?;
        Some(self.press(command))
    }

    /// Current enabled/disabled state of the four buttons.
    pub fn buttons(&self) -> [ButtonState; 4] {
        toolbar_state(self.easel.cursor(), self.easel.draws())
    }
}
