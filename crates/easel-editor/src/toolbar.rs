//! Toolbar button state.
//!
//! The cursor itself never clamps. Keeping it inside `[0, draws]` is the
//! toolbar's job: a button is disabled when pressing it could only push
//! the cursor further out of range.

use easel_core::CursorCommand;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub command: CursorCommand,
    pub label: &'static str,
    pub enabled: bool,
}

/// Button label shown for `command`.
pub fn label(command: CursorCommand) -> &'static str {
    match command {
        CursorCommand::Start => "Start",
        CursorCommand::Back => "Back",
        CursorCommand::Next => "Next",
        CursorCommand::End => "End",
    }
}

/// State of the four step buttons, in toolbar order.
pub fn toolbar_state(cursor: i64, draws: usize) -> [ButtonState; 4] {
    let draws = draws as i64;
    CursorCommand::ALL.map(|command| {
        let enabled = match command {
            CursorCommand::Start | CursorCommand::Back => cursor > 0,
            CursorCommand::Next | CursorCommand::End => cursor < draws,
        };
        ButtonState {
            command,
            label: label(command),
            enabled,
        }
    })
}
