//! Step-through cursor.
//!
//! The cursor is the number of draw actions a render reveals. It is only
//! ever compared against a running draw count, so values outside
//! `[0, draws]` are allowed: below zero reveals nothing, above `draws`
//! reveals everything.

use serde::{Deserialize, Serialize};

/// The four step-through commands a host can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorCommand {
    /// Reveal nothing.
    Start,
    /// Hide the most recently revealed draw.
    Back,
    /// Reveal one more draw.
    Next,
    /// Reveal every recorded draw.
    End,
}

impl CursorCommand {
    pub const ALL: [CursorCommand; 4] = [
        CursorCommand::Start,
        CursorCommand::Back,
        CursorCommand::Next,
        CursorCommand::End,
    ];

    /// Parse a host action-command name (`"start"`, `"back"`, `"next"`, `"end"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(CursorCommand::Start),
            "back" => Some(CursorCommand::Back),
            "next" => Some(CursorCommand::Next),
            "end" => Some(CursorCommand::End),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CursorCommand::Start => "start",
            CursorCommand::Back => "back",
            CursorCommand::Next => "next",
            CursorCommand::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    value: i64,
}

impl Cursor {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Apply `command` given the total number of recorded draws.
    /// Returns the new value.
    pub fn apply(&mut self, command: CursorCommand, total_draws: usize) -> i64 {
        self.value = match command {
            CursorCommand::Start => 0,
            CursorCommand::Back => self.value - 1,
            CursorCommand::Next => self.value + 1,
            CursorCommand::End => total_draws as i64,
        };
        self.value
    }

    /// Whether the draw action at zero-based `draw_index` is revealed.
    pub fn reveals(&self, draw_index: usize) -> bool {
        (draw_index as i64) < self.value
    }
}
