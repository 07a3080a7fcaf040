//! Recorded turtle actions and the append-only log that holds them.
//!
//! Every public turtle call becomes exactly one `Action`. The log never
//! rewrites history: it only grows, and the replay engine walks it from
//! the start on every render.

use serde::{Deserialize, Serialize};

/// A single recorded drawing command.
///
/// Lengths and angles are accepted as-is: negative lengths move backward,
/// negative angles turn counter-clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub enum Action {
    /// Advance along the heading without leaving a stroke.
    MoveForward(f64),
    /// Advance along the heading and stroke the segment travelled.
    DrawForward(f64),
    /// Turn the heading by this many degrees, clockwise on screen.
    Rotate(f64),
    /// Save the current position and heading.
    Push,
    /// Restore the most recently saved position and heading.
    Pop,
    /// Stamp an upright, boxed text label at the current position.
    DrawTextLabel(String),
}

impl Action {
    /// Whether this action produces visible output and counts toward the
    /// step-through cursor.
    pub fn is_draw(&self) -> bool {
        matches!(self, Action::DrawForward(_) | Action::DrawTextLabel(_))
    }

    /// Short lowercase name, used in logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Action::MoveForward(_) => "move_forward",
            Action::DrawForward(_) => "draw_forward",
            Action::Rotate(_) => "rotate",
            Action::Push => "push",
            Action::Pop => "pop",
            Action::DrawTextLabel(_) => "draw_text_label",
        }
    }
}

/// Ordered, append-only list of actions with a running draw count.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    actions: Vec<Action>,
    draws: usize,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action, bumping the draw count for draw kinds.
    pub fn push(&mut self, action: Action) {
        if action.is_draw() {
            self.draws += 1;
        }
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of `DrawForward` + `DrawTextLabel` actions recorded so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Extend<Action> for ActionLog {
    fn extend<I: IntoIterator<Item = Action>>(&mut self, iter: I) {
        for action in iter {
            self.push(action);
        }
    }
}

impl FromIterator<Action> for ActionLog {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut log = ActionLog::new();
        log.extend(iter);
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_count_tracks_draw_kinds_only() {
        let mut log = ActionLog::new();
        log.push(Action::MoveForward(10.0));
        assert_eq!(log.draws(), 0);
        log.push(Action::DrawForward(5.0));
        log.push(Action::Rotate(90.0));
        log.push(Action::Push);
        log.push(Action::DrawTextLabel("hi".into()));
        log.push(Action::Pop);
        assert_eq!(log.draws(), 2);
        assert_eq!(log.len(), 6);
    }

    #[test]
    fn draw_count_matches_scan_at_every_step() {
        let program = [
            Action::DrawForward(1.0),
            Action::Rotate(-45.0),
            Action::MoveForward(-3.0),
            Action::DrawTextLabel(String::new()),
            Action::Push,
            Action::DrawForward(0.0),
            Action::Pop,
        ];
        let mut log = ActionLog::new();
        for action in program {
            log.push(action);
            let scanned = log.actions().iter().filter(|a| a.is_draw()).count();
            assert_eq!(log.draws(), scanned);
        }
    }

    #[test]
    fn actions_use_tagged_json() {
        let json = serde_json::to_string(&Action::DrawForward(5.0)).unwrap();
        assert_eq!(json, r#"{"op":"draw_forward","arg":5.0}"#);

        let parsed: Vec<Action> =
            serde_json::from_str(r#"[{"op":"push"},{"op":"draw_text_label","arg":"A"}]"#)
                .unwrap();
        assert_eq!(parsed, vec![Action::Push, Action::DrawTextLabel("A".into())]);
    }
}
