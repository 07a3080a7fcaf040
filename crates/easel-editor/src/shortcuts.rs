//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to cursor commands. The map lives in Rust so
//! it's shared across WASM and native hosts.
//!
//! - Home / End jump to the first / last frame
//! - ← / → step one draw back / forward
//! - Space steps forward, Shift+Space steps back

use easel_core::CursorCommand;

/// Resolves key events into cursor commands.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to a command.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"ArrowLeft"`, `"End"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<CursorCommand> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd {
            return match key {
                "ArrowLeft" => Some(CursorCommand::Start),
                "ArrowRight" => Some(CursorCommand::End),
                _ => None,
            };
        }

        if shift {
            return match key {
                " " => Some(CursorCommand::Back),
                _ => None,
            };
        }

        // ── Single keys (no modifiers) ──
        match key {
            "Home" => Some(CursorCommand::Start),
            "ArrowLeft" | "PageUp" => Some(CursorCommand::Back),
            "ArrowRight" | "PageDown" | " " => Some(CursorCommand::Next),
            "End" => Some(CursorCommand::End),
            _ => None,
        }
    }
}
