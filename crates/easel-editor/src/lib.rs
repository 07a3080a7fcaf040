pub mod controls;
pub mod shortcuts;
pub mod toolbar;

pub use controls::StepControls;
pub use shortcuts::ShortcutMap;
pub use toolbar::{ButtonState, toolbar_state};
