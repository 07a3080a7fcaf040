pub mod action;
pub mod camera;
pub mod cursor;
pub mod easel;
pub mod error;
pub mod frame;
pub mod replay;
pub mod transform;

pub use action::{Action, ActionLog};
pub use camera::center_on;
pub use cursor::{Cursor, CursorCommand};
pub use easel::{Easel, EaselConfig};
pub use error::ReplayError;
pub use frame::{Frame, Label, Primitive};
pub use replay::{
    Bounds, Discard, DrawFilter, MonospaceMetrics, ReplayPass, ReplayStats, Replayer, Surface,
    TextMeasure,
};
pub use transform::TransformStack;

// Re-export kurbo geometry so downstream crates don't need a direct dependency
pub use kurbo::{Affine, Point, Rect, Size};
