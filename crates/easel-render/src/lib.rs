//! Vello back end for Easel frames.
//!
//! Call [`paint::paint_frame`] once per repaint with a freshly-cleared
//! `Scene`; the caller presents the scene via wgpu.

pub mod paint;

pub use paint::{PaintStyle, paint_frame};
