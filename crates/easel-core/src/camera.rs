//! Centering camera.
//!
//! The drawing is shown at 1:1 scale. The camera only translates, moving
//! the center of the recorded bounds onto the center of the canvas.
//! Anything larger than the canvas overflows; scrolling is the host's job.

use kurbo::{Affine, Rect};

/// Translation that maps the center of `bounds` onto the center of `canvas`.
pub fn center_on(bounds: Rect, canvas: Rect) -> Affine {
    Affine::translate(canvas.center() - bounds.center())
}
