//! Turtle pose math and the push/pop checkpoint stack.
//!
//! A pose is a `kurbo::Affine` mapping turtle-local coordinates to output
//! space. The turtle sits at the local origin and faces local "up" (−y on a
//! y-down canvas). Moving composes a translation, turning composes a
//! rotation; both are applied on the right so they act in the turtle's
//! own frame.

use kurbo::{Affine, Point};
use smallvec::SmallVec;

/// Unit heading in turtle-local coordinates.
const HEADING: (f64, f64) = (0.0, -1.0);

/// Advance `pose` by `length` along its heading.
pub fn advance(pose: Affine, length: f64) -> Affine {
    pose * Affine::translate((HEADING.0 * length, HEADING.1 * length))
}

/// Turn `pose` by `degrees`, clockwise on a y-down canvas.
pub fn turn(pose: Affine, degrees: f64) -> Affine {
    pose * Affine::rotate(degrees.to_radians())
}

/// Output-space position of the turtle for `pose`.
pub fn position(pose: Affine) -> Point {
    pose * Point::ORIGIN
}

/// Saved poses, innermost last. Shallow nesting stays inline.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    saved: SmallVec<[Affine; 8]>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pose: Affine) {
        self.saved.push(pose);
    }

    /// Remove and return the most recently pushed pose.
    /// Returns `None` when nothing has been saved.
    pub fn pop(&mut self) -> Option<Affine> {
        self.saved.pop()
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}
