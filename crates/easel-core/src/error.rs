use thiserror::Error;

/// Failure while replaying the action log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// A `Pop` ran with no matching `Push` before it.
    #[error("unbalanced pop at action {index}: no saved position to restore")]
    UnbalancedPop {
        /// Position of the offending action in the log.
        index: usize,
    },
}
