//! Error types for viewcull

use thiserror::Error;

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The view-projection transform yielded at least one zero-normal plane,
    /// so the frustum has no valid interior.
    #[error("view-projection transform produces a degenerate frustum")]
    DegenerateTransform,
}
