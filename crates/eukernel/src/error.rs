//! Error types.

use thiserror::Error;

/// Error produced when a transform is asked to do something it does not
/// support.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransformError {
    /// Transforming hyperplanes is not supported
    #[error("transforming hyperplanes is not supported")]
    UnsupportedHyperplane,
    /// Transforming sub-hyperplanes is not supported
    #[error("transforming sub-hyperplanes is not supported")]
    UnsupportedSubHyperplane,
}
