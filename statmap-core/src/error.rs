//! Error types for statmap-core.

use thiserror::Error;

/// Result type alias for statmap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for statmap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Statistic field and mask do not share the same grid shape.
    #[error("statistic field shape {stat:?} does not match mask shape {mask:?}")]
    ShapeMismatch {
        /// Shape of the statistic field.
        stat: Vec<usize>,
        /// Shape of the mask.
        mask: Vec<usize>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
