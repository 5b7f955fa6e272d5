//! error types for the fallible alert group operations
use thiserror::Error;

use crate::target::Target;

/// Error returned by the fallible [AlertGroup][crate::AlertGroup] operations
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    /// a target name other than `annotations` or `labels` was given
    #[error("unknown target `{0}`, expected `annotations` or `labels`")]
    InvalidTarget(String),

    /// `add_prefix` addressed an entry absent from the common map or from
    /// some alert
    #[error("no {target} entry named `{name}` to prefix")]
    MissingEntry {
        /// axis the entry was looked up in
        target: Target,
        /// name of the missing entry
        name: String,
    },

    /// a raw string pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// convenience alias for results of alert group operations
pub type Result<T> = std::result::Result<T, ModelError>;
