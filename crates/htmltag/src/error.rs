//! Error type for tree mutations.

use thiserror::Error;

/// Result alias used by every fallible [`TagNode`](crate::TagNode) operation.
pub type Result<T> = std::result::Result<T, TagError>;

/// Validation failures reported by the builder.
///
/// All checks run before any state is touched, so a failed call leaves the
/// node exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// An argument was rejected before the node was mutated.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument, e.g. `set_attribute`.
        operation: &'static str,
        /// Human readable description of what was wrong.
        reason: &'static str,
    },
}

pub(crate) const EMPTY_TAG_TYPE: &str = "tag type must not be empty";
pub(crate) const EMPTY_ATTRIBUTE_NAME: &str = "attribute name must not be empty";
pub(crate) const EMPTY_CLASS_NAME: &str = "class name must not be empty";

/// Reject an empty `value` on behalf of `operation`.
pub(crate) const fn require_non_empty(
    value: &str,
    operation: &'static str,
    reason: &'static str,
) -> Result<()> {
    if value.is_empty() {
        Err(TagError::InvalidArgument { operation, reason })
    } else {
        Ok(())
    }
}
