//! Error types for comparator operations

use std::fmt;
use thiserror::Error;

/// Result type for comparator operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Boxed error a fallible selector fails with
pub type SelectorError = Box<dyn std::error::Error + Send + Sync>;

/// Which of the two bound instances an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// Errors raised by a [`Comparator`](crate::Comparator)
///
/// All of these are precondition violations reported at the offending call.
/// A comparison that simply finds two different values is not an error; it
/// flips the comparator to invalid instead.
#[derive(Debug, Error)]
pub enum CompareError {
    /// `bind` or `with_instances` received an absent instance
    #[error("{side} instance is absent")]
    NullInstance { side: Side },

    /// An operation ran before both instances were bound
    #[error("instances have not been bound; call bind first")]
    UnboundInstance,

    /// A comparison was requested with an absent selector
    #[error("{side} selector is absent")]
    NullSelector { side: Side },

    /// A fallible selector failed while reading its instance
    #[error("selector for the {side} instance failed: {source}")]
    SelectorEvaluation {
        side: Side,
        #[source]
        source: SelectorError,
    },
}

impl CompareError {
    /// Side of the comparison this error is attributed to, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            CompareError::NullInstance { side }
            | CompareError::NullSelector { side }
            | CompareError::SelectorEvaluation { side, .. } => Some(*side),
            CompareError::UnboundInstance => None,
        }
    }
}
