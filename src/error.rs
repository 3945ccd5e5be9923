//! Error types for sequence operators.
//!
//! Every operator in this crate defers its work until the sequence is
//! consumed, so errors are reported while iterating, never while building or
//! refining a sequence.

use thiserror::Error;

/// Boxed error raised by a faulting source.
pub type BoxedFault = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors reported while consuming a sequence.
///
/// # Examples
///
/// ```rust
/// use seqops::SequenceError;
///
/// let error = SequenceError::NullSource { parameter: "source" };
/// assert_eq!(error.parameter(), Some("source"));
/// assert_eq!(format!("{error}"), "source sequence `source` is absent");
/// ```
#[derive(Debug, Error)]
pub enum SequenceError {
    /// The source sequence was not supplied.
    #[error("source sequence `{parameter}` is absent")]
    NullSource {
        /// Name of the missing source parameter.
        parameter: &'static str,
    },

    /// A key selector or comparator was not supplied.
    #[error("argument `{parameter}` is absent")]
    NullArgument {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// The source raised an error while it was being consumed.
    #[error("source sequence faulted: {0}")]
    SourceFault(#[source] BoxedFault),

    /// No element satisfied the predicate of `first_where`.
    #[error("no element satisfies the predicate")]
    NoMatchingElement,

    /// Two elements produced the same key in `to_map`.
    #[error("an element with the same key has already been added")]
    DuplicateKey,
}

impl SequenceError {
    /// Wraps an arbitrary error raised by a source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::SequenceError;
    ///
    /// let error = SequenceError::fault(std::io::Error::other("disk gone"));
    /// assert!(error.is_fault());
    /// ```
    pub fn fault<E>(error: E) -> Self
    where
        E: Into<BoxedFault>,
    {
        Self::SourceFault(error.into())
    }

    /// Returns the name of the absent parameter for the null variants.
    #[must_use]
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::NullSource { parameter } | Self::NullArgument { parameter } => Some(*parameter),
            _ => None,
        }
    }

    /// Returns `true` if the error was raised by the source itself.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::SourceFault(_))
    }
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
