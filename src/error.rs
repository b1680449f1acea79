use thiserror::Error;

/// Errors a [`Segmenter`](crate::Segmenter) reports for a malformed pattern.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum SegmentError {
    /// Patterns handled by the path segmenter must be rooted.
    #[error("pattern must begin with '/': {0:?}")]
    MissingLeadingSlash(String),
    /// Placeholders must be registered with a name.
    #[error("placeholders must be registered with a name: {0:?}")]
    UnnamedPlaceholder(String),
    /// Catch-all placeholders are only allowed at the end of a pattern.
    #[error("catch-all placeholders are only allowed at the end of a pattern: {0:?}")]
    InvalidCatchAll(String),
    /// A custom segmenter rejected the pattern.
    #[error("{0}")]
    Custom(String),
}

/// Errors a [`Segmenter`](crate::Segmenter) reports when a placeholder cannot
/// consume any of the remaining input.
///
/// During a search these only fail the current branch, they are never
/// surfaced to the caller.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum ConsumeError {
    /// `consume` was called with a static segment.
    #[error("only placeholder segments can consume input")]
    NotPlaceholder,
    /// The placeholder would have captured an empty value, for segmenters
    /// that refuse empty captures.
    #[error("placeholder {0:?} matched an empty value")]
    Empty(String),
    /// The segmenter does not know how to consume this placeholder token.
    #[error("unsupported placeholder: {0:?}")]
    Unsupported(String),
}

/// Represents errors that can occur when inserting a new pattern.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum InsertError {
    /// The segmenter rejected the pattern.
    #[error(transparent)]
    Segment(#[from] SegmentError),
    /// Two patterns disagree about the placeholder at the same branch point.
    #[error("pattern {pattern:?} conflicts with the placeholder of previously registered pattern {with:?}")]
    PlaceholderConflict {
        /// The pattern being inserted.
        pattern: String,
        /// An existing pattern routed through the conflicting branch point.
        with: String,
    },
    /// The exact same pattern was already registered.
    #[error("pattern {pattern:?} is already registered")]
    Duplicate {
        /// The duplicated pattern.
        pattern: String,
    },
}

/// A failed match attempt.
///
/// ```
/// use segtrie::{MatchError, Trie};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut trie = Trie::new();
/// trie.insert("/home", "Welcome!")?;
/// trie.insert("/blog/:post", "A post.")?;
///
/// // no pattern covers the whole input
/// assert_eq!(trie.search("/blog").unwrap_err(), MatchError::NotFound);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Error)]
pub enum MatchError {
    /// No terminal node consumes the whole input.
    #[error("matching pattern not found")]
    NotFound,
}
