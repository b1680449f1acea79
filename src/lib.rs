//! A radix trie that maps segmented patterns to values.
//!
//! ```rust
//! use segtrie::Trie;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut trie = Trie::new();
//! trie.insert("/home", "Welcome!")?;
//! trie.insert("/users/:id", "A User")?;
//!
//! let matched = trie.search("/users/978")?;
//! assert_eq!(matched.captures.get("id"), Some("978"));
//! assert_eq!(*matched.value, "A User");
//! # Ok(())
//! # }
//! ```
//!
//! # Segmenters
//!
//! The trie itself only knows two kinds of segments: static text, matched
//! byte for byte, and placeholders, whose meaning is left to a [`Segmenter`].
//! The segmenter splits each registered pattern into segments, and decides how
//! much of the search input a placeholder consumes.
//!
//! [`PathSegmenter`], the default, understands `/`-delimited patterns:
//!
//! ```text
//!  Syntax    Type
//!  :name     named placeholder, matches up to the next '/'
//!  *name     catch-all placeholder, matches the rest of the input
//! ```
//!
//! [`TextSegmenter`] treats every pattern as literal text, and any type
//! implementing [`Segmenter`] can be plugged in with
//! [`Trie::with_segmenter`].
//!
//! # Matching Priority
//!
//! At every branch point, the static child is tried before the placeholder
//! child, so the most specific pattern wins:
//!
//! ```rust
//! use segtrie::Trie;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut trie = Trie::new();
//! trie.insert("/users/:id", "A User")?;
//! trie.insert("/users/new", "New User")?;
//!
//! let matched = trie.search("/users/new")?;
//! assert_eq!(*matched.value, "New User");
//! assert!(matched.captures.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! If a branch fails further down, the search backtracks and tries the
//! placeholder instead, discarding any captures made along the failed
//! branch.
//!
//! Two different placeholders can never share a branch point: registering
//! `/users/:name` next to `/users/:id` fails with
//! [`InsertError::PlaceholderConflict`].
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod path;
mod segment;
mod tree;
mod trie;

pub use error::{ConsumeError, InsertError, MatchError, SegmentError};
pub use params::{Captures, CapturesIter};
pub use path::{clean_path, PathSegmenter};
pub use segment::{Consumed, Segment, Segmenter, TextSegmenter};
pub use trie::{Match, Trie};
