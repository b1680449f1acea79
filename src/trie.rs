use crate::error::{InsertError, MatchError};
use crate::params::Captures;
use crate::path::PathSegmenter;
use crate::segment::Segmenter;
use crate::tree::Node;

/// A radix trie mapping segmented patterns to values.
///
/// Patterns are decomposed by the trie's [`Segmenter`], which defaults to
/// the `/`-delimited [`PathSegmenter`].
///
/// ```rust
/// use segtrie::Trie;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut trie = Trie::new();
/// trie.insert("/users/:id", "A User")?;
/// trie.insert("/users/new", "New User")?;
///
/// let matched = trie.search("/users/978")?;
/// assert_eq!(matched.captures.get("id"), Some("978"));
/// assert_eq!(*matched.value, "A User");
///
/// // static patterns win over placeholders
/// let matched = trie.search("/users/new")?;
/// assert!(matched.captures.is_empty());
/// assert_eq!(matched.pattern, "/users/new");
/// # Ok(())
/// # }
/// ```
///
/// The trie is not synchronized: build it with a sequence of inserts, then
/// share it (e.g. behind an `Arc`) for any number of concurrent searches.
#[derive(Clone, Debug)]
pub struct Trie<V, S = PathSegmenter> {
    root: Node<V>,
    segmenter: S,
    len: usize,
}

impl<V> Trie<V> {
    /// Construct a new, empty trie that splits `/`-delimited patterns.
    pub fn new() -> Self {
        Trie::with_segmenter(PathSegmenter::new())
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S: Segmenter> Trie<V, S> {
    /// Construct a new, empty trie using the given segmenter.
    pub fn with_segmenter(segmenter: S) -> Self {
        Trie {
            root: Node::new(),
            segmenter,
            len: 0,
        }
    }

    /// Insert a pattern into the trie.
    ///
    /// ```rust
    /// # use segtrie::Trie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = Trie::new();
    /// trie.insert("/home", "Welcome!")?;
    /// trie.insert("/users/:id", "A User")?;
    /// assert!(trie.insert("/users/:name", "Conflict").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, pattern: impl Into<String>, value: V) -> Result<(), InsertError> {
        let pattern = pattern.into();
        let parts = self.segmenter.split(&pattern).map_err(|err| {
            debug!("rejected pattern {:?}: {}", pattern, err);
            err
        })?;

        self.root.insert(&pattern, &parts, value)?;
        self.len += 1;

        debug!("registered pattern {:?}", pattern);
        Ok(())
    }

    /// Insert a pattern into the trie, panicking if it is rejected.
    ///
    /// Meant for tries built once at startup, where a rejected pattern is a
    /// programming error.
    ///
    /// # Panics
    ///
    /// Panics with the [`InsertError`] message if the pattern is malformed or
    /// conflicts with a registered pattern.
    pub fn insert_or_panic(&mut self, pattern: impl Into<String>, value: V) {
        let pattern = pattern.into();
        if let Err(err) = self.insert(pattern.as_str(), value) {
            panic!("failed to insert pattern {:?}: {}", pattern, err);
        }
    }

    /// Tries to match the whole input against a registered pattern.
    ///
    /// ```rust
    /// use segtrie::Trie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("/files/*path", true)?;
    ///
    /// let matched = trie.search("/files/css/site.css")?;
    /// assert!(*matched.value);
    /// assert_eq!(matched.captures.get("path"), Some("css/site.css"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn search<'t, 'p>(&'t self, input: &'p str) -> Result<Match<'t, 'p, &'t V>, MatchError> {
        let mut captures = Captures::new();

        match self.root.search(&self.segmenter, input, 0, &mut captures) {
            Some(node) => match node.value() {
                Some(value) => Ok(Match {
                    value,
                    pattern: node.pattern(),
                    captures,
                }),
                None => Err(MatchError::NotFound),
            },
            None => Err(MatchError::NotFound),
        }
    }

    /// Tries to match the whole input against a registered pattern,
    /// returning a mutable reference to the stored value.
    ///
    /// ```rust
    /// use segtrie::Trie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("/hits/:page", 1)?;
    ///
    /// *trie.search_mut("/hits/home")? += 1;
    /// assert_eq!(*trie.search("/hits/home")?.value, 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn search_mut(&mut self, input: &str) -> Result<&mut V, MatchError> {
        self.root
            .search_mut(&self.segmenter, input)
            .and_then(Node::value_mut)
            .ok_or(MatchError::NotFound)
    }

    /// The number of registered patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no pattern has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The segmenter used to split patterns and consume placeholders.
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Checks the structural invariants of the trie.
    #[cfg(any(test, feature = "__test_helpers"))]
    pub fn check_invariants(&self) -> Result<(), String> {
        self.root.check_invariants()
    }
}

/// A successful match consisting of the registered value, the pattern that
/// produced it, and the captures extracted from the input.
#[derive(Debug)]
pub struct Match<'t, 'p, V> {
    /// The value stored under the matched pattern.
    pub value: V,
    /// The pattern exactly as it was registered.
    pub pattern: &'t str,
    /// The placeholder captures, in the order they were encountered.
    pub captures: Captures<'t, 'p>,
}
