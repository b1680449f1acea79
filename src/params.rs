use std::{fmt, iter::FusedIterator, slice};

#[derive(Clone, Copy, Default)]
struct Capture<'k, 'v> {
    key: &'k str,
    value: &'v str,
}

// Captures kept inline before spilling to the heap.
const INLINE: usize = 3;

#[derive(Clone)]
enum Storage<'k, 'v> {
    Inline {
        slots: [Capture<'k, 'v>; INLINE],
        len: usize,
    },
    Spilled(Vec<Capture<'k, 'v>>),
}

/// Placeholder captures of a successful search, ordered from the root of the
/// trie towards the matched terminal.
///
/// Keys borrow from the trie, values borrow from the search input.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut trie = segtrie::Trie::new();
/// trie.insert("/teams/:team/members/:member", ())?;
///
/// let matched = trie.search("/teams/core/members/ada")?;
/// assert_eq!(matched.captures.get("member"), Some("ada"));
///
/// let pairs: Vec<_> = matched.captures.iter().collect();
/// assert_eq!(pairs, [("team", "core"), ("member", "ada")]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Captures<'k, 'v> {
    storage: Storage<'k, 'v>,
}

impl<'k, 'v> Captures<'k, 'v> {
    pub(crate) fn new() -> Self {
        Captures {
            storage: Storage::Inline {
                slots: [Capture::default(); INLINE],
                len: 0,
            },
        }
    }

    fn as_slice(&self) -> &[Capture<'k, 'v>] {
        match &self.storage {
            Storage::Inline { slots, len } => &slots[..*len],
            Storage::Spilled(captures) => captures,
        }
    }

    /// The number of captures.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the matched pattern crossed no placeholder.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The value captured under `key`. If the key appears more than once the
    /// capture closest to the root wins.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.as_slice()
            .iter()
            .find(|capture| capture.key == key)
            .map(|capture| capture.value)
    }

    /// Iterates over `(key, value)` pairs in capture order.
    pub fn iter(&self) -> CapturesIter<'_, 'k, 'v> {
        CapturesIter {
            inner: self.as_slice().iter(),
        }
    }

    pub(crate) fn push(&mut self, key: &'k str, value: &'v str) {
        let capture = Capture { key, value };

        match &mut self.storage {
            Storage::Inline { slots, len } if *len < INLINE => {
                slots[*len] = capture;
                *len += 1;
            }
            Storage::Inline { slots, .. } => {
                let mut spilled = Vec::with_capacity(INLINE * 2);
                spilled.extend_from_slice(slots);
                spilled.push(capture);
                self.storage = Storage::Spilled(spilled);
            }
            Storage::Spilled(captures) => captures.push(capture),
        }
    }

    // Drops every capture pushed after the list had `len` entries.
    pub(crate) fn truncate(&mut self, len: usize) {
        match &mut self.storage {
            Storage::Inline { len: current, .. } => *current = len.min(*current),
            Storage::Spilled(captures) => captures.truncate(len),
        }
    }
}

impl Default for Captures<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Captures<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Captures<'_, '_> {}

impl fmt::Debug for Captures<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'c, 'k, 'v> IntoIterator for &'c Captures<'k, 'v> {
    type Item = (&'k str, &'v str);
    type IntoIter = CapturesIter<'c, 'k, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(key, value)` pairs of [`Captures`].
#[derive(Clone)]
pub struct CapturesIter<'c, 'k, 'v> {
    inner: slice::Iter<'c, Capture<'k, 'v>>,
}

impl<'k, 'v> Iterator for CapturesIter<'_, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|capture| (capture.key, capture.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for CapturesIter<'_, '_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|capture| (capture.key, capture.value))
    }
}

impl ExactSizeIterator for CapturesIter<'_, '_, '_> {}

impl FusedIterator for CapturesIter<'_, '_, '_> {}
