use crate::error::InsertError;
use crate::params::Captures;
use crate::segment::{Consumed, Segment, Segmenter};

use std::mem;

/// The label on the edge leading into a node.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Label {
    // Static labels are raw bytes: a split may fall inside a multi-byte
    // character, the input is matched byte by byte anyway.
    Static(Vec<u8>),
    // Placeholders are atomic and never split.
    Placeholder(Segment),
}

impl Label {
    fn matches(&self, segment: &Segment) -> bool {
        match (self, segment) {
            (Label::Static(prefix), Segment::Static(text)) => prefix == text.as_bytes(),
            (Label::Placeholder(this), other) => this == other,
            _ => false,
        }
    }
}

/// A vertex of the radix trie.
///
/// Static children are indexed by the first byte of their label, so no two
/// children ever share a prefix. At most one placeholder child hangs off any
/// branch point, and it is only tried once the static child has failed.
#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    label: Label,
    // Present iff a registered pattern terminates here.
    value: Option<V>,
    pattern: String,
    // Kept in sync: `indices[i]` is the first byte of `children[i]`'s label.
    indices: Vec<u8>,
    children: Vec<Node<V>>,
    wildcard: Option<Box<Node<V>>>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node {
            label: Label::Static(Vec::new()),
            value: None,
            pattern: String::new(),
            indices: Vec::new(),
            children: Vec::new(),
            wildcard: None,
        }
    }
}

impl<V> Node<V> {
    pub(crate) fn new() -> Self {
        Node::default()
    }

    fn with_label(label: Label) -> Self {
        Node {
            label,
            ..Node::default()
        }
    }

    /// The value stored at this terminal.
    pub(crate) fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// The full pattern registered at this terminal.
    pub(crate) fn pattern(&self) -> &str {
        &self.pattern
    }

    // No pattern has been routed through this node yet.
    fn is_fresh(&self) -> bool {
        self.value.is_none() && self.children.is_empty() && self.wildcard.is_none()
    }

    /// Places a segmented pattern starting at this node.
    pub(crate) fn insert(
        &mut self,
        pattern: &str,
        parts: &[Segment],
        value: V,
    ) -> Result<(), InsertError> {
        match parts.split_first() {
            Some((head, tail)) => self.place(pattern, head.clone(), tail, value),
            None => self.terminate(pattern, value),
        }
    }

    // Matches `head` against this node's own label, splitting the label if
    // the two only share a prefix.
    fn place(
        &mut self,
        pattern: &str,
        head: Segment,
        tail: &[Segment],
        value: V,
    ) -> Result<(), InsertError> {
        if self.is_fresh() {
            self.label = label_of(head);
            return self.extend(pattern, tail, value);
        }

        if self.label.matches(&head) {
            return self.extend(pattern, tail, value);
        }

        match head {
            Segment::Static(text) => self.place_static(pattern, text.into_bytes(), tail, value),
            Segment::Placeholder(_) => Err(self.conflict(pattern)),
        }
    }

    fn place_static(
        &mut self,
        pattern: &str,
        text: Vec<u8>,
        tail: &[Segment],
        value: V,
    ) -> Result<(), InsertError> {
        let (common, len) = match &self.label {
            Label::Static(prefix) => (common_prefix(prefix, &text), prefix.len()),
            Label::Placeholder(_) => return Err(self.conflict(pattern)),
        };

        if common < len {
            self.split(common);
        }

        if common == text.len() {
            return self.extend(pattern, tail, value);
        }

        self.attach_static(pattern, text[common..].to_vec(), tail, value)
    }

    // Places the remaining parts below this node, which has just consumed
    // the previous part.
    fn extend(&mut self, pattern: &str, tail: &[Segment], value: V) -> Result<(), InsertError> {
        let Some((head, tail)) = tail.split_first() else {
            return self.terminate(pattern, value);
        };

        match head {
            Segment::Placeholder(_) => match self.wildcard {
                Some(ref mut child) => child.place(pattern, head.clone(), tail, value),
                None => {
                    let mut child = Node::with_label(Label::Placeholder(head.clone()));
                    child.extend(pattern, tail, value)?;
                    self.wildcard = Some(Box::new(child));
                    Ok(())
                }
            },
            Segment::Static(text) if text.is_empty() => self.extend(pattern, tail, value),
            Segment::Static(text) => {
                self.attach_static(pattern, text.as_bytes().to_vec(), tail, value)
            }
        }
    }

    fn attach_static(
        &mut self,
        pattern: &str,
        text: Vec<u8>,
        tail: &[Segment],
        value: V,
    ) -> Result<(), InsertError> {
        let first = text[0];

        match self.indices.iter().position(|&c| c == first) {
            Some(i) => self.children[i].place_static(pattern, text, tail, value),
            None => {
                let mut child = Node::with_label(Label::Static(text));
                child.extend(pattern, tail, value)?;
                self.indices.push(first);
                self.children.push(child);
                Ok(())
            }
        }
    }

    // Shrinks this node's label to `at` bytes, demoting its content into a
    // new child that holds the rest of the label.
    fn split(&mut self, at: usize) {
        let suffix = match &mut self.label {
            Label::Static(prefix) => prefix.split_off(at),
            Label::Placeholder(_) => return,
        };

        trace!(
            "splitting node at byte {}, demoting {:?}",
            at,
            String::from_utf8_lossy(&suffix)
        );

        let first = suffix[0];
        let child = Node {
            indices: mem::take(&mut self.indices),
            children: mem::take(&mut self.children),
            wildcard: self.wildcard.take(),
            value: self.value.take(),
            pattern: mem::take(&mut self.pattern),
            label: Label::Static(suffix),
        };

        self.indices = vec![first];
        self.children = vec![child];
    }

    fn terminate(&mut self, pattern: &str, value: V) -> Result<(), InsertError> {
        if self.value.is_some() {
            debug!("pattern {:?} is already registered", pattern);
            return Err(InsertError::Duplicate {
                pattern: pattern.to_owned(),
            });
        }

        self.value = Some(value);
        self.pattern = pattern.to_owned();
        Ok(())
    }

    fn conflict(&self, pattern: &str) -> InsertError {
        let with = self.first_pattern().to_owned();
        debug!("placeholder conflict between {:?} and {:?}", pattern, with);
        InsertError::PlaceholderConflict {
            pattern: pattern.to_owned(),
            with,
        }
    }

    // Any pattern registered at or below this node, for error messages.
    fn first_pattern(&self) -> &str {
        let mut current = self;
        loop {
            if current.value.is_some() {
                return &current.pattern;
            }

            current = match (current.children.first(), &current.wildcard) {
                (Some(child), _) => child,
                (None, Some(wildcard)) => wildcard,
                (None, None) => return "",
            };
        }
    }

    /// Finds the terminal that consumes the whole `input`, starting at byte
    /// offset `at`, pushing captures as placeholders are crossed.
    ///
    /// Static children are tried before the placeholder child. Captures
    /// pushed by an abandoned branch are truncated before the next branch is
    /// tried.
    pub(crate) fn search<'n, 'p, S: Segmenter + ?Sized>(
        &'n self,
        segmenter: &S,
        input: &'p str,
        at: usize,
        captures: &mut Captures<'n, 'p>,
    ) -> Option<&'n Node<V>> {
        self.walk(segmenter, input, at, captures, &mut ())
    }

    fn walk<'n, 'p, S: Segmenter + ?Sized, T: Trail>(
        &'n self,
        segmenter: &S,
        input: &'p str,
        at: usize,
        captures: &mut Captures<'n, 'p>,
        trail: &mut T,
    ) -> Option<&'n Node<V>> {
        let captured = captures.len();
        let depth = trail.mark();

        let found = self.walk_inner(segmenter, input, at, captures, trail);
        if found.is_none() {
            captures.truncate(captured);
            trail.rewind(depth);
        }
        found
    }

    fn walk_inner<'n, 'p, S: Segmenter + ?Sized, T: Trail>(
        &'n self,
        segmenter: &S,
        input: &'p str,
        at: usize,
        captures: &mut Captures<'n, 'p>,
        trail: &mut T,
    ) -> Option<&'n Node<V>> {
        let (at, capture) = self.consume_label(segmenter, input, at)?;
        if let Some(capture) = capture {
            captures.push(capture.key, capture.value);
        }

        let Some(&next) = input.as_bytes()[at..].first() else {
            return self.value.as_ref().map(|_| self);
        };

        if let Some(i) = self.indices.iter().position(|&c| c == next) {
            let depth = trail.mark();
            trail.push(Step::Child(i));
            if let Some(found) = self.children[i].walk(segmenter, input, at, captures, trail) {
                return Some(found);
            }
            trail.rewind(depth);
            trace!("backtracking from static child at byte {}", at);
        }

        let wildcard = self.wildcard.as_ref()?;
        trail.push(Step::Wildcard);
        wildcard.walk(segmenter, input, at, captures, trail)
    }

    // Consumes this node's label from `input` at byte offset `at`, returning
    // the new offset and, for placeholders, the capture produced.
    fn consume_label<'n, 'p, S: Segmenter + ?Sized>(
        &'n self,
        segmenter: &S,
        input: &'p str,
        at: usize,
    ) -> Option<(usize, Option<Consumed<'n, 'p>>)> {
        match &self.label {
            Label::Placeholder(segment) => {
                // placeholders only ever start on a character boundary
                let rest = input.get(at..)?;
                match segmenter.consume(segment, rest) {
                    Ok(consumed) if consumed.len <= rest.len() => {
                        Some((at + consumed.len, Some(consumed)))
                    }
                    Ok(_) => None,
                    Err(err) => {
                        trace!("placeholder {:?} did not match: {}", segment.text(), err);
                        None
                    }
                }
            }
            Label::Static(prefix) => input.as_bytes()[at..]
                .starts_with(prefix)
                .then(|| (at + prefix.len(), None)),
        }
    }

    /// Same walk as [`Node::search`], returning the matched terminal for
    /// mutation.
    pub(crate) fn search_mut<S: Segmenter + ?Sized>(
        &mut self,
        segmenter: &S,
        input: &str,
    ) -> Option<&mut Node<V>> {
        let mut path = Vec::new();
        {
            let mut captures = Captures::new();
            self.walk(segmenter, input, 0, &mut captures, &mut path)?;
        }

        let mut current = self;
        for step in path {
            current = match step {
                Step::Child(i) => &mut current.children[i],
                Step::Wildcard => current.wildcard.as_deref_mut()?,
            };
        }
        Some(current)
    }

    /// Checks the structural invariants of the subtree rooted here.
    #[cfg(any(test, feature = "__test_helpers"))]
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        if self.indices.len() != self.children.len() {
            return Err(format!(
                "{} indices for {} children",
                self.indices.len(),
                self.children.len()
            ));
        }

        for (i, child) in self.children.iter().enumerate() {
            let prefix = match &child.label {
                Label::Static(prefix) => prefix,
                Label::Placeholder(segment) => {
                    return Err(format!("placeholder {:?} indexed as static", segment.text()))
                }
            };

            if prefix.first() != Some(&self.indices[i]) {
                return Err(format!(
                    "child {:?} indexed under {:?}",
                    String::from_utf8_lossy(prefix),
                    self.indices[i] as char
                ));
            }

            if self.indices[..i].contains(&self.indices[i]) {
                return Err(format!("duplicate index {:?}", self.indices[i] as char));
            }

            // a valueless static node must branch, or it should have been merged
            if child.value.is_none() && child.wildcard.is_none() && child.children.len() < 2 {
                return Err(format!(
                    "compression node {:?} does not branch",
                    String::from_utf8_lossy(prefix)
                ));
            }

            child.check_invariants()?;
        }

        if let Some(wildcard) = &self.wildcard {
            if !matches!(wildcard.label, Label::Placeholder(_)) {
                return Err("static label in placeholder slot".to_owned());
            }
            let dangling = wildcard.value.is_none()
                && wildcard.children.is_empty()
                && wildcard.wildcard.is_none();
            if dangling {
                return Err("dangling placeholder node".to_owned());
            }
            wildcard.check_invariants()?;
        }

        if self.value.is_none() && !self.pattern.is_empty() {
            return Err(format!("pattern {:?} without a value", self.pattern));
        }

        Ok(())
    }
}

// A branch taken by a walk, replayed by `search_mut`.
enum Step {
    Child(usize),
    Wildcard,
}

// Records the branches a walk takes. `()` records nothing.
trait Trail {
    fn mark(&self) -> usize;
    fn push(&mut self, step: Step);
    fn rewind(&mut self, mark: usize);
}

impl Trail for () {
    fn mark(&self) -> usize {
        0
    }

    fn push(&mut self, _: Step) {}

    fn rewind(&mut self, _: usize) {}
}

impl Trail for Vec<Step> {
    fn mark(&self) -> usize {
        self.len()
    }

    fn push(&mut self, step: Step) {
        Vec::push(self, step);
    }

    fn rewind(&mut self, mark: usize) {
        self.truncate(mark);
    }
}

fn label_of(segment: Segment) -> Label {
    match segment {
        Segment::Static(text) => Label::Static(text.into_bytes()),
        placeholder => Label::Placeholder(placeholder),
    }
}

// Length of the longest common byte prefix.
fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(a, b)| a == b).count()
}
