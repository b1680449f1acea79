use crate::error::{ConsumeError, SegmentError};

/// One static-or-placeholder piece of a decomposed pattern.
///
/// For static segments the text is the literal input to match. For
/// placeholders the text is an opaque token that only the [`Segmenter`]
/// that produced it knows how to interpret.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Segment {
    /// Literal text.
    Static(String),
    /// A placeholder token, e.g. `:name` or `*rest`.
    Placeholder(String),
}

impl Segment {
    /// Creates a static segment.
    pub fn static_text(text: impl Into<String>) -> Segment {
        Segment::Static(text.into())
    }

    /// Creates a placeholder segment.
    pub fn placeholder(token: impl Into<String>) -> Segment {
        Segment::Placeholder(token.into())
    }

    /// The literal text or placeholder token.
    pub fn text(&self) -> &str {
        match self {
            Segment::Static(text) | Segment::Placeholder(text) => text,
        }
    }

    /// Returns `true` for placeholder segments.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Segment::Placeholder(_))
    }
}

/// The result of a placeholder consuming part of the search input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Consumed<'s, 'p> {
    /// The capture key, usually the placeholder name.
    pub key: &'s str,
    /// The captured value.
    pub value: &'p str,
    /// How many bytes of the input were consumed.
    pub len: usize,
}

impl<'s, 'p> Consumed<'s, 'p> {
    /// A capture whose value is exactly the consumed input.
    pub fn new(key: &'s str, value: &'p str) -> Self {
        Consumed {
            key,
            value,
            len: value.len(),
        }
    }
}

/// Decides how patterns are split into segments and how placeholders consume
/// input.
///
/// The trie never interprets placeholder tokens itself. Implementations must
/// return at least one segment for every accepted pattern.
pub trait Segmenter {
    /// Decomposes a raw pattern into an ordered sequence of segments.
    fn split(&self, pattern: &str) -> Result<Vec<Segment>, SegmentError>;

    /// Decides how many leading bytes of `input` belong to the placeholder
    /// `segment`, and what capture they produce.
    ///
    /// The consumed length must lie on a character boundary of `input`.
    fn consume<'s, 'p>(
        &self,
        segment: &'s Segment,
        input: &'p str,
    ) -> Result<Consumed<'s, 'p>, ConsumeError>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn split(&self, pattern: &str) -> Result<Vec<Segment>, SegmentError> {
        (**self).split(pattern)
    }

    fn consume<'s, 'p>(
        &self,
        segment: &'s Segment,
        input: &'p str,
    ) -> Result<Consumed<'s, 'p>, ConsumeError> {
        (**self).consume(segment, input)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn split(&self, pattern: &str) -> Result<Vec<Segment>, SegmentError> {
        (**self).split(pattern)
    }

    fn consume<'s, 'p>(
        &self,
        segment: &'s Segment,
        input: &'p str,
    ) -> Result<Consumed<'s, 'p>, ConsumeError> {
        (**self).consume(segment, input)
    }
}

/// A pass-through segmenter: every pattern is one static segment.
///
/// ```
/// use segtrie::{TextSegmenter, Trie};
///
/// let mut trie = Trie::with_segmenter(TextSegmenter);
/// trie.insert("hello:world", 1).unwrap();
/// assert_eq!(*trie.search("hello:world").unwrap().value, 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextSegmenter;

impl Segmenter for TextSegmenter {
    fn split(&self, pattern: &str) -> Result<Vec<Segment>, SegmentError> {
        Ok(vec![Segment::Static(pattern.to_owned())])
    }

    fn consume<'s, 'p>(
        &self,
        _: &'s Segment,
        _: &'p str,
    ) -> Result<Consumed<'s, 'p>, ConsumeError> {
        Err(ConsumeError::NotPlaceholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_segmenter_is_pass_through() {
        let parts = TextSegmenter.split("/users/:id").unwrap();
        assert_eq!(parts, vec![Segment::static_text("/users/:id")]);

        let parts = TextSegmenter.split("").unwrap();
        assert_eq!(parts, vec![Segment::static_text("")]);
    }

    #[test]
    fn text_segmenter_never_consumes() {
        let segment = Segment::placeholder(":id");
        assert_eq!(
            TextSegmenter.consume(&segment, "42"),
            Err(ConsumeError::NotPlaceholder)
        );
    }

    #[test]
    fn boxed_segmenter_delegates() {
        let boxed: Box<dyn Segmenter> = Box::new(TextSegmenter);
        assert_eq!(boxed.split("abc").unwrap().len(), 1);
    }
}
