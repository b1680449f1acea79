//! The `/`-delimited reference segmenter.

use crate::error::{ConsumeError, SegmentError};
use crate::segment::{Consumed, Segment, Segmenter};

/// Splits `/`-delimited patterns into static text and placeholders.
///
/// The registered pattern can contain two types of placeholders, each
/// starting right after a `/`:
/// ```ignore
///  Syntax    Type
///  :name     named placeholder
///  *name     catch-all placeholder
/// ```
///
/// Named placeholders match anything until the next '/' or the input end,
/// possibly nothing when the next byte is already a '/':
/// ```ignore
///  Pattern: /blog/:category/:post
///
///  /blog/rust/request-routers            match: category="rust", post="request-routers"
///  /blog//request-routers                match: category="", post="request-routers"
///  /blog/rust/                           no match
///  /blog/rust/request-routers/comments   no match
/// ```
///
/// Catch-all placeholders match anything until the input end, including
/// embedded slashes, and must therefore be the final pattern element:
/// ```ignore
///  Pattern: /files/*filepath
///
///  /files/LICENSE                      match: filepath="LICENSE"
///  /files/templates/article.html       match: filepath="templates/article.html"
///  /files                              no match
/// ```
///
/// Patterns are registered exactly as written. With [`PathSegmenter::clean`]
/// they are normalized with [`clean_path`] first, so `/a//b/../c/` registers
/// as `/a/c`. Search input is never cleaned, so a cleaned pattern is only
/// reachable through its canonical form.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathSegmenter {
    clean: bool,
}

impl PathSegmenter {
    /// Creates a segmenter that splits patterns as written.
    pub fn new() -> Self {
        PathSegmenter { clean: false }
    }

    /// Sets whether patterns are normalized with [`clean_path`] before
    /// splitting.
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }
}

impl Segmenter for PathSegmenter {
    fn split(&self, pattern: &str) -> Result<Vec<Segment>, SegmentError> {
        if pattern.is_empty() {
            return Ok(vec![Segment::Static(String::new())]);
        }

        if !pattern.starts_with('/') {
            return Err(SegmentError::MissingLeadingSlash(pattern.to_owned()));
        }

        let path = if self.clean {
            clean_path(pattern)
        } else {
            pattern.to_owned()
        };
        let bytes = path.as_bytes();

        let mut parts = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'/' || !matches!(bytes.get(i + 1), Some(b':' | b'*')) {
                i += 1;
                continue;
            }

            let param_start = i + 1;
            let param_end = path[param_start..]
                .find('/')
                .map_or(path.len(), |n| param_start + n);

            // just the sigil
            if param_end - param_start < 2 {
                return Err(SegmentError::UnnamedPlaceholder(pattern.to_owned()));
            }

            if bytes[param_start] == b'*' && param_end != path.len() {
                return Err(SegmentError::InvalidCatchAll(pattern.to_owned()));
            }

            parts.push(Segment::Static(path[start..param_start].to_owned()));
            parts.push(Segment::Placeholder(path[param_start..param_end].to_owned()));
            start = param_end;
            i = param_end;
        }

        if start < path.len() {
            parts.push(Segment::Static(path[start..].to_owned()));
        }

        trace!("split pattern {:?} into {} segments", pattern, parts.len());
        Ok(parts)
    }

    fn consume<'s, 'p>(
        &self,
        segment: &'s Segment,
        input: &'p str,
    ) -> Result<Consumed<'s, 'p>, ConsumeError> {
        let token = match segment {
            Segment::Placeholder(token) => token.as_str(),
            Segment::Static(_) => return Err(ConsumeError::NotPlaceholder),
        };

        match token.as_bytes().first() {
            Some(b'*') => Ok(Consumed::new(&token[1..], input)),
            Some(b':') => {
                let end = input.find('/').unwrap_or(input.len());
                Ok(Consumed::new(&token[1..], &input[..end]))
            }
            _ => Err(ConsumeError::Unsupported(token.to_owned())),
        }
    }
}

/// Returns the canonical form of a rooted path, eliminating `.` and `..`
/// elements.
///
/// The following rules are applied iteratively until no further processing
/// can be done:
/// 1. Replace multiple slashes with a single slash.
/// 2. Eliminate each . path name element (the current directory).
/// 3. Eliminate each inner .. path name element (the parent directory)
///    along with the non-.. element that precedes it.
/// 4. Eliminate .. elements that begin a rooted path:
///    that is, replace "/.." by "/" at the beginning of a path.
/// 5. Drop the trailing slash, unless the path is just "/".
///
/// If the result of this process is an empty string, "/" is returned.
pub fn clean_path(p: &str) -> String {
    let mut elements: Vec<&str> = Vec::new();

    for element in p.split('/') {
        match element {
            // empty path element or the current directory
            "" | "." => {}
            ".." => {
                elements.pop();
            }
            _ => elements.push(element),
        }
    }

    let mut buf = String::with_capacity(p.len());
    for element in elements {
        buf.push('/');
        buf.push_str(element);
    }

    if buf.is_empty() {
        buf.push('/');
    }

    buf
}
