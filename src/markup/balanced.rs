//! Depth-counting scan for elements that may contain elements of the same tag.
//!
//! A components list is a `<ul>` whose items carry their own `<ul>` sub-lists,
//! so the first `</ul>` after the opening marker is usually the wrong one.
//! The scanner walks forward with a cursor and a depth counter instead.

use std::fmt;
use std::ops::Range;

/// Why a balanced region could not be bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMiss {
    /// The opening marker does not occur in the document.
    NoOpenMarker,
    /// The document ends before the matching close tag.
    Unterminated,
}

impl fmt::Display for RegionMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionMiss::NoOpenMarker => write!(f, "opening marker not found"),
            RegionMiss::Unterminated => write!(f, "region never closes"),
        }
    }
}

/// Byte positions of a located region inside the scanned document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSpan {
    /// Where the opening marker starts.
    pub open: usize,
    /// Content between the end of the opening tag and the matching close tag.
    pub inner: Range<usize>,
    /// One past the end of the matching close tag.
    pub end: usize,
}

impl RegionSpan {
    pub fn inner<'a>(&self, document: &'a str) -> &'a str {
        &document[self.inner.clone()]
    }

    pub fn outer<'a>(&self, document: &'a str) -> &'a str {
        &document[self.open..self.end]
    }
}

/// Locate the content of the element opened by the first `open_marker`.
///
/// `open_marker` may stop short of the tag's `>` (e.g. `<ul class="list"`);
/// content then starts after the next `>`. Every later `nest_prefix` seen
/// before the next `close_tag` raises the depth, every `close_tag` lowers it,
/// and the region ends where depth returns to zero. An opening occurrence at
/// the same position as a closing one is counted first.
///
/// A marker or prefix ending in a tag name only matches that whole name, so
/// `<a` does not match `<abbr`.
pub fn locate_span(
    document: &str,
    open_marker: &str,
    nest_prefix: &str,
    close_tag: &str,
) -> Result<RegionSpan, RegionMiss> {
    if open_marker.is_empty() {
        return Err(RegionMiss::NoOpenMarker);
    }
    if close_tag.is_empty() {
        return Err(RegionMiss::Unterminated);
    }

    let open = find_tag(document, open_marker, 0, document.len()).ok_or(RegionMiss::NoOpenMarker)?;
    let after_marker = open + open_marker.len();
    let inner_start = if open_marker.ends_with('>') {
        after_marker
    } else {
        document[after_marker..]
            .find('>')
            .map(|i| after_marker + i + 1)
            .ok_or(RegionMiss::Unterminated)?
    };

    let mut depth = 1usize;
    let mut cursor = inner_start;

    loop {
        let close = document[cursor..]
            .find(close_tag)
            .map(|i| cursor + i)
            .ok_or(RegionMiss::Unterminated)?;

        let nested = if nest_prefix.is_empty() {
            None
        } else {
            find_tag(document, nest_prefix, cursor, close)
        };

        match nested {
            Some(at) => {
                depth += 1;
                cursor = at + nest_prefix.len();
            }
            None => {
                depth -= 1;
                if depth == 0 {
                    return Ok(RegionSpan {
                        open,
                        inner: inner_start..close,
                        end: close + close_tag.len(),
                    });
                }
                cursor = close + close_tag.len();
            }
        }
    }
}

/// First occurrence of `pattern` starting within `from..=last_start`.
fn find_tag(document: &str, pattern: &str, from: usize, last_start: usize) -> Option<usize> {
    let mut window_end = (last_start + pattern.len()).min(document.len());
    while !document.is_char_boundary(window_end) {
        window_end -= 1;
    }

    document[from..window_end]
        .match_indices(pattern)
        .map(|(i, _)| from + i)
        .find(|&at| ends_on_name_boundary(document, pattern, at + pattern.len()))
}

/// False when `pattern` ends in a tag-name character and the document
/// carries on with more of a name at `end`.
fn ends_on_name_boundary(document: &str, pattern: &str, end: usize) -> bool {
    let is_name_char = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == ':';
    match (pattern.chars().last(), document[end..].chars().next()) {
        (Some(last), Some(next)) => !(is_name_char(last) && is_name_char(next)),
        _ => true,
    }
}

/// Content of the balanced region, see [`locate_span`].
pub fn locate<'a>(
    document: &'a str,
    open_marker: &str,
    nest_prefix: &str,
    close_tag: &str,
) -> Result<&'a str, RegionMiss> {
    locate_span(document, open_marker, nest_prefix, close_tag).map(|span| span.inner(document))
}
