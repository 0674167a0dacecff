//! Splitting a label into plain and highlighted segments.

use crate::span::{normalize_spans, MatchSpan};
use serde::Serialize;

/// A piece of a label, either matched or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    /// Text of this piece, borrowed from the label
    pub text: &'a str,
    /// Whether this piece was part of a match
    pub highlighted: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    fn marked(text: &'a str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Split `text` into alternating plain and highlighted segments.
///
/// Spans are character offsets (inclusive). Concatenating the segments
/// always reproduces `text`; spans past the end are clamped and overlapping
/// ones merged. With no spans the whole label is one plain segment.
#[must_use]
pub fn segments<'a>(text: &'a str, spans: &[MatchSpan]) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    // Byte offset of every char boundary, plus the end of the string.
    let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let char_len = bounds.len();
    bounds.push(text.len());

    let spans = normalize_spans(spans, char_len);
    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            out.push(Segment::plain(&text[bounds[cursor]..bounds[span.start]]));
        }
        out.push(Segment::marked(&text[bounds[span.start]..bounds[span.end + 1]]));
        cursor = span.end + 1;
    }

    if cursor < char_len {
        out.push(Segment::plain(&text[bounds[cursor]..]));
    }

    out
}

/// Render a label, wrapping highlighted segments with `mark`.
pub fn render_with<F>(text: &str, spans: &[MatchSpan], mut mark: F) -> String
where
    F: FnMut(&str) -> String,
{
    segments(text, spans)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                mark(segment.text)
            } else {
                segment.text.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn concat(segments: &[Segment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_no_spans_is_one_plain_segment() {
        let parts = segments("pikachu", &[]);
        assert_eq!(parts, vec![Segment::plain("pikachu")]);
    }

    #[test]
    fn test_prefix_highlight() {
        let parts = segments("charmander", &[MatchSpan::new(0, 3)]);
        assert_eq!(parts, vec![Segment::marked("char"), Segment::plain("mander")]);
    }

    #[test]
    fn test_alternating_segments() {
        let parts = segments("bulbasaur", &[MatchSpan::new(1, 2), MatchSpan::new(5, 8)]);
        assert_eq!(
            parts,
            vec![
                Segment::plain("b"),
                Segment::marked("ul"),
                Segment::plain("ba"),
                Segment::marked("saur"),
            ]
        );
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        let parts = segments("flabébé", &[MatchSpan::new(4, 6)]);
        assert_eq!(parts, vec![Segment::plain("flab"), Segment::marked("ébé")]);
    }

    #[test]
    fn test_empty_label() {
        assert!(segments("", &[MatchSpan::new(0, 0)]).is_empty());
    }

    #[test]
    fn test_render_with_marks() {
        let html = render_with("squirtle", &[MatchSpan::new(0, 2)], |s| format!("<mark>{s}</mark>"));
        assert_eq!(html, "<mark>squ</mark>irtle");
    }

    proptest! {
        #[test]
        fn prop_segments_reconstruct_label(
            text in "\\PC{0,24}",
            raw in prop::collection::vec((0usize..30, 0usize..30), 0..6),
        ) {
            let spans: Vec<MatchSpan> = raw
                .into_iter()
                .map(|(a, b)| MatchSpan::new(a.min(b), a.max(b)))
                .collect();
            let parts = segments(&text, &spans);
            prop_assert_eq!(concat(&parts), text.clone());

            // No two neighbours share a kind once spans are merged.
            for pair in parts.windows(2) {
                prop_assert_ne!(pair[0].highlighted, pair[1].highlighted);
            }
        }
    }
}
