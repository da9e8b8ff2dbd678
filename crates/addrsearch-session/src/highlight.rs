//! Case-insensitive substring highlighting for result rows.

/// Computes the byte-offset spans of `text` to render emphasized for
/// `query`.
///
/// Matching is case-insensitive, non-overlapping, and greedy-leftmost: the
/// scan resumes at the end of each match. An empty query yields no spans.
/// Pure function, cheap enough to call on every render.
///
/// Offsets always index the original `text`, even when case folding changes
/// a character's byte length, because the comparison walks lowercased char
/// streams instead of searching a lowercased copy.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut spans = Vec::new();
    let mut start = 0;
    while start < text.len() {
        match find_ignore_case(&text[start..], query) {
            Some((offset, len)) => {
                let begin = start + offset;
                spans.push((begin, begin + len));
                start = begin + len;
            }
            None => break,
        }
    }
    spans
}

/// Finds the leftmost case-insensitive occurrence of `needle` in `haystack`,
/// returning its byte offset and matched byte length.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    haystack.char_indices().find_map(|(idx, _)| {
        match_len_ignore_case(&haystack[idx..], needle).map(|len| (idx, len))
    })
}

/// Returns the byte length of `haystack`'s prefix that case-insensitively
/// equals `needle`, or `None` if `haystack` does not start with it.
///
/// A haystack character whose lowercase expansion is only partially consumed
/// by the needle does not count as a match; spans never split a character.
fn match_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut needle_lower = needle.chars().flat_map(char::to_lowercase);
    let mut expected = needle_lower.next();
    for (idx, hay_char) in haystack.char_indices() {
        if expected.is_none() {
            return Some(idx);
        }
        for lowered in hay_char.to_lowercase() {
            match expected {
                Some(want) if want == lowered => expected = needle_lower.next(),
                _ => return None,
            }
        }
    }
    if expected.is_none() {
        Some(haystack.len())
    } else {
        None
    }
}
