//! Text location — find whole-word occurrences of scored words.
//!
//! Matching runs over a lower-cased copy of the text, but every offset
//! handed back indexes the original string. Lower-casing can change byte
//! lengths (and even char counts), so the folded copy keeps a map back to
//! the original char each byte came from.

use crate::types::MatchSpan;

/// Lower-cased text with a byte map back to the source string.
struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    /// For each folded byte offset: the original byte offset if a source
    /// char starts there, else `None`. Has `folded.len() + 1` entries.
    origin: Vec<Option<usize>>,
}

impl<'a> FoldedText<'a> {
    fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len() + 1);
        for (offset, ch) in original.char_indices() {
            let before = folded.len();
            folded.extend(ch.to_lowercase());
            origin.push(Some(offset));
            origin.resize(origin.len() + folded.len() - before - 1, None);
        }
        origin.push(Some(original.len()));
        Self {
            original,
            folded,
            origin,
        }
    }

    /// Original byte range for a folded range, if both ends sit on
    /// source char boundaries.
    fn original_range(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        Some((self.origin[start]?, self.origin[end]?))
    }

    fn is_word_boundary(&self, start: usize, end: usize) -> bool {
        let before_ok = self.original[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = self.original[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    }
}

/// Every whole-word occurrence of `word` (already lower-cased) in `text`.
///
/// The search restarts one char after each candidate, accepted or not, so
/// overlapping and adjacent occurrences are all found.
pub fn find_word(text: &str, word: &str) -> Vec<MatchSpan> {
    find_in(&FoldedText::new(text), word)
}

/// Occurrences of each word, grouped in the order the words are given.
pub fn locate_words<'w>(text: &str, words: impl IntoIterator<Item = &'w str>) -> Vec<MatchSpan> {
    let folded = FoldedText::new(text);
    words
        .into_iter()
        .flat_map(|word| find_in(&folded, word))
        .collect()
}

fn find_in(text: &FoldedText<'_>, word: &str) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    if word.is_empty() {
        return spans;
    }

    let haystack = text.folded.as_str();
    let mut from = 0;
    while let Some(rel) = haystack[from..].find(word) {
        let pos = from + rel;
        let end = pos + word.len();
        if let Some((start, stop)) = text.original_range(pos, end) {
            if text.is_word_boundary(start, stop) {
                spans.push(MatchSpan {
                    word: word.to_string(),
                    start,
                    end: stop,
                });
            }
        }
        // pos is a char boundary of the folded text; step over that char
        from = pos + haystack[pos..].chars().next().map_or(1, char::len_utf8);
    }
    spans
}
