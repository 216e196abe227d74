//! Segment building — partition the text into highlighted and plain runs.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::color::{ColorScale, Rgb};
use crate::types::{MatchSpan, Segment, WordScore};

/// A located span together with its normalized score.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    word: &'a str,
    end: usize,
    score: f64,
}

impl Candidate<'_> {
    /// Higher score first, then the longer span, then the smaller word.
    fn beats(&self, other: &Self) -> bool {
        match self.score.total_cmp(&other.score) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match self.end.cmp(&other.end) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => self.word < other.word,
            },
        }
    }
}

/// Walk `text` left to right, taking at each offset the best span that
/// starts there and filling the gaps with plain segments.
///
/// The returned segments concatenate back to `text` exactly. Spans that
/// start inside an already highlighted run are dropped.
pub fn build_segments(
    text: &str,
    spans: &[MatchSpan],
    scores: &[WordScore],
    scale: &ColorScale,
    plain: Rgb,
) -> Vec<Segment> {
    let score_of: HashMap<&str, f64> = scores.iter().map(|w| (w.word.as_str(), w.score)).collect();

    let mut best: BTreeMap<usize, Candidate<'_>> = BTreeMap::new();
    let in_bounds = |s: &&MatchSpan| {
        s.start < s.end && text.is_char_boundary(s.start) && text.is_char_boundary(s.end)
    };
    for span in spans.iter().filter(in_bounds) {
        let Some(&score) = score_of.get(span.word.as_str()) else {
            continue;
        };
        let candidate = Candidate {
            word: &span.word,
            end: span.end,
            score,
        };
        best.entry(span.start)
            .and_modify(|held| {
                if candidate.beats(held) {
                    *held = candidate;
                }
            })
            .or_insert(candidate);
    }

    let plain_color = plain.to_string();
    let mut segments = Vec::new();
    let mut i = 0;
    while i < text.len() {
        if let Some(hit) = best.get(&i) {
            segments.push(Segment {
                text: text[i..hit.end].to_string(),
                color: scale.hex_at(hit.score),
                score: hit.score,
            });
            i = hit.end;
        } else {
            let next = best
                .range(i + 1..)
                .next()
                .map_or(text.len(), |(&start, _)| start);
            segments.push(Segment {
                text: text[i..next].to_string(),
                color: plain_color.clone(),
                score: 0.0,
            });
            i = next;
        }
    }

    if segments.is_empty() {
        segments.push(plain_segment(text, plain));
    }
    segments
}

/// The whole text as one unstyled run.
pub fn plain_segment(text: &str, plain: Rgb) -> Segment {
    Segment {
        text: text.to_string(),
        color: plain.to_string(),
        score: 0.0,
    }
}
