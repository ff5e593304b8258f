//! Sentence splitting for streaming synthesis.

use once_cell::sync::Lazy;
use regex::Regex;

/// A sentence terminator followed by the whitespace run separating it from
/// the next sentence.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary regex is valid"));

/// Split text into sentence units for streaming.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace. The terminator
/// stays with its sentence, surrounding whitespace is trimmed, and empty
/// units are dropped. Text without any terminator comes back as a single
/// unit.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BOUNDARY.find_iter(text) {
        // The terminator is one ASCII byte; keep it, drop the whitespace run
        let end = m.start() + 1;
        push_unit(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_unit(&mut sentences, &text[start..]);
    sentences
}

fn push_unit(sentences: &mut Vec<String>, unit: &str) {
    let trimmed = unit.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
