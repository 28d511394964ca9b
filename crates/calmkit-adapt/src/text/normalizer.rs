// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text normalizer — collapses repeated punctuation, turns shouted words into
// capitalized ones, and breaks overly long sentences at clause boundaries.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Segments longer than this many characters are broken into clauses.
pub const LONG_SENTENCE_CHARS: usize = 100;

/// Sentence delimiter used both for splitting and rejoining.
const SENTENCE_DELIMITER: &str = ". ";

static EXCLAMATION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!{2,}").expect("static pattern"));

static QUESTION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?{2,}").expect("static pattern"));

// ASCII only; lowercase and non-Latin letters are never matched.
static SHOUTED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{3,}").expect("static pattern"));

static CLAUSE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r", | and | but | or ").expect("static pattern"));

/// Adapt `text` for easier reading.
///
/// When `simplify` is false the input is returned unchanged. Otherwise the
/// passes run in order: [`collapse_punctuation`], [`deshout`],
/// [`break_long_sentences`].
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn normalize(text: &str, simplify: bool) -> String {
    if !simplify {
        return text.to_owned();
    }

    let collapsed = collapse_punctuation(text);
    let calm = deshout(&collapsed);
    let result = break_long_sentences(&calm);

    debug!(output_len = result.len(), "Text normalized");
    result
}

/// Replace runs of two or more `!` (or `?`) with a single one.
pub fn collapse_punctuation(text: &str) -> String {
    let text = EXCLAMATION_RUN.replace_all(text, "!");
    QUESTION_RUN.replace_all(&text, "?").into_owned()
}

/// Capitalize every run of three or more uppercase ASCII letters.
///
/// `"THIS IS LOUD"` becomes `"This IS Loud"`: two-letter runs are left alone,
/// so short acronyms survive while longer ones are capitalized like words.
pub fn deshout(text: &str) -> String {
    SHOUTED_RUN
        .replace_all(text, |caps: &Captures| capitalize(&caps[0]))
        .into_owned()
}

/// Split on `". "`, break any segment over [`LONG_SENTENCE_CHARS`] at
/// `", "`, `" and "`, `" but "`, `" or "`, and rejoin with `". "`.
///
/// Clause pieces are trimmed and empty ones dropped. Short segments,
/// including empty ones, pass through untouched. Pieces are not re-checked
/// against the length limit.
pub fn break_long_sentences(text: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for sentence in text.split(SENTENCE_DELIMITER) {
        if sentence.chars().count() > LONG_SENTENCE_CHARS {
            let before = segments.len();
            segments.extend(
                CLAUSE_BOUNDARY
                    .split(sentence)
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty()),
            );
            debug!(
                sentence_chars = sentence.chars().count(),
                pieces = segments.len() - before,
                "Long sentence broken into clauses"
            );
        } else {
            segments.push(sentence);
        }
    }

    segments.join(SENTENCE_DELIMITER)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}
