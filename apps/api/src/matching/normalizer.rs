//! Text normalizer — turns raw text into case-folded, stopword-free terms.
//!
//! Besides the term sequence it records phrase boundaries ("segments"): any
//! punctuation, line break, or dropped word closes the current segment, so
//! multi-word candidates never bridge "Python, Flask" or "design and build".

use rust_stemmers::{Algorithm, Stemmer};

use crate::matching::options::MatchConfig;
use crate::matching::vocabulary::Vocabulary;

/// Join two alphanumeric runs into one word (`ci/cd`, `node.js`, `scikit-learn`).
const JOINERS: &[char] = &['/', '.', '-', '_', '&', '\'', '\u{2019}'];

/// May trail a word (`c++`, `c#`).
const SUFFIXES: &[char] = &['+', '#'];

/// One normalized word, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTerm {
    /// Match key: lowercase, stemmed when stemming is on.
    pub term: String,
    /// Lowercase form before stemming, used for vocabulary lookups.
    pub lower: String,
    /// As written in the document.
    pub surface: String,
    /// Terms share a segment only when nothing separated them but whitespace.
    pub segment: usize,
    /// Surface was 2-5 uppercase letters (`AWS`, `REST`).
    pub acronym: bool,
}

struct RawWord<'a> {
    text: &'a str,
    breaks_before: bool,
}

/// Normalizes `text` into an ordered term sequence. Deterministic; blank input
/// yields an empty sequence.
pub fn normalize(text: &str, config: &MatchConfig, vocabulary: &Vocabulary) -> Vec<NormalizedTerm> {
    let stemmer = config
        .stemming
        .then(|| Stemmer::create(Algorithm::English));

    let mut terms = Vec::new();
    let mut segment = 0;

    for word in split_words(text) {
        if word.breaks_before {
            segment += 1;
        }

        let folded = word.text.replace('\u{2019}', "'");
        let surface = strip_possessive(&folded);
        let lower = surface.to_lowercase();

        if config.stopwords.contains(&lower) || !lower.chars().any(char::is_alphabetic) {
            segment += 1;
            continue;
        }

        let acronym = is_acronym(surface);
        let known = vocabulary.is_known(&lower);
        let short_ok = known || acronym || mixes_letters_and_digits(&lower);
        if lower.chars().count() < config.min_word_length && !short_ok {
            segment += 1;
            continue;
        }

        let term = match &stemmer {
            Some(stemmer) if !known && lower.chars().all(char::is_alphabetic) => {
                stemmer.stem(&lower).into_owned()
            }
            _ => lower.clone(),
        };

        terms.push(NormalizedTerm {
            term,
            lower,
            surface: surface.to_string(),
            segment,
            acronym,
        });
    }

    terms
}

/// `s3`, `k8`, `5g`: short, but never filler.
fn mixes_letters_and_digits(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && word.chars().any(|c| c.is_ascii_digit())
}

/// Splits text into raw words, noting which ones follow a phrase boundary.
fn split_words(text: &str) -> Vec<RawWord<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut pending_break = false;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| chars[j].1);
        let next_is_alnum = chars
            .get(i + 1)
            .is_some_and(|&(_, n)| n.is_alphanumeric());

        let in_word = if c.is_alphanumeric() {
            true
        } else if start.is_some() && JOINERS.contains(&c) {
            next_is_alnum
        } else if start.is_some() && SUFFIXES.contains(&c) {
            !next_is_alnum
        } else {
            // leading dot of `.net`
            start.is_none() && c == '.' && next_is_alnum && prev.map_or(true, char::is_whitespace)
        };

        if in_word {
            if start.is_none() {
                start = Some(offset);
            }
            continue;
        }

        if let Some(s) = start.take() {
            words.push(RawWord {
                text: &text[s..offset],
                breaks_before: pending_break,
            });
            pending_break = false;
        }
        if breaks_phrase(c) {
            pending_break = true;
        }
    }

    if let Some(s) = start {
        words.push(RawWord {
            text: &text[s..],
            breaks_before: pending_break,
        });
    }

    words
}

/// Line breaks and punctuation end a phrase; spaces and quote marks do not.
fn breaks_phrase(c: char) -> bool {
    if c == '\n' {
        return true;
    }
    !(c.is_whitespace() || matches!(c, '\'' | '"' | '\u{2019}' | '\u{201c}' | '\u{201d}'))
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("'S"))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(word)
}

fn is_acronym(surface: &str) -> bool {
    (2..=5).contains(&surface.chars().count()) && surface.chars().all(|c| c.is_ascii_uppercase())
}
