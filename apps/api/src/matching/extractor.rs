//! Keyword extractor — ranks single words and contiguous phrases by weighted frequency.
//!
//! Algorithm:
//! 1. Every run of 1..=max_phrase_length terms inside one segment is a candidate
//! 2. Gate: words need `min_keyword_frequency`, phrases need at least 2 hits;
//!    known vocabulary terms and terms of the reference set always pass
//! 3. Role weighting stands in for part-of-speech tagging (see `TermRole`)
//! 4. Rank by frequency * weight, ties broken by first occurrence
//! 5. Truncate to `max_keywords`

use std::collections::HashMap;

use crate::matching::normalizer::NormalizedTerm;
use crate::matching::options::MatchConfig;
use crate::matching::vocabulary::Vocabulary;
use crate::models::document::DocumentKind;
use crate::models::keyword::{Keyword, KeywordSet, TermRole};

/// Characters that mark a single word as technical (`c++`, `ci/cd`, `asp.net`).
const TECHNICAL_MARKS: &[char] = &['+', '#', '/', '.'];

struct Candidate {
    term: String,
    lower: String,
    surface: String,
    frequency: u32,
    word_count: usize,
    acronym: bool,
}

/// Extracts the ranked, duplicate-free keyword set from a normalized term sequence.
pub fn extract_keywords(
    terms: &[NormalizedTerm],
    source: DocumentKind,
    config: &MatchConfig,
    vocabulary: &Vocabulary,
) -> KeywordSet {
    extract_keywords_against(terms, source, config, vocabulary, &KeywordSet::default())
}

/// Like [`extract_keywords`], but any candidate whose term is in `reference`
/// skips the frequency gate. The resume side is extracted against the job set
/// so a job keyword mentioned once in the resume still counts as present.
pub fn extract_keywords_against(
    terms: &[NormalizedTerm],
    source: DocumentKind,
    config: &MatchConfig,
    vocabulary: &Vocabulary,
    reference: &KeywordSet,
) -> KeywordSet {
    let candidates = collect_candidates(terms, config.effective_phrase_length());
    let phrase_gate = config.phrase_frequency_gate();

    let mut ranked: Vec<Keyword> = candidates
        .into_iter()
        .filter(|c| {
            let gate = if c.word_count == 1 {
                config.min_keyword_frequency
            } else {
                phrase_gate
            };
            c.frequency >= gate || vocabulary.is_known(&c.lower) || reference.contains(&c.term)
        })
        .map(|c| {
            let role = classify(&c, vocabulary);
            let weight = role.weight();
            Keyword {
                score: c.frequency as f32 * weight,
                term: c.term,
                surface: c.surface,
                frequency: c.frequency,
                word_count: c.word_count,
                role,
                weight,
                source,
            }
        })
        .collect();

    // stable: equal scores keep first-occurrence order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(config.max_keywords);

    KeywordSet::from_ranked(ranked)
}

/// Counts every in-segment n-gram, keeping candidates in first-occurrence order.
fn collect_candidates(terms: &[NormalizedTerm], max_len: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for start in 0..terms.len() {
        let segment = terms[start].segment;
        for len in 1..=max_len {
            let Some(window) = terms.get(start..start + len) else {
                break;
            };
            if window.iter().any(|t| t.segment != segment) {
                break;
            }

            let term = join(window, |t| &t.term);
            if let Some(&i) = index.get(&term) {
                candidates[i].frequency += 1;
                continue;
            }

            index.insert(term.clone(), candidates.len());
            candidates.push(Candidate {
                term,
                lower: join(window, |t| &t.lower),
                surface: join(window, |t| &t.surface),
                frequency: 1,
                word_count: len,
                acronym: len == 1 && window[0].acronym,
            });
        }
    }

    candidates
}

fn join(window: &[NormalizedTerm], field: impl Fn(&NormalizedTerm) -> &String) -> String {
    window
        .iter()
        .map(|t| field(t).as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn classify(candidate: &Candidate, vocabulary: &Vocabulary) -> TermRole {
    let lower = candidate.lower.as_str();
    if vocabulary.is_technical(lower) || candidate.acronym {
        return TermRole::Technical;
    }
    if vocabulary.is_soft_skill(lower) {
        return TermRole::SoftSkill;
    }
    if candidate.word_count > 1 {
        return TermRole::Phrase;
    }
    if looks_technical(lower) {
        return TermRole::Technical;
    }
    if vocabulary.is_generic_verb(lower) {
        return TermRole::GenericVerb;
    }
    TermRole::General
}

/// Letters mixed with digits or symbol joiners: `ec2`, `k8s`, `asp.net`, `tcp/ip`.
fn looks_technical(word: &str) -> bool {
    let has_letter = word.chars().any(char::is_alphabetic);
    let has_digit = word.chars().any(|c| c.is_ascii_digit());
    has_letter && (has_digit || word.contains(TECHNICAL_MARKS))
}
