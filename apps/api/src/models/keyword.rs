use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::document::DocumentKind;

/// Linguistic role of a keyword, standing in for part-of-speech tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermRole {
    /// Known technology, acronym, or symbol-bearing word (`c++`, `ci/cd`, `ec2`).
    Technical,
    SoftSkill,
    /// Multi-word run that is not a known term.
    Phrase,
    General,
    /// Filler verbs every posting uses ("develop", "build", "ensure").
    GenericVerb,
}

impl TermRole {
    /// Multiplier applied to raw frequency when ranking.
    pub fn weight(self) -> f32 {
        match self {
            TermRole::Technical => 2.0,
            TermRole::Phrase => 2.0,
            TermRole::SoftSkill => 1.5,
            TermRole::General => 1.0,
            TermRole::GenericVerb => 0.5,
        }
    }
}

/// A normalized single- or multi-word term extracted from one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Normalized match key. Equality between documents is decided on this alone.
    pub term: String,
    /// How the term was first written, for display.
    pub surface: String,
    pub frequency: u32,
    pub word_count: usize,
    pub role: TermRole,
    pub weight: f32,
    /// frequency * weight
    pub score: f32,
    pub source: DocumentKind,
}

/// Duplicate-free keywords of one document, kept in rank order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl KeywordSet {
    /// Builds a set from keywords already in rank order; later duplicates of a
    /// term are dropped.
    pub fn from_ranked(ranked: impl IntoIterator<Item = Keyword>) -> Self {
        let mut set = Self::default();
        for keyword in ranked {
            if set.index.contains_key(&keyword.term) {
                continue;
            }
            set.index.insert(keyword.term.clone(), set.keywords.len());
            set.keywords.push(keyword);
        }
        set
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn get(&self, term: &str) -> Option<&Keyword> {
        self.index.get(term).map(|&i| &self.keywords[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.keywords.iter()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.term.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
