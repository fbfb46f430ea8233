use serde::{Deserialize, Serialize};

use crate::matching::stopwords::StopwordList;

pub const DEFAULT_MAX_PHRASE_LENGTH: usize = 3;
pub const DEFAULT_MIN_KEYWORD_FREQUENCY: u32 = 1;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_MAX_KEYWORDS: usize = 100;

/// Phrases that are not known terms must repeat at least this often.
pub const MIN_PHRASE_FREQUENCY: u32 = 2;

/// Everything a single match call depends on. Passed explicitly into every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Longest contiguous run of words considered as one phrase.
    pub max_phrase_length: usize,
    pub stopwords: StopwordList,
    pub min_keyword_frequency: u32,
    /// Number of missing keywords named in suggestions.
    pub max_suggestions: usize,
    /// Shorter words are dropped unless they are known terms or acronyms.
    pub min_word_length: usize,
    /// Cap on the size of each extracted keyword set.
    pub max_keywords: usize,
    /// Reduce single words to their English stem before matching.
    pub stemming: bool,
    /// Additional high-value terms; they bypass the frequency gate.
    pub extra_known_terms: Vec<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_phrase_length: DEFAULT_MAX_PHRASE_LENGTH,
            stopwords: StopwordList::english(),
            min_keyword_frequency: DEFAULT_MIN_KEYWORD_FREQUENCY,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            stemming: false,
            extra_known_terms: Vec::new(),
        }
    }
}

impl MatchConfig {
    /// Phrase length actually used; anything below one means single words.
    pub fn effective_phrase_length(&self) -> usize {
        self.max_phrase_length.max(1)
    }

    /// Frequency a multi-word candidate needs when it is not a known term.
    pub fn phrase_frequency_gate(&self) -> u32 {
        self.min_keyword_frequency.max(MIN_PHRASE_FREQUENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.max_phrase_length, 3);
        assert_eq!(config.min_keyword_frequency, 1);
        assert_eq!(config.max_suggestions, 5);
        assert!(config.stopwords.contains("the"));
        assert!(!config.stemming);
    }

    #[test]
    fn test_phrase_gate_never_below_two() {
        let mut config = MatchConfig::default();
        assert_eq!(config.phrase_frequency_gate(), 2);
        config.min_keyword_frequency = 4;
        assert_eq!(config.phrase_frequency_gate(), 4);
    }

    #[test]
    fn test_zero_phrase_length_means_single_words() {
        let config = MatchConfig {
            max_phrase_length: 0,
            ..MatchConfig::default()
        };
        assert_eq!(config.effective_phrase_length(), 1);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"max_suggestions": 2, "stopwords": ["foo"]}"#).unwrap();
        assert_eq!(config.max_suggestions, 2);
        assert_eq!(config.max_phrase_length, 3);
        assert!(config.stopwords.contains("foo"));
        assert!(!config.stopwords.contains("the"));
    }
}
