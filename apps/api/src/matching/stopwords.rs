//! Stopword lists. The active list is always carried in `MatchConfig`.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// Common English function words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "but", "by", "ca", "can", "can't", "cannot", "could", "did", "do", "does",
    "doing", "don't", "done", "down", "due", "during", "e.g", "each", "either", "else",
    "elsewhere", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "for", "former", "formerly", "from", "further", "get",
    "gets", "give", "had", "has", "have", "having", "he", "hence", "her", "here", "hereby",
    "herein", "hers", "herself", "him", "himself", "his", "how", "however", "i", "i.e", "if",
    "in", "indeed", "into", "is", "it", "it's", "its", "itself", "just", "keep", "last",
    "latter", "least", "less", "made", "make", "many", "may", "me", "meanwhile", "might",
    "mine", "more", "moreover", "most", "mostly", "much", "must", "my", "myself", "namely",
    "neither", "never", "nevertheless", "next", "no", "nobody", "none", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding",
    "same", "say", "see", "seem", "seemed", "seeming", "seems", "several", "she", "should",
    "show", "side", "since", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "take", "than", "that", "the", "their",
    "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "these", "they", "this", "those", "though", "through", "throughout", "thru",
    "thus", "to", "together", "too", "top", "toward", "towards", "under", "unless", "until",
    "up", "upon", "us", "used", "using", "various", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereas", "whereby",
    "wherein", "whether", "which", "while", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "you'll", "you're", "your",
    "yours", "yourself", "yourselves",
];

/// Words every resume or posting contains that say nothing about fit.
pub const RESUME_BOILERPLATE_WORDS: &[&str] = &[
    "resume", "cv", "curriculum", "vitae", "job", "description", "position",
    "responsibilities", "requirements", "qualifications", "experience", "education",
    "skills", "company", "work", "email", "phone", "address", "summary", "profile",
    "contact", "information", "apply", "year", "years", "month", "months", "day", "days",
];

/// A set of lowercase words excluded from keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    /// English function words plus resume/posting boilerplate.
    pub fn english() -> Self {
        ENGLISH_STOP_WORDS
            .iter()
            .chain(RESUME_BOILERPLATE_WORDS)
            .copied()
            .collect()
    }

    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordList {
    fn default() -> Self {
        Self::english()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::empty();
        list.extend(iter);
        list
    }
}

impl From<Vec<String>> for StopwordList {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<StopwordList> for Vec<String> {
    fn from(list: StopwordList) -> Self {
        // sorted so serialized configs are stable
        list.words.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
    }
}
