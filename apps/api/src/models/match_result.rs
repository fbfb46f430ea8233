use serde::{Deserialize, Serialize};

use crate::models::keyword::Keyword;

/// Coarse reading of a score: strong from 70, moderate from 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            MatchBand::Strong
        } else if score >= 50.0 {
            MatchBand::Moderate
        } else {
            MatchBand::Weak
        }
    }
}

/// Why a result looks emptier than the caller might expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFlag {
    EmptyResume,
    EmptyJobDescription,
    /// Resume had text but nothing survived extraction.
    NoResumeKeywords,
    /// Job description had text but nothing survived extraction. Score is 0.
    NoJobKeywords,
}

/// Outcome of comparing one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// 100 * |matched| / |job keywords|, within [0, 100].
    pub score: f64,
    pub band: MatchBand,
    /// Job keywords also present in the resume, in job rank order.
    pub matched: Vec<Keyword>,
    /// Job keywords absent from the resume, most important first.
    pub missing: Vec<Keyword>,
    pub suggestions: Vec<String>,
    pub flags: Vec<MatchFlag>,
    pub scorer_backend: String,
    /// Sizes of the two extracted sets, reported next to the result by the API.
    #[serde(skip)]
    pub resume_keyword_count: usize,
    #[serde(skip)]
    pub job_keyword_count: usize,
}

impl MatchResult {
    pub fn matched_terms(&self) -> Vec<&str> {
        self.matched.iter().map(|k| k.term.as_str()).collect()
    }

    pub fn missing_terms(&self) -> Vec<&str> {
        self.missing.iter().map(|k| k.term.as_str()).collect()
    }

    /// Score rounded to one decimal place for display.
    pub fn rounded_score(&self) -> f64 {
        (self.score * 10.0).round() / 10.0
    }

    pub fn has_flag(&self, flag: MatchFlag) -> bool {
        self.flags.contains(&flag)
    }
}
