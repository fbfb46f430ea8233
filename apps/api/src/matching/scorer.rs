//! Keyword scoring — pluggable, trait-based comparison of two keyword sets.
//!
//! Default: `ExactKeywordScorer` (normalized-term equality, no fuzzy matching).
//! `AppState` holds an `Arc<dyn KeywordScorer>`.

use crate::models::keyword::{Keyword, KeywordSet};

/// Overlap between a resume and a job description keyword set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// 0 – 100
    pub score: f64,
    pub matched: Vec<Keyword>,
    pub missing: Vec<Keyword>,
}

/// Implement this to swap matching strategies without touching the pipeline
/// or handlers.
pub trait KeywordScorer: Send + Sync {
    fn score(&self, resume: &KeywordSet, job: &KeywordSet) -> ScoreBreakdown;

    /// Short label reported in every result, for transparency.
    fn backend(&self) -> &'static str;
}

/// Set overlap on normalized terms.
///
/// score = 100 * |job ∩ resume| / |job|, and 0 when the job set is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactKeywordScorer;

impl KeywordScorer for ExactKeywordScorer {
    fn score(&self, resume: &KeywordSet, job: &KeywordSet) -> ScoreBreakdown {
        let (matched, missing): (Vec<Keyword>, Vec<Keyword>) = job
            .iter()
            .cloned()
            .partition(|kw| resume.contains(&kw.term));

        ScoreBreakdown {
            score: percentage(matched.len(), job.len()),
            matched,
            missing,
        }
    }

    fn backend(&self) -> &'static str {
        "exact"
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (100.0 * part as f64 / whole as f64).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentKind;
    use crate::models::keyword::TermRole;

    fn set(terms: &[&str], source: DocumentKind) -> KeywordSet {
        KeywordSet::from_ranked(terms.iter().map(|t| Keyword {
            term: t.to_string(),
            surface: t.to_string(),
            frequency: 1,
            word_count: t.split(' ').count(),
            role: TermRole::General,
            weight: 1.0,
            score: 1.0,
            source,
        }))
    }

    #[test]
    fn test_partial_overlap() {
        let resume = set(&["python", "flask", "docker"], DocumentKind::Resume);
        let job = set(&["python", "flask", "fastapi", "docker"], DocumentKind::JobDescription);

        let breakdown = ExactKeywordScorer.score(&resume, &job);
        assert_eq!(breakdown.score, 75.0);
        let matched: Vec<&str> = breakdown.matched.iter().map(|k| k.term.as_str()).collect();
        let missing: Vec<&str> = breakdown.missing.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(matched, vec!["python", "flask", "docker"]);
        assert_eq!(missing, vec!["fastapi"]);
    }

    #[test]
    fn test_matched_entries_come_from_job_side() {
        let resume = set(&["rust"], DocumentKind::Resume);
        let job = set(&["rust"], DocumentKind::JobDescription);
        let breakdown = ExactKeywordScorer.score(&resume, &job);
        assert_eq!(breakdown.matched[0].source, DocumentKind::JobDescription);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let resume = set(&["python"], DocumentKind::Resume);
        let job = KeywordSet::default();
        let breakdown = ExactKeywordScorer.score(&resume, &job);
        assert_eq!(breakdown.score, 0.0);
        assert!(breakdown.matched.is_empty());
        assert!(breakdown.missing.is_empty());
    }

    #[test]
    fn test_resume_extras_do_not_inflate_score() {
        let resume = set(&["python", "go", "java", "scala"], DocumentKind::Resume);
        let job = set(&["python"], DocumentKind::JobDescription);
        assert_eq!(ExactKeywordScorer.score(&resume, &job).score, 100.0);
    }

    #[test]
    fn test_no_partial_string_matching() {
        let resume = set(&["rest"], DocumentKind::Resume);
        let job = set(&["rest api"], DocumentKind::JobDescription);
        let breakdown = ExactKeywordScorer.score(&resume, &job);
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.missing.len(), 1);
    }

    #[test]
    fn test_backend_label_is_exact() {
        assert_eq!(ExactKeywordScorer.backend(), "exact");
    }
}
