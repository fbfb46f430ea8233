// Resume/JD keyword matching engine.
// Pipeline: normalize → extract (job, then resume against the job set) → score → suggest.
// Pure and synchronous; every call depends only on its arguments.

pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod options;
pub mod scorer;
pub mod stopwords;
pub mod suggestions;
pub mod vocabulary;

use tracing::debug;

use crate::errors::MatchError;
use crate::matching::extractor::{extract_keywords, extract_keywords_against};
use crate::matching::normalizer::normalize;
use crate::matching::options::MatchConfig;
use crate::matching::scorer::{ExactKeywordScorer, KeywordScorer};
use crate::matching::suggestions::generate_suggestions;
use crate::matching::vocabulary::Vocabulary;
use crate::models::document::{Document, DocumentKind};
use crate::models::keyword::KeywordSet;
use crate::models::match_result::{MatchBand, MatchFlag, MatchResult};

/// Compares resume text against job-description text with exact keyword matching.
///
/// Fails only when both texts are blank (`EmptyInput`) or a text is clearly a
/// binary payload (`InvalidEncoding`). Anything else yields a result, with
/// `flags` explaining an empty-looking one.
///
/// `match_texts("", "")` is `Err(EmptyInput)`, not a zero score; a single blank side scores 0.
pub fn match_texts(
    resume_text: &str,
    job_text: &str,
    config: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    let resume = Document::new(DocumentKind::Resume, resume_text)?;
    let job = Document::new(DocumentKind::JobDescription, job_text)?;
    match_documents(&resume, &job, config)
}

/// Same as [`match_texts`] for documents that were already ingested.
pub fn match_documents(
    resume: &Document,
    job: &Document,
    config: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    match_with(&ExactKeywordScorer, resume, job, config)
}

/// Runs the pipeline with a caller-chosen scorer.
pub fn match_with(
    scorer: &dyn KeywordScorer,
    resume: &Document,
    job: &Document,
    config: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    if resume.is_blank() && job.is_blank() {
        return Err(MatchError::EmptyInput);
    }

    let vocabulary = Vocabulary::new(&config.extra_known_terms);
    let job_keywords = keywords_for(job, config, &vocabulary);
    // only the job side is gated on frequency; one resume mention of a job keyword is enough
    let resume_terms = normalize(resume.text(), config, &vocabulary);
    let resume_keywords = extract_keywords_against(
        &resume_terms,
        resume.kind(),
        config,
        &vocabulary,
        &job_keywords,
    );

    let mut flags = Vec::new();
    if resume.is_blank() {
        flags.push(MatchFlag::EmptyResume);
    } else if resume_keywords.is_empty() {
        flags.push(MatchFlag::NoResumeKeywords);
    }
    if job.is_blank() {
        flags.push(MatchFlag::EmptyJobDescription);
    } else if job_keywords.is_empty() {
        flags.push(MatchFlag::NoJobKeywords);
    }

    let breakdown = scorer.score(&resume_keywords, &job_keywords);

    // Nothing to advise on when the job side has no keywords at all.
    let suggestions = if job_keywords.is_empty() {
        Vec::new()
    } else {
        generate_suggestions(&breakdown.missing, config.max_suggestions)
    };

    debug!(
        resume_keywords = resume_keywords.len(),
        job_keywords = job_keywords.len(),
        matched = breakdown.matched.len(),
        score = breakdown.score,
        backend = scorer.backend(),
        "Scored resume against job description"
    );

    Ok(MatchResult {
        score: breakdown.score,
        band: MatchBand::from_score(breakdown.score),
        matched: breakdown.matched,
        missing: breakdown.missing,
        suggestions,
        flags,
        scorer_backend: scorer.backend().to_string(),
        resume_keyword_count: resume_keywords.len(),
        job_keyword_count: job_keywords.len(),
    })
}

/// Normalizes and extracts one document's keyword set.
pub fn extract_document_keywords(document: &Document, config: &MatchConfig) -> KeywordSet {
    let vocabulary = Vocabulary::new(&config.extra_known_terms);
    keywords_for(document, config, &vocabulary)
}

fn keywords_for(document: &Document, config: &MatchConfig, vocabulary: &Vocabulary) -> KeywordSet {
    let terms = normalize(document.text(), config, vocabulary);
    extract_keywords(&terms, document.kind(), config, vocabulary)
}
