//! Resume keyword matcher: compares a resume against a job description and
//! reports a keyword-overlap score, matched and missing keywords, and
//! improvement suggestions.
//!
//! The core lives in [`matching`] and is pure; the rest is the HTTP surface.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod routes;
pub mod state;

pub use errors::MatchError;
pub use matching::options::MatchConfig;
pub use matching::{match_documents, match_texts};
pub use models::match_result::MatchResult;
