//! Suggestion generator — turns missing job keywords into improvement advice.

use crate::models::keyword::{Keyword, TermRole};

pub const ALL_KEYWORDS_COVERED: &str =
    "Your resume already contains all the important keywords from the job description. Great job!";

/// Builds ordered, human-readable suggestions from missing keywords.
///
/// The `max_suggestions` most important terms (highest job score first) are
/// grouped into technical, soft-skill, and other sentences; any remainder is
/// summarised as a count. Deterministic for a given input.
pub fn generate_suggestions(missing: &[Keyword], max_suggestions: usize) -> Vec<String> {
    if missing.is_empty() {
        return vec![ALL_KEYWORDS_COVERED.to_string()];
    }
    if max_suggestions == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&Keyword> = missing.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    let shown = &ranked[..ranked.len().min(max_suggestions)];

    let mut technical = Vec::new();
    let mut soft_skills = Vec::new();
    let mut other = Vec::new();
    for kw in shown {
        match kw.role {
            TermRole::Technical => technical.push(kw.surface.as_str()),
            TermRole::SoftSkill => soft_skills.push(kw.surface.as_str()),
            _ => other.push(kw.surface.as_str()),
        }
    }

    let mut suggestions = Vec::new();
    if !technical.is_empty() {
        suggestions.push(format!(
            "Add {} to better match this role.",
            quote_list(&technical)
        ));
    }
    if !soft_skills.is_empty() {
        suggestions.push(format!(
            "Highlight your {} skills, which are valued in this role.",
            quote_list(&soft_skills)
        ));
    }
    if !other.is_empty() {
        suggestions.push(format!(
            "Include experience related to {} if you have it.",
            quote_list(&other)
        ));
    }

    let remaining = ranked.len() - shown.len();
    if remaining > 0 {
        let noun = if remaining == 1 { "keyword" } else { "keywords" };
        suggestions.push(format!(
            "{remaining} more missing {noun} from the job description could also strengthen your resume."
        ));
    }

    suggestions
}

/// `'a'`, `'a' and 'b'`, `'a', 'b', and 'c'`
fn quote_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{s}'")).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
