//! Prompt classifier.
//!
//! Maps a free-text prompt to the categories it asks for using plain
//! substring containment on the lowercased prompt. There is no tokenizing,
//! so "all" inside "small" or "mechanically" still counts.

use serde::Serialize;

use super::category::CategoryId;

/// Substrings that ask for every timetable at once.
pub const EVERYONE_KEYWORDS: &[&str] = &["everyone", "all"];

/// Outcome of classifying one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Categories to render, canonical order, never empty.
    pub categories: Vec<CategoryId>,
    /// Categories whose own keywords appeared in the prompt.
    pub matched: Vec<CategoryId>,
    /// "everyone"/"all" appeared somewhere in the prompt.
    pub everyone_signal: bool,
    /// Nothing matched, so every category was selected.
    pub fallback: bool,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Classify a prompt and keep the reasons behind the decision.
///
/// The everyone-signal wins over specific keywords: "timetable for all
/// mechanics" selects all three categories.
pub fn explain(prompt: &str) -> Classification {
    let lower = prompt.to_lowercase();

    let everyone_signal = contains_any(&lower, EVERYONE_KEYWORDS);
    let matched: Vec<CategoryId> = CategoryId::ALL
        .into_iter()
        .filter(|id| contains_any(&lower, id.keywords()))
        .collect();
    let fallback = matched.is_empty();

    let categories = if everyone_signal || fallback {
        CategoryId::ALL.to_vec()
    } else {
        matched.clone()
    };

    let slugs: Vec<&str> = categories.iter().map(|c| c.slug()).collect();
    tracing::debug!(everyone_signal, fallback, categories = ?slugs, "classified prompt");

    Classification {
        categories,
        matched,
        everyone_signal,
        fallback,
    }
}

/// Categories requested by `prompt`, canonical order, never empty.
///
/// Callers are expected to reject blank prompts first; a blank prompt
/// simply falls back to every category.
pub fn classify(prompt: &str) -> Vec<CategoryId> {
    explain(prompt).categories
}
