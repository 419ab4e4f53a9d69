//! Prompt-to-report pipeline.
//!
//! This is the whole surface a presentation layer needs: hand in the text
//! the user typed, display the returned string verbatim.

use std::fmt;

use serde::Serialize;

use super::catalog::Catalog;
use super::category::{Category, CategoryId};
use super::classifier::classify;
use super::formatter::render;

/// Reply for a blank prompt.
pub const EMPTY_PROMPT_MESSAGE: &str = "Please ask for a timetable.";

/// Prompt pre-filled in the search box.
pub const DEFAULT_PROMPT: &str = "Create timetable for a housewife";

/// Prompts suggested to first-time users.
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "time table for white collar employee",
    "make a timetable for mechanic",
    "timetable for everyone",
];

/// Suggestion block shown before the first prompt.
pub fn welcome_text() -> String {
    let mut out = String::from("Try prompts like:\n");
    for prompt in EXAMPLE_PROMPTS {
        out.push_str("• ");
        out.push_str(prompt);
        out.push('\n');
    }
    out
}

/// Result of running one prompt through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    /// The prompt was blank.
    NeedsPrompt { message: &'static str },
    /// One or more timetables were selected.
    Timetable {
        prompt: String,
        #[serde(serialize_with = "serialize_categories")]
        categories: Vec<CategoryId>,
    },
}

impl Reply {
    pub fn for_prompt(prompt: &str) -> Self {
        if prompt.trim().is_empty() {
            tracing::debug!("blank prompt, asking for input");
            return Reply::NeedsPrompt {
                message: EMPTY_PROMPT_MESSAGE,
            };
        }

        Reply::Timetable {
            prompt: prompt.to_string(),
            categories: classify(prompt),
        }
    }

    /// Selected categories; empty for [`Reply::NeedsPrompt`].
    pub fn categories(&self) -> &[CategoryId] {
        match self {
            Reply::NeedsPrompt { .. } => &[],
            Reply::Timetable { categories, .. } => categories,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::NeedsPrompt { message } => f.write_str(message),
            Reply::Timetable { prompt, categories } => f.write_str(&render(prompt, categories)),
        }
    }
}

fn serialize_categories<S: serde::Serializer>(
    ids: &[CategoryId],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let catalog = Catalog::builtin();
    let categories: Vec<&Category> = ids.iter().map(|id| catalog.category(*id)).collect();
    categories.serialize(serializer)
}

/// Answer a prompt with the matching timetables.
///
/// Blank input yields [`EMPTY_PROMPT_MESSAGE`]. Any other input is
/// classified as-is and echoed untrimmed in the report header. Pure and
/// deterministic.
pub fn respond(prompt: &str) -> String {
    Reply::for_prompt(prompt).to_string()
}
