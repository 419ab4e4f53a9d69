//! # TimeAI Core Library
//!
//! This library turns a free-text prompt such as "Create timetable for a
//! housewife" into a canned daily timetable report. It follows a CLI-first
//! layout: the `timeai-cli` binary is a thin presentation layer over
//! [`respond`], and any other front end (GUI, HTTP handler) can call the
//! same function and display the returned text verbatim.
//!
//! ## Architecture
//!
//! - **Classifier**: keyword substring matching from a prompt to categories
//! - **Catalog**: built-in, immutable timetables per category
//! - **Formatter**: plain-text report rendering
//! - **Storage**: TOML-based configuration for the presentation layer
//!
//! ## Key Components
//!
//! - [`respond`]: the whole prompt-to-report pipeline
//! - [`Catalog`]: the shared built-in timetables
//! - [`Config`]: user preferences

pub mod error;
pub mod storage;
pub mod timetable;

pub use error::{ConfigError, CoreError, ValidationError};
pub use storage::Config;
pub use timetable::{
    classify, explain, render, render_section, respond, welcome_text, Catalog, Category,
    CategoryId, Classification, Reply, TimeSlot, DEFAULT_PROMPT, EMPTY_PROMPT_MESSAGE,
    EXAMPLE_PROMPTS, TIP_LINE,
};
