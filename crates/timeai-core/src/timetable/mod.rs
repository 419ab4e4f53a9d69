mod assistant;
mod catalog;
mod category;
mod classifier;
mod formatter;
mod slot;

pub use assistant::{
    respond, welcome_text, Reply, DEFAULT_PROMPT, EMPTY_PROMPT_MESSAGE, EXAMPLE_PROMPTS,
};
pub use catalog::Catalog;
pub use category::{Category, CategoryId};
pub use classifier::{classify, explain, Classification, EVERYONE_KEYWORDS};
pub use formatter::{render, render_section, render_with, REPORT_BANNER, TIP_LINE};
pub use slot::{parse_hhmm, TimeSlot};
