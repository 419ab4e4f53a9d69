pub mod ask;
pub mod category;
pub mod classify;
pub mod config;
pub mod interactive;

use clap::Args;
use timeai_core::Config;

/// Join trailing words into one prompt, as typed.
pub(crate) fn join_prompt(words: &[String]) -> String {
    words.join(" ")
}

/// `--json` / `--no-json` override of the configured `output.json`.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Print as JSON
    #[arg(long, conflicts_with = "no_json")]
    pub json: bool,
    /// Print as text even when `output.json` is set
    #[arg(long)]
    pub no_json: bool,
}

impl OutputArgs {
    pub fn wants_json(&self, config: &Config) -> bool {
        if self.no_json {
            false
        } else {
            self.json || config.output.json
        }
    }
}
