//! `ask`: answer one prompt.

use clap::Args;
use timeai_core::error::Result;
use timeai_core::{Config, Reply};

use super::{join_prompt, OutputArgs};

#[derive(Args)]
pub struct AskArgs {
    /// Prompt text; words are joined with spaces. Defaults to the configured prompt.
    pub prompt: Vec<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: AskArgs, config: &Config) -> Result<()> {
    let prompt = if args.prompt.is_empty() {
        config.default_prompt().to_string()
    } else {
        join_prompt(&args.prompt)
    };
    tracing::debug!(%prompt, "answering prompt");

    let reply = Reply::for_prompt(&prompt);
    if args.output.wants_json(config) {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        println!("{reply}");
    }
    Ok(())
}
