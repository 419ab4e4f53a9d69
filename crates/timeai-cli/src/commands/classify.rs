//! `classify`: show the categories a prompt resolves to.

use clap::Args;
use timeai_core::error::Result;
use timeai_core::{explain, Config, ValidationError};

use super::{join_prompt, OutputArgs};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Prompt text; words are joined with spaces
    #[arg(required = true)]
    pub prompt: Vec<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: ClassifyArgs, config: &Config) -> Result<()> {
    let prompt = join_prompt(&args.prompt);
    if prompt.trim().is_empty() {
        return Err(ValidationError::EmptyPrompt.into());
    }

    let classification = explain(&prompt);
    if args.output.wants_json(config) {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    for id in &classification.categories {
        println!("{id}");
    }
    Ok(())
}
