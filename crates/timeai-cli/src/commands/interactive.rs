//! Prompt loop standing in for the desktop search box.

use std::io::{self, BufRead, Write};

use timeai_core::error::Result;
use timeai_core::{respond, welcome_text, Config};

const EXIT_WORDS: &[&str] = &["quit", "exit"];

/// `examples`: print the suggested prompts.
pub fn examples() -> Result<()> {
    print!("{}", welcome_text());
    Ok(())
}

pub fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_loop(stdin.lock(), stdout.lock(), config.assistant.show_examples)?;
    Ok(())
}

/// Answer each input line until EOF or an exit word.
///
/// Lines are trimmed before answering, as the search box did.
pub fn prompt_loop<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    show_examples: bool,
) -> io::Result<()> {
    if show_examples {
        writeln!(output, "{}", welcome_text())?;
    }

    for line in input.lines() {
        let line = line?;
        let prompt = line.trim();
        if EXIT_WORDS.contains(&prompt.to_lowercase().as_str()) {
            tracing::debug!("exit requested");
            break;
        }

        writeln!(output, "{}", respond(prompt))?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}
