use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use timeai_core::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "timeai-cli", version, about = "TimeAI timetable assistant CLI")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for a timetable
    Ask(commands::ask::AskArgs),
    /// Show which categories a prompt selects
    Classify(commands::classify::ClassifyArgs),
    /// Browse the built-in timetables
    Category {
        #[command(subcommand)]
        action: commands::category::CategoryAction,
    },
    /// Print example prompts
    Examples,
    /// Read prompts from stdin and answer each one
    Interactive,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    logging::init(cli.verbose, &config.logging.level);

    let result = match cli.command {
        Commands::Ask(args) => commands::ask::run(args, &config),
        Commands::Classify(args) => commands::classify::run(args, &config),
        Commands::Category { action } => commands::category::run(action, &config),
        Commands::Examples => commands::interactive::examples(),
        Commands::Interactive => commands::interactive::run(&config),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut stdout = std::io::stdout();
            clap_complete::generate(shell, &mut Cli::command(), "timeai-cli", &mut stdout);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
