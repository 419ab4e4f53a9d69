//! Built-in timetable browsing commands.

use clap::Subcommand;
use timeai_core::error::Result;
use timeai_core::{render_section, Catalog, CategoryId, Config};

use super::OutputArgs;

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List all categories
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show one category's timetable
    Show {
        /// Category (housewife, employee, mechanic)
        id: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

pub fn run(action: CategoryAction, config: &Config) -> Result<()> {
    let catalog = Catalog::builtin();

    match action {
        CategoryAction::List { output } => {
            if output.wants_json(config) {
                println!("{}", serde_json::to_string_pretty(catalog.categories())?);
                return Ok(());
            }
            for category in catalog.categories() {
                println!(
                    "  {:<10} {} ({} slots)",
                    category.id.slug(),
                    category.title,
                    category.slots.len()
                );
            }
        }
        CategoryAction::Show { id, output } => {
            let id: CategoryId = id.parse()?;
            let category = catalog.category(id);
            if output.wants_json(config) {
                println!("{}", serde_json::to_string_pretty(category)?);
            } else {
                print!("{}", render_section(category));
            }
        }
    }
    Ok(())
}
