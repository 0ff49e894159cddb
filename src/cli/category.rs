//! Category CLI commands

use clap::Subcommand;

use super::KindArg;
use crate::display::format_category_list;
use crate::error::FintrackResult;
use crate::models::User;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Income or expense
        #[arg(short, long, value_enum)]
        kind: KindArg,
    },

    /// List categories
    List {
        /// Restrict to income or expense categories
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    user: &User,
    cmd: CategoryCommands,
) -> FintrackResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add { name, kind } => {
            let category = service.add_category(user.id, &name, kind.into())?;
            println!("Created category: {}", category);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List { kind } => {
            let categories = service.list_categories(user.id, kind.map(Into::into))?;
            print!("{}", format_category_list(&categories));
        }
    }

    Ok(())
}
