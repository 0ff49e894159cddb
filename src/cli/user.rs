//! User CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::services::UserService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user (seeds the default categories)
    Add {
        /// Login name
        username: String,
    },

    /// List all users
    List,

    /// Delete a user and everything they own
    Remove {
        /// Login name
        username: String,
    },
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: UserCommands,
) -> FintrackResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::Add { username } => {
            let user = service.register(&username)?;
            println!("Created user: {}", user.username);
            println!("  ID: {}", user.id);

            // First user becomes the default so later commands work bare
            if settings.default_user.is_none() {
                settings.default_user = Some(user.username.clone());
                settings.save(storage.paths())?;
                println!("  Set as default user");
            }
        }

        UserCommands::List => {
            let users = service.list_users()?;
            if users.is_empty() {
                println!("No users found.");
            } else {
                for user in users {
                    println!("{}  [{}]", user.username, user.id);
                }
            }
        }

        UserCommands::Remove { username } => {
            let user = service
                .find_user(&username)?
                .ok_or_else(|| FintrackError::user_not_found(&username))?;
            service.delete_user(user.id)?;
            println!("Deleted user: {}", username);

            if settings.default_user.as_deref() == Some(username.as_str()) {
                settings.default_user = None;
                settings.save(storage.paths())?;
            }
        }
    }

    Ok(())
}
