//! Goal CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_naive_date};
use crate::display::format_goal_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::User;
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount (e.g., "500")
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Update a goal's progress, target, or deadline
    Update {
        /// Goal name or ID
        goal: String,
        /// New saved amount
        #[arg(long)]
        current: Option<String>,
        /// New target amount
        #[arg(long)]
        target: Option<String>,
        /// New deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// List goals with progress
    List,
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, user: &User, cmd: GoalCommands) -> FintrackResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let target = parse_amount(&target)?;
            let deadline = deadline.as_deref().map(parse_naive_date).transpose()?;

            let goal = service.add_goal(user.id, &name, target, deadline)?;
            println!("Created goal: {}", goal.name);
            println!("  Target: {}", goal.target_amount);
            println!("  ID: {}", goal.id);
        }

        GoalCommands::Update {
            goal,
            current,
            target,
            deadline,
        } => {
            let found = service
                .find_goal(user.id, &goal)?
                .ok_or_else(|| FintrackError::goal_not_found(&goal))?;

            let current = current.as_deref().map(parse_amount).transpose()?;
            let target = target.as_deref().map(parse_amount).transpose()?;
            let deadline = deadline.as_deref().map(parse_naive_date).transpose()?;

            let updated = service.update_goal(user.id, found.id, current, target, deadline)?;
            println!(
                "Updated goal: {} ({:.1}% of {})",
                updated.name,
                updated.progress_percent(),
                updated.target_amount
            );
        }

        GoalCommands::List => {
            let goals = service.list_goals(user.id)?;
            print!("{}", format_goal_list(&goals));
        }
    }

    Ok(())
}
