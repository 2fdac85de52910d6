//! Goal CLI commands
//!
//! Implements CLI commands for managing savings goals.

use std::str::FromStr;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::goal::format_goal_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{GoalId, Money};
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Target amount (e.g., "8000")
        target: String,
        /// Goal name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// List goals with progress toward the current balance
    List,
    /// Remove a goal
    Remove {
        /// Goal ID (e.g., "goal-1705312800000")
        id: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> BudgetResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add { target, name } => {
            let target = Money::parse(&target).map_err(|e| {
                BudgetError::Validation(format!(
                    "Invalid target format: '{}'. Use format like '8000' or '8000.00'. Error: {}",
                    target, e
                ))
            })?;

            match service.add(&name.join(" "), target)? {
                Some(goal) => {
                    println!("Added goal: {}", goal);
                    println!("  ID: {}", goal.id);
                }
                None => {
                    println!("Nothing added: goals need a name and a non-zero target.");
                }
            }
        }

        GoalCommands::List => {
            let goals = service.list_with_progress()?;
            print!("{}", format_goal_list(&goals, &settings.currency_symbol));
        }

        GoalCommands::Remove { id } => {
            let id = GoalId::from_str(&id)
                .map_err(|_| BudgetError::Validation(format!("Invalid goal id: '{}'", id)))?;
            service.remove(id)?;
            println!("Removed goal: {}", id);
        }
    }

    Ok(())
}
