use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_chart_command, handle_export_command, handle_goal_command, handle_summary_command,
    handle_transaction_command, ExportFormat, GoalCommands, TransactionCommands,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::storage::{initialize_storage, needs_initialization, Storage};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Keyword-categorizing budget tracker for the terminal",
    long_about = "A terminal budget tracker that keeps a running ledger of income \
                  and expenses, auto-categorizes transactions from keywords in \
                  their descriptions, and measures savings goals against the \
                  current balance."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the ledger
    Init {
        /// Seed the ledger with a couple of sample entries
        #[arg(long)]
        sample: bool,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Goal management commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show income, expenses, and the current balance
    Summary,

    /// Show the running balance as a bar chart
    Chart,

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init { sample }) => {
            let fresh = needs_initialization(&paths);
            println!(
                "Initializing budget tracker at: {}",
                paths.base_dir().display()
            );
            initialize_storage(&paths, sample)?;
            settings.save(&paths)?;

            if fresh {
                println!("Initialization complete!");
                if sample {
                    println!();
                    println!("Sample entries have been recorded:");
                    println!("  - Salary    $2000.00 (income)");
                    println!("  - Groceries   $80.00 (expense)");
                    println!();
                    println!("Run 'budget summary' to see where you stand.");
                } else {
                    println!();
                    println!("Run 'budget txn add' to record your first transaction.");
                }
            } else {
                println!("Ledger already exists - nothing to do.");
            }
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Chart) => {
            handle_chart_command(&storage, &settings)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&storage, output, format, pretty)?;
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Budget Tracker - keyword-categorizing terminal ledger");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget init --sample' to start with example data.");
        }
    }

    Ok(())
}
