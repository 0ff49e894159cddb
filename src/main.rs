use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_category_command, handle_goal_command, handle_report_command,
    handle_transaction_command, handle_user_command, resolve_user, CategoryCommands, GoalCommands,
    ReportCommands, TransactionCommands, UserCommands,
};
use fintrack::config::{paths::FintrackPaths, Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker for the command line",
    long_about = "fintrack keeps a per-user ledger of categorized income and \
                  expense transactions, produces monthly and yearly summaries, \
                  and tracks progress toward savings goals."
)]
struct Cli {
    /// Act as this user (defaults to the configured default user)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Summary reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;
    let mut settings = Settings::load_or_create(storage.paths())?;

    match cli.command {
        Commands::User(cmd) => handle_user_command(&storage, &mut settings, cmd)?,

        Commands::Category(cmd) => {
            let user = resolve_user(&storage, &settings, cli.user.as_deref())?;
            handle_category_command(&storage, &user, cmd)?;
        }

        Commands::Transaction(cmd) => {
            let user = resolve_user(&storage, &settings, cli.user.as_deref())?;
            handle_transaction_command(&storage, &user, cmd)?;
        }

        Commands::Goal(cmd) => {
            let user = resolve_user(&storage, &settings, cli.user.as_deref())?;
            handle_goal_command(&storage, &user, cmd)?;
        }

        Commands::Report(cmd) => {
            let user = resolve_user(&storage, &settings, cli.user.as_deref())?;
            handle_report_command(&storage, &user, cmd)?;
        }

        Commands::Config => {
            let paths = storage.paths();
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            match &settings.default_user {
                Some(username) => println!("Default user:   {}", username),
                None => println!("Default user:   (not set)"),
            }
        }
    }

    Ok(())
}
