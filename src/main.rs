use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_saver::cli::{
    handle_audit_command, handle_dashboard_command, handle_entry_command, handle_goal_command,
    handle_report_command, handle_statement_command, DashboardArgs, EntryCommands, GoalCommands,
    ReportCommands, StatementArgs,
};
use expense_saver::config::{paths::SaverPaths, settings::Settings};
use expense_saver::storage::Storage;
use expense_saver::SaverError;

#[derive(Parser)]
#[command(
    name = "saver",
    version,
    about = "Track expenses and savings from the terminal",
    long_about = "Expense Saver records expenses and savings, summarizes them by \
                  month or year, and exports PDF or CSV statements."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense and saving entries
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Savings goals
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Totals and category amounts, optionally filtered
    Dashboard(DashboardArgs),

    /// Breakdowns, trends and charts for a period
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export a PDF or CSV statement for a period
    Statement(StatementArgs),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn run(command: Commands, paths: SaverPaths, settings: Settings) -> Result<(), SaverError> {
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match command {
        Commands::Entry(cmd) => handle_entry_command(&storage, &settings, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(&storage, &settings, cmd)?,
        Commands::Dashboard(args) => handle_dashboard_command(&storage, &settings, args)?,
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Statement(args) => handle_statement_command(&storage, &settings, args)?,
        Commands::Audit { limit } => handle_audit_command(&storage, limit)?,
        Commands::Init => {
            if storage.is_initialized() {
                println!(
                    "Expense Saver is already initialized at: {}",
                    paths.base_dir().display()
                );
                return Ok(());
            }
            println!("Initializing Expense Saver at: {}", paths.base_dir().display());
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'saver entry add expense 250 --category Food' to record an expense.");
        }
        Commands::Config => {
            println!("Expense Saver Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  UTC offset:      {}", settings.utc_offset());
            println!("  Statement title: {}", settings.statement_title);
            println!("  List limit:      {}", settings.list_limit);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Expense Saver - track expenses and savings");
        println!();
        println!("Run 'saver --help' for usage information.");
        return Ok(());
    };

    let paths = SaverPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(err) = run(command, paths, settings) {
        eprintln!("Error: {}", err.user_message());
        std::process::exit(1);
    }

    Ok(())
}
