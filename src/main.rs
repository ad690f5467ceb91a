use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ledgerlite::cli::{
    handle_add, handle_delete, handle_export, handle_list, handle_report, handle_search,
    handle_summary, run_menu, AddArgs,
};
use ledgerlite::config::{paths::LedgerPaths, settings::Settings};
use ledgerlite::storage::Ledger;

#[derive(Parser)]
#[command(
    name = "ledgerlite",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "LedgerLite records monetary transactions in a flat text file \
                  and offers search and aggregate reporting over them. Run \
                  'ledgerlite menu' for the interactive menu, or use the \
                  subcommands directly."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new transaction
    Add(AddArgs),

    /// List all transactions
    List,

    /// Search transactions by exact category or date, or description keyword
    Search {
        /// Keyword to search for
        keyword: String,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: u32,
    },

    /// Show the income/expense/net balance summary
    Summary,

    /// Show per-category totals
    Report,

    /// Export the ledger as quoted CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch the interactive menu
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Populate the store from the persistence file
    let mut ledger = Ledger::open(paths.ledger_file(&settings.ledger_file))?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut ledger, &settings, args)?,
        Some(Commands::List) => handle_list(&ledger),
        Some(Commands::Search { keyword }) => handle_search(&ledger, &keyword),
        Some(Commands::Delete { id }) => handle_delete(&mut ledger, id)?,
        Some(Commands::Summary) => handle_summary(&ledger),
        Some(Commands::Report) => handle_report(&ledger),
        Some(Commands::Export { output }) => handle_export(&ledger, output.as_deref())?,
        Some(Commands::Menu) => run_menu(&mut ledger, &settings)?,
        Some(Commands::Config) => {
            println!("LedgerLite Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Ledger file:    {}", ledger.path().display());
            println!();
            println!("Settings:");
            println!("  Date format: {}", settings.date_format);
            println!("  Ledger file name: {}", settings.ledger_file);
        }
        None => {
            println!("LedgerLite - personal finance ledger for the terminal");
            println!();
            println!("Run 'ledgerlite --help' for usage information.");
            println!("Run 'ledgerlite menu' for the interactive menu.");
        }
    }

    Ok(())
}
