use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use kakeibo::cli::{
    handle_add_command, handle_categories_command, handle_dashboard_command,
    handle_transactions_command, AddArgs, DashboardArgs, TransactionsArgs,
};
use kakeibo::config::{paths::DATA_DIR_ENV, KakeiboPaths, Settings};

#[derive(Parser)]
#[command(
    name = "kakeibo",
    author = "Kaylee Beyene",
    version,
    about = "Budget analytics for a month of expenses",
    long_about = "Kakeibo derives a budget dashboard from a month of expenses: \
                  spending per category, goal progress, a balance forecast, \
                  a budget health score and one piece of advice."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding config.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the budget dashboard
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Record an expense and show the refreshed score
    Add(AddArgs),

    /// List transactions
    #[command(alias = "txn")]
    Transactions(TransactionsArgs),

    /// List categories and goal groups
    Categories,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(verbosity(cli.verbose));

    let paths = match cli.data_dir {
        Some(dir) => KakeiboPaths::with_base_dir(dir),
        None => KakeiboPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "Loaded settings");

    match cli.command {
        Some(Commands::Dashboard(args)) => handle_dashboard_command(&settings, args)?,
        Some(Commands::Add(args)) => handle_add_command(&settings, args)?,
        Some(Commands::Transactions(args)) => handle_transactions_command(&settings, args)?,
        Some(Commands::Categories) => handle_categories_command(&settings)?,
        Some(Commands::Init) => {
            println!("Initializing Kakeibo at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Edit the 'period' section to match your budget month.");
        }
        Some(Commands::Config) => {
            let period = &settings.period;
            println!("Kakeibo Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Highlight count:  {}", settings.highlight_count);
            println!(
                "  Starting balance: {}",
                period.starting_balance.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Elapsed days:     {}", period.elapsed_days);
            println!("  Remaining days:   {}", period.remaining_days);
        }
        None => handle_dashboard_command(&settings, DashboardArgs::default())?,
    }

    Ok(())
}

fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber; `RUST_LOG` wins over `-v` when set
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
