use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scribe_ledger::ai::{GeminiClient, GenerativeModel};
use scribe_ledger::cli::{
    handle_add_command, handle_archive_command, handle_clear_command, handle_dashboard_command,
    handle_export_command, handle_recent_command, ExportFormat,
};
use scribe_ledger::config::{ScribePaths, Settings};
use scribe_ledger::storage::open_ledger;

#[derive(Parser)]
#[command(
    name = "scribe",
    version,
    about = "Conversational bookkeeping ledger for the terminal",
    long_about = "Scribe Ledger turns plain-language entries into bookkeeping \
                  records with a generative model, keeps them in a local JSON \
                  file, and summarizes where the money went."
)]
struct Cli {
    /// Gemini API key
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an entry written in plain language
    Add {
        /// The entry, e.g. "午饭吃了牛肉面 30 块"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show the most recent records
    Recent {
        /// Number of records to show
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show totals, the category breakdown and a narrative report
    #[command(alias = "dash")]
    Dashboard {
        /// Period label used in the report prompt
        #[arg(short, long)]
        period: Option<String>,

        /// Skip the narrative report
        #[arg(long)]
        no_report: bool,
    },

    /// List all records, newest first
    #[command(alias = "ls")]
    Archive {
        /// Show at most this many records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export all records
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove every record
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration and paths, creating the settings file if missing
    Config,

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,
}

fn init_logging(paths: &ScribePaths) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ScribePaths::new()?;
    paths.ensure_directories()?;
    init_logging(&paths)?;
    let settings = Settings::load_or_create(&paths)?;

    let ledger = open_ledger(&paths)?;
    let api_key = cli.api_key.as_deref();

    match cli.command {
        Some(Commands::Add { text }) => {
            handle_add_command(&ledger, &settings, api_key, &text)?;
        }
        Some(Commands::Recent { count }) => {
            handle_recent_command(&ledger, &settings, count)?;
        }
        Some(Commands::Dashboard { period, no_report }) => {
            handle_dashboard_command(&ledger, &settings, api_key, period, no_report)?;
        }
        Some(Commands::Archive { limit }) => {
            handle_archive_command(&ledger, &settings, limit)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&ledger, format, output)?;
        }
        Some(Commands::Clear { force }) => {
            handle_clear_command(&ledger, force)?;
        }
        Some(Commands::Config) => {
            // Write the defaults out so there is a file to edit
            let created = !paths.settings_file().exists();
            if created {
                settings.save(&paths)?;
            }

            println!("Scribe Ledger Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!(
                "Settings file:   {}{}",
                paths.settings_file().display(),
                if created { " (created with defaults)" } else { "" }
            );
            println!("Ledger file:     {}", paths.ledger_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:      {} ({})", settings.currency, settings.currency_symbol);
            println!("  Model:         {}", settings.model);
            println!("  API base URL:  {}", settings.api_base_url);
            println!("  Report window: {}", settings.report_window);
            println!("  Recent count:  {}", settings.recent_count);
            println!("  Report period: {}", settings.report_period);
            println!(
                "  API key:       {}",
                if api_key.map_or(false, |k| !k.trim().is_empty()) {
                    "set"
                } else {
                    "not set"
                }
            );
        }
        Some(Commands::Tui) => {
            let model: Option<Arc<dyn GenerativeModel>> =
                match GeminiClient::from_settings(&settings, api_key) {
                    Ok(client) => Some(Arc::new(client)),
                    Err(e) if e.is_config() => None,
                    Err(e) => return Err(e.into()),
                };
            scribe_ledger::tui::run_tui(&ledger, &settings, model)?;
        }
        None => {
            println!("Scribe Ledger - conversational bookkeeping");
            println!();
            println!("Run 'scribe --help' for usage information.");
            println!("Run 'scribe add <text>' to record an entry.");
            println!("Run 'scribe tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
