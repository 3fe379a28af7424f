use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use contact_book::cli::{handle_export, handle_import, Assistant, ExportFormat};
use contact_book::config::{paths::ContactPaths, settings::Settings};
use contact_book::display::{format_audit_history, format_upcoming_birthdays};
use contact_book::services::ContactService;
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    author = "Kaylee Beyene",
    version,
    about = "Terminal contact book with birthday reminders",
    long_about = "An interactive assistant that keeps names, phone numbers and \
                  birthdays, and tells you whose birthday to celebrate in the \
                  coming days. Run without a subcommand to start the assistant."
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant (default)
    #[command(alias = "repl")]
    Chat,

    /// List birthdays to congratulate soon
    Birthdays {
        /// Days ahead to look (defaults to the configured window)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Export the address book
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge contacts from a JSON or YAML export
    Import {
        /// Path to the export file (.json, .yaml or .yml)
        file: PathBuf,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = ContactPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);
    storage.load()?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Assistant::new(&mut storage, &settings).run(stdin.lock(), &mut stdout)?;
        }
        Commands::Birthdays { days } => {
            let window_days = days.unwrap_or(settings.birthday_window_days);
            let service = ContactService::new(&mut storage);
            let upcoming = service.upcoming_birthdays(Local::now().date_naive(), window_days);
            println!("{}", format_upcoming_birthdays(&upcoming));
        }
        Commands::Export { format, output } => {
            handle_export(&storage, format, output)?;
        }
        Commands::Import { file } => {
            let (created, replaced) = handle_import(&mut storage, &file)?;
            println!(
                "Imported {} contacts ({} new, {} replaced)",
                created + replaced,
                created,
                replaced
            );
        }
        Commands::History { limit } => match storage.audit() {
            Some(audit) => println!("{}", format_audit_history(&audit.read_recent(limit)?)),
            None => println!("Audit logging is disabled."),
        },
        Commands::Config => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Address book file: {}", paths.address_book_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Birthday window (days): {}", settings.birthday_window_days);
            println!("  Audit enabled:          {}", settings.audit_enabled);
        }
    }

    Ok(())
}
