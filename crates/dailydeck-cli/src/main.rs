use clap::{Parser, Subcommand};
use dailydeck_core::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dailydeck-cli", version, about = "Dailydeck CLI")]
struct Cli {
    /// Log filter (trace, debug, info, warn, error). Overrides RUST_LOG
    /// and `logging.level`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit tracking
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// To-do list
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Notes board
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Dark/light theme
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Sidebar collapse state
    Sidebar {
        #[command(subcommand)]
        action: commands::sidebar::SidebarAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(cli_level: Option<&str>, config: &Config) {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.logging.level)),
    }
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(cli.log_level.as_deref(), &config);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "using default config");
    }

    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action, &config),
        Commands::Todo { action } => commands::todo::run(action, &config),
        Commands::Note { action } => commands::note::run(action, &config),
        Commands::Theme { action } => commands::theme::run(action, &config),
        Commands::Sidebar { action } => commands::sidebar::run(action, &config),
        Commands::Config { action } => commands::config::run(action, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
