use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "habitpro-cli", version, about = "HabitPro CLI")]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Dashboard statistics and chart data
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Reminders for habits not done today
    Remind {
        #[command(subcommand)]
        action: commands::remind::RemindAction,
    },
    /// Notification permission
    Notify {
        #[command(subcommand)]
        action: commands::notify::NotifyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a motivational quote
    Quote,
    /// Switch between dark and light mode
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    habitpro_core::habit::parse_date(raw).ok_or_else(|| format!("invalid date '{raw}'"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HABITPRO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(habitpro_core::today);
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action, today),
        Commands::Stats { action } => commands::stats::run(action, today),
        Commands::Remind { action } => commands::remind::run(action, cli.today),
        Commands::Notify { action } => commands::notify::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Quote => commands::quote::run(),
        Commands::Theme { action } => commands::theme::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
