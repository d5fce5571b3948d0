use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskpulse", version, about = "Taskpulse CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank tasks by priority, deadline, energy and mood
    Prioritize(commands::prioritize::PrioritizeArgs),
    /// Find the most productive time of day and day of week
    Analyze(commands::analyze::AnalyzeArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Prioritize(args) => commands::prioritize::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
