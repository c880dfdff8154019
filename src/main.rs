use clap::Parser;
use tickwatch::cli::commands::{Cli, Commands};
use tickwatch::config::AppConfig;
use tickwatch::Tickwatch;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    let tw = match Tickwatch::new(config) {
        Ok(tw) => tw,
        Err(e) => {
            eprintln!("Error initializing tickwatch: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(tw, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(tw: Tickwatch, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Run { manual } => {
            let report = tw.run(chrono::Utc::now(), manual).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Watchlist => {
            let watchlist = tw.watchlist().await;
            println!("{}", serde_json::to_string_pretty(&watchlist)?);
        }
        Commands::Overnight => {
            let pct = tw.overnight_move().await;
            println!("{pct:+.2}%");
        }
    }
    Ok(())
}
