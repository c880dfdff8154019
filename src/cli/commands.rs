use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tickwatch",
    about = "Intraday cheap-entry alerting for low-priced TWSE equities"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline for the current time regime
    Run {
        /// Manual (on-demand) run: also report observed, non-triggered symbols
        #[arg(long)]
        manual: bool,
    },
    /// Print today's selected watchlist as JSON
    Watchlist,
    /// Print the overnight proxy move in percent
    Overnight,
}
