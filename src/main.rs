use anyhow::Result;
use clap::{Parser, Subcommand};
use enzseek::search;

#[derive(Parser)]
#[command(name = "enzseek")]
#[command(version = "0.1.0")]
#[command(about = "Local alignment search over a plastic-degrading enzyme corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smith-Waterman search of a protein query against the corpus
    Search(search::SearchArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            search::run(args)?;
        }
    }
    Ok(())
}
