//! CLI arguments for the search subcommand
//!
//! Boundary validation lives here: the identity threshold must fall in
//! [0, 100] and the result cap must be at least 1 before a request reaches
//! the engine.

use std::path::PathBuf;

use clap::Args;

use crate::report::OutputFormat;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query sequence: path to a FASTA/raw text file, or '-' for stdin
    #[arg(short, long)]
    pub query: String,

    /// Annotated corpus FASTA file
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Restrict the corpus to records carrying any of these category tags
    /// (comma-separated, e.g. PET,PU)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Only align against records with a resolved structure
    #[arg(long)]
    pub require_structure: bool,

    /// Minimum percent identity a hit must reach, 0-100
    #[arg(long, default_value_t = 30.0, value_parser = parse_identity_threshold)]
    pub identity_threshold: f64,

    /// Maximum number of hits to return (at least 1)
    #[arg(long, default_value_t = 100, value_parser = parse_max_results)]
    pub max_results: usize,

    /// Abort the alignment phase after this many milliseconds and return
    /// partial results
    #[arg(long)]
    pub deadline_ms: Option<u64>,

    /// Number of worker threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print corpus and timing diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_identity_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("identity threshold {value} outside 0-100"));
    }
    Ok(value)
}

fn parse_max_results(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a positive integer"))?;
    if value == 0 {
        return Err("max results must be at least 1".to_string());
    }
    Ok(value)
}
