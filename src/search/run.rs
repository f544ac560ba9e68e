//! CLI driver for the search subcommand

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashSet;

use crate::corpus::{fasta, MemoryCorpus};
use crate::report;
use crate::sequence;

use super::args::SearchArgs;
use super::engine::{SearchOrchestrator, SearchRequest};

pub fn run(args: SearchArgs) -> Result<()> {
    let num_threads = if args.threads == 0 {
        num_cpus::get()
    } else {
        args.threads
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("failed to build thread pool")?;

    let query_text = read_query(&args.query)?;
    if args.verbose {
        let info = sequence::query_info(&query_text);
        eprintln!("[INFO] query: {} residues ({})", info.length, info.preview);
    }

    let records = fasta::load_fasta(&args.corpus)
        .with_context(|| format!("loading corpus {}", args.corpus.display()))?;
    if args.verbose {
        eprintln!("[INFO] corpus: {} records", records.len());
    }
    let corpus = MemoryCorpus::new(records);
    let orchestrator = SearchOrchestrator::new(&corpus);

    let request = SearchRequest {
        query_text,
        category_filter: if args.tags.is_empty() {
            None
        } else {
            Some(args.tags.iter().cloned().collect::<FxHashSet<String>>())
        },
        require_structure: args.require_structure,
        identity_threshold: args.identity_threshold,
        max_results: args.max_results,
        deadline: args.deadline_ms.map(Duration::from_millis),
    };

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] aligning query against corpus...")
            .unwrap(),
    );
    bar.enable_steady_tick(Duration::from_millis(100));

    let response = orchestrator.search(&request);
    bar.finish_and_clear();
    let response = response?;

    if args.verbose {
        eprintln!(
            "[INFO] {} hits in {:.1}ms ({} of {} records aligned{})",
            response.hits.len(),
            response.elapsed_ms,
            response.filtered_corpus_count,
            response.total_corpus_count,
            if response.partial { ", partial" } else { "" },
        );
    }

    report::write_response(&response, args.format, args.out.as_ref())?;
    Ok(())
}

/// Read the query from a file or stdin ('-').
fn read_query(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading query from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading query file {source}"))
    }
}
