//! Hit list output
//!
//! Tab-separated rows (one hit per line) or the full response as JSON,
//! written to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::search::SearchResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}

pub fn write_response(
    response: &SearchResponse,
    format: OutputFormat,
    out_path: Option<&PathBuf>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = out_path {
        Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };

    match format {
        OutputFormat::Tsv => write_tsv(response, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, response).context("serializing response")?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

fn write_tsv(response: &SearchResponse, writer: &mut dyn Write) -> Result<()> {
    for hit in &response.hits {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{:.1}\t{:.1}\t{:.2}\t{}\t{:.2e}\t{}",
            hit.id,
            hit.accession,
            hit.description,
            hit.organism,
            hit.tags.join("+"),
            hit.raw_score,
            hit.query_coverage_pct,
            hit.percent_identity,
            hit.alignment_length,
            hit.e_value,
            if hit.has_structure { "structure" } else { "-" },
        )?;
    }
    Ok(())
}
