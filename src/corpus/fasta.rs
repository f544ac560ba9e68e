//! Annotated FASTA corpus loading
//!
//! The CLI keeps its reference catalog in a FASTA file whose headers carry
//! the record metadata as pipe-separated fields:
//!
//! ```text
//! >X0001|GAP38373.1|PETase|Ideonella sakaiensis|PET+MHET|structure
//! MKTAYIAKQR...
//! ```
//!
//! Fields after the id are optional; tags are `+`-separated and the last
//! field marks structure availability.

use std::path::Path;

use bio::io::fasta;

use super::{CorpusError, SeqRecord};

/// Load all records from an annotated FASTA file.
pub fn load_fasta(path: &Path) -> Result<Vec<SeqRecord>, CorpusError> {
    let reader = fasta::Reader::from_file(path)
        .map_err(|e| CorpusError::Unavailable(format!("{}: {e}", path.display())))?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let header = match record.desc() {
            Some(desc) => format!("{} {desc}", record.id()),
            None => record.id().to_string(),
        };
        let residues = String::from_utf8_lossy(record.seq()).trim().to_string();
        if residues.is_empty() {
            return Err(CorpusError::Malformed {
                id: record.id().to_string(),
                reason: "empty sequence body".to_string(),
            });
        }
        records.push(parse_header(&header, residues));
    }
    Ok(records)
}

/// Split a pipe-separated header into record metadata.
fn parse_header(header: &str, residues: String) -> SeqRecord {
    let mut fields = header.split('|').map(str::trim);
    let id = fields.next().unwrap_or_default().to_string();
    let accession = fields
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| id.clone());
    let name = fields
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown")
        .to_string();
    let organism = fields
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown")
        .to_string();
    let tags: Vec<String> = fields
        .next()
        .map(|f| {
            f.split('+')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let has_structure = matches!(
        fields.next().map(|s| s.to_ascii_lowercase()).as_deref(),
        Some("structure") | Some("yes") | Some("true") | Some("1")
    );

    SeqRecord {
        id,
        accession,
        name,
        organism,
        tags,
        residues,
        has_structure,
    }
}
