//! Shared fixtures for scenario tests

use enzseek::corpus::{MemoryCorpus, SeqRecord};

/// Reference sequence for catalog entry X0001 (146 residues).
pub const X0001_RESIDUES: &str = "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQFEVVHSLAKWKRQTLGQHDFSAGEGLYTHMKALRPDEDRLSPLHSVYVDQWDWELVMGDRDRQPSHSGPAFPPTHANRGH";

pub fn make_record(id: &str, tags: &[&str], has_structure: bool, residues: &str) -> SeqRecord {
    SeqRecord {
        id: id.to_string(),
        accession: format!("ACC-{id}"),
        name: format!("enzyme {id}"),
        organism: "Ideonella sakaiensis".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        residues: residues.to_string(),
        has_structure,
    }
}

pub fn make_corpus(records: Vec<SeqRecord>) -> MemoryCorpus {
    MemoryCorpus::new(records)
}

/// A substitution partner with a positive BLOSUM62 score, so swapping it in
/// changes identity without perturbing the alignment path.
fn conservative_partner(c: char) -> Option<char> {
    match c {
        'K' => Some('R'),
        'R' => Some('K'),
        'L' => Some('I'),
        'I' => Some('V'),
        'V' => Some('I'),
        'Y' => Some('F'),
        'F' => Some('Y'),
        'E' => Some('D'),
        'D' => Some('E'),
        'Q' => Some('E'),
        'M' => Some('L'),
        'S' => Some('T'),
        'T' => Some('S'),
        'W' => Some('Y'),
        'H' => Some('Y'),
        _ => None,
    }
}

/// Replace exactly `count` residues with conservative partners, left to
/// right. Panics if the sequence does not offer enough substitutable
/// positions; fixtures must be chosen so it does.
pub fn substitute_conservative(seq: &str, count: usize) -> String {
    let mut remaining = count;
    let out: String = seq
        .chars()
        .map(|c| {
            if remaining > 0 {
                if let Some(partner) = conservative_partner(c) {
                    remaining -= 1;
                    return partner;
                }
            }
            c
        })
        .collect();
    assert_eq!(remaining, 0, "fixture too short for {count} substitutions");
    out
}

pub fn assert_approx_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "values not approximately equal: {a} vs {b} (epsilon {epsilon})"
    );
}
