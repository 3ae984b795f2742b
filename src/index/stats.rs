//! Sequence and index statistics for the `stats` subcommand.

use super::builder::SuffixIndex;
use super::types::{IndexSummary, ResidueCount};
use crate::sequence::SequenceStore;
use anyhow::Result;

/// Collect summary statistics for a loaded sequence and its index.
pub fn summarize(store: &SequenceStore, index: &SuffixIndex, case_folded: bool) -> IndexSummary {
    let mut histogram = [0u64; 256];
    for &b in store.bytes() {
        histogram[b as usize] += 1;
    }

    let mut residues: Vec<ResidueCount> = histogram
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(byte, &count)| ResidueCount {
            residue: byte as u8 as char,
            count,
        })
        .collect();
    residues.sort_by(|a, b| b.count.cmp(&a.count));

    IndexSummary {
        sequence_len: store.valid_len() as u64,
        buffer_capacity: store.capacity() as u64,
        suffix_count: index.len() as u64,
        case_folded,
        residues,
    }
}

/// Display index statistics, human-readable or as JSON.
pub fn show_stats(summary: &IndexSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("Sequence Statistics");
    println!("===================");
    println!();
    println!("Sequence length:  {}", summary.sequence_len);
    println!("Buffer capacity:  {}", summary.buffer_capacity);
    println!("Suffix count:     {}", summary.suffix_count);
    println!("Case-folded:      {}", summary.case_folded);

    println!();
    println!("Residues:");
    for rc in summary.residues.iter().take(15) {
        println!("  {:<6} {}", printable(rc.residue), rc.count);
    }
    if summary.residues.len() > 15 {
        println!("  ... and {} more", summary.residues.len() - 15);
    }

    Ok(())
}

fn printable(c: char) -> String {
    if c.is_ascii_graphic() {
        c.to_string()
    } else {
        format!("0x{:02X}", c as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_counts_residues() {
        let store = SequenceStore::new(b"AAGT".to_vec(), 4);
        let index = SuffixIndex::build(&store);
        let summary = summarize(&store, &index, false);

        assert_eq!(summary.sequence_len, 4);
        assert_eq!(summary.suffix_count, 4);
        assert_eq!(summary.residues[0].residue, 'A');
        assert_eq!(summary.residues[0].count, 2);
        assert_eq!(summary.residues.len(), 3);
    }

    #[test]
    fn test_summary_serializes() {
        let store = SequenceStore::new(b"ACGT".to_vec(), 4);
        let index = SuffixIndex::build(&store);
        let summary = summarize(&store, &index, true);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"suffix_count\":4"));
        assert!(json.contains("\"case_folded\":true"));
    }
}
