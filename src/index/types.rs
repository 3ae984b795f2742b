//! Types for the suffix index.

use serde::{Deserialize, Serialize};

/// Suffix start offset into the valid sequence prefix.
pub type SuffixOffset = u32;

/// Above this many suffixes, construction sorts in parallel.
pub(crate) const PARALLEL_SORT_THRESHOLD: usize = 100_000;

/// Bytes of suffix shown per line in the diagnostic listing.
pub const PREVIEW_LEN: usize = 50;

/// Summary of a loaded sequence and its index, for `stats` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSummary {
    /// Bytes in the valid sequence prefix
    pub sequence_len: u64,
    /// Buffer capacity allocated by the loader
    pub buffer_capacity: u64,
    /// Number of indexed suffixes (equals `sequence_len`)
    pub suffix_count: u64,
    /// Whether the sequence was case-folded at load
    pub case_folded: bool,
    /// Residue counts, most frequent first
    pub residues: Vec<ResidueCount>,
}

/// Occurrences of one residue (byte value) in the sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidueCount {
    pub residue: char,
    pub count: u64,
}
