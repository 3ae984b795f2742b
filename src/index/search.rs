//! Pattern search over the sorted suffix index.
//!
//! A binary search locates one suffix carrying the pattern as a prefix,
//! then the scan widens to both neighbors: every suffix sharing an m-byte
//! prefix occupies a contiguous run of the sorted array, so walking outward
//! from any hit recovers the complete occurrence set.

use super::builder::SuffixIndex;
use super::types::SuffixOffset;
use std::cmp::Ordering;
use thiserror::Error;

/// Rejected search calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The empty pattern would vacuously match at every position; callers
    /// must pass at least one byte.
    #[error("search pattern must not be empty")]
    EmptyPattern,
}

impl SuffixIndex<'_> {
    /// All start offsets where `pattern` occurs in the sequence.
    ///
    /// A hit at offset `p` means the `m` pattern bytes equal
    /// `sequence[p..p + m]`, with `p + m` within the valid length; matches
    /// never extend into padding. Offsets are reported in the order the
    /// outward scan discovers them; callers needing a stable order should
    /// sort. Repeated calls with the same pattern return the same set.
    pub fn search(&self, pattern: &[u8]) -> Result<Vec<SuffixOffset>, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }

        let mut hits = Vec::new();
        let Some(mid) = self.find_any(pattern) else {
            return Ok(hits);
        };

        let offsets = self.offsets();
        hits.push(offsets[mid]);
        hits.extend(
            offsets[..mid]
                .iter()
                .rev()
                .take_while(|&&off| self.suffix(off).starts_with(pattern)),
        );
        hits.extend(
            offsets[mid + 1..]
                .iter()
                .take_while(|&&off| self.suffix(off).starts_with(pattern)),
        );

        Ok(hits)
    }

    /// Whether `pattern` occurs at least once.
    pub fn contains(&self, pattern: &[u8]) -> Result<bool, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        Ok(self.find_any(pattern).is_some())
    }

    /// Binary-search for any array position whose suffix starts with
    /// `pattern`. Which member of the matching run is returned is
    /// unspecified; the outward scan in [`search`](SuffixIndex::search)
    /// recovers the rest.
    fn find_any(&self, pattern: &[u8]) -> Option<usize> {
        let offsets = self.offsets();
        let mut lo = 0usize;
        let mut hi = offsets.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match compare_prefix(self.suffix(offsets[mid]), pattern) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }

        None
    }
}

/// Order a suffix against the pattern, treating a pattern-prefixed suffix
/// as equal.
///
/// Only the first `pattern.len()` bytes of the suffix participate. A suffix
/// that runs out of valid bytes before covering the pattern is smaller,
/// mirroring the truncation rule the index was sorted under.
fn compare_prefix(suffix: &[u8], pattern: &[u8]) -> Ordering {
    if suffix.len() >= pattern.len() {
        suffix[..pattern.len()].cmp(pattern)
    } else {
        match suffix.cmp(&pattern[..suffix.len()]) {
            Ordering::Equal => Ordering::Less,
            ord => ord,
        }
    }
}
