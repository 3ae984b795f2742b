//! Suffix index construction.
//!
//! Builds the sorted suffix array for a loaded sequence by:
//! 1. Collecting every suffix start offset `[0, n)`
//! 2. Sorting the offsets by the suffixes they point to
//!
//! The resulting order enables O(m log n) substring search.

use super::types::{PARALLEL_SORT_THRESHOLD, PREVIEW_LEN, SuffixOffset};
use crate::sequence::SequenceStore;
use rayon::prelude::*;
use std::io::{self, Write};

/// Sorted suffix offsets over a borrowed sequence.
///
/// Holds a read-only borrow of the store's valid prefix and a permutation
/// of `[0, valid_len)` ordered by truncated lexicographic comparison of the
/// suffixes each offset denotes. Immutable once built; [`search`] may be
/// called any number of times.
///
/// [`search`]: SuffixIndex::search
pub struct SuffixIndex<'a> {
    seq: &'a [u8],
    offsets: Vec<SuffixOffset>,
}

impl<'a> SuffixIndex<'a> {
    /// Build the index by sorting every suffix of the store's valid prefix.
    ///
    /// The store is never mutated; construction only allocates and sorts
    /// the offsets array.
    pub fn build(store: &'a SequenceStore) -> Self {
        let seq = store.bytes();
        let offsets = sort_offsets(seq);
        Self { seq, offsets }
    }

    /// Number of indexed suffixes (equals the valid sequence length).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The sorted suffix offsets.
    pub fn offsets(&self) -> &[SuffixOffset] {
        &self.offsets
    }

    /// The sequence bytes this index was built over.
    pub fn sequence(&self) -> &'a [u8] {
        self.seq
    }

    /// Suffix bytes starting at `offset`, truncated at the valid length.
    #[inline]
    pub(crate) fn suffix(&self, offset: SuffixOffset) -> &'a [u8] {
        &self.seq[offset as usize..]
    }

    /// Write the diagnostic suffix listing to `out`, one line per suffix in
    /// sorted order: `"<offset> | <preview>"`, preview capped at the first
    /// 50 valid bytes of the suffix.
    pub fn write_listing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for &offset in &self.offsets {
            let suffix = self.suffix(offset);
            let preview = &suffix[..suffix.len().min(PREVIEW_LEN)];
            writeln!(out, "{:>8} | {}", offset, String::from_utf8_lossy(preview))?;
        }
        Ok(())
    }
}

/// Sort all suffix start offsets of `seq` lexicographically.
///
/// Comparing the full suffix slices gives truncated lexicographic order
/// directly: slice comparison stops at the first differing byte and treats
/// the shorter slice as smaller when one is a prefix of the other. Distinct
/// offsets yield suffixes of distinct lengths, so equality only arises for
/// an offset compared against itself and the order is total.
fn sort_offsets(seq: &[u8]) -> Vec<SuffixOffset> {
    let mut offsets: Vec<SuffixOffset> = (0..seq.len() as SuffixOffset).collect();

    if seq.len() > PARALLEL_SORT_THRESHOLD {
        offsets.par_sort_unstable_by(|&a, &b| seq[a as usize..].cmp(&seq[b as usize..]));
    } else {
        offsets.sort_unstable_by(|&a, &b| seq[a as usize..].cmp(&seq[b as usize..]));
    }

    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(bytes: &[u8]) -> SequenceStore {
        SequenceStore::new(bytes.to_vec(), bytes.len())
    }

    #[test]
    fn test_known_order() {
        let store = store(b"AGATAGAGA");
        let index = SuffixIndex::build(&store);

        // Sorted suffixes of AGATAGAGA:
        // 8: A
        // 6: AGA
        // 4: AGAGA
        // 0: AGATAGAGA
        // 2: ATAGAGA
        // 7: GA
        // 5: GAGA
        // 1: GATAGAGA
        // 3: TAGAGA
        assert_eq!(index.offsets(), &[8, 6, 4, 0, 2, 7, 5, 1, 3]);
    }

    #[test]
    fn test_offsets_are_a_permutation() {
        let store = store(b"AAAAAGGGTTCACAGT");
        let index = SuffixIndex::build(&store);

        let mut sorted = index.offsets().to_vec();
        sorted.sort_unstable();
        let expected: Vec<SuffixOffset> = (0..store.valid_len() as SuffixOffset).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_adjacent_suffixes_are_ordered() {
        let store = store(b"GATTACAGATTACA");
        let index = SuffixIndex::build(&store);

        for pair in index.offsets().windows(2) {
            let a = index.suffix(pair[0]);
            let b = index.suffix(pair[1]);
            assert!(a <= b, "suffix {:?} sorted after {:?}", a, b);
        }
    }

    #[test]
    fn test_empty_sequence() {
        let store = store(b"");
        let index = SuffixIndex::build(&store);
        assert!(index.is_empty());
        assert_eq!(index.offsets(), &[] as &[SuffixOffset]);
    }

    #[test]
    fn test_single_byte() {
        let store = store(b"A");
        let index = SuffixIndex::build(&store);
        assert_eq!(index.offsets(), &[0]);
    }

    #[test]
    fn test_listing_preview_cap() {
        let bytes = vec![b'C'; 80];
        let store = SequenceStore::new(bytes, 80);
        let index = SuffixIndex::build(&store);

        let mut out = Vec::new();
        index.write_listing(&mut out).unwrap();
        let listing = String::from_utf8(out).unwrap();

        let first = listing.lines().next().unwrap();
        // shortest suffix ("C") sorts first under shorter-is-smaller
        assert_eq!(first, format!("{:>8} | C", 79));

        // the longest suffix is previewed, not dumped wholesale
        let longest = listing
            .lines()
            .find(|l| l.starts_with(&format!("{:>8} ", 0)))
            .unwrap();
        let preview = longest.split(" | ").nth(1).unwrap();
        assert_eq!(preview.len(), PREVIEW_LEN);
    }
}
