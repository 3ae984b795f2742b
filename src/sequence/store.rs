//! In-memory sequence buffer with a valid-length watermark.
//!
//! The loader allocates the destination buffer at the input file's size
//! before it knows how many bytes survive FASTA stripping, so the buffer's
//! capacity and its meaningful prefix differ. [`SequenceStore`] pairs the
//! buffer with that watermark and only ever hands out the valid prefix.

/// Owns the loaded sequence bytes and the count of valid leading bytes.
///
/// Immutable after construction. The suffix index borrows the valid prefix
/// via [`SequenceStore::bytes`]; padding past `valid_len` is never exposed,
/// so downstream comparisons cannot read it.
#[derive(Debug, Clone)]
pub struct SequenceStore {
    buf: Vec<u8>,
    valid_len: usize,
}

impl SequenceStore {
    /// Wrap a buffer whose first `valid_len` bytes hold sequence data.
    ///
    /// # Panics
    ///
    /// Panics if `valid_len` exceeds the buffer length; the loader contract
    /// guarantees `valid_len <= capacity`.
    pub fn new(buf: Vec<u8>, valid_len: usize) -> Self {
        assert!(
            valid_len <= buf.len(),
            "valid_len {} exceeds buffer capacity {}",
            valid_len,
            buf.len()
        );
        Self { buf, valid_len }
    }

    /// Number of meaningful leading bytes.
    pub fn valid_len(&self) -> usize {
        self.valid_len
    }

    /// Total buffer capacity, including padding past the valid prefix.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The valid sequence bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.valid_len]
    }

    pub fn is_empty(&self) -> bool {
        self.valid_len == 0
    }
}
