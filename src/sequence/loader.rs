//! Sequence file loading.
//!
//! Memory-maps the input file and flattens it into a [`SequenceStore`].
//! FASTA inputs lose their description lines and line folding; raw inputs
//! lose only their line terminators. Either way the store ends up holding
//! the flat run of nucleotide bytes the index is built over.

use super::store::SequenceStore;
use memchr::memchr_iter;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced while loading a sequence file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to memory-map {}", .path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Suffix offsets are stored as `u32`; longer sequences are rejected
    /// outright rather than silently truncated.
    #[error("{} holds {len} sequence bytes, more than the supported {}", .path.display(), u32::MAX)]
    TooLong { path: PathBuf, len: usize },
}

/// Loader configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Fold sequence bytes to ASCII uppercase at load, so soft-masked
    /// (lowercase) regions match their uppercase spelling (default: false)
    pub fold_case: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { fold_case: false }
    }
}

/// Load a sequence file with default options.
pub fn load_sequence(path: &Path) -> Result<SequenceStore, LoadError> {
    load_sequence_with(path, LoadOptions::default())
}

/// Load a sequence file into a [`SequenceStore`].
///
/// The file is memory-mapped read-only and flattened in a single pass. An
/// unreadable file is an error; an empty file yields an empty store, which
/// builds an empty index and matches nothing.
pub fn load_sequence_with(path: &Path, options: LoadOptions) -> Result<SequenceStore, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let len = file
        .metadata()
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    // Zero-length files cannot be mapped; they are a legal empty sequence
    if len == 0 {
        return Ok(SequenceStore::new(Vec::new(), 0));
    }
    let mmap = unsafe { Mmap::map(&file) }.map_err(|source| LoadError::Map {
        path: path.to_path_buf(),
        source,
    })?;

    let store = flatten(&mmap, options);
    if store.valid_len() > u32::MAX as usize {
        return Err(LoadError::TooLong {
            path: path.to_path_buf(),
            len: store.valid_len(),
        });
    }
    Ok(store)
}

/// Flatten raw file bytes into a sequence buffer.
///
/// The destination is allocated at the input size; valid bytes are written
/// into its prefix and the watermark records how many. FASTA description
/// lines (`>` or the legacy `;`) are skipped entirely, line terminators
/// always.
pub(crate) fn flatten(data: &[u8], options: LoadOptions) -> SequenceStore {
    let fasta = is_fasta(data);
    let mut buf = vec![0u8; data.len()];
    let mut n = 0;

    let mut start = 0;
    for nl in memchr_iter(b'\n', data).chain(std::iter::once(data.len())) {
        let mut line = &data[start..nl];
        start = nl + 1;
        if line.last() == Some(&b'\r') {
            line = &line[..line.len() - 1];
        }
        if line.is_empty() || (fasta && (line[0] == b'>' || line[0] == b';')) {
            continue;
        }

        if options.fold_case {
            for &b in line {
                buf[n] = b.to_ascii_uppercase();
                n += 1;
            }
        } else {
            buf[n..n + line.len()].copy_from_slice(line);
            n += line.len();
        }
    }

    SequenceStore::new(buf, n)
}

/// A file whose first non-whitespace byte is `>` is treated as FASTA.
fn is_fasta(data: &[u8]) -> bool {
    data.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'>')
}
