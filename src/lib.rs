//! # SFX - Suffix-Array Sequence Search
//!
//! SFX indexes a genetic sequence file and answers exact-substring queries:
//! given a pattern, it reports every starting offset in the sequence where
//! the pattern occurs. The index is a sorted suffix array built once per
//! run; queries then cost a binary search plus a short walk over the
//! neighboring suffixes that share the pattern as a prefix.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`sequence`] - Loading a sequence file into a flat byte buffer
//! - [`index`] - Suffix index construction, search, and statistics
//! - [`output`] - Result formatting (hits, suffix listing)
//!
//! ## Quick Start
//!
//! ```ignore
//! use sfx::index::SuffixIndex;
//! use sfx::sequence::load_sequence;
//! use std::path::Path;
//!
//! // Load a FASTA (or raw) sequence file
//! let store = load_sequence(Path::new("genome.fa")).unwrap();
//!
//! // Build the index and search it
//! let index = SuffixIndex::build(&store);
//! let hits = index.search(b"GATTACA").unwrap();
//!
//! for offset in hits {
//!     println!("Found at {}", offset);
//! }
//! ```
//!
//! ## Performance
//!
//! Construction sorts all suffix start offsets with a comparison sort,
//! switching to rayon's parallel sort above 100k suffixes. No linear-time
//! suffix-array algorithm is used; at the file sizes this tool targets the
//! comparison sort wins on simplicity and is fast enough in practice.

pub mod index;
pub mod output;
pub mod sequence;
