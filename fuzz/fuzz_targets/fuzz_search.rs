#![no_main]

use libfuzzer_sys::fuzz_target;
use sfx::index::SuffixIndex;
use sfx::sequence::SequenceStore;

fuzz_target!(|input: (&[u8], &[u8])| {
    let (pattern, text) = input;
    if pattern.is_empty() || pattern.len() > 16 || text.len() > 1 << 10 {
        return;
    }

    let store = SequenceStore::new(text.to_vec(), text.len());
    let index = SuffixIndex::build(&store);

    let mut hits = index.search(pattern).unwrap();
    hits.sort_unstable();

    let naive: Vec<u32> = text
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i as u32)
        .collect();

    assert_eq!(hits, naive);
});
