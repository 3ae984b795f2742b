#![no_main]

use libfuzzer_sys::fuzz_target;
use sfx::index::SuffixIndex;
use sfx::sequence::SequenceStore;

fuzz_target!(|data: &[u8]| {
    // Construction is quadratic in the worst case; keep inputs small
    if data.len() > 1 << 12 {
        return;
    }

    let store = SequenceStore::new(data.to_vec(), data.len());
    let index = SuffixIndex::build(&store);

    // Sorted order must hold for arbitrary bytes, not just nucleotides
    for pair in index.offsets().windows(2) {
        assert!(data[pair[0] as usize..] <= data[pair[1] as usize..]);
    }

    // And the offsets must be a permutation of [0, len)
    let mut seen = index.offsets().to_vec();
    seen.sort_unstable();
    assert!(seen.iter().enumerate().all(|(i, &off)| off as usize == i));
});
