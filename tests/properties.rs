//! Property-based tests for the Adler-32 accumulator and combiner.

use adler32::parallel::{checksum_chunks, merge};
use adler32::{Adler32, BASE, Backend, COMBINE_ERROR, INITIAL, checksum, combine, update};
use proptest::prelude::*;

/// One reduction per byte
fn reference(data: &[u8]) -> u32 {
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in data {
        a = (a + byte as u32) % BASE;
        b = (b + a) % BASE;
    }
    (b << 16) | a
}

/// Generate arbitrary byte vectors up to a few blocks long.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..20000)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_reference(data in arb_data()) {
        prop_assert_eq!(checksum(&data), reference(&data));
    }

    #[test]
    fn split_anywhere(data in arb_data(), split in any::<prop::sample::Index>()) {
        let split = split.index(data.len() + 1);
        let (a, b) = data.split_at(split);
        let partial = update(INITIAL, Some(a));
        prop_assert_eq!(update(partial, Some(b)), checksum(&data));
    }

    #[test]
    fn combine_matches_concatenation(a in arb_data(), b in arb_data()) {
        let mut ab = a.clone();
        ab.extend_from_slice(&b);
        prop_assert_eq!(combine(checksum(&a), checksum(&b), b.len() as i64), checksum(&ab));
    }

    #[test]
    fn negative_length_is_sentinel(a in any::<u32>(), b in any::<u32>(), len in i64::MIN..0) {
        prop_assert_eq!(combine(a, b, len), COMBINE_ERROR);
    }

    #[test]
    fn backends_match_scalar(data in arb_data(), start in any::<u32>()) {
        // keep the start state canonical
        let start = (((start >> 16) % BASE) << 16) | ((start & 0xffff) % BASE);
        let expected = Backend::Scalar.update(start, &data);
        for backend in Backend::ALL {
            prop_assert_eq!(backend.update(start, &data), expected);
        }
    }

    #[test]
    fn chunked_matches_oneshot(data in arb_data(), size in 1usize..7000) {
        let chunks: Vec<&[u8]> = data.chunks(size).collect();
        prop_assert_eq!(checksum_chunks(&chunks), checksum(&data));

        let merged = chunks
            .iter()
            .map(|chunk| (checksum(chunk), chunk.len() as u64))
            .fold((INITIAL, 0), merge);
        prop_assert_eq!(merged, (checksum(&data), data.len() as u64));
    }

    #[test]
    fn state_type_matches_function(data in arb_data(), split in any::<prop::sample::Index>()) {
        let split = split.index(data.len() + 1);
        let mut state = Adler32::new();
        state.update(&data[..split]);
        state.update(&data[split..]);
        prop_assert_eq!(state.checksum(), checksum(&data));
    }
}
