//! Checksums over chunked data
//!
//! Each chunk can be checksummed independently (on any thread) and the partial results
//! merged with [`combine_len`] in stream order.
//!
//! ```
//! use adler32::parallel::{checksum_chunks, combine_checksums};
//!
//! let data = b"The quick brown fox jumps over the lazy dog";
//! let chunks: Vec<&[u8]> = data.chunks(16).collect();
//! assert_eq!(checksum_chunks(&chunks), adler32::checksum(data));
//!
//! let parts: Vec<(u32, u64)> = chunks
//!     .iter()
//!     .map(|chunk| (adler32::checksum(chunk), chunk.len() as u64))
//!     .collect();
//! assert_eq!(combine_checksums(&parts), adler32::checksum(data));
//! ```

use crate::adler32::{INITIAL, checksum, combine_len};

/// Chunk size used by `par_checksum` when none is given
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 20;

/// Checksum of the concatenation of `chunks`.
pub fn checksum_chunks(chunks: &[&[u8]]) -> u32 {
    chunks.iter().fold(INITIAL, |adler, chunk| {
        combine_len(adler, checksum(chunk), chunk.len() as u64)
    })
}

/// Merges `(checksum, length)` pairs given in stream order.
///
/// An empty slice yields the checksum of the empty stream.
pub fn combine_checksums(parts: &[(u32, u64)]) -> u32 {
    parts
        .iter()
        .fold(INITIAL, |adler, &(part, len)| combine_len(adler, part, len))
}

/// Associative merge of two `(checksum, length)` pairs; `(INITIAL, 0)` is the identity.
#[inline]
pub fn merge(lhs: (u32, u64), rhs: (u32, u64)) -> (u32, u64) {
    (combine_len(lhs.0, rhs.0, rhs.1), lhs.1 + rhs.1)
}

/// Checksums `data` in chunks of `chunk_size` bytes on the rayon thread pool.
///
/// A `chunk_size` of 0 selects [`DEFAULT_CHUNK_SIZE`].
#[cfg(feature = "rayon")]
pub fn par_checksum(data: &[u8], chunk_size: usize) -> u32 {
    use rayon::prelude::*;

    let chunk_size = if chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        chunk_size
    };
    tracing::trace!(
        len = data.len(),
        chunks = data.len().div_ceil(chunk_size),
        "parallel adler32"
    );

    // rayon keeps the order of an indexed reduction, so only associativity is needed
    data.par_chunks(chunk_size)
        .map(|chunk| (checksum(chunk), chunk.len() as u64))
        .reduce(|| (INITIAL, 0), merge)
        .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adler32::NMAX;
    use rand::RngCore;

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        let mut v = vec![0; len];
        rng.fill_bytes(&mut v);
        v
    }

    #[test]
    fn chunks() {
        let data = random_bytes(NMAX * 5 + 11);
        let expected = checksum(&data);
        for size in [1usize, 16, 1000, NMAX, NMAX + 1, data.len()] {
            let chunks = data.chunks(size).collect::<Vec<_>>();
            assert_eq!(checksum_chunks(&chunks), expected, "chunk size {size}");
        }
        assert_eq!(checksum_chunks(&[]), INITIAL);
        let padded: [&[u8]; 3] = [b"", b"Wikipedia", b""];
        assert_eq!(checksum_chunks(&padded), 0x11E6_0398);
    }

    #[test]
    fn combine_pairs() {
        assert_eq!(combine_checksums(&[]), INITIAL);
        assert_eq!(combine_checksums(&[(0x1234_5678, 100)]), 0x1234_5678);

        let parts = [
            (checksum(b"Wiki"), 4),
            (checksum(b""), 0),
            (checksum(b"pedia"), 5),
        ];
        assert_eq!(combine_checksums(&parts), 0x11E6_0398);
    }

    #[test]
    fn merge_identity_and_associativity() {
        let a = (checksum(b"Wi"), 2);
        let b = (checksum(b"kip"), 3);
        let c = (checksum(b"edia"), 4);

        assert_eq!(merge((INITIAL, 0), a), a);
        assert_eq!(merge(a, (INITIAL, 0)), a);
        assert_eq!(merge(merge(a, b), c), merge(a, merge(b, c)));
        assert_eq!(merge(merge(a, b), c), (0x11E6_0398, 9));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel() {
        let data = random_bytes(NMAX * 40 + 3);
        let expected = checksum(&data);
        for size in [0usize, 1, 17, NMAX, 4096, data.len() + 1] {
            assert_eq!(par_checksum(&data, size), expected, "chunk size {size}");
        }
        assert_eq!(par_checksum(&[], 0), INITIAL);
    }
}
