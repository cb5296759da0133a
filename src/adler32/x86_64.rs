//! x86_64 kernels
//!
//! A group of `N` bytes `x[0..N]` moves the sums as
//!
//! ```text
//! sum1' = sum1 + Σ x[i]
//! sum2' = sum2 + N * sum1 + Σ (N - i) * x[i]
//! ```
//!
//! Inside a block the byte sums and the weighted sums are kept in vector lanes, and the
//! lane sums seen before each group are accumulated separately so that the `N * sum1`
//! term can be applied once per block. Blocks never exceed `NMAX` bytes, so the block
//! totals fit in `u32` exactly as in the scalar path.

use super::scalar::{pack, split};
use super::{BASE, NMAX};
use core::arch::x86_64::*;

/// # Safety
///
/// The CPU must support SSSE3.
#[target_feature(enable = "ssse3")]
pub unsafe fn update_ssse3(adler: u32, data: &[u8]) -> u32 {
    const N: usize = 16;

    let (mut sum1, mut sum2) = split(adler);
    unsafe {
        let zero = _mm_setzero_si128();
        let ones = _mm_set1_epi16(1);
        let weights = _mm_set_epi8(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16);

        for block in data.chunks(NMAX) {
            let mut groups = block.chunks_exact(N);
            let count = groups.len() as u32;

            let mut byte_sums = zero;
            let mut prefix_sums = zero;
            let mut weighted = zero;
            for group in &mut groups {
                let bytes = _mm_loadu_si128(group.as_ptr() as *const __m128i);
                prefix_sums = _mm_add_epi32(prefix_sums, byte_sums);
                byte_sums = _mm_add_epi32(byte_sums, _mm_sad_epu8(bytes, zero));
                let products = _mm_maddubs_epi16(bytes, weights);
                weighted = _mm_add_epi32(weighted, _mm_madd_epi16(products, ones));
            }

            sum2 += count * N as u32 * sum1;
            sum2 += (hsum_epi32(prefix_sums) << 4) + hsum_epi32(weighted);
            sum1 += hsum_epi32(byte_sums);

            for &byte in groups.remainder() {
                sum1 += byte as u32;
                sum2 += sum1;
            }
            sum1 %= BASE;
            sum2 %= BASE;
        }
    }
    pack(sum1, sum2)
}

/// # Safety
///
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn update_avx2(adler: u32, data: &[u8]) -> u32 {
    const N: usize = 32;

    let (mut sum1, mut sum2) = split(adler);
    unsafe {
        let zero = _mm256_setzero_si256();
        let ones = _mm256_set1_epi16(1);
        let weights = _mm256_set_epi8(
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, //
            17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
        );

        for block in data.chunks(NMAX) {
            let mut groups = block.chunks_exact(N);
            let count = groups.len() as u32;

            let mut byte_sums = zero;
            let mut prefix_sums = zero;
            let mut weighted = zero;
            for group in &mut groups {
                let bytes = _mm256_loadu_si256(group.as_ptr() as *const __m256i);
                prefix_sums = _mm256_add_epi32(prefix_sums, byte_sums);
                byte_sums = _mm256_add_epi32(byte_sums, _mm256_sad_epu8(bytes, zero));
                let products = _mm256_maddubs_epi16(bytes, weights);
                weighted = _mm256_add_epi32(weighted, _mm256_madd_epi16(products, ones));
            }

            sum2 += count * N as u32 * sum1;
            sum2 += (hsum256_epi32(prefix_sums) << 5) + hsum256_epi32(weighted);
            sum1 += hsum256_epi32(byte_sums);

            for &byte in groups.remainder() {
                sum1 += byte as u32;
                sum2 += sum1;
            }
            sum1 %= BASE;
            sum2 %= BASE;
        }
    }
    pack(sum1, sum2)
}

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn hsum_epi32(v: __m128i) -> u32 {
    unsafe {
        let v = _mm_add_epi32(v, _mm_shuffle_epi32::<0b01_00_11_10>(v));
        let v = _mm_add_epi32(v, _mm_shuffle_epi32::<0b10_11_00_01>(v));
        _mm_cvtsi128_si32(v) as u32
    }
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn hsum256_epi32(v: __m256i) -> u32 {
    unsafe {
        let v = _mm_add_epi32(_mm256_castsi256_si128(v), _mm256_extracti128_si256::<1>(v));
        hsum_epi32(v)
    }
}
