use super::BASE;
use super::scalar::{pack, split};

/// Combines two checksums where the second one covered exactly `len2` bytes.
///
/// With `A` the first segment and `B` the second (`n = len2`), every byte of `A` is
/// counted `n` more times in `sum2`, and the leading `1` of `B`'s `sum1` is counted
/// twice:
///
/// ```text
/// sum1(AB) = sum1(A) + sum1(B) - 1
/// sum2(AB) = sum2(A) + sum2(B) + n * sum1(A) - n
/// ```
///
/// all modulo `BASE`.
pub fn combine_len(adler1: u32, adler2: u32, len2: u64) -> u32 {
    let rem = (len2 % BASE as u64) as u32;
    let (a1, b1) = split(adler1);
    let (a2, b2) = split(adler2);

    let mut sum1 = a1;
    let mut sum2 = (rem * sum1) % BASE;
    sum1 += a2 + BASE - 1;
    sum2 += b1 + b2 + BASE - rem;

    if sum1 >= BASE {
        sum1 -= BASE;
    }
    if sum1 >= BASE {
        sum1 -= BASE;
    }
    if sum2 >= BASE << 1 {
        sum2 -= BASE << 1;
    }
    if sum2 >= BASE {
        sum2 -= BASE;
    }
    pack(sum1, sum2)
}
