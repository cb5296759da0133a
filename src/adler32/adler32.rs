//! Adler-32 checksum implementation
//!
//! References:
//!
//! * <https://www.ietf.org/rfc/rfc1950.txt>
//! * <https://en.wikipedia.org/wiki/Adler-32>

use crate::CombineError;
use core::hash::Hasher;

mod backend;
mod combiner;
mod scalar;
#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(test)]
mod tests;

pub use backend::Backend;
pub use combiner::combine_len;

/// Largest prime smaller than 65536
pub const BASE: u32 = 65521;

/// Largest `n` such that `255n(n+1)/2 + (n+1)(BASE-1) <= 2^32-1`
pub const NMAX: usize = 5552;

/// Checksum of the empty stream
pub const INITIAL: u32 = 1;

/// Returned by [`combine`] for a negative segment length.
///
/// This is only a clue for debugging. A genuine checksum can never have both halves
/// reduced below `BASE` and still equal this value, but callers that fabricate state
/// (e.g. [`Adler32::from_checksum`]) can produce it, so treat it as a marker rather
/// than a reliable error code. Use [`try_combine`] when a strict error is needed.
pub const COMBINE_ERROR: u32 = 0xFFFF_FFFF;

/// Returns the checksum of the empty stream.
#[inline]
pub const fn initial_checksum() -> u32 {
    INITIAL
}

/// Updates a running checksum with `data`.
///
/// `None` means no data has been seen yet and always yields [`INITIAL`], regardless of
/// `adler`. An empty slice returns `adler` unchanged.
#[inline]
pub fn update(adler: u32, data: Option<&[u8]>) -> u32 {
    match data {
        Some(data) => Backend::detect().update(adler, data),
        None => INITIAL,
    }
}

/// Computes the checksum of `data` in one shot.
#[inline]
pub fn checksum(data: &[u8]) -> u32 {
    Backend::detect().update(INITIAL, data)
}

/// Computes the checksum of `A ‖ B` from `adler1 = checksum(A)`, `adler2 = checksum(B)`
/// and `len2 = B.len()`.
///
/// Returns [`COMBINE_ERROR`] if `len2` is negative.
#[inline]
pub fn combine(adler1: u32, adler2: u32, len2: i64) -> u32 {
    try_combine(adler1, adler2, len2).unwrap_or(COMBINE_ERROR)
}

/// Same as [`combine`], but reports a negative length as an error.
#[inline]
pub fn try_combine(adler1: u32, adler2: u32, len2: i64) -> Result<u32, CombineError> {
    let len2 = u64::try_from(len2).map_err(|_| CombineError::NegativeLength(len2))?;
    Ok(combine_len(adler1, adler2, len2))
}

/// Running Adler-32 state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adler32 {
    sum1: u16,
    sum2: u16,
}

impl Adler32 {
    #[inline]
    pub const fn new() -> Self {
        Self::from_checksum(INITIAL)
    }

    /// Resumes from a previously computed checksum.
    #[inline]
    pub const fn from_checksum(adler: u32) -> Self {
        Self {
            sum1: adler as u16,
            sum2: (adler >> 16) as u16,
        }
    }

    #[inline]
    pub const fn checksum(&self) -> u32 {
        (self.sum1 as u32) | ((self.sum2 as u32) << 16)
    }

    #[inline]
    pub const fn sum1(&self) -> u16 {
        self.sum1
    }

    #[inline]
    pub const fn sum2(&self) -> u16 {
        self.sum2
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.update_with(Backend::detect(), data);
    }

    #[inline]
    pub fn update_with(&mut self, backend: Backend, data: &[u8]) {
        *self = Self::from_checksum(backend.update(self.checksum(), data));
    }

    /// Returns the state of `self ‖ other`, where `other` covered exactly `len2` bytes.
    #[inline]
    pub fn combine(&self, other: &Self, len2: u64) -> Self {
        Self::from_checksum(combine_len(self.checksum(), other.checksum(), len2))
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Adler32 {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<Adler32> for u32 {
    #[inline]
    fn from(value: Adler32) -> Self {
        value.checksum()
    }
}

impl Hasher for Adler32 {
    #[inline]
    fn finish(&self) -> u64 {
        self.checksum() as u64
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}
