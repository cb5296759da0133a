//! Adler-32 checksum library
//!
//! Adler-32 is a fast checksum used by the zlib container format. It is **not**
//! collision resistant and must not be used where a cryptographic hash is required.
//!
//! ```
//! let adler = adler32::checksum(b"Wikipedia");
//! assert_eq!(adler, 0x11E6_0398);
//!
//! let (a, b) = b"Wikipedia".split_at(4);
//! let merged = adler32::combine(adler32::checksum(a), adler32::checksum(b), b.len() as i64);
//! assert_eq!(merged, adler);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

use core::fmt;

#[path = "adler32/adler32.rs"]
pub mod adler32;
pub mod parallel;

pub use adler32::{
    Adler32, BASE, Backend, COMBINE_ERROR, INITIAL, NMAX, checksum, combine, initial_checksum,
    try_combine, update,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CombineError {
    /// The length of the second segment was negative.
    NegativeLength(i64),
}

impl fmt::Display for CombineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLength(len) => write!(f, "negative segment length: {}", len),
        }
    }
}

impl core::error::Error for CombineError {}
