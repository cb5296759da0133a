//! Backend selection
//!
//! Every backend runs the same `NMAX`-bounded block loop and yields the same value as
//! the scalar path. The variants exist on every target; the ones that cannot run on
//! the current CPU report `false` from [`Backend::is_supported`] and fall back to the
//! scalar path when used.

use super::scalar;
use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

/// Inputs shorter than this never leave the scalar path.
const SIMD_THRESHOLD: usize = 64;

const UNCHECKED: u8 = 0;

static DETECTED: AtomicU8 = AtomicU8::new(UNCHECKED);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Backend {
    Scalar = 1,
    Ssse3,
    Avx2,
}

impl Backend {
    /// All backends, fastest last
    pub const ALL: [Self; 3] = [Self::Scalar, Self::Ssse3, Self::Avx2];

    /// Returns the fastest backend supported by the running CPU.
    ///
    /// Detection happens once, the result is cached.
    #[inline]
    pub fn detect() -> Self {
        match Self::from_u8(DETECTED.load(Ordering::Relaxed)) {
            Some(backend) => backend,
            None => {
                let backend = Self::ALL
                    .into_iter()
                    .rev()
                    .find(|backend| backend.is_supported())
                    .unwrap_or(Self::Scalar);
                tracing::debug!(backend = backend.name(), "adler32 backend selected");
                DETECTED.store(backend as u8, Ordering::Relaxed);
                backend
            }
        }
    }

    #[inline]
    const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Scalar),
            2 => Some(Self::Ssse3),
            3 => Some(Self::Avx2),
            _ => None,
        }
    }

    #[inline]
    pub fn is_supported(self) -> bool {
        match self {
            Self::Scalar => true,
            Self::Ssse3 => has_ssse3(),
            Self::Avx2 => has_avx2(),
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Ssse3 => "ssse3",
            Self::Avx2 => "avx2",
        }
    }

    /// Updates `adler` with `data` using this backend.
    pub fn update(self, adler: u32, data: &[u8]) -> u32 {
        if data.len() < SIMD_THRESHOLD {
            return scalar::update(adler, data);
        }
        match self {
            Self::Scalar => scalar::update(adler, data),
            #[cfg(target_arch = "x86_64")]
            Self::Ssse3 if has_ssse3() => unsafe { super::x86_64::update_ssse3(adler, data) },
            #[cfg(target_arch = "x86_64")]
            Self::Avx2 if has_avx2() => unsafe { super::x86_64::update_avx2(adler, data) },
            _ => scalar::update(adler, data),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(all(target_arch = "x86_64", feature = "std"))]
#[inline]
fn has_ssse3() -> bool {
    std::is_x86_feature_detected!("ssse3")
}

#[cfg(all(target_arch = "x86_64", feature = "std"))]
#[inline]
fn has_avx2() -> bool {
    std::is_x86_feature_detected!("avx2")
}

#[cfg(all(target_arch = "x86_64", not(feature = "std")))]
#[inline]
fn has_ssse3() -> bool {
    cfg!(target_feature = "ssse3")
}

#[cfg(all(target_arch = "x86_64", not(feature = "std")))]
#[inline]
fn has_avx2() -> bool {
    cfg!(target_feature = "avx2")
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn has_ssse3() -> bool {
    false
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn has_avx2() -> bool {
    false
}
