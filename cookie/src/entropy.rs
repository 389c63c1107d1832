//! Sources of randomness for self-generated secrets.
//!
//! An [EntropySource] is handed to the constructors of
//! [CookieAuthority](crate::CookieAuthority) that generate their own secret.
//! Production code uses [OsEntropy]; tests can inject a seeded generator
//! through [RngEntropy].

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{CookieError, Result};

/// Something that fills buffers with cryptographically strong random bytes
pub trait EntropySource {
    /// Fill all of `buf` or fail; never returns partially filled buffers as success
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error>;
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        (**self).fill(buf)
    }
}

/// Randomness from the operating system (`getrandom(2)` on Linux)
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(buf)
    }
}

/// Adapts any cryptographically secure [rand] generator
///
/// ```rust
/// use mir_cookie::{CookieAuthority, Format, RngEntropy};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut entropy = RngEntropy(StdRng::seed_from_u64(7));
/// let _authority = CookieAuthority::keeping_secret_with(Format::HmacSha1, &mut entropy)?;
/// # Ok::<(), mir_cookie::CookieError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(pub R);

impl<R: RngCore + CryptoRng> EntropySource for RngEntropy<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(buf)
    }
}

/// Fill `buf` from `source` for use as a secret
///
/// A source that hands back nothing but zeros is broken; its output is
/// rejected rather than used as a key.
pub(crate) fn fill_secret<E>(source: &mut E, buf: &mut [u8]) -> Result<()>
where
    E: EntropySource + ?Sized,
{
    source
        .fill(buf)
        .map_err(CookieError::EntropyUnavailable)?;

    let any_set = buf.iter().fold(0u8, |acc, b| acc | b);
    if any_set == 0 {
        return Err(CookieError::EntropyUnavailable(rand::Error::new(
            "entropy source produced only zero bytes",
        )));
    }
    Ok(())
}
