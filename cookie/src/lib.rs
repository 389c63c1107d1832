//! Issue and verify cookies: short byte strings attesting that a 64-bit
//! timestamp was produced by the holder of a secret key.
//!
//! A display server hands out cookies along with input events. When a client
//! later requests something only the user should be able to trigger, such as
//! taking focus, it presents the cookie of the event that caused the request
//! and the server checks it with [CookieAuthority::parse]. Clients cannot make
//! up plausible timestamps because they do not know the key.
//!
//! Cookies authenticate; they do not encrypt, do not expire and are not bound
//! to a client. Interpreting the attested timestamp is up to the caller.
//!
//! ```rust
//! use mir_cookie::{CookieAuthority, CookieError};
//!
//! let secret = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0xde, 0x01];
//! let server = CookieAuthority::from_secret(&secret)?;
//! let cookie = server.issue(0x0102_0304);
//! assert_eq!(cookie.marshal().len(), 29);
//!
//! // A different key does not accept the cookie
//! let other = CookieAuthority::from_secret(&[0x01, 0x02, 0x44, 0xd8, 0xee, 0x0f, 0xde, 0x01])?;
//! assert!(matches!(other.parse(&cookie.marshal()), Err(CookieError::SecurityCheckFailed)));
//! # Ok::<(), CookieError>(())
//! ```

pub mod authority;
pub mod cookie;
pub mod entropy;
pub mod format;

pub use crate::authority::{CookieAuthority, MIN_SECRET, OPT_SECRET};
pub use crate::cookie::Cookie;
pub use crate::entropy::{EntropySource, OsEntropy, RngEntropy};
pub use crate::format::{Format, ParseFormatError};

#[cfg(doctest)]
#[doc = include_str!("../readme.md")]
struct ReadmeDoctests;

/// Everything that can go wrong when creating a [CookieAuthority] or parsing cookies
#[derive(thiserror::Error, Debug)]
pub enum CookieError {
    #[error("secret of {len} bytes is too short, at least {min} bytes are required")]
    InvalidSecret { len: usize, min: usize },
    #[error("could not obtain random bytes for a secret")]
    EntropyUnavailable(#[source] rand::Error),
    #[error("malformed cookie of {len} bytes, expected {expected}")]
    MalformedCookie { len: usize, expected: usize },
    #[error("unknown cookie format {0:#04x}")]
    UnknownFormat(u8),
    #[error("security check failed")]
    SecurityCheckFailed,
}

impl CookieError {
    /// Helper function to check a buffer has exactly the expected size
    fn check_length(len: usize, expected: usize) -> Result<()> {
        if len != expected {
            Err(Self::MalformedCookie { len, expected })
        } else {
            Ok(())
        }
    }

    /// Helper function to check a buffer has at least the expected size
    fn check_min_length(len: usize, expected: usize) -> Result<()> {
        if len < expected {
            Err(Self::MalformedCookie { len, expected })
        } else {
            Ok(())
        }
    }
}

pub type Result<T, E = CookieError> = std::result::Result<T, E>;
