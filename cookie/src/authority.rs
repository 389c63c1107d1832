//! The [CookieAuthority] issues cookies and verifies them.

use log::debug;
use static_assertions::{assert_impl_all, const_assert};
use zeroize::Zeroize;

use mir_cookie_ciphers::{KEY_LEN, MAX_HASH_LEN};
use mir_cookie_constant_time::memcmp;
use mir_cookie_secret_memory::Secret;

use crate::entropy::{fill_secret, EntropySource, OsEntropy};
use crate::format::{self, encode_timestamp, Format};
use crate::{Cookie, CookieError, Result};

/// Secrets shorter than this are rejected
pub const MIN_SECRET: usize = 8;

/// Size of self-generated secrets; longer secrets add nothing
///
/// This is the block size of the MAC's digest, the same for every supported [Format].
pub const OPT_SECRET: usize = KEY_LEN;

const_assert!(OPT_SECRET >= MIN_SECRET);
const_assert!(Format::HmacSha1.algorithm().block_len() == OPT_SECRET);
const_assert!(Format::HmacSha256.algorithm().block_len() == OPT_SECRET);

/// A source of moderately-difficult-to-spoof cookies
///
/// Holds a key, normalized to the block size of the MAC, and the [Format] of the
/// cookies it issues. Both are fixed for the lifetime of the authority; to change
/// keys, create a new authority. The key is wiped when the authority is dropped.
///
/// `issue` and `parse` only read the key, so one authority can be shared between
/// threads (e.g. behind an `Arc`) without locking.
///
/// # Examples
///
/// ```rust
/// use mir_cookie::{CookieAuthority, OPT_SECRET};
///
/// // One process creates the secret ...
/// let mut secret = Vec::new();
/// let issuer = CookieAuthority::saving_secret(&mut secret)?;
/// assert_eq!(secret.len(), OPT_SECRET);
///
/// // ... and another one verifies cookies with it
/// let verifier = CookieAuthority::from_secret(&secret)?;
/// let cookie = issuer.issue(23);
/// assert_eq!(verifier.parse(&cookie.marshal())?, cookie);
/// # Ok::<(), mir_cookie::CookieError>(())
/// ```
#[derive(Debug)]
pub struct CookieAuthority {
    key: Secret<KEY_LEN>,
    format: Format,
}

assert_impl_all!(CookieAuthority: Send, Sync);

impl CookieAuthority {
    /// The smallest secret accepted by [Self::from_secret]
    pub const MIN_SECRET: usize = MIN_SECRET;

    /// The size of secrets created by [Self::saving_secret]
    ///
    /// Keys of greater size are reduced to this size internally and keys of
    /// smaller size are extended to it.
    pub const fn optimal_secret_size() -> usize {
        OPT_SECRET
    }

    /// Create an authority issuing HMAC-SHA-1 cookies under `secret`
    ///
    /// The secret is copied; the caller remains responsible for its own buffer.
    pub fn from_secret(secret: &[u8]) -> Result<Self> {
        Self::from_secret_with_format(secret, Format::default())
    }

    /// Create an authority issuing cookies of the given format under `secret`
    pub fn from_secret_with_format(secret: &[u8], format: Format) -> Result<Self> {
        if secret.len() < MIN_SECRET {
            return Err(CookieError::InvalidSecret {
                len: secret.len(),
                min: MIN_SECRET,
            });
        }

        let key = format.algorithm().normalize_key(secret);
        debug!("Cookie authority issuing {format} cookies with a provided secret");
        Ok(Self { key, format })
    }

    /// Create an authority with a fresh secret from the operating system and
    /// store a copy of that secret in `save_secret`
    ///
    /// `save_secret` is overwritten with exactly [Self::optimal_secret_size]
    /// bytes. It is left untouched if no secret could be generated.
    pub fn saving_secret(save_secret: &mut Vec<u8>) -> Result<Self> {
        Self::saving_secret_with(save_secret, Format::default(), &mut OsEntropy)
    }

    /// Like [Self::saving_secret], with explicit format and entropy source
    pub fn saving_secret_with<E>(
        save_secret: &mut Vec<u8>,
        format: Format,
        entropy: &mut E,
    ) -> Result<Self>
    where
        E: EntropySource + ?Sized,
    {
        let key = Self::generate_key(entropy)?;

        save_secret.zeroize();
        save_secret.extend_from_slice(key.secret());

        debug!("Cookie authority issuing {format} cookies with a generated, exported secret");
        Ok(Self { key, format })
    }

    /// Create an authority with a fresh secret from the operating system that
    /// never leaves the authority
    pub fn keeping_secret() -> Result<Self> {
        Self::keeping_secret_with(Format::default(), &mut OsEntropy)
    }

    /// Like [Self::keeping_secret], with explicit format and entropy source
    pub fn keeping_secret_with<E>(format: Format, entropy: &mut E) -> Result<Self>
    where
        E: EntropySource + ?Sized,
    {
        let key = Self::generate_key(entropy)?;
        debug!("Cookie authority issuing {format} cookies with a generated, private secret");
        Ok(Self { key, format })
    }

    /// A secret of exactly [OPT_SECRET] bytes is its own normalized key
    fn generate_key<E>(entropy: &mut E) -> Result<Secret<KEY_LEN>>
    where
        E: EntropySource + ?Sized,
    {
        let mut key = Secret::<KEY_LEN>::zero();
        fill_secret(entropy, key.secret_mut())?;
        Ok(key)
    }

    /// The format of the cookies this authority issues and accepts
    pub fn format(&self) -> Format {
        self.format
    }

    /// Create a cookie attesting `timestamp`
    pub fn issue(&self, timestamp: u64) -> Cookie {
        let mut mac = [0u8; MAX_HASH_LEN];
        let mac = &mut mac[..self.format.tag_len()];
        self.mac_into(timestamp, mac);
        Cookie::from_parts(timestamp, mac, self.format)
    }

    /// Rebuild a cookie from its wire representation and check that it was
    /// issued under this authority's key
    ///
    /// # Errors
    ///
    /// - [CookieError::MalformedCookie] if `raw_cookie` is too short to be a cookie
    ///   or its length does not match its format
    /// - [CookieError::UnknownFormat] if the format tag is not supported
    /// - [CookieError::SecurityCheckFailed] if the MAC does not verify, including
    ///   cookies of a format other than [Self::format]
    pub fn parse(&self, raw_cookie: &[u8]) -> Result<Cookie> {
        let decoded = format::decode(raw_cookie)?;

        let mut expected = [0u8; MAX_HASH_LEN];
        let expected = &mut expected[..self.format.tag_len()];
        self.mac_into(decoded.timestamp, expected);

        let same_mac = memcmp(expected, decoded.mac);
        let same_format = decoded.format == self.format;
        if !(same_mac & same_format) {
            return Err(CookieError::SecurityCheckFailed);
        }

        Ok(Cookie::from_parts(decoded.timestamp, decoded.mac, decoded.format))
    }

    fn mac_into(&self, timestamp: u64, out: &mut [u8]) {
        self.format
            .algorithm()
            .mac(&self.key, &encode_timestamp(timestamp), out)
    }
}
