//! Wire format of cookies
//!
//! ```text
//! offset  size  field
//!   0      1    format tag
//!   1      8    timestamp (u64, little endian)
//!   9      N    mac (N = tag length of the format's MAC)
//! ```
//!
//! The layout is fixed per format tag and must not change between versions.

use std::fmt;
use std::str::FromStr;

use mir_cookie_ciphers::{MacAlgorithm, MAX_HASH_LEN};
use static_assertions::const_assert;

use crate::{CookieError, Result};

/// Offset of the format tag
pub const TAG_OFFSET: usize = 0;
/// Offset of the little endian timestamp
pub const TIMESTAMP_OFFSET: usize = 1;
/// Offset of the MAC
pub const MAC_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_LEN;
/// Size of the timestamp field
pub const TIMESTAMP_LEN: usize = 8;

/// No byte sequence shorter than this can be a cookie of any supported format
pub const MIN_FRAMED_LEN: usize = Format::HmacSha1.marshalled_len();
const_assert!(MIN_FRAMED_LEN <= Format::HmacSha256.marshalled_len());

/// The MAC family a cookie is authenticated with, which also determines its byte layout
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Format {
    /// HMAC-SHA-1, 29 byte cookies
    #[default]
    HmacSha1 = 1,
    /// HMAC-SHA-256, 41 byte cookies
    HmacSha256 = 2,
}

impl Format {
    /// All formats supported by this build
    pub const ALL: [Format; 2] = [Format::HmacSha1, Format::HmacSha256];

    /// The byte identifying this format on the wire
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Look up the format identified by `tag`
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::HmacSha1),
            2 => Some(Self::HmacSha256),
            _ => None,
        }
    }

    /// The MAC cookies of this format are authenticated with
    pub const fn algorithm(self) -> MacAlgorithm {
        match self {
            Self::HmacSha1 => MacAlgorithm::HmacSha1,
            Self::HmacSha256 => MacAlgorithm::HmacSha256,
        }
    }

    /// Length of the MAC field
    pub const fn tag_len(self) -> usize {
        self.algorithm().hash_len()
    }

    /// Length of a complete cookie in this format
    pub const fn marshalled_len(self) -> usize {
        MAC_OFFSET + self.tag_len()
    }

    /// Name used in configuration files and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::HmacSha1 => "hmac-sha1",
            Self::HmacSha256 => "hmac-sha256",
        }
    }
}

const_assert!(Format::HmacSha1.marshalled_len() == 29);
const_assert!(Format::HmacSha256.tag_len() <= MAX_HASH_LEN);

impl TryFrom<u8> for Format {
    type Error = CookieError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_tag(tag).ok_or(CookieError::UnknownFormat(tag))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a [Format] from an unknown name
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cookie format {0:?}, expected one of: hmac-sha1, hmac-sha256")]
pub struct ParseFormatError(pub String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFormatError(s.to_owned()))
    }
}

/// The bytes a cookie's MAC is computed over
pub const fn encode_timestamp(timestamp: u64) -> [u8; TIMESTAMP_LEN] {
    timestamp.to_le_bytes()
}

/// Write the wire representation of a cookie to `out`, replacing its contents
pub(crate) fn encode(format: Format, timestamp: u64, mac: &[u8], out: &mut Vec<u8>) {
    debug_assert_eq!(mac.len(), format.tag_len());
    out.clear();
    out.reserve_exact(format.marshalled_len());
    out.push(format.tag());
    out.extend_from_slice(&encode_timestamp(timestamp));
    out.extend_from_slice(mac);
}

/// The fields of a framed cookie, before its MAC is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decoded<'a> {
    pub format: Format,
    pub timestamp: u64,
    pub mac: &'a [u8],
}

/// Split `bytes` into the fields of a cookie
///
/// Fails with [CookieError::MalformedCookie] if `bytes` is shorter than any cookie
/// can be or does not have exactly the length its format prescribes, and with
/// [CookieError::UnknownFormat] if the tag byte names no supported format.
pub(crate) fn decode(bytes: &[u8]) -> Result<Decoded<'_>> {
    CookieError::check_min_length(bytes.len(), MIN_FRAMED_LEN)?;
    let format = Format::try_from(bytes[TAG_OFFSET])?;
    CookieError::check_length(bytes.len(), format.marshalled_len())?;

    let mut timestamp = [0u8; TIMESTAMP_LEN];
    timestamp.copy_from_slice(&bytes[TIMESTAMP_OFFSET..MAC_OFFSET]);

    Ok(Decoded {
        format,
        timestamp: u64::from_le_bytes(timestamp),
        mac: &bytes[MAC_OFFSET..],
    })
}
