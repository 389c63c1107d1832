use std::fmt;

use mir_cookie_ciphers::MAX_HASH_LEN;
use mir_cookie_constant_time::memcmp;
use mir_cookie_secret_memory::debug::debug_crypto_array;

use crate::format::{self, Format};

/// A timestamp together with the MAC attesting it
///
/// Cookies are only created by a [CookieAuthority](crate::CookieAuthority), either
/// by [issuing](crate::CookieAuthority::issue) one or by
/// [parsing](crate::CookieAuthority::parse) and verifying received bytes. They
/// cannot be modified afterwards.
///
/// Equality compares the MAC in constant time.
#[derive(Clone)]
pub struct Cookie {
    timestamp: u64,
    /// Only the first `format.tag_len()` bytes are used, the rest stays zero
    mac: [u8; MAX_HASH_LEN],
    format: Format,
}

impl Cookie {
    /// # Panics
    ///
    /// If `mac` does not have the length of a tag in `format`.
    pub(crate) fn from_parts(timestamp: u64, mac: &[u8], format: Format) -> Self {
        assert_eq!(mac.len(), format.tag_len());
        let mut buf = [0u8; MAX_HASH_LEN];
        buf[..mac.len()].copy_from_slice(mac);
        Self {
            timestamp,
            mac: buf,
            format,
        }
    }

    /// The attested timestamp
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The MAC over the timestamp
    pub fn mac(&self) -> &[u8] {
        &self.mac[..self.format.tag_len()]
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Length of [Self::marshal]'s output
    pub fn marshalled_len(&self) -> usize {
        self.format.marshalled_len()
    }

    /// The wire representation of this cookie, to be read back with
    /// [CookieAuthority::parse](crate::CookieAuthority::parse)
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.marshal_into(&mut out);
        out
    }

    /// Like [Self::marshal], reusing the allocation of `out`
    pub fn marshal_into(&self, out: &mut Vec<u8>) {
        format::encode(self.format, self.timestamp, self.mac(), out)
    }
}

impl PartialEq for Cookie {
    fn eq(&self, other: &Self) -> bool {
        // evaluate all three comparisons; the mac one is constant time
        let same_mac = memcmp(&self.mac, &other.mac);
        let same_timestamp = self.timestamp == other.timestamp;
        let same_format = self.format == other.format;
        same_mac & same_timestamp & same_format
    }
}

impl Eq for Cookie {}

impl fmt::Debug for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Mac<'a>(&'a [u8]);
        impl fmt::Debug for Mac<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                debug_crypto_array(self.0, f)
            }
        }

        f.debug_struct("Cookie")
            .field("timestamp", &format_args!("{:#018x}", self.timestamp))
            .field("mac", &Mac(self.mac()))
            .field("format", &self.format)
            .finish()
    }
}
