//! This module provides types that enable choosing the MAC to be used at
//! runtime (using enums) instead of at compile time (using generics).

use std::convert::Infallible;
use std::fmt::Display;

use mir_cookie_cipher_traits::primitives::{KeyedHash, KeyedHashInstance};
use mir_cookie_secret_memory::Secret;

use crate::key::normalize_key;
use crate::{hmac_sha1, hmac_sha256, KEY_LEN};

/// Provides a way to pick which MAC to use at runtime.
/// Implements [`KeyedHashInstance`] to allow hashing using the respective algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
    /// HMAC over SHA-1, 20 byte tags
    HmacSha1,
    /// HMAC over SHA-256, 32 byte tags
    HmacSha256,
}

impl MacAlgorithm {
    /// Length of the tags produced by this algorithm
    pub const fn hash_len(self) -> usize {
        match self {
            Self::HmacSha1 => hmac_sha1::HASH_LEN,
            Self::HmacSha256 => hmac_sha256::HASH_LEN,
        }
    }

    /// Block size of the underlying digest; this is also the size of a normalized key
    pub const fn block_len(self) -> usize {
        match self {
            Self::HmacSha1 => hmac_sha1::BLOCK_LEN,
            Self::HmacSha256 => hmac_sha256::BLOCK_LEN,
        }
    }

    /// Turn a secret of arbitrary length into a key for [Self::mac]
    pub fn normalize_key(self, secret: &[u8]) -> Secret<KEY_LEN> {
        match self {
            Self::HmacSha1 => normalize_key::<hmac_sha1::Digest, { hmac_sha1::HASH_LEN }>(secret),
            Self::HmacSha256 => {
                normalize_key::<hmac_sha256::Digest, { hmac_sha256::HASH_LEN }>(secret)
            }
        }
    }

    /// Compute the tag of `data` under the normalized `key`
    ///
    /// # Panics
    ///
    /// If `out` is not exactly [Self::hash_len] bytes long.
    pub fn mac(self, key: &Secret<KEY_LEN>, data: &[u8], out: &mut [u8]) {
        match self.keyed_hash(key.secret(), data, out) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl KeyedHashInstance<KEY_LEN> for MacAlgorithm {
    type Error = Infallible;

    fn hash_len(&self) -> usize {
        MacAlgorithm::hash_len(*self)
    }

    fn keyed_hash(
        &self,
        key: &[u8; KEY_LEN],
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), Self::Error> {
        match self {
            Self::HmacSha1 => hmac_sha1::Mac::keyed_hash(key, data, fixed_len(out)),
            Self::HmacSha256 => hmac_sha256::Mac::keyed_hash(key, data, fixed_len(out)),
        }
    }
}

/// View `out` as a fixed size array, panicking on length mismatch
fn fixed_len<const N: usize>(out: &mut [u8]) -> &mut [u8; N] {
    let len = out.len();
    out.try_into()
        .unwrap_or_else(|_| panic!("MAC output buffer has {len} bytes, expected {N}"))
}

impl Display for MacAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HmacSha1 => write!(f, "HMAC-SHA-1"),
            Self::HmacSha256 => write!(f, "HMAC-SHA-256"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn mac(alg: MacAlgorithm, secret: &[u8], data: &[u8]) -> Vec<u8> {
        let key = alg.normalize_key(secret);
        let mut out = vec![0u8; alg.hash_len()];
        alg.mac(&key, data, &mut out);
        out
    }

    #[test]
    fn rfc2202_hmac_sha1() {
        let alg = MacAlgorithm::HmacSha1;
        assert_eq!(
            mac(alg, &[0x0b; 20], b"Hi There"),
            hex!("b617318655057264e28bc0b6fb378c8ef146be00")
        );
        assert_eq!(
            mac(alg, b"Jefe", b"what do ya want for nothing?"),
            hex!("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79")
        );
        assert_eq!(
            mac(alg, &[0xaa; 20], &[0xdd; 50]),
            hex!("125d7342b9ac11cd91a39af48aa17b4f63f175d3")
        );
    }

    #[test]
    fn rfc2202_hmac_sha1_long_key() {
        let alg = MacAlgorithm::HmacSha1;
        assert_eq!(
            mac(
                alg,
                &[0xaa; 80],
                b"Test Using Larger Than Block-Size Key - Hash Key First"
            ),
            hex!("aa4ae5e15272d00e95705637ce8a3b55ed402112")
        );
        assert_eq!(
            mac(
                alg,
                &[0xaa; 80],
                b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data"
            ),
            hex!("e8e99d0f45237d786d6bbaa7965c7808bbff1a91")
        );
    }

    #[test]
    fn rfc4231_hmac_sha256() {
        let alg = MacAlgorithm::HmacSha256;
        assert_eq!(
            mac(alg, &[0x0b; 20], b"Hi There"),
            hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
        );
        assert_eq!(
            mac(alg, b"Jefe", b"what do ya want for nothing?"),
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );
        assert_eq!(
            mac(
                alg,
                &[0xaa; 131],
                b"Test Using Larger Than Block-Size Key - Hash Key First"
            ),
            hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
        );
    }

    #[test]
    fn lengths() {
        assert_eq!(MacAlgorithm::HmacSha1.hash_len(), 20);
        assert_eq!(MacAlgorithm::HmacSha256.hash_len(), 32);
        assert_eq!(MacAlgorithm::HmacSha1.block_len(), KEY_LEN);
        assert_eq!(MacAlgorithm::HmacSha256.block_len(), KEY_LEN);
    }

    #[test]
    #[should_panic]
    fn wrong_output_length_panics() {
        let alg = MacAlgorithm::HmacSha1;
        let key = alg.normalize_key(&[1; 8]);
        let mut out = [0u8; 32];
        alg.mac(&key, b"data", &mut out);
    }
}
