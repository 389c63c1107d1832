//! HMAC (RFC 2104) over any [Hash] whose block size is [KEY_LEN].
//!
//! The key handed to [KeyedHash::keyed_hash] must already be normalized to the
//! block size (see [crate::key]). This lets callers store the normalized key
//! and skip the key schedule on every invocation.

use std::convert::Infallible;
use std::marker::PhantomData;

use mir_cookie_cipher_traits::primitives::{Hash, KeyedHash};
use mir_cookie_constant_time::xor;
use zeroize::Zeroizing;

use crate::subtle::rust_crypto::{sha1::Sha1, sha256::Sha256};
use crate::KEY_LEN;

const IPAD: [u8; KEY_LEN] = [0x36u8; KEY_LEN];
const OPAD: [u8; KEY_LEN] = [0x5Cu8; KEY_LEN];

/// HMAC instantiated with the hash function `H`
///
/// # Examples
///
/// ```rust
/// use mir_cookie_ciphers::hmac_sha1;
/// use mir_cookie_cipher_traits::primitives::KeyedHash;
///
/// // RFC 2202, test case 1; the key is zero padded to the block size
/// let mut key = [0u8; 64];
/// key[..20].copy_from_slice(&[0x0b; 20]);
///
/// let mut tag = [0u8; hmac_sha1::HASH_LEN];
/// hmac_sha1::Mac::keyed_hash(&key, b"Hi There", &mut tag)?;
/// assert_eq!(tag[..4], [0xb6, 0x17, 0x31, 0x86]);
/// # Ok::<(), std::convert::Infallible>(())
/// ```
pub struct Hmac<H, const HASH_LEN: usize> {
    _phantom_hash: PhantomData<H>,
}

impl<H, const HASH_LEN: usize> KeyedHash<KEY_LEN, HASH_LEN> for Hmac<H, HASH_LEN>
where
    H: Hash<HASH_LEN>,
{
    type Error = Infallible;

    fn keyed_hash(
        key: &[u8; KEY_LEN],
        data: &[u8],
        out: &mut [u8; HASH_LEN],
    ) -> Result<(), Self::Error> {
        debug_assert_eq!(H::BLOCK_LEN, KEY_LEN);

        let mut pad = Zeroizing::new([0u8; KEY_LEN]);
        let mut inner = Zeroizing::new([0u8; HASH_LEN]);

        pad.copy_from_slice(key);
        xor(&IPAD, &mut pad[..]);
        H::hash_concat(&[&pad[..], data], &mut inner);

        pad.copy_from_slice(key);
        xor(&OPAD, &mut pad[..]);
        H::hash_concat(&[&pad[..], &inner[..]], out);

        Ok(())
    }
}

/// HMAC-SHA-1 with 64 byte keys and 20 byte tags
pub type HmacSha1 = Hmac<Sha1, { crate::subtle::rust_crypto::sha1::HASH_LEN }>;

/// HMAC-SHA-256 with 64 byte keys and 32 byte tags
pub type HmacSha256 = Hmac<Sha256, { crate::subtle::rust_crypto::sha256::HASH_LEN }>;
