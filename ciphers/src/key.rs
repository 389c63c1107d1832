//! Key normalization as done by the HMAC key schedule.
//!
//! Secrets shorter than the block size are padded with zeros on the right;
//! longer secrets are first replaced by their digest. The result is always
//! exactly [KEY_LEN] bytes and lives in zero-on-drop memory.

use mir_cookie_cipher_traits::primitives::Hash;
use mir_cookie_secret_memory::Secret;

use crate::KEY_LEN;

/// Normalize `secret` to a [KEY_LEN] byte HMAC key using the hash function `H`
///
/// # Examples
///
/// ```rust
/// use mir_cookie_ciphers::{hmac_sha1, key::normalize_key};
///
/// let key = normalize_key::<hmac_sha1::Digest, { hmac_sha1::HASH_LEN }>(b"short");
/// assert_eq!(&key.secret()[..5], b"short");
/// assert!(key.secret()[5..].iter().all(|b| *b == 0));
/// ```
pub fn normalize_key<H, const HASH_LEN: usize>(secret: &[u8]) -> Secret<KEY_LEN>
where
    H: Hash<HASH_LEN>,
{
    let mut key = Secret::<KEY_LEN>::zero();
    if secret.len() > KEY_LEN {
        let mut digest = Secret::<HASH_LEN>::zero();
        H::hash(secret, digest.secret_mut());
        key.secret_mut()[..HASH_LEN].copy_from_slice(digest.secret());
    } else {
        key.secret_mut()[..secret.len()].copy_from_slice(secret);
    }
    key
}
