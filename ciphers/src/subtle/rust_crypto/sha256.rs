use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256 as Impl};

use mir_cookie_cipher_traits::primitives::Hash;

/// The SHA-256 block size, 64 bytes.
pub const BLOCK_LEN: usize = 64;
/// The SHA-256 output length, 32 bytes.
pub const HASH_LEN: usize = 32;

/// SHA-256 as provided by the [sha2] crate.
pub struct Sha256;

impl Hash<HASH_LEN> for Sha256 {
    const BLOCK_LEN: usize = BLOCK_LEN;

    fn hash_concat(parts: &[&[u8]], out: &mut [u8; HASH_LEN]) {
        let mut h = Impl::new();
        for part in parts {
            h.update(part);
        }
        h.finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    }
}
