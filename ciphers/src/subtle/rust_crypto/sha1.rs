use ::sha1::digest::generic_array::GenericArray;
use ::sha1::{Digest, Sha1 as Impl};

use mir_cookie_cipher_traits::primitives::Hash;

/// The SHA-1 block size, 64 bytes.
pub const BLOCK_LEN: usize = 64;
/// The SHA-1 output length, 20 bytes.
pub const HASH_LEN: usize = 20;

/// SHA-1 as provided by the [sha1] crate.
pub struct Sha1;

impl Hash<HASH_LEN> for Sha1 {
    const BLOCK_LEN: usize = BLOCK_LEN;

    fn hash_concat(parts: &[&[u8]], out: &mut [u8; HASH_LEN]) {
        let mut h = Impl::new();
        for part in parts {
            h.update(part);
        }
        h.finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    }
}
