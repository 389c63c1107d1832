use static_assertions::const_assert;

pub mod key;
pub mod keyed_hash;
pub mod subtle;

pub use keyed_hash::MacAlgorithm;

/// All MAC keys in this crate are normalized to 64 bytes, the block size of
/// SHA-1 and SHA-256
pub const KEY_LEN: usize = 64;
const_assert!(KEY_LEN == hmac_sha1::BLOCK_LEN);
const_assert!(KEY_LEN == hmac_sha256::BLOCK_LEN);

/// Length of the longest tag any supported MAC produces
pub const MAX_HASH_LEN: usize = 32;
const_assert!(MAX_HASH_LEN >= hmac_sha1::HASH_LEN);
const_assert!(MAX_HASH_LEN >= hmac_sha256::HASH_LEN);

/// HMAC-SHA-1; the baseline cookie MAC
pub mod hmac_sha1 {
    pub use crate::subtle::hmac::HmacSha1 as Mac;
    pub use crate::subtle::rust_crypto::sha1::{Sha1 as Digest, BLOCK_LEN, HASH_LEN};
}

/// HMAC-SHA-256
pub mod hmac_sha256 {
    pub use crate::subtle::hmac::HmacSha256 as Mac;
    pub use crate::subtle::rust_crypto::sha256::{Sha256 as Digest, BLOCK_LEN, HASH_LEN};
}
