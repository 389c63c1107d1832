//! Implementations backed by RustCrypto

pub mod sha1;
pub mod sha256;
