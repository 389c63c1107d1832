//! Implementations of the primitives; use the re-exports in the crate root instead
//! of reaching in here directly.

pub mod hmac;
pub mod rust_crypto;
