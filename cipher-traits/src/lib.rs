//! Traits for the cryptographic building blocks of the cookie authority.

pub mod primitives;

pub use primitives::*;
