#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
//! constant-time implementations of some primitives
//!
//! Internal library of the cookie authority providing the few constant-time
//! operations that MAC verification needs.
//!
//! # Examples
//!
//! ```rust
//! use mir_cookie_constant_time::{memcmp, xor};
//!
//! let a = [1, 2, 3, 4];
//! let b = [1, 2, 3, 4];
//! let c = [1, 2, 3, 5];
//!
//! // Compare for equality
//! assert!(memcmp(&a, &b));
//! assert!(!memcmp(&a, &c));
//!
//! // Xor one buffer into another
//! let mut d = a;
//! xor(&c, &mut d);
//! assert_eq!(d, [0, 0, 0, 1]);
//! ```
//!
//! # Security Notes
//!
//! While these functions aim to be constant-time, they may leak timing information in some cases:
//!
//! - Length mismatches between inputs are immediately detectable
//! - Execution time scales linearly with input size

mod memcmp;
mod xor;

pub use memcmp::memcmp;
pub use xor::xor;
