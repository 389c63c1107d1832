pub mod debug;
pub mod file;

mod bytes;
pub use crate::bytes::SecretBytes;

mod secret;
pub use crate::secret::Secret;
