mod hash;
mod keyed_hash;

pub use hash::*;
pub use keyed_hash::*;
