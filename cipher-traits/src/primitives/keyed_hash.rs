/// Models a keyed hash function using an associated function (i.e. without `&self` receiver).
pub trait KeyedHash<const KEY_LEN: usize, const HASH_LEN: usize> {
    /// The error type used to signal what went wrong.
    type Error;

    /// Performs a keyed hash using `key` and `data` and writes the output to `out`
    fn keyed_hash(
        key: &[u8; KEY_LEN],
        data: &[u8],
        out: &mut [u8; HASH_LEN],
    ) -> Result<(), Self::Error>;
}

/// Models a keyed hash function using a method (i.e. with a `&self` receiver).
///
/// Unlike [KeyedHash] the output length is only known at runtime, which allows
/// choosing between algorithms with differently sized outputs through a value.
pub trait KeyedHashInstance<const KEY_LEN: usize> {
    /// The error type used to signal what went wrong.
    type Error;

    /// Length of the output this instance produces
    fn hash_len(&self) -> usize;

    /// Performs a keyed hash using `key` and `data` and writes the output to `out`.
    ///
    /// `out` must be exactly [Self::hash_len] bytes long.
    fn keyed_hash(&self, key: &[u8; KEY_LEN], data: &[u8], out: &mut [u8])
        -> Result<(), Self::Error>;
}
