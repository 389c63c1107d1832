/// Models an unkeyed hash function with a fixed output length.
pub trait Hash<const HASH_LEN: usize> {
    /// Size of the blocks the compression function consumes, in bytes.
    const BLOCK_LEN: usize;

    /// Hashes the concatenation of all `parts` and writes the digest to `out`
    fn hash_concat(parts: &[&[u8]], out: &mut [u8; HASH_LEN]);

    /// Hashes `data` and writes the digest to `out`
    fn hash(data: &[u8], out: &mut [u8; HASH_LEN]) {
        Self::hash_concat(&[data], out)
    }
}
