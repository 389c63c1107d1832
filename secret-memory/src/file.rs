use std::path::Path;

pub trait StoreSecret {
    type Error;

    /// Store the secret in a file readable only by its owner
    fn store_secret<P: AsRef<Path>>(&self, path: P) -> Result<(), Self::Error>;
}
