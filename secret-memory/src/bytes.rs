use std::fmt;
use std::io::Write;
use std::path::Path;

use anyhow::{ensure, Context};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use mir_cookie_util::b64::{b64_decode_vec, b64_encode, b64_encoded_len};
use mir_cookie_util::file::{fopen_r, fopen_w, read_small_file, LoadValueB64, Visibility};

use crate::file::StoreSecret;

/// Variable-length secret, e.g. a secret exported by a cookie authority
///
/// Wiped when dropped; the [Debug](fmt::Debug) implementation prints `<SECRET>`.
#[derive(Default, Clone)]
pub struct SecretBytes {
    value: Vec<u8>,
}

impl SecretBytes {
    /// Take ownership of `value`
    pub fn new(value: Vec<u8>) -> Self {
        Self { value }
    }

    /// Copy `value` into a new [SecretBytes]
    pub fn from_slice(value: &[u8]) -> Self {
        Self::new(value.to_vec())
    }

    pub fn secret(&self) -> &[u8] {
        &self.value
    }

    /// Mutable access to the underlying vector, e.g. to use it as an out parameter
    pub fn secret_vec_mut(&mut self) -> &mut Vec<u8> {
        &mut self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl ZeroizeOnDrop for SecretBytes {}
impl Zeroize for SecretBytes {
    fn zeroize(&mut self) {
        self.value.zeroize()
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.zeroize()
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("<SECRET>")
    }
}

impl LoadValueB64 for SecretBytes {
    type Error = anyhow::Error;

    fn load_b64<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let p = path.as_ref();
        let mut text = Zeroizing::new(Vec::new());
        read_small_file(fopen_r(p)?, &mut text)
            .with_context(|| format!("Could not load base64 file {p:?}"))?;

        let trimmed = text.trim_ascii();
        ensure!(!trimmed.is_empty(), "Secret file {p:?} is empty");
        let value = b64_decode_vec(trimmed)
            .with_context(|| format!("Could not decode base64 file {p:?}"))?;
        Ok(Self::new(value))
    }
}

impl StoreSecret for SecretBytes {
    type Error = anyhow::Error;

    fn store_secret<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let mut encoded = Zeroizing::new(vec![0u8; b64_encoded_len(self.len())]);
        let text = b64_encode(self.secret(), &mut encoded)?;
        let mut file = fopen_w(path, Visibility::Secret)?;
        file.write_all(text.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }
}
