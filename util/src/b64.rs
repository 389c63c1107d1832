use base64ct::{Base64, Encoder as B64Writer, Encoding};
use zeroize::Zeroize;

use std::fmt::Display;

/// Length of the padded base64 representation of `len` bytes
pub const fn b64_encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Upper bound for the number of bytes a base64 string of length `len` decodes to
pub const fn b64_decoded_len_bound(len: usize) -> usize {
    len.div_ceil(4) * 3
}

pub struct B64DisplayHelper<'a, const F: usize>(&'a [u8]);

impl<const F: usize> Display for B64DisplayHelper<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut bytes = [0u8; F];
        let string = b64_encode(self.0, &mut bytes).map_err(|_| std::fmt::Error)?;
        let result = f.write_str(string);
        bytes.zeroize();
        result
    }
}

/// Formats byte sequences as base64 without allocating; `F` is the size of the
/// stack buffer used for the encoded text.
///
/// ```
/// use mir_cookie_util::b64::B64Display;
/// assert_eq!(format!("{}", b"cookie".fmt_b64::<16>()), "Y29va2ll");
/// ```
pub trait B64Display {
    fn fmt_b64<const F: usize>(&self) -> B64DisplayHelper<'_, F>;
}

impl<T: AsRef<[u8]> + ?Sized> B64Display for T {
    fn fmt_b64<const F: usize>(&self) -> B64DisplayHelper<'_, F> {
        B64DisplayHelper(self.as_ref())
    }
}

/// Decode `input` into the front of `output`, returning the decoded part.
pub fn b64_decode<'o>(input: &[u8], output: &'o mut [u8]) -> anyhow::Result<&'o [u8]> {
    let decoded = Base64::decode(input, output).map_err(|e| anyhow::anyhow!(e))?;
    Ok(decoded)
}

/// Decode `input` into a freshly allocated vector
pub fn b64_decode_vec(input: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut buf = vec![0u8; b64_decoded_len_bound(input.len())];
    let len = b64_decode(input, &mut buf)?.len();
    buf.truncate(len);
    Ok(buf)
}

pub fn b64_encode<'o>(input: &[u8], output: &'o mut [u8]) -> anyhow::Result<&'o str> {
    let mut writer = B64Writer::<Base64>::new(output).map_err(|e| anyhow::anyhow!(e))?;
    writer.encode(input).map_err(|e| anyhow::anyhow!(e))?;
    writer.finish().map_err(|e| anyhow::anyhow!(e))
}
