//! xor

use core::hint::black_box;

/// Xors `src` into `dst`, in place.
///
/// # Panics
/// If source and destination are of different sizes.
///
/// # Leaks
/// This function may leak timing information in the following ways:
///
/// - The function execution time is linearly proportional to the input length
/// - Length mismatches between source and destination are immediately detectable via panic
///
/// Neither reveals anything about the contents being xored.
///
/// # Examples
///
/// ```
/// use mir_cookie_constant_time::xor;
/// let mut buf = b"hello".to_vec();
/// xor(b"world", &mut buf);
/// assert_eq!(buf, b"\x1f\n\x1e\x00\x0b");
/// ```
#[inline]
pub fn xor(src: &[u8], dst: &mut [u8]) {
    assert!(black_box(src.len()) == black_box(dst.len()));
    for (dv, sv) in dst.iter_mut().zip(src.iter()) {
        *black_box(dv) ^= black_box(*sv);
    }
}
