use std::fmt;

/// Number of bytes shown at either end of a long array
const EDGE: usize = 16;

/// Writes the contents of an `&[u8]` as hexadecimal symbols to a [std::fmt::Formatter],
/// prefixed with the length. Long arrays are shortened in the middle.
///
/// Only use this for public data such as MAC tags; secrets print as `<SECRET>`.
pub fn debug_crypto_array(v: &[u8], fmt: &mut fmt::Formatter) -> fmt::Result {
    write!(fmt, "[{}]=", v.len())?;
    let (head, tail) = match v.len() > 2 * EDGE {
        true => (&v[..EDGE], Some(&v[v.len() - EDGE..])),
        false => (v, None),
    };
    for byte in head {
        write!(fmt, "{byte:02x}")?;
    }
    if let Some(tail) = tail {
        fmt.write_str("…")?;
        for byte in tail {
            write!(fmt, "{byte:02x}")?;
        }
    }
    Ok(())
}
