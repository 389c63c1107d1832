#![no_main]
extern crate arbitrary;
extern crate mir_cookie;

use libfuzzer_sys::fuzz_target;

use mir_cookie::{CookieAuthority, Format};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub secret: Box<[u8]>,
    pub timestamp: u64,
    pub sha256: bool,
}

fuzz_target!(|input: Input| {
    let format = match input.sha256 {
        true => Format::HmacSha256,
        false => Format::HmacSha1,
    };
    let Ok(authority) = CookieAuthority::from_secret_with_format(&input.secret, format) else {
        assert!(input.secret.len() < CookieAuthority::MIN_SECRET);
        return;
    };

    let cookie = authority.issue(input.timestamp);
    let parsed = authority.parse(&cookie.marshal()).unwrap();
    assert_eq!(parsed.timestamp(), input.timestamp);
    assert_eq!(parsed, cookie);
});
