#![no_main]
extern crate arbitrary;
extern crate mir_cookie;

use libfuzzer_sys::fuzz_target;

use mir_cookie::{CookieAuthority, CookieError, Format};

const SECRET: [u8; 8] = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0xde, 0x01];

fuzz_target!(|input: &[u8]| {
    for format in Format::ALL {
        let authority = CookieAuthority::from_secret_with_format(&SECRET, format).unwrap();
        match authority.parse(input) {
            // only possible if the input is a genuine cookie
            Ok(cookie) => assert_eq!(cookie.marshal(), input),
            Err(CookieError::MalformedCookie { .. })
            | Err(CookieError::UnknownFormat(_))
            | Err(CookieError::SecurityCheckFailed) => {}
            Err(e) => panic!("unexpected error {e:?}"),
        }
    }
});
