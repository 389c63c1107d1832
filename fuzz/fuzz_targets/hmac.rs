#![no_main]
extern crate arbitrary;
extern crate mir_cookie_ciphers;

use libfuzzer_sys::fuzz_target;

use mir_cookie_ciphers::{MacAlgorithm, MAX_HASH_LEN};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub secret: Box<[u8]>,
    pub data: Box<[u8]>,
}

fuzz_target!(|input: Input| {
    for alg in [MacAlgorithm::HmacSha1, MacAlgorithm::HmacSha256] {
        let key = alg.normalize_key(&input.secret);

        let mut a = [0u8; MAX_HASH_LEN];
        let mut b = [0u8; MAX_HASH_LEN];
        alg.mac(&key, &input.data, &mut a[..alg.hash_len()]);
        alg.mac(&key, &input.data, &mut b[..alg.hash_len()]);
        assert_eq!(a, b);
    }
});
