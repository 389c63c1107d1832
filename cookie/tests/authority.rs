use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha1::{Digest, Sha1};

use mir_cookie::{CookieAuthority, CookieError, Format, RngEntropy, MIN_SECRET, OPT_SECRET};

const ALICE: [u8; 8] = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0xde, 0x01];
const BOB: [u8; 8] = [0x01, 0x02, 0x44, 0xd8, 0xee, 0x0f, 0xde, 0x01];

/// Timestamps covering the edges and some random values in between
fn timestamps() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut ts = vec![0, 1, 23, 0x0102_0304, 0x0000_3223_2232_2332, u64::MAX - 1, u64::MAX];
    ts.extend((0..64).map(|_| rng.gen::<u64>()));
    ts
}

#[test]
fn attests_real_timestamp() -> anyhow::Result<()> {
    let authority = CookieAuthority::from_secret(&ALICE)?;
    let cookie = authority.issue(0x0000_3223_2232_2332);

    let parsed = authority.parse(&cookie.marshal())?;
    assert_eq!(parsed.timestamp(), 0x0000_3223_2232_2332);
    assert_eq!(parsed, cookie);
    Ok(())
}

#[test]
fn doesnt_attest_faked_mac() -> anyhow::Result<()> {
    let authority = CookieAuthority::from_secret(&ALICE)?;
    assert!(matches!(
        authority.parse(&ALICE),
        Err(CookieError::MalformedCookie { len: 8, .. })
    ));
    Ok(())
}

#[test]
fn timestamp_trusted_with_different_secret_doesnt_attest() -> anyhow::Result<()> {
    let alice = CookieAuthority::from_secret(&ALICE)?;
    let bob = CookieAuthority::from_secret(&BOB)?;

    let alices_cookie = alice.issue(0x0102_0304);
    let bobs_cookie = bob.issue(0x0102_0304);

    assert!(matches!(
        alice.parse(&bobs_cookie.marshal()),
        Err(CookieError::SecurityCheckFailed)
    ));
    assert!(matches!(
        bob.parse(&alices_cookie.marshal()),
        Err(CookieError::SecurityCheckFailed)
    ));
    Ok(())
}

#[test]
fn throw_when_secret_size_too_small() {
    let short = vec![0x5au8; MIN_SECRET - 1];
    assert!(matches!(
        CookieAuthority::from_secret(&short),
        Err(CookieError::InvalidSecret { len: 7, min: 8 })
    ));
    assert!(matches!(
        CookieAuthority::from_secret(&[]),
        Err(CookieError::InvalidSecret { len: 0, .. })
    ));
    assert!(CookieAuthority::from_secret(&[0x5a; MIN_SECRET]).is_ok());
}

#[test]
fn timestamp_trusted_with_saved_secret_does_attest() -> anyhow::Result<()> {
    let mut secret = Vec::new();
    let source = CookieAuthority::saving_secret(&mut secret)?;
    assert_eq!(secret.len(), CookieAuthority::optimal_secret_size());

    let sink = CookieAuthority::from_secret(&secret)?;
    let cookie = source.issue(23);
    assert_eq!(sink.parse(&cookie.marshal())?, cookie);
    assert_eq!(sink.issue(23), cookie);
    Ok(())
}

#[test]
fn kept_secret_is_private() -> anyhow::Result<()> {
    let keeper = CookieAuthority::keeping_secret()?;
    let cookie = keeper.issue(0x0102_0304);
    assert_eq!(keeper.parse(&cookie.marshal())?.timestamp(), 0x0102_0304);

    let other_keeper = CookieAuthority::keeping_secret()?;
    let mut saved = Vec::new();
    let saver = CookieAuthority::saving_secret(&mut saved)?;
    for outsider in [
        other_keeper,
        saver,
        CookieAuthority::from_secret(&ALICE)?,
        CookieAuthority::from_secret(&[0u8; OPT_SECRET])?,
    ] {
        assert!(matches!(
            outsider.parse(&cookie.marshal()),
            Err(CookieError::SecurityCheckFailed)
        ));
    }
    Ok(())
}

#[test]
fn optimal_secret_size_is_larger_than_minimum_size() {
    assert!(CookieAuthority::optimal_secret_size() >= CookieAuthority::MIN_SECRET);
    assert_eq!(CookieAuthority::MIN_SECRET, 8);
    assert_eq!(CookieAuthority::optimal_secret_size(), 64);
}

#[test]
fn round_trip_for_all_formats() -> anyhow::Result<()> {
    for format in Format::ALL {
        let authority = CookieAuthority::from_secret_with_format(&ALICE, format)?;
        for t in timestamps() {
            let cookie = authority.issue(t);
            assert_eq!(cookie.marshal().len(), format.marshalled_len());

            let parsed = authority.parse(&cookie.marshal())?;
            assert_eq!(parsed.timestamp(), t);
            assert_eq!(parsed, cookie);
        }
    }
    Ok(())
}

#[test]
fn equal_secrets_give_equal_authorities() -> anyhow::Result<()> {
    let a = CookieAuthority::from_secret(&ALICE)?;
    let b = CookieAuthority::from_secret(&ALICE.to_vec())?;
    for t in timestamps() {
        assert_eq!(b.parse(&a.issue(t).marshal())?, a.issue(t));
    }
    Ok(())
}

#[test]
fn distinct_secrets_reject_each_other() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(0xb0b);
    for _ in 0..16 {
        let len = rng.gen_range(MIN_SECRET..=2 * OPT_SECRET);
        let secret: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let other = CookieAuthority::from_secret(&secret)?;
        let alice = CookieAuthority::from_secret(&ALICE)?;

        for t in timestamps().into_iter().take(8) {
            assert!(matches!(
                other.parse(&alice.issue(t).marshal()),
                Err(CookieError::SecurityCheckFailed)
            ));
        }
    }
    Ok(())
}

#[test]
fn tampered_cookies_fail_security_check() -> anyhow::Result<()> {
    for format in Format::ALL {
        let authority = CookieAuthority::from_secret_with_format(&ALICE, format)?;
        let wire = authority.issue(0x0000_3223_2232_2332).marshal();

        // every bit of timestamp and mac is covered by the mac
        for byte in 1..wire.len() {
            for bit in 0..8 {
                let mut forged = wire.clone();
                forged[byte] ^= 1 << bit;
                assert!(
                    matches!(
                        authority.parse(&forged),
                        Err(CookieError::SecurityCheckFailed)
                    ),
                    "flipping bit {bit} of byte {byte} went unnoticed"
                );
            }
        }

        let mut zeroed = wire.clone();
        zeroed[1..].fill(0);
        assert!(matches!(
            authority.parse(&zeroed),
            Err(CookieError::SecurityCheckFailed)
        ));
    }
    Ok(())
}

#[test]
fn malformed_input_is_reported_before_verification() -> anyhow::Result<()> {
    let authority = CookieAuthority::from_secret(&ALICE)?;
    let wire = authority.issue(5).marshal();

    assert!(matches!(
        authority.parse(&[]),
        Err(CookieError::MalformedCookie { len: 0, .. })
    ));
    assert!(matches!(
        authority.parse(&wire[..28]),
        Err(CookieError::MalformedCookie { len: 28, .. })
    ));

    let mut trailing = wire.clone();
    trailing.push(0);
    assert!(matches!(
        authority.parse(&trailing),
        Err(CookieError::MalformedCookie {
            len: 30,
            expected: 29
        })
    ));

    let mut unknown = wire.clone();
    unknown[0] = 0x7f;
    assert!(matches!(
        authority.parse(&unknown),
        Err(CookieError::UnknownFormat(0x7f))
    ));

    // failures do not disturb the authority
    assert_eq!(authority.parse(&wire)?.timestamp(), 5);
    Ok(())
}

#[test]
fn other_format_does_not_verify() -> anyhow::Result<()> {
    let sha1 = CookieAuthority::from_secret_with_format(&ALICE, Format::HmacSha1)?;
    let sha256 = CookieAuthority::from_secret_with_format(&ALICE, Format::HmacSha256)?;

    assert!(matches!(
        sha1.parse(&sha256.issue(9).marshal()),
        Err(CookieError::SecurityCheckFailed)
    ));
    assert!(matches!(
        sha256.parse(&sha1.issue(9).marshal()),
        Err(CookieError::SecurityCheckFailed)
    ));
    Ok(())
}

#[test]
fn wire_format_is_little_endian() -> anyhow::Result<()> {
    let authority = CookieAuthority::from_secret(&ALICE)?;
    let cookie = authority.issue(0x0000_3223_2232_2332);
    let wire = cookie.marshal();

    assert_eq!(wire.len(), 29);
    assert_eq!(wire[0], Format::HmacSha1.tag());
    assert_eq!(wire[1..9], [0x32, 0x23, 0x32, 0x22, 0x23, 0x32, 0x00, 0x00]);
    assert_eq!(&wire[9..], cookie.mac());
    Ok(())
}

#[test]
fn short_secrets_are_zero_padded() -> anyhow::Result<()> {
    let mut padded = ALICE.to_vec();
    padded.resize(OPT_SECRET, 0);

    let short = CookieAuthority::from_secret(&ALICE)?;
    let long = CookieAuthority::from_secret(&padded)?;
    assert_eq!(short.issue(77), long.issue(77));
    Ok(())
}

#[test]
fn long_secrets_are_hashed() -> anyhow::Result<()> {
    let long_secret: Vec<u8> = (0..=200u8).collect();
    let digest = Sha1::digest(&long_secret);

    let from_long = CookieAuthority::from_secret(&long_secret)?;
    let from_digest = CookieAuthority::from_secret(&digest)?;
    assert_eq!(from_long.issue(77), from_digest.issue(77));

    // one byte past the block size is already hashed
    let mut just_over = vec![0x11u8; OPT_SECRET + 1];
    let hashed = CookieAuthority::from_secret(&just_over)?;
    just_over.pop();
    let verbatim = CookieAuthority::from_secret(&just_over)?;
    assert_ne!(hashed.issue(77), verbatim.issue(77));
    Ok(())
}

#[test]
fn seeded_entropy_is_reproducible() -> anyhow::Result<()> {
    let (mut first, mut second) = (Vec::new(), Vec::new());
    let a = CookieAuthority::saving_secret_with(
        &mut first,
        Format::HmacSha1,
        &mut RngEntropy(StdRng::seed_from_u64(99)),
    )?;
    let b = CookieAuthority::saving_secret_with(
        &mut second,
        Format::HmacSha1,
        &mut RngEntropy(StdRng::seed_from_u64(99)),
    )?;
    assert_eq!(first, second);
    assert_eq!(a.issue(1), b.issue(1));

    let kept = CookieAuthority::keeping_secret_with(
        Format::HmacSha1,
        &mut RngEntropy(StdRng::seed_from_u64(99)),
    )?;
    assert_eq!(kept.issue(1), a.issue(1));
    Ok(())
}

#[test]
fn concurrent_issue_and_parse() -> anyhow::Result<()> {
    let authority = Arc::new(CookieAuthority::from_secret(&ALICE)?);
    let reference: Vec<_> = (0..256u64).map(|t| authority.issue(t).marshal()).collect();

    std::thread::scope(|scope| {
        for worker in 0..4u64 {
            let authority = Arc::clone(&authority);
            let reference = &reference;
            scope.spawn(move || {
                for t in (worker..256).step_by(4) {
                    let wire = authority.issue(t).marshal();
                    assert_eq!(&wire, &reference[t as usize]);
                    let parsed = authority.parse(&wire).expect("own cookie must verify");
                    assert_eq!(parsed.timestamp(), t);
                }
            });
        }
    });
    Ok(())
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(
        CookieError::InvalidSecret { len: 7, min: 8 }.to_string(),
        "secret of 7 bytes is too short, at least 8 bytes are required"
    );
    assert_eq!(CookieError::UnknownFormat(0xaa).to_string(), "unknown cookie format 0xaa");
    assert_eq!(CookieError::SecurityCheckFailed.to_string(), "security check failed");
}
