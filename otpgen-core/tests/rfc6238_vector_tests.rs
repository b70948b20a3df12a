//! RFC 6238 conformance tests
//!
//! Verifies generated codes against the published Appendix B table and
//! against an independent implementation (totp-lite).

use otpgen_core::auth::totp::{generate_totp, generate_totp_at, TotpParams};
use otpgen_core::clock::FixedClock;
use otpgen_core::types::OtpSecret;

/// Base32 encoding of the ASCII key "12345678901234567890"
const RFC6238_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

fn secret(s: &str) -> OtpSecret {
    OtpSecret::new(s.to_string())
}

/// RFC 6238 Appendix B, SHA1 column
#[test]
fn test_rfc6238_appendix_b_sha1_eight_digits() {
    let vectors: [(u64, &str); 6] = [
        (59, "94287082"),
        (1111111109, "07081804"),
        (1111111111, "14050471"),
        (1234567890, "89005924"),
        (2000000000, "69279037"),
        (20000000000, "65353130"),
    ];

    let params = TotpParams::new(8, 30);
    for (timestamp, expected) in vectors {
        let code = generate_totp_at(&secret(RFC6238_SECRET), timestamp, &params)
            .expect("RFC vector should generate");
        assert_eq!(code.code(), expected, "mismatch at T={}", timestamp);
    }
}

#[test]
fn test_rfc6238_six_digit_codes_are_suffixes() {
    let vectors: [(u64, &str); 4] = [
        (59, "287082"),
        (1111111109, "081804"),
        (1234567890, "005924"),
        (2000000000, "279037"),
    ];

    for (timestamp, expected) in vectors {
        let code = generate_totp_at(&secret(RFC6238_SECRET), timestamp, &TotpParams::default())
            .unwrap();
        assert_eq!(code.code(), expected, "mismatch at T={}", timestamp);
    }
}

#[test]
fn test_known_codes_for_common_example_secret() {
    // Reference values computed with an independent HMAC-SHA1 implementation
    let vectors: [(u64, &str); 4] = [
        (59, "996554"),
        (1111111109, "071271"),
        (1234567890, "742275"),
        (2000000000, "890699"),
    ];

    for (timestamp, expected) in vectors {
        let code =
            generate_totp_at(&secret("JBSWY3DPEHPK3PXP"), timestamp, &TotpParams::default())
                .unwrap();
        assert_eq!(code.code(), expected, "mismatch at T={}", timestamp);
    }
}

#[test]
fn test_matches_totp_lite() {
    let secrets = [
        RFC6238_SECRET,
        "JBSWY3DPEHPK3PXP",
        "NPNTAOVYVQCHPKDL",
        "5AKLTZBBJIKZSHTWY25KZMF75TXDM4EO",
    ];
    let timestamps = [0u64, 29, 30, 59, 1111111109, 1234567890, 1700000015, 2000000000];

    for s in secrets {
        let key = otpgen_core::auth::base32::decode_base32(s);
        for digits in [6u32, 8] {
            for timestamp in timestamps {
                let expected = totp_lite::totp_custom::<totp_lite::Sha1>(30, digits, &key, timestamp);
                let actual = generate_totp_at(&secret(s), timestamp, &TotpParams::new(digits, 30))
                    .unwrap();
                assert_eq!(
                    actual.code(),
                    expected,
                    "secret {} digits {} T={}",
                    s,
                    digits,
                    timestamp
                );
            }
        }
    }
}

#[test]
fn test_matches_totp_lite_with_custom_period() {
    let key = otpgen_core::auth::base32::decode_base32(RFC6238_SECRET);
    for timestamp in [59u64, 1111111109, 1234567890] {
        let expected = totp_lite::totp_custom::<totp_lite::Sha1>(60, 6, &key, timestamp);
        let actual =
            generate_totp_at(&secret(RFC6238_SECRET), timestamp, &TotpParams::new(6, 60)).unwrap();
        assert_eq!(actual.code(), expected);
    }
}

#[test]
fn test_same_window_same_code() {
    let params = TotpParams::default();
    let window_start = 1_700_000_010; // multiple of 30

    let first = generate_totp_at(&secret(RFC6238_SECRET), window_start, &params).unwrap();
    for timestamp in window_start..window_start + 30 {
        let code = generate_totp(&secret(RFC6238_SECRET), &params, FixedClock(timestamp)).unwrap();
        assert_eq!(code.code(), first.code(), "code changed within window at T={}", timestamp);
        assert_eq!(code.counter, first.counter);
    }
}

#[test]
fn test_adjacent_windows_differ() {
    let params = TotpParams::default();
    for s in [RFC6238_SECRET, "JBSWY3DPEHPK3PXP", "NPNTAOVYVQCHPKDL"] {
        for i in 0..100u64 {
            let t = 1_700_000_000 + i * 30;
            let now = generate_totp_at(&secret(s), t, &params).unwrap();
            let next = generate_totp_at(&secret(s), t + 31, &params).unwrap();
            assert_eq!(next.counter, now.counter + 1);
            assert_ne!(now.code(), next.code(), "secret {} T={}", s, t);
        }
    }
}

#[test]
fn test_time_offset_shifts_window() {
    let corrected = TotpParams::default().with_time_offset(-3480);
    let clock_time = 1_700_003_480;

    let with_offset = generate_totp(&secret(RFC6238_SECRET), &corrected, FixedClock(clock_time))
        .unwrap();
    let direct =
        generate_totp_at(&secret(RFC6238_SECRET), 1_700_000_000, &TotpParams::default()).unwrap();

    assert_eq!(with_offset.timestamp, 1_700_000_000);
    assert_eq!(with_offset.code(), direct.code());
}
