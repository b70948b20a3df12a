//! RFC 4226 Appendix D intermediate values

use otpgen_core::auth::hmac::hmac_sha1;
use otpgen_core::auth::hotp::{hotp, truncate};

const RFC4226_KEY: &[u8] = b"12345678901234567890";

const INTERMEDIATE: [(u64, &str, u32, &str); 4] = [
    (0, "cc93cf18508d94934c64b65d8ba7667fb7cde4b0", 0x4c93cf18, "755224"),
    (1, "75a48a19d4cbe100644e8ac1397eea747a2d33ab", 0x41397eea, "287082"),
    (2, "0bacb7fa082fef30782211938bc1c5e70416ff44", 0x082fef30, "359152"),
    (3, "66c28227d03a2d5529262ff016a1e6ef76557ece", 0x66ef7655, "969429"),
];

#[test]
fn test_hmac_matches_appendix_d() {
    for (counter, digest_hex, _, _) in INTERMEDIATE {
        let digest = hmac_sha1(RFC4226_KEY, &counter.to_be_bytes()).unwrap();
        assert_eq!(hex::encode(digest), digest_hex, "count {}", counter);
    }
}

#[test]
fn test_truncation_matches_appendix_d() {
    for (counter, digest_hex, truncated, code) in INTERMEDIATE {
        let digest: [u8; 20] = hex::decode(digest_hex)
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(truncate(&digest), truncated, "count {}", counter);
        assert_eq!(hotp(RFC4226_KEY, counter, 6).unwrap(), code);
    }
}
