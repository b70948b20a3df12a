//! HMAC-SHA1 (RFC 2104) keyed digest used by HOTP

use crate::error::OtpError;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Length of an HMAC-SHA1 output in bytes
pub const DIGEST_LEN: usize = 20;

/// Compute HMAC-SHA1 of `message` under `key`
///
/// An empty key is valid input here, so callers that require key material
/// must check for it themselves.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> Result<[u8; DIGEST_LEN], OtpError> {
    let mut mac = HmacSha1::new_from_slice(key).map_err(|_| OtpError::HmacFailed)?;
    mac.update(message);

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hmac_hex(key: &[u8], message: &[u8]) -> String {
        hex::encode(hmac_sha1(key, message).unwrap())
    }

    // RFC 2202 section 3
    #[test]
    fn test_rfc2202_vectors() {
        assert_eq!(
            hmac_hex(&[0x0b; 20], b"Hi There"),
            "b617318655057264e28bc0b6fb378c8ef146be00"
        );
        assert_eq!(
            hmac_hex(b"Jefe", b"what do ya want for nothing?"),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
        assert_eq!(
            hmac_hex(&[0xaa; 20], &[0xdd; 50]),
            "125d7342b9ac11cd91a39af48aa17b4f63f175d3"
        );
    }

    #[test]
    fn test_key_longer_than_block_is_hashed() {
        assert_eq!(
            hmac_hex(
                &[0xaa; 80],
                b"Test Using Larger Than Block-Size Key - Hash Key First"
            ),
            "aa4ae5e15272d00e95705637ce8a3b55ed402112"
        );
    }

    #[test]
    fn test_empty_key_accepted() {
        assert!(hmac_sha1(&[], b"message").is_ok());
    }
}
