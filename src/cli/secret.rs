//! Secret resolution
//!
//! The secret comes from `--secret`, the OTPGEN_SECRET environment variable,
//! or stdin when given as "-". It may be a bare Base32 string or a full
//! otpauth:// URI, in which case the URI's digits and period are used too.

use otpgen_core::{
    auth::{otpauth, totp::TotpParams},
    error::{OtpError, OtpgenError},
    types::OtpSecret,
};
use std::io::{self, BufRead};
use tracing::debug;

const STDIN_MARKER: &str = "-";
const URI_PREFIX: &str = "otpauth://";

/// A resolved secret and any parameters carried alongside it
pub struct SecretSource {
    pub secret: OtpSecret,
    pub uri_params: Option<TotpParams>,
}

/// Resolve the secret argument, reading stdin for "-"
pub fn resolve_secret(arg: Option<&str>) -> Result<SecretSource, OtpgenError> {
    let raw = match arg {
        None => return Err(OtpgenError::Otp(OtpError::MissingSecret)),
        Some(STDIN_MARKER) => read_secret_line(io::stdin().lock())?,
        Some(value) => value.to_string(),
    };

    parse_secret(raw)
}

/// Read the first line of `reader` as the secret
fn read_secret_line<R: BufRead>(mut reader: R) -> Result<String, OtpgenError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Interpret a raw secret string
fn parse_secret(raw: String) -> Result<SecretSource, OtpgenError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(OtpgenError::Otp(OtpError::MissingSecret));
    }

    if trimmed.starts_with(URI_PREFIX) {
        let key_uri = otpauth::parse_key_uri(trimmed)?;
        debug!(
            "Using secret from otpauth URI (issuer={:?})",
            key_uri.issuer
        );
        return Ok(SecretSource {
            secret: key_uri.secret,
            uri_params: Some(key_uri.params),
        });
    }

    Ok(SecretSource {
        secret: OtpSecret::new(raw),
        uri_params: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret() {
        assert!(matches!(
            resolve_secret(None),
            Err(OtpgenError::Otp(OtpError::MissingSecret))
        ));
        assert!(matches!(
            resolve_secret(Some("   ")),
            Err(OtpgenError::Otp(OtpError::MissingSecret))
        ));
    }

    #[test]
    fn test_bare_secret_kept_verbatim() {
        let source = resolve_secret(Some("jbsw y3dp ehpk 3pxp")).unwrap();
        assert_eq!(source.secret.expose(), "jbsw y3dp ehpk 3pxp");
        assert!(source.uri_params.is_none());
    }

    #[test]
    fn test_uri_secret_carries_params() {
        let source =
            resolve_secret(Some("otpauth://totp/Acme:alice?secret=PXF3NXACYVDD3GIA&digits=8"))
                .unwrap();
        assert_eq!(source.secret.expose(), "PXF3NXACYVDD3GIA");
        assert_eq!(source.uri_params, Some(TotpParams::new(8, 30)));
    }

    #[test]
    fn test_invalid_uri_is_error() {
        assert!(matches!(
            resolve_secret(Some("otpauth://hotp/alice?secret=PXF3NXACYVDD3GIA")),
            Err(OtpgenError::Otp(OtpError::InvalidUri { .. }))
        ));
    }

    #[test]
    fn test_read_secret_line() {
        let input = b"  JBSWY3DPEHPK3PXP  \nignored\n";
        assert_eq!(read_secret_line(&input[..]).unwrap(), "JBSWY3DPEHPK3PXP");
    }
}
