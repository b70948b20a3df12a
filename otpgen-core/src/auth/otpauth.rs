//! `otpauth://` key URIs
//!
//! Format (Google Authenticator key URI):
//! `otpauth://totp/ISSUER:ACCOUNT?secret=BASE32&issuer=ISSUER&algorithm=SHA1&digits=6&period=30`
//!
//! Only TOTP with HMAC-SHA1 is supported, matching the generator.

use crate::auth::base32;
use crate::auth::totp::TotpParams;
use crate::error::OtpError;
use crate::types::OtpSecret;

const SCHEME: &str = "otpauth";
const TOTP_TYPE: &str = "totp";
const ALGORITHM: &str = "SHA1";

/// Contents of a parsed key URI
#[derive(Debug, Clone)]
pub struct KeyUri {
    pub account: String,
    pub issuer: Option<String>,
    pub secret: OtpSecret,
    pub params: TotpParams,
}

fn invalid(reason: impl Into<String>) -> OtpError {
    OtpError::InvalidUri {
        reason: reason.into(),
    }
}

/// Build a key URI for provisioning an authenticator app
///
/// The secret is normalized (whitespace removed, uppercased, padding
/// stripped). `params.time_offset` is a server-side correction and is not
/// part of the URI.
///
/// # Errors
///
/// Returns `OtpError::InvalidUri` for an empty account name,
/// `OtpError::EmptyKey` for a secret with no Base32 characters, and any
/// parameter validation error.
pub fn build_key_uri(
    account: &str,
    issuer: Option<&str>,
    secret: &OtpSecret,
    params: &TotpParams,
) -> Result<String, OtpError> {
    params.validate()?;

    let account = account.trim();
    if account.is_empty() {
        return Err(invalid("account name is required"));
    }

    if base32::decode_base32(secret.expose()).is_empty() {
        return Err(OtpError::EmptyKey);
    }

    let issuer = issuer.map(str::trim).filter(|i| !i.is_empty());

    let label = match issuer {
        Some(issuer) => format!(
            "{}:{}",
            urlencoding::encode(issuer),
            urlencoding::encode(account)
        ),
        None => urlencoding::encode(account).into_owned(),
    };

    let mut query = vec![format!(
        "secret={}",
        base32::normalize_secret(secret.expose())
    )];
    if let Some(issuer) = issuer {
        query.push(format!("issuer={}", urlencoding::encode(issuer)));
    }
    query.push(format!("algorithm={}", ALGORITHM));
    query.push(format!("digits={}", params.digits));
    query.push(format!("period={}", params.period));

    Ok(format!(
        "{}://{}/{}?{}",
        SCHEME,
        TOTP_TYPE,
        label,
        query.join("&")
    ))
}

/// Parse a key URI
///
/// Missing `digits` and `period` fall back to 6 and 30. The `issuer` query
/// parameter wins over an issuer prefix in the label.
pub fn parse_key_uri(uri: &str) -> Result<KeyUri, OtpError> {
    let url = url::Url::parse(uri.trim()).map_err(|e| invalid(e.to_string()))?;

    if url.scheme() != SCHEME {
        return Err(invalid(format!(
            "expected scheme '{}', got '{}'",
            SCHEME,
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(TOTP_TYPE) => {}
        Some("hotp") => return Err(invalid("HOTP URIs are not supported")),
        other => return Err(invalid(format!("unknown OTP type: {:?}", other))),
    }

    // Split before decoding so an encoded ':' inside the issuer stays put
    let path = url.path().trim_start_matches('/');
    let decode = |part: &str| -> Result<String, OtpError> {
        urlencoding::decode(part)
            .map(|s| s.trim().to_string())
            .map_err(|e| invalid(e.to_string()))
    };

    let (label_issuer, account) = match path.split_once(':') {
        Some((issuer, account)) => (Some(decode(issuer)?), decode(account)?),
        None => (None, decode(path)?),
    };

    let mut secret = None;
    let mut query_issuer = None;
    let mut params = TotpParams::default();

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "secret" => secret = Some(value.into_owned()),
            "issuer" => query_issuer = Some(value.into_owned()),
            "algorithm" => {
                if !value.eq_ignore_ascii_case(ALGORITHM) {
                    return Err(invalid(format!("unsupported algorithm '{}'", value)));
                }
            }
            "digits" => {
                params.digits = value
                    .parse()
                    .map_err(|_| invalid(format!("invalid digits '{}'", value)))?;
            }
            "period" => {
                params.period = value
                    .parse()
                    .map_err(|_| invalid(format!("invalid period '{}'", value)))?;
            }
            _ => {}
        }
    }

    params.validate()?;

    let secret = secret
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| invalid("missing 'secret' parameter"))?;

    let issuer = query_issuer
        .or(label_issuer)
        .filter(|i| !i.is_empty());

    Ok(KeyUri {
        account,
        issuer,
        secret: OtpSecret::new(secret),
        params,
    })
}
