//! App assertion construction and RS256 signing.
//!
//! GitHub accepts an RS256-signed JWT with `iss`, `iat` and `exp` claims as
//! proof of app identity. The validity window is backdated 60 seconds to
//! tolerate clock skew against the verifier and expires 180 seconds out —
//! well under GitHub's 10 minute cap.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::error::IssuerError;
use crate::utils::time::now_i64;

/// Seconds the `iat` claim is backdated by.
pub const CLOCK_SKEW_SECS: i64 = 60;
/// Seconds past "now" the assertion stays valid.
pub const VALIDITY_SECS: i64 = 180;

/// Claim set of one app assertion. Built fresh per run, never reused.
#[derive(Debug, Serialize)]
pub struct AssertionClaims {
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
    /// Issuer: the GitHub App id.
    pub iss: String,
}

impl AssertionClaims {
    /// Claim window anchored at `now`: `[now - 60, now + 180]`.
    pub fn issue(app_id: &str, now: i64) -> Self {
        Self {
            iat: now - CLOCK_SKEW_SECS,
            exp: now + VALIDITY_SECS,
            iss: app_id.to_owned(),
        }
    }
}

/// Parse the PEM text into an RSA signing key.
pub fn decode_signing_key(private_key_pem: &str) -> Result<EncodingKey, IssuerError> {
    EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).map_err(IssuerError::KeyDecode)
}

/// Sign a fresh assertion for `app_id`. Returns the compact JWT string
/// used as the bearer credential for both API calls.
pub fn sign_assertion(app_id: &str, key: &EncodingKey) -> Result<String, IssuerError> {
    let claims = AssertionClaims::issue(app_id, now_i64());
    let header = Header::new(Algorithm::RS256);
    encode(&header, &claims, key).map_err(IssuerError::Signing)
}
