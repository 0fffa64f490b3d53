//! Session token decoding.
//!
//! Tokens are compact JWS strings (`header.payload.signature`). Only the
//! payload claims are read here; the signature is the auth server's concern.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::descriptor::SessionDescriptor;
use crate::error::{Result, SessionError};

/// Claims carried in a session token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier.
    #[serde(default)]
    pub sub: String,
    /// Account email.
    pub email: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Administrator flag.
    #[serde(default, alias = "is_admin")]
    pub admin: bool,
    /// Expiry as Unix seconds. Absent means the token does not expire.
    #[serde(default)]
    pub exp: Option<u64>,
}

/// A parsed session token together with its raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    raw: String,
    claims: Claims,
}

impl SessionToken {
    /// Parse a raw token string.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MalformedToken`] if the token does not have
    /// three segments or the payload is not base64url-encoded JSON claims.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() != 3 {
            return Err(SessionError::MalformedToken(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        }

        let payload = URL_SAFE_NO_PAD
            .decode(segments[1].trim_end_matches('='))
            .map_err(|e| SessionError::MalformedToken(format!("payload encoding: {e}")))?;

        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|e| SessionError::MalformedToken(format!("payload claims: {e}")))?;

        Ok(Self {
            raw: raw.to_string(),
            claims,
        })
    }

    /// Encode claims into an unsigned token.
    ///
    /// Produces the same shape the auth server issues, with an empty
    /// signature segment. Useful for local sessions and tests.
    pub fn encode_unsigned(claims: &Claims) -> Result<String> {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
        Ok(format!("{header}.{payload}."))
    }

    /// The raw token string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Decoded claims.
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Descriptor of the user this token belongs to.
    pub fn descriptor(&self) -> SessionDescriptor {
        SessionDescriptor {
            display_name: self.claims.name.clone(),
            email: self.claims.email.clone(),
            is_admin: self.claims.admin,
        }
    }

    /// Whether the token is expired at `now` (Unix seconds).
    pub fn is_expired_at(&self, now: u64) -> bool {
        match self.claims.exp {
            Some(exp) => now >= exp,
            None => false,
        }
    }
}
