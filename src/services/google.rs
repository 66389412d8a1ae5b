// src/services/google.rs

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// How long to wait on Google before giving up. The login request is
/// interactive, so a hung verifier call must not hold the client for long.
const TOKENINFO_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum GoogleVerifyError {
    #[error("tokeninfo endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("id_token rejected by Google")]
    Rejected,

    #[error("tokeninfo response malformed")]
    Malformed,

    #[error("id_token has no audience")]
    MissingAudience,

    #[error("id_token audience mismatch")]
    AudienceMismatch,

    #[error("id_token missing subject or email")]
    MissingSubject,
}

/// Verified identity claims extracted from a Google id token.
#[derive(Debug, Clone)]
pub struct GoogleClaims {
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub email_verified: bool,
}

/// Client for Google's tokeninfo endpoint.
///
/// Exchanges an opaque id token for verified claims and enforces that the
/// token was minted for this service's registered client id. Everything
/// past this point trusts the returned `GoogleClaims`.
pub struct GoogleVerifier {
    http: Client,
    client_id: String,
}

impl GoogleVerifier {
    pub fn new(http: Client, client_id: String) -> Self {
        Self { http, client_id }
    }

    /// Verify an id token with Google and extract the identity claims
    ///
    /// Docs: https://developers.google.com/identity/sign-in/web/backend-auth
    pub async fn verify_id_token(&self, id_token: &str) -> Result<GoogleClaims, GoogleVerifyError> {
        let resp = self
            .http
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .timeout(TOKENINFO_TIMEOUT)
            .send()
            .await
            .map_err(|e| GoogleVerifyError::Unreachable(e.to_string()))?;

        let status = resp.status();
        debug!(http_status = %status, "Received response from Google tokeninfo endpoint");

        if !status.is_success() {
            warn!(http_status = %status, "Google tokeninfo rejected id token");
            return Err(GoogleVerifyError::Rejected);
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|_| GoogleVerifyError::Malformed)?;

        Self::claims_from_tokeninfo(&body, &self.client_id)
    }

    /// Pull the claims this service cares about out of a tokeninfo body,
    /// enforcing the audience check.
    fn claims_from_tokeninfo(
        body: &serde_json::Value,
        client_id: &str,
    ) -> Result<GoogleClaims, GoogleVerifyError> {
        let aud = body
            .get("aud")
            .and_then(|v| v.as_str())
            .ok_or(GoogleVerifyError::MissingAudience)?;
        if aud != client_id {
            warn!(token_audience = %aud, "Google token audience mismatch");
            return Err(GoogleVerifyError::AudienceMismatch);
        }

        let sub = body.get("sub").and_then(|v| v.as_str());
        let email = body.get("email").and_then(|v| v.as_str());
        let (sub, email) = match (sub, email) {
            (Some(s), Some(e)) => (s.to_string(), e.to_string()),
            _ => return Err(GoogleVerifyError::MissingSubject),
        };

        // tokeninfo serializes booleans as the strings "true"/"false"
        let email_verified = body
            .get("email_verified")
            .and_then(|v| v.as_bool().or_else(|| v.as_str().map(|s| s == "true")))
            .unwrap_or(false);

        Ok(GoogleClaims {
            sub,
            email,
            name: body.get("name").and_then(|v| v.as_str()).map(str::to_string),
            picture: body
                .get("picture")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            email_verified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CLIENT_ID: &str = "client-123.apps.googleusercontent.com";

    #[test]
    fn test_claims_extracted_from_tokeninfo_body() {
        let body = json!({
            "aud": CLIENT_ID,
            "sub": "google-sub-1",
            "email": "user@example.com",
            "email_verified": "true",
            "name": "Test User",
            "picture": "https://example.com/p.jpg",
        });

        let claims = GoogleVerifier::claims_from_tokeninfo(&body, CLIENT_ID)
            .expect("claims should parse");
        assert_eq!(claims.sub, "google-sub-1");
        assert_eq!(claims.email, "user@example.com");
        assert!(claims.email_verified);
        assert_eq!(claims.name.as_deref(), Some("Test User"));
    }

    #[test]
    fn test_audience_mismatch_rejected() {
        let body = json!({
            "aud": "someone-else.apps.googleusercontent.com",
            "sub": "google-sub-1",
            "email": "user@example.com",
        });

        let err = GoogleVerifier::claims_from_tokeninfo(&body, CLIENT_ID).unwrap_err();
        assert!(matches!(err, GoogleVerifyError::AudienceMismatch));
    }

    #[test]
    fn test_missing_audience_rejected() {
        let body = json!({
            "sub": "google-sub-1",
            "email": "user@example.com",
        });

        let err = GoogleVerifier::claims_from_tokeninfo(&body, CLIENT_ID).unwrap_err();
        assert!(matches!(err, GoogleVerifyError::MissingAudience));
    }

    #[test]
    fn test_missing_subject_rejected() {
        let body = json!({
            "aud": CLIENT_ID,
            "email": "user@example.com",
        });

        let err = GoogleVerifier::claims_from_tokeninfo(&body, CLIENT_ID).unwrap_err();
        assert!(matches!(err, GoogleVerifyError::MissingSubject));
    }

    #[test]
    fn test_email_verified_accepts_bool_and_string() {
        let as_string = json!({
            "aud": CLIENT_ID, "sub": "s", "email": "e@x.com", "email_verified": "true",
        });
        let as_bool = json!({
            "aud": CLIENT_ID, "sub": "s", "email": "e@x.com", "email_verified": false,
        });

        assert!(
            GoogleVerifier::claims_from_tokeninfo(&as_string, CLIENT_ID)
                .unwrap()
                .email_verified
        );
        assert!(
            !GoogleVerifier::claims_from_tokeninfo(&as_bool, CLIENT_ID)
                .unwrap()
                .email_verified
        );
    }
}
