//! Shared authentication utilities

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;

use super::AccessToken;
use crate::error::AuthError;

/// Build v2 token endpoint URL from an authority (`{host}/{tenant}`).
pub(crate) fn token_url_v2(authority: &str) -> String {
    format!("{}/oauth2/v2.0/token", authority.trim_end_matches('/'))
}

/// Token response from Azure AD.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default, deserialize_with = "deserialize_expires_in")]
    pub expires_in: Option<u64>,
}

/// Deserializes `expires_in` which can be either a number or a string.
fn deserialize_expires_in<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => Ok(Some(n)),
        Some(StringOrNumber::String(s)) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid expires_in value: {}", s))),
    }
}

impl TokenResponse {
    /// Converts the response into a token, anchoring `expires_in` at now.
    ///
    /// A lifetime that does not fit a timestamp is rejected as a parse error.
    pub fn into_access_token(self) -> Result<AccessToken, AuthError> {
        let Some(secs) = self.expires_in else {
            return Ok(AccessToken::new(self.access_token));
        };

        let expires_at = i64::try_from(secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| AuthError::Parse(format!("expires_in out of range: {}", secs)))?;

        Ok(AccessToken::with_expiry(self.access_token, expires_at))
    }
}

/// Error response from Azure AD.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

/// Maps Azure AD error codes to AuthError variants.
pub(crate) fn map_error_response(error: ErrorResponse) -> AuthError {
    let description = error
        .error_description
        .unwrap_or_else(|| error.error.clone());

    match error.error.as_str() {
        "invalid_client" | "unauthorized_client" => AuthError::InvalidClient {
            message: description,
        },
        "invalid_scope" => AuthError::InvalidScope {
            message: description,
        },
        _ => {
            if description.contains("AADSTS90002") || description.contains("AADSTS90014") {
                // Tenant not found
                AuthError::InvalidTenant {
                    tenant: description,
                }
            } else {
                AuthError::Rejected {
                    error: error.error,
                    message: description,
                }
            }
        }
    }
}

/// Turns a token endpoint response into a token or a mapped error.
pub(crate) async fn handle_token_response(
    response: reqwest::Response,
) -> Result<AccessToken, AuthError> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await?;
        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::Parse(e.to_string()))?;
        token_response.into_access_token()
    } else {
        let error_response: ErrorResponse =
            response.json().await.unwrap_or_else(|_| ErrorResponse {
                error: format!("http_{}", status.as_u16()),
                error_description: None,
            });
        Err(map_error_response(error_response))
    }
}
