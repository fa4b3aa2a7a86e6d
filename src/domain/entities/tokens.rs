//! Session tokens issued by the authentication API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Successful login response as returned by the authentication API.
///
/// ```json
/// { "token": { "access": "<jwt>", "refresh": "<jwt>" } }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: TokenPair,
}

/// Access/refresh pair nested in a [`LoginResponse`].
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair").finish_non_exhaustive()
    }
}

/// Tokens handed to the session store after a successful login.
///
/// The login form never reads these back; the store owns them for the
/// lifetime of the session.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl From<TokenPair> for AuthTokens {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access,
            refresh_token: pair.refresh,
        }
    }
}

impl From<LoginResponse> for AuthTokens {
    fn from(response: LoginResponse) -> Self {
        response.token.into()
    }
}

impl fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTokens").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_maps_to_tokens() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":{"access":"A","refresh":"R"}}"#).unwrap();

        let tokens = AuthTokens::from(response);

        assert_eq!(tokens, AuthTokens::new("A", "R"));
    }

    #[test]
    fn test_tokens_serialize_camel_case() {
        let value = serde_json::to_value(AuthTokens::new("A", "R")).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "accessToken": "A", "refreshToken": "R" })
        );
    }

    #[test]
    fn test_debug_hides_token_values() {
        let tokens = AuthTokens::new("secret-access", "secret-refresh");
        let rendered = format!("{tokens:?}");

        assert!(!rendered.contains("secret-access"));
        assert!(!rendered.contains("secret-refresh"));
    }
}
