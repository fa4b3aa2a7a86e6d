//! `reqwest`-based authentication client.

use crate::domain::entities::{Credentials, LoginResponse};
use crate::domain::gateways::{AuthClient, AuthFailure, ErrorData};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

/// Posts credentials as JSON to the configured login endpoint.
///
/// # Request
///
/// ```text
/// POST <login_url>
/// Content-Type: application/json
///
/// {"username": "...", "password": "..."}
/// ```
///
/// # Outcomes
///
/// - 2xx with `{"token": {"access", "refresh"}}` - success
/// - non-2xx - [`AuthFailure`] with the status and any string `message` /
///   `detail` fields from a JSON object body; a body that is not JSON sets
///   `error` to the decode error
/// - transport error or undecodable 2xx body - [`AuthFailure`] with `error` set
///
/// No timeout is configured; the request runs until the server answers or
/// the connection fails.
#[derive(Clone)]
pub struct HttpAuthClient {
    http: Client,
    login_url: String,
}

impl HttpAuthClient {
    pub fn new(login_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            login_url: login_url.into(),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthFailure> {
        let res = self
            .http
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Login request transport error");
                AuthFailure::client(e.to_string())
            })?;
        let status = res.status();

        if !status.is_success() {
            debug!(status = status.as_u16(), "Login rejected upstream");
            return Err(read_failure(status.as_u16(), res).await);
        }

        res.json::<LoginResponse>().await.map_err(|e| {
            warn!(error = %e, "Malformed login response");
            AuthFailure {
                status: Some(status.as_u16()),
                data: None,
                error: Some(format!("Malformed login response: {e}")),
            }
        })
    }
}

/// Builds the failure for a non-2xx response from its body.
///
/// - JSON object: string `message` / `detail` fields become [`ErrorData`]
/// - other JSON, or an empty body: no data
/// - anything else: the decode error goes into `error`
async fn read_failure(status: u16, res: Response) -> AuthFailure {
    let body = match res.text().await {
        Ok(body) => body,
        Err(e) => {
            return AuthFailure {
                error: Some(format!("Failed to read error response: {e}")),
                ..AuthFailure::upstream(status, None)
            };
        }
    };

    if body.trim().is_empty() {
        return AuthFailure::upstream(status, None);
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => AuthFailure::upstream(status, error_data(&value)),
        Err(e) => {
            debug!(status, "Error response is not JSON");
            AuthFailure {
                error: Some(format!("Malformed error response: {e}")),
                ..AuthFailure::upstream(status, None)
            }
        }
    }
}

fn error_data(body: &Value) -> Option<ErrorData> {
    let object = body.as_object()?;
    let field = |name: &str| object.get(name).and_then(Value::as_str).map(str::to_string);

    Some(ErrorData {
        message: field("message"),
        detail: field("detail"),
    })
}
