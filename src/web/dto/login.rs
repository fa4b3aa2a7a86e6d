//! Form payload for the login page.

use serde::Deserialize;

use crate::domain::entities::Credentials;

/// `application/x-www-form-urlencoded` body posted by the login form.
///
/// Missing fields deserialize as empty strings so the schema, not the
/// extractor, reports them.
#[derive(Deserialize, Default)]
pub struct LoginFormPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginFormPayload> for Credentials {
    fn from(payload: LoginFormPayload) -> Self {
        Credentials::new(payload.username, payload.password)
    }
}
