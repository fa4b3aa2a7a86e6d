//! Session identifiers.

use rand::Rng;

const SESSION_ID_LEN: usize = 48;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random 48-character alphanumeric session id.
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();

    (0..SESSION_ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns true for ids shaped like [`generate_session_id`] output.
pub fn is_valid_session_id(value: &str) -> bool {
    value.len() == SESSION_ID_LEN && value.bytes().all(|b| b.is_ascii_alphanumeric())
}
