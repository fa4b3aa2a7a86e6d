//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::session`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod session_repository;

pub use session_repository::{SessionError, SessionRepository, SessionResult};

#[cfg(test)]
pub use session_repository::MockSessionRepository;
