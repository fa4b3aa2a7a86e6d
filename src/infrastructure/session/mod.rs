//! Session store implementations.
//!
//! Provides two implementations of
//! [`crate::domain::repositories::SessionRepository`]:
//! - [`RedisSessionStore`] - Shared, restart-safe storage
//! - [`InMemorySessionStore`] - Single-process fallback and test double

mod memory_store;
mod redis_store;

pub use memory_store::InMemorySessionStore;
pub use redis_store::RedisSessionStore;
