//! Repository interfaces for persistence, plus the in-memory implementation.

pub mod user;

pub use user::{InMemoryUserRepository, UserRepository};
