//! User route handlers
//!
//! - Registration of new users with an issued access token

pub mod register;

pub use register::{register_user, AppState};
