//! Error handlers turning domain failures into HTTP responses

pub mod error;

pub use error::{handle_domain_error, handle_validation_errors, status_for};
