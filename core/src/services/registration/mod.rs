//! Registration service module
//!
//! Validates a registration request, runs the credential pipeline and
//! persists the new user.

mod email_utils;
mod service;

#[cfg(test)]
mod tests;

pub use email_utils::{is_valid_email, mask_email};
pub use service::RegistrationService;
