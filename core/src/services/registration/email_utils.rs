//! Email helpers for registration

use validator::ValidateEmail;

/// Email format check, the same rule the HTTP layer applies
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Mask an email for logging, keeping the first character and the domain
///
/// `juan@rodriguez.org` becomes `j***@rodriguez.org`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
