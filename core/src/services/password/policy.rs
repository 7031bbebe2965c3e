//! Password format rule

use fancy_regex::Regex;
use cr_shared::config::PasswordConfig;

use crate::errors::ValidationError;

/// Compiled password format rule, shared read-only by every validation call.
///
/// The rule must match the whole candidate; a match on a substring is not
/// enough.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pattern: String,
    regex: Regex,
}

impl PasswordPolicy {
    /// Compiles `pattern` into a full-match rule
    ///
    /// # Returns
    ///
    /// * `Ok(PasswordPolicy)` - The compiled rule
    /// * `Err(ValidationError::InvalidPasswordPattern)` - The pattern does not compile;
    ///   the service must not start with it
    pub fn new(pattern: &str) -> Result<Self, ValidationError> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|e| ValidationError::InvalidPasswordPattern {
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Compiles the rule from configuration
    pub fn from_config(config: &PasswordConfig) -> Result<Self, ValidationError> {
        Self::new(&config.regex)
    }

    /// The rule as configured, before anchoring
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True iff `candidate` fully matches the rule
    pub fn validate(&self, candidate: &str) -> bool {
        match self.regex.is_match(candidate) {
            Ok(matched) => matched,
            Err(err) => {
                // Backtracking limit hit; treated as a non-match
                tracing::warn!(error = %err, "Password rule evaluation failed");
                false
            }
        }
    }
}

/// True iff `candidate` fully matches `policy`
pub fn validate(candidate: &str, policy: &PasswordPolicy) -> bool {
    policy.validate(candidate)
}
