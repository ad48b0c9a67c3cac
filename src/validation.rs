//! Validation rules and the composite validator.
//!
//! Each rule is an independent predicate over a credential pair; the composite
//! evaluates an ordered sequence of rules and halts at the first failure.
//! There is deliberately no rule base type to inherit from — rules share
//! nothing but the contract.

use std::sync::Arc;

use crate::credentials::Credentials;
use crate::workflow_error::ValidationError;

/// Contract for a single validation rule.
///
/// `Ok(())` means the rule passed; the error carries the human-readable
/// failure reason. Rules are independent of each other and must not assume
/// any other rule has run before them.
pub trait ValidationRule: Send + Sync {
    fn check(&self, credentials: &Credentials) -> Result<(), ValidationError>;
}

/// Contract for the validation capability the orchestrator depends on.
pub trait Validator: Send + Sync {
    fn validate(&self, credentials: &Credentials) -> Result<(), ValidationError>;
}

/// A field is considered blank when it is absent or empty after trimming.
fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

// -------------------------------------------------------------------------------------------------
// Concrete rules
// -------------------------------------------------------------------------------------------------

/// Requires both fields to be present and non-blank.
#[derive(Debug, Default)]
pub struct RequiredFieldsRule;

impl ValidationRule for RequiredFieldsRule {
    fn check(&self, credentials: &Credentials) -> Result<(), ValidationError> {
        if present(credentials.username()).is_none() {
            return Err(ValidationError::MissingUsername);
        }
        if present(credentials.password()).is_none() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(())
    }
}

/// Requires the username to be at least `min` characters long.
///
/// A missing or blank username fails as missing, so the rule is safe to use
/// on its own without [`RequiredFieldsRule`] in front of it.
#[derive(Debug)]
pub struct UsernameLengthRule {
    min: usize,
}

impl UsernameLengthRule {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Default for UsernameLengthRule {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ValidationRule for UsernameLengthRule {
    fn check(&self, credentials: &Credentials) -> Result<(), ValidationError> {
        match present(credentials.username()) {
            None => Err(ValidationError::MissingUsername),
            Some(username) if username.chars().count() < self.min => {
                Err(ValidationError::UsernameTooShort { min: self.min })
            }
            Some(_) => Ok(()),
        }
    }
}

/// Requires the password to be at least `min` characters long.
#[derive(Debug)]
pub struct PasswordLengthRule {
    min: usize,
}

impl PasswordLengthRule {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Default for PasswordLengthRule {
    fn default() -> Self {
        Self::new(6)
    }
}

impl ValidationRule for PasswordLengthRule {
    fn check(&self, credentials: &Credentials) -> Result<(), ValidationError> {
        match present(credentials.password()) {
            None => Err(ValidationError::MissingPassword),
            Some(password) if password.chars().count() < self.min => {
                Err(ValidationError::PasswordTooShort { min: self.min })
            }
            Some(_) => Ok(()),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Composite validator
// -------------------------------------------------------------------------------------------------

/// An ordered sequence of rules with short-circuit failure.
///
/// Rules run in insertion order; the first failure is returned and no later
/// rule is consulted. An empty sequence trivially passes.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use registration_workflow::{
///     CompositeValidator, Credentials, UsernameLengthRule, Validator,
/// };
///
/// let validator = CompositeValidator::new()
///     .with_rule(Arc::new(UsernameLengthRule::default()));
///
/// assert!(validator.validate(&Credentials::of("ada", "x")).is_ok());
/// assert!(validator.validate(&Credentials::of("ab", "x")).is_err());
/// ```
#[derive(Default)]
pub struct CompositeValidator {
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl CompositeValidator {
    /// Creates a validator with no rules (which passes everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule; evaluation order is insertion order.
    #[must_use]
    pub fn with_rule(mut self, rule: Arc<dyn ValidationRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// The standard rule set: required fields, username ≥ 3, password ≥ 6.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(Arc::new(RequiredFieldsRule))
            .with_rule(Arc::new(UsernameLengthRule::default()))
            .with_rule(Arc::new(PasswordLengthRule::default()))
    }

    /// Number of rules currently held.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Validator for CompositeValidator {
    fn validate(&self, credentials: &Credentials) -> Result<(), ValidationError> {
        for rule in &self.rules {
            rule.check(credentials)?;
        }
        Ok(())
    }
}
