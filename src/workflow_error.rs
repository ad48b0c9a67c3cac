use thiserror::Error;

/// Why a credential pair was rejected.
///
/// The `Display` rendering is the human-readable diagnostic the source of the
/// rejection would print; it is informational, not a contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username is required")]
    MissingUsername,
    #[error("password is required")]
    MissingPassword,
    #[error("username must be at least {min} characters")]
    UsernameTooShort { min: usize },
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}
