//! The credential pair submitted to the registration workflow.

/// A username/password pair as submitted by a caller.
///
/// Both fields are optional free-form text: the workflow accepts whatever the
/// caller read (typically two lines of input) and leaves every judgement about
/// the content to the validation rules. Instances are created fresh per call
/// and discarded after use; nothing is stored.
///
/// # Examples
///
/// ```rust
/// use registration_workflow::Credentials;
///
/// let creds = Credentials::of("admin_ada", "hunter22");
/// assert_eq!(creds.username(), Some("admin_ada"));
///
/// let missing = Credentials::new(None, Some("hunter22".to_string()));
/// assert_eq!(missing.username(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    username: Option<String>,
    password: Option<String>,
}

impl Credentials {
    /// Creates a credential pair from optional fields.
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    /// Convenience constructor for the common case where both fields are present.
    pub fn of(username: &str, password: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// The username field, if present.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The password field, if present.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}
