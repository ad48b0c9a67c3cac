//! The permission-check capability and its naming-convention policy.

/// Contract for the permission decision the orchestrator depends on.
pub trait PermissionCheck: Send + Sync {
    fn has_permission(&self, username: &str) -> bool;
}

/// Grants permission iff the username starts with a literal prefix.
///
/// The match is case-sensitive; anything that does not carry the prefix
/// (including the empty string) is denied. This is a placeholder policy for
/// demonstrating the capability seam, not an access-control decision.
///
/// # Examples
///
/// ```rust
/// use registration_workflow::{AdminPrefixPolicy, PermissionCheck};
///
/// let policy = AdminPrefixPolicy::default();
/// assert!(policy.has_permission("admin_ada"));
/// assert!(!policy.has_permission("bob"));
/// assert!(!policy.has_permission("Admin_ada"));
/// ```
#[derive(Debug, Clone)]
pub struct AdminPrefixPolicy {
    prefix: String,
}

impl AdminPrefixPolicy {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for AdminPrefixPolicy {
    fn default() -> Self {
        Self::new("admin")
    }
}

impl PermissionCheck for AdminPrefixPolicy {
    fn has_permission(&self, username: &str) -> bool {
        username.starts_with(&self.prefix)
    }
}
