//! The action-logging capability.

/// Contract for recording that an action happened for a username.
///
/// Always succeeds, returns nothing, performs no deduplication.
pub trait AuditLogger: Send + Sync {
    fn log_action(&self, username: &str, action: &str);
}

/// Audit logger that writes the pair to stdout (simulated audit trail).
#[derive(Debug, Default)]
pub struct ConsoleAuditLogger;

impl AuditLogger for ConsoleAuditLogger {
    fn log_action(&self, username: &str, action: &str) {
        println!("[audit] {username}: {action}");
    }
}
