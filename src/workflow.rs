//! The registration orchestrator.
//!
//! `RegistrationWorkflow` composes the four capability contracts and runs a
//! fixed sequential pipeline: validate → check permission → register → log.
//! Each stage gates the next; every failure is terminal for that call. The
//! orchestrator performs no console I/O of its own — it emits workflow events
//! and leaves printing to the sinks and the calling program.

use std::sync::Arc;

use crate::audit::{AuditLogger, ConsoleAuditLogger};
use crate::credentials::Credentials;
use crate::permission::{AdminPrefixPolicy, PermissionCheck};
use crate::registrar::{ConsoleRegistrar, Registrar};
use crate::validation::{CompositeValidator, Validator};
use crate::workflow_error::ValidationError;
use crate::workflow_event::{emit_event, WorkflowEvent};

/// Terminal outcome of one `register_user` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// All stages completed; the user was registered and the action logged.
    Registered,
    /// A validation rule rejected the credentials; nothing else ran.
    ValidationFailed(ValidationError),
    /// Validation passed but the permission policy denied the username.
    PermissionDenied,
}

impl std::fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationOutcome::Registered => write!(f, "registered"),
            RegistrationOutcome::ValidationFailed(reason) => {
                write!(f, "validation failed: {reason}")
            }
            RegistrationOutcome::PermissionDenied => write!(f, "permission denied"),
        }
    }
}

/// Orchestrates the registration pipeline over injected capabilities.
///
/// The workflow holds its collaborators as `Arc<dyn Trait>` and depends only
/// on the contracts; implementations are supplied by the caller and can be
/// swapped freely (tests inject recording fakes the same way).
///
/// # Examples
///
/// ```rust
/// use registration_workflow::{Credentials, RegistrationOutcome, RegistrationWorkflow};
///
/// let workflow = RegistrationWorkflow::with_console_defaults();
/// let outcome = workflow.register_user(&Credentials::of("ab", "secret1"));
/// assert!(matches!(outcome, RegistrationOutcome::ValidationFailed(_)));
/// ```
pub struct RegistrationWorkflow {
    validator: Arc<dyn Validator>,
    permissions: Arc<dyn PermissionCheck>,
    registrar: Arc<dyn Registrar>,
    audit: Arc<dyn AuditLogger>,
}

impl RegistrationWorkflow {
    /// Creates a workflow from explicitly supplied capabilities.
    pub fn new(
        validator: Arc<dyn Validator>,
        permissions: Arc<dyn PermissionCheck>,
        registrar: Arc<dyn Registrar>,
        audit: Arc<dyn AuditLogger>,
    ) -> Self {
        Self {
            validator,
            permissions,
            registrar,
            audit,
        }
    }

    /// The demo wiring: standard rules, `admin` prefix policy, console sinks.
    pub fn with_console_defaults() -> Self {
        Self::new(
            Arc::new(CompositeValidator::standard()),
            Arc::new(AdminPrefixPolicy::default()),
            Arc::new(ConsoleRegistrar),
            Arc::new(ConsoleAuditLogger),
        )
    }

    /// Runs the pipeline for one credential pair.
    ///
    /// Stages run strictly in order and each failure aborts the call:
    /// 1. validate the credentials;
    /// 2. check permission for the (possibly empty) username;
    /// 3. hand the username to the registration sink;
    /// 4. log the registration action.
    pub fn register_user(&self, credentials: &Credentials) -> RegistrationOutcome {
        if let Err(reason) = self.validator.validate(credentials) {
            emit_event(&WorkflowEvent::Validated { passed: false });
            return RegistrationOutcome::ValidationFailed(reason);
        }
        emit_event(&WorkflowEvent::Validated { passed: true });

        // With an empty rule set the username may still be absent.
        let username = credentials.username().unwrap_or_default();

        let granted = self.permissions.has_permission(username);
        emit_event(&WorkflowEvent::PermissionChecked {
            username: username.to_string(),
            granted,
        });
        if !granted {
            return RegistrationOutcome::PermissionDenied;
        }

        self.registrar.register(username);
        emit_event(&WorkflowEvent::Registered {
            username: username.to_string(),
        });

        self.audit.log_action(username, "registration");
        emit_event(&WorkflowEvent::ActionLogged {
            username: username.to_string(),
            action: "registration".to_string(),
        });

        RegistrationOutcome::Registered
    }
}
