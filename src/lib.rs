//! # Registration Workflow
//!
//! A small capability-based user registration workflow built on trait-contract
//! dependency injection.
//!
//! Each concern — validation, permission checking, the registration sink, the
//! audit logger — is a `Send + Sync` capability trait. The orchestrator holds
//! its collaborators as `Arc<dyn Trait>` and knows nothing about the concrete
//! implementations behind them.
//!
//! ## Quick Start
//!
//! ```rust
//! use registration_workflow::{Credentials, RegistrationOutcome, RegistrationWorkflow};
//!
//! let workflow = RegistrationWorkflow::with_console_defaults();
//!
//! let outcome = workflow.register_user(&Credentials::of("admin_ada", "hunter22"));
//! assert_eq!(outcome, RegistrationOutcome::Registered);
//!
//! let outcome = workflow.register_user(&Credentials::of("bob", "hunter22"));
//! assert_eq!(outcome, RegistrationOutcome::PermissionDenied);
//! ```
//!
//! ## Features
//!
//! - **Contract-based**: every collaborator is swappable behind a trait
//! - **Short-circuit validation**: an ordered rule sequence halting at the first failure
//! - **Tracing support**: optional callback observing every workflow step
//! - **Guarded shared greeter**: a one-time-initialized, process-wide instance
//!
//! ## Main Types
//!
//! - [`RegistrationWorkflow`] - the orchestrator running validate → permission → register → log
//! - [`CompositeValidator`] - ordered validation rules with short-circuit failure
//! - [`Greeter`] - the lazily constructed shared instance
//! - [`set_trace_callback`] - observe workflow events as they happen

mod audit;
mod credentials;
mod greeter;
mod permission;
mod registrar;
mod validation;
mod workflow;
mod workflow_error;
mod workflow_event;

// Re-export the main public API
pub use audit::{AuditLogger, ConsoleAuditLogger};
pub use credentials::Credentials;
pub use greeter::Greeter;
pub use permission::{AdminPrefixPolicy, PermissionCheck};
pub use registrar::{ConsoleRegistrar, Registrar};
pub use validation::{
    CompositeValidator, PasswordLengthRule, RequiredFieldsRule, UsernameLengthRule,
    ValidationRule, Validator,
};
pub use workflow::{RegistrationOutcome, RegistrationWorkflow};
pub use workflow_error::ValidationError;
pub use workflow_event::{clear_trace_callback, set_trace_callback, TraceCallback, WorkflowEvent};
