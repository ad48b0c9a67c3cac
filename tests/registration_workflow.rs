//! End-to-end tests for the registration pipeline.
//!
//! The workflow is exercised through recording fakes injected behind the
//! capability contracts, the same way the console implementations are wired
//! in. Console output is never asserted on; side effects are observed through
//! the fakes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use registration_workflow::{
    AdminPrefixPolicy, AuditLogger, CompositeValidator, Credentials, PermissionCheck,
    RegistrationOutcome, RegistrationWorkflow, Registrar, ValidationError,
};

/// Registration sink that remembers every username it received.
#[derive(Default)]
struct RecordingRegistrar {
    registered: Mutex<Vec<String>>,
}

impl Registrar for RecordingRegistrar {
    fn register(&self, username: &str) {
        self.registered.lock().unwrap().push(username.to_string());
    }
}

/// Audit logger that remembers every (username, action) pair.
#[derive(Default)]
struct RecordingAuditLogger {
    entries: Mutex<Vec<(String, String)>>,
}

impl AuditLogger for RecordingAuditLogger {
    fn log_action(&self, username: &str, action: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((username.to_string(), action.to_string()));
    }
}

/// Permission policy wrapper that counts how often it was consulted.
struct CountingPolicy {
    inner: AdminPrefixPolicy,
    calls: AtomicUsize,
}

impl CountingPolicy {
    fn new() -> Self {
        Self {
            inner: AdminPrefixPolicy::default(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl PermissionCheck for CountingPolicy {
    fn has_permission(&self, username: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.has_permission(username)
    }
}

fn workflow_with(
    policy: Arc<CountingPolicy>,
    registrar: Arc<RecordingRegistrar>,
    audit: Arc<RecordingAuditLogger>,
) -> RegistrationWorkflow {
    RegistrationWorkflow::new(
        Arc::new(CompositeValidator::standard()),
        policy,
        registrar,
        audit,
    )
}

#[test]
fn admin_user_is_registered_and_logged_exactly_once() {
    let policy = Arc::new(CountingPolicy::new());
    let registrar = Arc::new(RecordingRegistrar::default());
    let audit = Arc::new(RecordingAuditLogger::default());
    let workflow = workflow_with(policy.clone(), registrar.clone(), audit.clone());

    let outcome = workflow.register_user(&Credentials::of("admin_bob", "secret1"));

    assert_eq!(outcome, RegistrationOutcome::Registered);
    assert_eq!(*registrar.registered.lock().unwrap(), vec!["admin_bob"]);
    assert_eq!(
        *audit.entries.lock().unwrap(),
        vec![("admin_bob".to_string(), "registration".to_string())]
    );
    assert_eq!(policy.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn non_admin_user_is_denied_with_no_side_effects() {
    let policy = Arc::new(CountingPolicy::new());
    let registrar = Arc::new(RecordingRegistrar::default());
    let audit = Arc::new(RecordingAuditLogger::default());
    let workflow = workflow_with(policy.clone(), registrar.clone(), audit.clone());

    let outcome = workflow.register_user(&Credentials::of("bob", "secret1"));

    assert_eq!(outcome, RegistrationOutcome::PermissionDenied);
    assert!(registrar.registered.lock().unwrap().is_empty());
    assert!(audit.entries.lock().unwrap().is_empty());
    assert_eq!(policy.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn invalid_credentials_stop_before_the_permission_check() {
    let policy = Arc::new(CountingPolicy::new());
    let registrar = Arc::new(RecordingRegistrar::default());
    let audit = Arc::new(RecordingAuditLogger::default());
    let workflow = workflow_with(policy.clone(), registrar.clone(), audit.clone());

    let outcome = workflow.register_user(&Credentials::of("ab", "secret1"));

    assert_eq!(
        outcome,
        RegistrationOutcome::ValidationFailed(ValidationError::UsernameTooShort { min: 3 })
    );
    assert_eq!(
        policy.calls.load(Ordering::SeqCst),
        0,
        "permission must not be consulted for invalid credentials"
    );
    assert!(registrar.registered.lock().unwrap().is_empty());
    assert!(audit.entries.lock().unwrap().is_empty());
}

#[test]
fn missing_fields_surface_the_missing_field_reason() {
    let policy = Arc::new(CountingPolicy::new());
    let registrar = Arc::new(RecordingRegistrar::default());
    let audit = Arc::new(RecordingAuditLogger::default());
    let workflow = workflow_with(policy, registrar, audit);

    let outcome = workflow.register_user(&Credentials::new(None, Some("secret1".into())));
    assert_eq!(
        outcome,
        RegistrationOutcome::ValidationFailed(ValidationError::MissingUsername)
    );

    let outcome = workflow.register_user(&Credentials::new(Some("admin_bob".into()), None));
    assert_eq!(
        outcome,
        RegistrationOutcome::ValidationFailed(ValidationError::MissingPassword)
    );
}

#[test]
fn empty_rule_set_sends_empty_username_to_the_policy() {
    // With no rules configured, validation trivially passes and the policy
    // sees whatever username there is — here, none at all.
    let policy = Arc::new(CountingPolicy::new());
    let registrar = Arc::new(RecordingRegistrar::default());
    let audit = Arc::new(RecordingAuditLogger::default());
    let workflow = RegistrationWorkflow::new(
        Arc::new(CompositeValidator::new()),
        policy.clone(),
        registrar,
        audit,
    );

    let outcome = workflow.register_user(&Credentials::default());

    assert_eq!(outcome, RegistrationOutcome::PermissionDenied);
    assert_eq!(policy.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn repeated_calls_are_independent() {
    let policy = Arc::new(CountingPolicy::new());
    let registrar = Arc::new(RecordingRegistrar::default());
    let audit = Arc::new(RecordingAuditLogger::default());
    let workflow = workflow_with(policy, registrar.clone(), audit.clone());

    workflow.register_user(&Credentials::of("admin_a", "secret1"));
    workflow.register_user(&Credentials::of("admin_b", "secret1"));

    // No deduplication anywhere: two registrations, two audit entries.
    assert_eq!(*registrar.registered.lock().unwrap(), vec!["admin_a", "admin_b"]);
    assert_eq!(audit.entries.lock().unwrap().len(), 2);
}
