//! Workflow events and the optional tracing callback.
//!
//! Console output from the bundled sinks is informational only; the event
//! stream here is the machine-observable channel. Tests subscribe to it to
//! assert which steps ran and in what order.

use std::fmt;
use std::sync::{Arc, LazyLock, Mutex};

/// Events emitted as the workflow (and the shared greeter) make progress.
///
/// These events are passed to the tracing callback set via [`set_trace_callback`].
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use registration_workflow::WorkflowEvent;
///
/// let event = WorkflowEvent::Registered { username: "admin_ada".to_string() };
/// println!("{:?}", event);
/// ```
#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    /// Credentials were run through the validator.
    Validated {
        /// Whether every rule passed.
        passed: bool,
    },

    /// The permission policy was consulted.
    PermissionChecked {
        /// The username that was checked (possibly empty).
        username: String,
        /// Whether the policy granted permission.
        granted: bool,
    },

    /// A username reached the registration sink.
    Registered {
        username: String,
    },

    /// An action was recorded by the audit logger.
    ActionLogged {
        username: String,
        action: String,
    },

    /// The shared greeter was constructed (emitted at most once per process).
    GreeterInit {},
}

impl fmt::Display for WorkflowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowEvent::Validated { passed } => {
                write!(f, "validated {{ passed: {passed} }}")
            }
            WorkflowEvent::PermissionChecked { username, granted } => {
                write!(
                    f,
                    "permission_checked {{ username: {username}, granted: {granted} }}"
                )
            }
            WorkflowEvent::Registered { username } => {
                write!(f, "registered {{ username: {username} }}")
            }
            WorkflowEvent::ActionLogged { username, action } => {
                write!(f, "action_logged {{ username: {username}, action: {action} }}")
            }
            WorkflowEvent::GreeterInit {} => write!(f, "greeter initialized"),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Tracing callback support
// -------------------------------------------------------------------------------------------------

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `WorkflowEvent` every time a workflow
/// step completes. It must be thread-safe because the callback slot is globally
/// shared.
pub type TraceCallback = dyn Fn(&WorkflowEvent) + Send + Sync + 'static;

/// Holds an optional user-defined tracing callback.
static TRACE_CALLBACK: LazyLock<Mutex<Option<Arc<TraceCallback>>>> =
    LazyLock::new(|| Mutex::new(None));

/// Sets a tracing callback that will be invoked on every workflow event.
///
/// Call [`clear_trace_callback`] to disable tracing again.
///
/// The callback must not run the workflow itself; it is invoked while the
/// trace lock is held.
///
/// # Example
/// ```rust
/// use registration_workflow::set_trace_callback;
///
/// set_trace_callback(|event| println!("[workflow-trace] {:?}", event));
/// # registration_workflow::clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&WorkflowEvent) + Send + Sync + 'static) {
    let mut guard = TRACE_CALLBACK.lock().unwrap_or_else(|p| p.into_inner());
    *guard = Some(Arc::new(callback));
}

/// Clears the tracing callback (disables workflow tracing).
pub fn clear_trace_callback() {
    let mut guard = TRACE_CALLBACK.lock().unwrap_or_else(|p| p.into_inner());
    *guard = None;
}

/// Convenience wrapper to emit a workflow event using the current callback.
pub(crate) fn emit_event(event: &WorkflowEvent) {
    // lock poisoning unlikely; if poisoned, keep emitting with recovered lock
    let guard = TRACE_CALLBACK.lock().unwrap_or_else(|p| p.into_inner());
    if let Some(callback) = guard.as_ref() {
        callback(event);
    }
}
