//! The shared greeter instance.
//!
//! A process-wide, lazily constructed value. The classic hand-rolled
//! check-and-create singleton races on first access; here construction sits
//! behind `LazyLock`, so exactly one instance is built even when several
//! threads hit [`Greeter::instance`] at once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

use crate::workflow_event::{emit_event, WorkflowEvent};

/// Counts constructions so tests can assert the exactly-once property.
static INIT_CALLS: AtomicUsize = AtomicUsize::new(0);

/// Thread-safe lazy holder for the single shared greeter.
static INSTANCE: LazyLock<Greeter> = LazyLock::new(|| {
    INIT_CALLS.fetch_add(1, Ordering::SeqCst);
    emit_event(&WorkflowEvent::GreeterInit {});
    println!("[greeter] shared instance initialized");
    Greeter { _private: () }
});

/// A stateless greeter shared by the whole process.
///
/// Constructed at most once, on first access, and never mutated afterwards.
/// Its two display operations produce distinct diagnostic text and touch no
/// state.
///
/// # Examples
///
/// ```rust
/// use registration_workflow::Greeter;
///
/// let a = Greeter::instance();
/// let b = Greeter::instance();
/// assert!(std::ptr::eq(a, b));
/// ```
#[derive(Debug)]
pub struct Greeter {
    _private: (),
}

impl Greeter {
    /// Returns the shared instance, constructing it on first call.
    ///
    /// The one-time initialization side effect (a diagnostic line and a
    /// [`WorkflowEvent::GreeterInit`] event) happens exactly once per process,
    /// regardless of how many threads call this concurrently.
    pub fn instance() -> &'static Greeter {
        &INSTANCE
    }

    /// First display operation: a greeting line.
    pub fn greeting(&self) -> &'static str {
        "Hello from the shared greeter."
    }

    /// Second display operation: a self-description line.
    pub fn signature(&self) -> String {
        format!("Greeter (shared instance, initialized {} time)", Self::init_count())
    }

    /// How many times the shared instance has been constructed (0 or 1).
    #[doc(hidden)]
    pub fn init_count() -> usize {
        INIT_CALLS.load(Ordering::SeqCst)
    }
}
