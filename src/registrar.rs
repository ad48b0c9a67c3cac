//! The registration-sink capability.

/// Contract for the registration sink.
///
/// `register` unconditionally succeeds and produces an observable side effect.
/// Callers are responsible for validating the username first; the sink does
/// not re-check it.
pub trait Registrar: Send + Sync {
    fn register(&self, username: &str);
}

/// Registration sink that records the user on stdout (simulated storage).
#[derive(Debug, Default)]
pub struct ConsoleRegistrar;

impl Registrar for ConsoleRegistrar {
    fn register(&self, username: &str) {
        println!("[registrar] recorded user '{username}'");
    }
}
