//! Interactive registration demo.
//!
//! Reads two lines from stdin (username, password), runs them through the
//! console-default workflow, and narrates each step's outcome.
//!
//! Run with: `cargo run --example registration_cli`

use std::io::{self, BufRead, Write};

use registration_workflow::{
    set_trace_callback, Credentials, RegistrationOutcome, RegistrationWorkflow,
};

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        // EOF counts as an absent field, not an error.
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn main() -> io::Result<()> {
    println!("=== registration-workflow: Interactive Registration ===\n");

    let username = read_line("Username: ")?;
    let password = read_line("Password: ")?;
    let credentials = Credentials::new(username, password);

    // Narrate each step as it happens.
    set_trace_callback(|event| println!("  [step] {event}"));

    println!("\nRunning the workflow...\n");
    let workflow = RegistrationWorkflow::with_console_defaults();
    let outcome = workflow.register_user(&credentials);

    println!("\nOutcome: {outcome}");
    match outcome {
        RegistrationOutcome::Registered => {
            println!("The user was registered and the action logged.")
        }
        RegistrationOutcome::ValidationFailed(reason) => {
            println!("Nothing was registered: {reason}.")
        }
        RegistrationOutcome::PermissionDenied => {
            println!("Only usernames starting with 'admin' may register here.")
        }
    }

    Ok(())
}
