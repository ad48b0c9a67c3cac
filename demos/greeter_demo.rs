//! Shared greeter demo.
//!
//! Takes no input. Fetches the shared greeter twice, shows that both accesses
//! return the identical instance, and exercises both display operations.
//!
//! Run with: `cargo run --example greeter_demo`

use registration_workflow::Greeter;

fn main() {
    println!("=== registration-workflow: Shared Greeter ===\n");

    println!("1. First access (constructs the instance)...");
    let first = Greeter::instance();

    println!("\n2. Second access (returns the same instance)...");
    let second = Greeter::instance();

    println!("   Same instance? {}", std::ptr::eq(first, second));
    println!("   Constructions so far: {}", Greeter::init_count());

    println!("\n3. Display operations...");
    println!("   {}", first.greeting());
    println!("   {}", second.signature());
}
