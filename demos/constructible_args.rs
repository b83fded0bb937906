//! The discarded-arguments trap, made visible.
//!
//! Once an instance exists for a type, later `construct` calls ignore their
//! arguments entirely. This example shows both ways the registry reports it:
//! - with no trace callback: a warning on stderr
//! - with a trace callback: a `RegistryEvent::ArgumentsDiscarded` event
//!
//! Run with: `cargo run --example constructible_args`

use instance_registry::{define_registry, Constructible, RegistryEvent};
use std::sync::Arc;

define_registry!(pools);

struct ConnectionPool {
    url: String,
    size: usize,
}

impl Constructible for ConnectionPool {
    type Args = (String, usize);

    fn create((url, size): (String, usize)) -> Self {
        ConnectionPool { url, size }
    }
}

fn main() {
    println!("=== instance-registry: Discarded Arguments ===\n");

    // -------------------------------------------------------------------------
    // 1. First construction: arguments are used
    // -------------------------------------------------------------------------
    println!("1. Constructing the pool with (localhost, 8)...");

    let pool: Arc<ConnectionPool> = pools::construct(("postgres://localhost".to_string(), 8));
    println!("   Pool: url={}, size={}", pool.url, pool.size);

    // -------------------------------------------------------------------------
    // 2. Repeat construction without a callback: stderr warning
    // -------------------------------------------------------------------------
    println!("\n2. Requesting again with (db.example.com, 32) — check stderr...");

    let same: Arc<ConnectionPool> = pools::construct(("postgres://db.example.com".to_string(), 32));
    println!("   Still the first pool: url={}, size={}", same.url, same.size);
    println!("   Same instance: {}", Arc::ptr_eq(&pool, &same));

    // -------------------------------------------------------------------------
    // 3. With a trace callback: the event goes to the callback instead
    // -------------------------------------------------------------------------
    println!("\n3. Installing a trace callback and requesting once more...");

    pools::set_trace_callback(|event| {
        if let RegistryEvent::ArgumentsDiscarded { type_name } = event {
            println!("   [trace] arguments discarded for {}", type_name);
        }
    });

    let _: Arc<ConnectionPool> = pools::construct(("postgres://third-try".to_string(), 64));

    pools::clear_trace_callback();

    println!("\n=== Example Complete ===");
    println!("Later arguments never reach a constructor; the registry tells you when it drops them.");
}
