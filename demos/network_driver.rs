//! The classic singleton scenario: a network driver requested three times,
//! constructed once.
//!
//! Demonstrates:
//! - The `Constructible` contract with optional arguments
//! - Three construction requests yielding three identical references
//! - A constructor counter proving exactly one invocation
//!
//! Run with: `cargo run --example network_driver`

use instance_registry::{define_registry, Constructible};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

define_registry!(drivers);

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

struct NetworkDriver {
    device: Option<String>,
}

impl Constructible for NetworkDriver {
    type Args = Option<String>;

    fn create(device: Option<String>) -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        println!("   NetworkDriver constructor running (device: {:?})", device);
        NetworkDriver { device }
    }
}

fn request_driver(args: Option<String>) -> Arc<NetworkDriver> {
    let driver: Arc<NetworkDriver> = drivers::construct(args);
    println!(
        "   NetworkDriver instance at {:p} (device: {:?})\n",
        Arc::as_ptr(&driver),
        driver.device
    );
    driver
}

fn main() {
    println!("=== instance-registry: NetworkDriver Singleton ===\n");

    println!("Requesting the driver three times...\n");

    // First request: no arguments, runs the constructor
    let driver1 = request_driver(None);

    // Later requests: arguments are discarded (watch stderr for the warning)
    let driver2 = request_driver(Some("eth0".to_string()));
    let driver3 = request_driver(Some("wlan0".to_string()));

    if Arc::ptr_eq(&driver1, &driver2) && Arc::ptr_eq(&driver2, &driver3) {
        println!("All instances are the same. At-most-one construction holds!");
    } else {
        println!("Instances are different. Something is very wrong.");
    }

    println!(
        "Constructor invocations: {} (requested 3 times)",
        CONSTRUCTIONS.load(Ordering::SeqCst)
    );
}
