//! Basic usage example for instance-registry.
//!
//! Demonstrates:
//! - Memoized construction with `get_or_create()` (returns `Arc<T>`)
//! - Fallible construction with `try_get_or_create()`
//! - Looking up instances with `get()` and `get_cloned()`
//! - Checking construction status with `contains()`
//!
//! Run with: `cargo run --example basic_usage`

use instance_registry::define_registry;
use std::sync::Arc;

// Create an isolated registry for this example
define_registry!(app);

// Custom struct to demonstrate complex types
#[derive(Debug, Clone, PartialEq)]
struct AppConfig {
    name: String,
    version: u32,
    debug_mode: bool,
}

fn main() {
    println!("=== instance-registry: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Construct primitives
    // -------------------------------------------------------------------------
    println!("1. Constructing primitives...");

    let number: Arc<i32> = app::get_or_create(|| 42);
    let pi: Arc<f64> = app::get_or_create(|| 3.14);
    let flag: Arc<bool> = app::get_or_create(|| true);

    println!("   Constructed: i32({}), f64({}), bool({})", number, pi, flag);

    // -------------------------------------------------------------------------
    // 2. Repeat requests reuse the cached instance
    // -------------------------------------------------------------------------
    println!("\n2. Repeating the request for i32...");

    let number_again: Arc<i32> = app::get_or_create(|| {
        println!("   (this constructor never runs)");
        0
    });

    println!(
        "   Same instance as before: {}",
        Arc::ptr_eq(&number, &number_again)
    );

    // -------------------------------------------------------------------------
    // 3. Construct a custom struct
    // -------------------------------------------------------------------------
    println!("\n3. Constructing a custom struct...");

    let config: Arc<AppConfig> = app::get_or_create(|| AppConfig {
        name: "MyApp".to_string(),
        version: 1,
        debug_mode: true,
    });

    println!("   Constructed: {:?}", config);

    // -------------------------------------------------------------------------
    // 4. Check construction status with contains()
    // -------------------------------------------------------------------------
    println!("\n4. Checking construction status with contains()...");

    println!("   contains::<i32>()       = {}", app::contains::<i32>().unwrap());
    println!("   contains::<AppConfig>() = {}", app::contains::<AppConfig>().unwrap());
    println!("   contains::<Vec<u8>>()   = {}", app::contains::<Vec<u8>>().unwrap()); // Never constructed

    // -------------------------------------------------------------------------
    // 5. Look up instances with get() - returns Arc<T>, never constructs
    // -------------------------------------------------------------------------
    println!("\n5. Looking up instances with get() -> Arc<T>...");

    let fetched: Arc<AppConfig> = app::get().unwrap();
    println!("   AppConfig: {:?}", *fetched);

    // -------------------------------------------------------------------------
    // 6. Retrieve cloned values with get_cloned() - returns T
    // -------------------------------------------------------------------------
    println!("\n6. Retrieving cloned values with get_cloned() -> T...");

    // get_cloned() requires the type to implement Clone
    let config_owned: AppConfig = app::get_cloned().unwrap();
    println!("   AppConfig (owned): {:?}", config_owned);

    // -------------------------------------------------------------------------
    // 7. Fallible construction with try_get_or_create()
    // -------------------------------------------------------------------------
    println!("\n7. Fallible construction...");

    let result: Result<Arc<Vec<u8>>, String> =
        app::try_get_or_create(|| Err("resource not available".to_string()));

    match result {
        Ok(value) => println!("   Constructed Vec<u8>: {:?}", value),
        Err(e) => println!("   Error (expected, nothing cached): {}", e),
    }

    // -------------------------------------------------------------------------
    // 8. Handle missing types gracefully
    // -------------------------------------------------------------------------
    println!("\n8. Handling missing types...");

    match app::get::<Vec<u8>>() {
        Ok(value) => println!("   Found Vec<u8>: {:?}", value),
        Err(e) => println!("   Error (expected): {}", e),
    }

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    println!("\n=== Example Complete ===");
    println!("The registry now holds 4 instances (i32, f64, bool, AppConfig), each constructed exactly once.");
}
