//! Integration tests for registry isolation and multiple registries.
//!
//! This test demonstrates that multiple registries are completely isolated
//! from each other: each one constructs and caches its own instance of a
//! type, and nothing leaks between them.

use instance_registry::define_registry;
use std::sync::Arc;

#[test]
fn test_multiple_isolated_registries() {
    // Create three separate registries
    define_registry!(database);
    define_registry!(cache);
    define_registry!(config);

    // Each constructs its own String instance
    let db: Arc<String> = database::get_or_create(|| "postgresql://localhost".to_string());
    let cache_val: Arc<String> = cache::get_or_create(|| "redis://localhost".to_string());
    let cfg: Arc<String> = config::get_or_create(|| "app_config".to_string());

    // Verify each registry has its own value
    assert_eq!(&**db, "postgresql://localhost");
    assert_eq!(&**cache_val, "redis://localhost");
    assert_eq!(&**cfg, "app_config");
}

#[test]
fn test_same_type_different_registries() {
    // Create two registries
    define_registry!(reg_a);
    define_registry!(reg_b);

    // Construct the same type with different values
    let a: Arc<i32> = reg_a::get_or_create(|| 100);
    let b: Arc<i32> = reg_b::get_or_create(|| 200);

    // Each registry maintains its own instance
    assert_eq!(*a, 100);
    assert_eq!(*b, 200);
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_registry_does_not_leak_between_instances() {
    define_registry!(isolated_a);
    define_registry!(isolated_b);

    // Construct in one registry
    let _: Arc<String> = isolated_a::get_or_create(|| "only in A".to_string());

    // Other registry should not have it
    assert!(isolated_a::contains::<String>().unwrap());
    assert!(!isolated_b::contains::<String>().unwrap());

    // Attempting to get from empty registry should fail
    let result: Result<Arc<String>, _> = isolated_b::get();
    assert!(result.is_err());
}

#[test]
fn test_multiple_types_in_multiple_registries() {
    define_registry!(multi_a);
    define_registry!(multi_b);

    // Construct different types in each
    let _: Arc<i32> = multi_a::get_or_create(|| 42);
    let _: Arc<String> = multi_a::get_or_create(|| "hello".to_string());

    let _: Arc<f64> = multi_b::get_or_create(|| std::f64::consts::PI);
    let _: Arc<bool> = multi_b::get_or_create(|| true);

    // Verify isolation
    assert!(multi_a::contains::<i32>().unwrap());
    assert!(multi_a::contains::<String>().unwrap());
    assert!(!multi_a::contains::<f64>().unwrap());
    assert!(!multi_a::contains::<bool>().unwrap());

    assert!(multi_b::contains::<f64>().unwrap());
    assert!(multi_b::contains::<bool>().unwrap());
    assert!(!multi_b::contains::<i32>().unwrap());
    assert!(!multi_b::contains::<String>().unwrap());
}

#[test]
fn test_registry_scoping() {
    // Demonstrate that registries can be scoped to different modules/contexts
    mod module_a {
        use instance_registry::define_registry;
        define_registry!(scoped);

        pub fn value() -> String {
            use std::sync::Arc;
            let val: Arc<String> = scoped::get_or_create(|| "module A".to_string());
            val.to_string()
        }
    }

    mod module_b {
        use instance_registry::define_registry;
        define_registry!(scoped);

        pub fn value() -> String {
            use std::sync::Arc;
            let val: Arc<String> = scoped::get_or_create(|| "module B".to_string());
            val.to_string()
        }
    }

    // Each module has its own registry and its own instance
    assert_eq!(module_a::value(), "module A");
    assert_eq!(module_b::value(), "module B");
}

#[test]
fn test_registry_with_tracing_isolation() {
    define_registry!(traced_a);
    define_registry!(traced_b);

    // Set up tracing only for one registry
    let events = Arc::new(std::sync::Mutex::new(Vec::new()));
    let events_clone = events.clone();

    traced_a::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });

    // Construct in both
    let _: Arc<i32> = traced_a::get_or_create(|| 1);
    let _: Arc<i32> = traced_b::get_or_create(|| 2);

    // Only traced_a should have events
    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert!(captured[0].contains("created"));
}
