//! Macros for creating instance registries.
//!
//! This module provides a simple macro-based approach to create type-safe,
//! thread-safe instance registries with zero external dependencies.

/// Creates a complete instance registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `RegistryApi`
/// - Free functions delegating to the `Api`
///
/// Each generated module is an explicit, self-contained singleton with a
/// documented lifecycle: its storage comes into existence on first use, is
/// read and written only through the module's functions, and is torn down at
/// process exit. No registry state is shared between invocations.
///
/// # Examples
///
/// ```rust
/// use instance_registry::define_registry;
/// use std::sync::Arc;
///
/// // Create a registry
/// define_registry!(global);
///
/// // First request constructs the instance
/// let num: Arc<i32> = global::get_or_create(|| 42);
///
/// // Later requests reuse it; the closure never runs
/// let again: Arc<i32> = global::get_or_create(|| unreachable!());
///
/// assert!(Arc::ptr_eq(&num, &again));
/// assert_eq!(*again, 42);
/// ```
///
/// # Multiple Registries
///
/// You can create multiple isolated registries:
///
/// ```rust
/// use instance_registry::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(database);
/// define_registry!(cache);
///
/// // Each registry constructs and caches its own instance of a type
/// let db: Arc<String> = database::get_or_create(|| "db_connection".to_string());
/// let redis: Arc<String> = cache::get_or_create(|| "redis_connection".to_string());
///
/// assert!(!Arc::ptr_eq(&db, &redis));
/// ```
///
/// # Trait-Based Usage
///
/// If you need trait-based usage, the `API` constant is available:
///
/// ```rust
/// use instance_registry::{define_registry, RegistryApi};
/// use std::sync::Arc;
///
/// define_registry!(app);
///
/// // Use API constant for trait-based access
/// let value: Arc<i32> = app::API.get_or_create(|| 100);
/// assert_eq!(*value, 100);
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::sync::{Arc, LazyLock, Mutex};
            use std::collections::HashMap;
            use std::any::{TypeId, Any};

            // Storage for constructed instances (module-private)
            static STORAGE: LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
                LazyLock::new(|| Mutex::new(HashMap::new()));

            // Trace callback storage (module-private)
            static TRACE: LazyLock<Mutex<Option<Arc<dyn Fn(&$crate::RegistryEvent) + Send + Sync>>>> =
                LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the registry API.
            ///
            /// All registry operations are provided by the `RegistryApi` trait's
            /// default implementations. This struct only provides access to the statics.
            pub struct Api;

            impl $crate::RegistryApi for Api {
                fn storage() -> &'static LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>> {
                    &STORAGE
                }

                fn trace() -> &'static LazyLock<Mutex<Option<Arc<dyn Fn(&$crate::RegistryEvent) + Send + Sync>>>> {
                    &TRACE
                }

                // All other methods (get_or_create, construct, get, contains, etc.)
                // are provided by the trait's default implementations!
            }

            /// Convenient constant for accessing the registry API.
            pub const API: Api = Api;

            // Free functions for ergonomic usage - they delegate to API

            /// Return the instance of type `T`, constructing it on the first call.
            pub fn get_or_create<T, F>(init: F) -> Arc<T>
            where
                T: Send + Sync + 'static,
                F: FnOnce() -> T,
            {
                use $crate::RegistryApi;
                API.get_or_create(init)
            }

            /// Fallible variant of `get_or_create`; first-call errors propagate unchanged.
            pub fn try_get_or_create<T, E, F>(init: F) -> Result<Arc<T>, E>
            where
                T: Send + Sync + 'static,
                F: FnOnce() -> Result<T, E>,
            {
                use $crate::RegistryApi;
                API.try_get_or_create(init)
            }

            /// Memoized construction through the `Constructible` contract.
            pub fn construct<T: $crate::Constructible>(args: T::Args) -> Arc<T> {
                use $crate::RegistryApi;
                API.construct(args)
            }

            /// Look up the instance of type `T` without constructing.
            pub fn get<T: Send + Sync + 'static>() -> Result<Arc<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get()
            }

            /// Look up a cloned copy of the instance of type `T`.
            pub fn get_cloned<T: Send + Sync + Clone + 'static>() -> Result<T, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get_cloned()
            }

            /// Check whether an instance of type `T` has been constructed.
            pub fn contains<T: Send + Sync + 'static>() -> Result<bool, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.contains::<T>()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static) {
                use $crate::RegistryApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::RegistryApi;
                API.clear_trace_callback()
            }
        }
    };
}
