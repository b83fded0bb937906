//! # Instance Registry
//!
//! A thread-safe instance registry guaranteeing at-most-one construction per type.
//!
//! The registry is a memoization gate in front of construction: the first request
//! for a type runs the constructor and caches the result, every later request
//! returns a shared reference to the same instance. Constructor arguments supplied
//! on later requests are discarded (see the warning below).
//!
//! ## Quick Start
//!
//! ```rust
//! use instance_registry::define_registry;
//! use std::sync::Arc;
//!
//! define_registry!(app);
//!
//! // First call constructs and caches the instance
//! let greeting: Arc<String> = app::get_or_create(|| "Hello, World!".to_string());
//!
//! // Second call returns the same instance; the closure is never run
//! let again: Arc<String> = app::get_or_create(|| unreachable!());
//!
//! assert!(Arc::ptr_eq(&greeting, &again));
//! ```
//!
//! ## Discarded constructor arguments
//!
//! Once an instance exists for a type, the registry ignores everything a later
//! request would have used to build a new one. This is inherent to the pattern but
//! is an easy trap for callers, so the registry surfaces it: a repeat
//! [`construct`](RegistryApi::construct) call emits
//! [`RegistryEvent::ArgumentsDiscarded`] (or a stderr warning when no trace
//! callback is installed).
//!
//! ## Features
//!
//! - **Thread-safe**: concurrent first-time requests for one type construct exactly once
//! - **Type-safe**: instances are stored and retrieved with full type information
//! - **Isolated registries**: each [`define_registry!`] invocation owns its own storage
//! - **Tracing support**: optional callback system for monitoring registry operations
//!
//! ## Main operations
//!
//! - [`RegistryApi::get_or_create`] - return the cached instance, constructing it on first call
//! - [`RegistryApi::try_get_or_create`] - fallible variant; first-call errors propagate unchanged
//! - [`RegistryApi::construct`] - memoized construction through the [`Constructible`] contract
//! - [`RegistryApi::get`] - look up an instance without constructing
//! - [`RegistryApi::contains`] - check whether a type has been constructed
//! - [`RegistryApi::set_trace_callback`] - set up tracing for registry operations

mod constructible;
mod macros;
mod registry_error;
mod registry_event;
mod registry_trait;

// Re-export the main public API
pub use constructible::Constructible;
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::RegistryApi;
