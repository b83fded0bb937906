//! The construction contract wrapped by the registry.
//!
//! Types opt into memoized construction by implementing [`Constructible`]: a
//! single `create()` entry point the registry calls at most once per process.
//! There is no hidden interception of normal constructor syntax — calling
//! `T::create(..)` directly always builds a fresh, unmanaged instance; only
//! requests routed through a registry's `construct` are memoized.

/// A type the registry knows how to build exactly once.
///
/// `Args` carries whatever the constructor needs; use `()` for argument-less
/// types. Note that `Args` only ever reaches `create` on the *first* request
/// for the type — arguments supplied on later requests are discarded by the
/// registry (and reported, see `RegistryEvent::ArgumentsDiscarded`).
///
/// # Examples
///
/// ```rust
/// use instance_registry::{define_registry, Constructible};
/// use std::sync::Arc;
///
/// define_registry!(drivers);
///
/// struct NetworkDriver {
///     device: String,
/// }
///
/// impl Constructible for NetworkDriver {
///     type Args = String;
///
///     fn create(device: String) -> Self {
///         NetworkDriver { device }
///     }
/// }
///
/// let first: Arc<NetworkDriver> = drivers::construct("eth0".to_string());
/// // "eth1" is discarded: the instance already exists
/// let second: Arc<NetworkDriver> = drivers::construct("eth1".to_string());
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(second.device, "eth0");
/// ```
pub trait Constructible: Send + Sync + Sized + 'static {
    /// Arguments consumed by [`create`](Constructible::create).
    type Args;

    /// Build a fresh instance.
    ///
    /// When invoked through a registry, this runs at most once per type and
    /// per registry; any side effects (logging, counters) therefore happen at
    /// most once. Must not call back into the registry that is constructing
    /// it, as the registry lock is held during construction.
    fn create(args: Self::Args) -> Self;
}
