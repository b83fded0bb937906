//! Core trait defining registry behavior.
//!
//! This module provides the `RegistryApi` trait with default implementations for
//! type-safe memoized construction, retrieval, and tracing of singleton instances.
//!
//! The registry is type-based: each type (`TypeId`) can have exactly one instance
//! constructed. Once an instance exists, every later construction request for that
//! type returns the cached instance and its arguments are discarded.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use crate::{Constructible, RegistryError, RegistryEvent};

/// Type alias for the trace callback storage.
///
/// Note: This type is also defined in the `define_registry!` macro.
/// Keep both definitions in sync.
type TraceCallback = LazyLock<Mutex<Option<Arc<dyn Fn(&RegistryEvent) + Send + Sync>>>>;

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// two accessor methods (`storage` and `trace`) to be implemented by the implementor.
///
/// The registry stores singleton instances indexed by their type (`TypeId`).
/// Each type is constructed at most once per registry; there is no replacement
/// path, so every reference handed out for a type stays valid and identical for
/// the life of the process.
pub trait RegistryApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    ///
    /// This method must be implemented to provide access to the registry's trace callback.
    fn trace() -> &'static TraceCallback;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback will be invoked for every registry operation (created, reused,
    /// arguments_discarded, get, contains, clear).
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned (due to a panic while holding the lock),
    /// this method automatically recovers by extracting the inner value.
    /// This is safe because trace operations are non-critical and idempotent.
    ///
    /// # Safety Restrictions
    ///
    /// The callback must NOT call any registry methods on the same registry,
    /// as this will cause a deadlock. The callback is invoked while holding
    /// the trace lock.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// After calling this, no tracing events will be emitted.
    /// Note: This does not affect constructed instances, only the tracing callback.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method automatically recovers.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Convenience wrapper to emit a registry event using the current callback.
    ///
    /// If a trace callback is set, this method will invoke it with the provided event.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// Lock poisoning is automatically recovered by extracting the inner value.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic will propagate to the caller.
    /// The registry lock is not held during callback execution, so this won't
    /// poison the registry storage.
    fn emit_event(&self, event: &RegistryEvent) {
        let guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }

    /// Report discarded constructor arguments for `type_name`.
    ///
    /// Dropping later-call arguments is inherent to the pattern but easy to
    /// trip over, so it is never silent: the event goes to the trace callback
    /// when one is set, or to stderr when none is.
    fn warn_arguments_discarded(&self, type_name: &'static str) {
        let guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        match guard.as_ref() {
            Some(callback) => callback(&RegistryEvent::ArgumentsDiscarded { type_name }),
            None => eprintln!(
                "instance-registry: constructor arguments for {type_name} were discarded; \
                 the instance already exists"
            ),
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    ///
    /// This method must be implemented to provide access to the registry's storage.
    fn storage() -> &'static LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>;

    /// Return the instance of type `T`, constructing it on the first call.
    ///
    /// Looks up `T` in the registry. If absent, runs `init`, caches the result
    /// and returns it. If present, `init` is dropped without being called and
    /// the cached instance is returned. Repeated calls for the same type always
    /// yield the same `Arc` (`Arc::ptr_eq` holds between them).
    ///
    /// The lookup and the construction happen under the same registry lock, so
    /// concurrent first-time requests for one type construct exactly once: one
    /// thread runs `init`, the others block and then receive the cached instance.
    ///
    /// # Constructor Restrictions
    ///
    /// `init` runs while the registry lock is held. It must not call back into
    /// the same registry (deadlock) and should be side-effect-light, since every
    /// other request for this registry waits until it finishes.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the storage lock is poisoned, this method automatically recovers.
    ///
    /// # Examples
    ///
    /// ```
    /// use instance_registry::define_registry;
    /// use std::sync::Arc;
    ///
    /// define_registry!(app);
    ///
    /// let first: Arc<u32> = app::get_or_create(|| 42);
    /// let second: Arc<u32> = app::get_or_create(|| 99); // closure ignored
    ///
    /// assert!(Arc::ptr_eq(&first, &second));
    /// assert_eq!(*second, 42);
    /// ```
    fn get_or_create<T, F>(&self, init: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let type_name = std::any::type_name::<T>();

        let mut map = Self::storage().lock().unwrap_or_else(|p| p.into_inner());

        if let Some(existing) = map.get(&TypeId::of::<T>()) {
            if let Ok(instance) = Arc::clone(existing).downcast::<T>() {
                drop(map);
                self.emit_event(&RegistryEvent::Reused { type_name });
                return instance;
            }
            // A mismatched entry under this TypeId is unreachable in safe code;
            // fall through and overwrite with a correctly typed instance.
        }

        let instance = Arc::new(init());
        map.insert(TypeId::of::<T>(), instance.clone());
        drop(map);

        self.emit_event(&RegistryEvent::Created { type_name });
        instance
    }

    /// Fallible variant of [`get_or_create`](RegistryApi::get_or_create).
    ///
    /// A first-call constructor error propagates to the caller unchanged — the
    /// registry adds no validation layer of its own — and nothing is cached, so
    /// a later call runs the constructor again. Once construction has succeeded
    /// for `T`, this method can no longer fail for `T`.
    ///
    /// # Errors
    ///
    /// Whatever `init` returns as `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use instance_registry::define_registry;
    /// use std::sync::Arc;
    ///
    /// define_registry!(app);
    ///
    /// let failed: Result<Arc<u32>, &str> = app::try_get_or_create(|| Err("not ready"));
    /// assert!(failed.is_err());
    ///
    /// // Nothing was cached; the next attempt constructs normally
    /// let ok: Result<Arc<u32>, &str> = app::try_get_or_create(|| Ok(7));
    /// assert_eq!(*ok.unwrap(), 7);
    /// ```
    fn try_get_or_create<T, E, F>(&self, init: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        let type_name = std::any::type_name::<T>();

        let mut map = Self::storage().lock().unwrap_or_else(|p| p.into_inner());

        if let Some(existing) = map.get(&TypeId::of::<T>()) {
            if let Ok(instance) = Arc::clone(existing).downcast::<T>() {
                drop(map);
                self.emit_event(&RegistryEvent::Reused { type_name });
                return Ok(instance);
            }
        }

        // The lock is released by the early return if init fails.
        let instance = Arc::new(init()?);
        map.insert(TypeId::of::<T>(), instance.clone());
        drop(map);

        self.emit_event(&RegistryEvent::Created { type_name });
        Ok(instance)
    }

    /// Memoized construction through the [`Constructible`] contract.
    ///
    /// The first call for `T` invokes `T::create(args)` and caches the result.
    /// Every later call returns the cached instance and **discards `args`
    /// entirely** — differing arguments on later calls never reach a
    /// constructor. Because this is a common trap, a repeat call reports the
    /// dropped arguments via [`RegistryEvent::ArgumentsDiscarded`] (or stderr
    /// when no trace callback is installed).
    ///
    /// # Constructor Restrictions
    ///
    /// `T::create` runs while the registry lock is held; the same restrictions
    /// as for [`get_or_create`](RegistryApi::get_or_create) apply.
    fn construct<T: Constructible>(&self, args: T::Args) -> Arc<T> {
        let type_name = std::any::type_name::<T>();

        let mut map = Self::storage().lock().unwrap_or_else(|p| p.into_inner());

        if let Some(existing) = map.get(&TypeId::of::<T>()) {
            if let Ok(instance) = Arc::clone(existing).downcast::<T>() {
                drop(map);
                self.warn_arguments_discarded(type_name);
                return instance;
            }
        }

        let instance = Arc::new(T::create(args));
        map.insert(TypeId::of::<T>(), instance.clone());
        drop(map);

        self.emit_event(&RegistryEvent::Created { type_name });
        instance
    }

    /// Look up the instance of type `T` without constructing.
    ///
    /// Returns `Ok(Arc<T>)` if an instance has been constructed for `T`.
    /// Unlike [`construct`](RegistryApi::construct), a miss here is an error,
    /// not a construction request, so no discarded-arguments warning applies.
    ///
    /// # Errors
    ///
    /// - No instance has been constructed for `T`
    /// - Type mismatch (extremely rare)
    /// - Registry lock is poisoned
    fn get<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, RegistryError> {
        let map = Self::storage()
            .lock()
            .map_err(|_| RegistryError::RegistryLock)?;

        let any_arc_opt = map.get(&TypeId::of::<T>()).cloned();

        drop(map);

        let result: Result<Arc<T>, RegistryError> = match any_arc_opt {
            Some(any_arc) => any_arc
                .downcast::<T>()
                .map_err(|_| RegistryError::TypeMismatch {
                    type_name: std::any::type_name::<T>(),
                }),
            None => Err(RegistryError::TypeNotFound {
                type_name: std::any::type_name::<T>(),
            }),
        };

        self.emit_event(&RegistryEvent::Get {
            type_name: std::any::type_name::<T>(),
            found: result.is_ok(),
        });

        result
    }

    /// Look up a cloned copy of the instance of type `T`.
    ///
    /// Returns an owned value by cloning the cached instance. The type `T` must
    /// implement `Clone`. This is useful if you need to own the value rather
    /// than share it via `Arc<T>`.
    ///
    /// # Errors
    ///
    /// - No instance has been constructed for `T`
    /// - Type mismatch
    fn get_cloned<T: Send + Sync + Clone + 'static>(&self) -> Result<T, RegistryError> {
        let arc = self.get::<T>()?;
        Ok((*arc).clone())
    }

    /// Check whether an instance of type `T` has been constructed.
    ///
    /// Returns `Ok(true)` if the instance exists, `Ok(false)` if not.
    ///
    /// # Errors
    ///
    /// - Registry lock is poisoned
    fn contains<T: Send + Sync + 'static>(&self) -> Result<bool, RegistryError> {
        let found = Self::storage()
            .lock()
            .map(|m| m.contains_key(&TypeId::of::<T>()))
            .map_err(|_| RegistryError::RegistryLock)?;

        self.emit_event(&RegistryEvent::Contains {
            type_name: std::any::type_name::<T>(),
            found,
        });

        Ok(found)
    }

    /// Clear all constructed instances from the registry.
    ///
    /// This method is primarily intended for testing — the production lifecycle
    /// never removes an entry. It removes all cached instances but does NOT
    /// affect:
    /// - Already-retrieved `Arc<T>` references (they remain valid)
    /// - The tracing callback (use `clear_trace_callback()` to clear that)
    ///
    /// Note that after a clear, a construction request for a previously cached
    /// type runs its constructor again.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the storage lock is poisoned, this method silently fails.
    /// This is acceptable for a test-only method.
    #[doc(hidden)]
    fn clear(&self) {
        self.emit_event(&RegistryEvent::Clear {});

        if let Ok(mut registry) = Self::storage().lock() {
            registry.clear();
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
