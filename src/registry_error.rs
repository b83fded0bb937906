use std::fmt;

/// Errors produced by registry lookups.
///
/// Construction errors are never wrapped here: a failing constructor passed to
/// `try_get_or_create` propagates the caller's own error type unchanged.
#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry lock could not be acquired (poisoned by a panicking thread).
    RegistryLock,
    /// The stored instance could not be downcast to the requested type.
    TypeMismatch {
        /// The type name that was requested
        type_name: &'static str,
    },
    /// No instance has been constructed for the requested type.
    TypeNotFound {
        /// The type name that was requested
        type_name: &'static str,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::RegistryLock => write!(f, "Failed to acquire registry lock"),
            RegistryError::TypeMismatch { type_name } => {
                write!(f, "Type mismatch in registry for type: {type_name}")
            }
            RegistryError::TypeNotFound { type_name } => {
                write!(f, "Type not found in registry: {type_name}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
