/// Events emitted by the registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use instance_registry::RegistryEvent;
///
/// let event = RegistryEvent::Created { type_name: "i32" };
/// println!("{:?}", event);
/// ```
#[derive(Debug, Clone)]
pub enum RegistryEvent {
    /// A first-time request ran the constructor and cached the instance.
    Created {
        /// The type name of the constructed instance (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// A repeat request returned the cached instance without constructing.
    Reused {
        /// The type name of the reused instance
        type_name: &'static str,
    },

    /// A repeat `construct` call supplied constructor arguments that were ignored.
    ///
    /// This is the semantic trap of the pattern: later arguments never reach a
    /// constructor because the instance already exists. The registry refuses to
    /// drop them silently.
    ArgumentsDiscarded {
        /// The type name whose arguments were discarded
        type_name: &'static str,
    },

    /// An instance was looked up without a construction request.
    Get {
        /// The type name that was requested
        type_name: &'static str,
        /// Whether the instance was found in the registry
        found: bool,
    },

    /// A type existence check was performed.
    Contains {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether the type exists in the registry
        found: bool,
    },
    /// The registry was cleared.
    Clear {},
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Created { type_name } => {
                write!(f, "created {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Reused { type_name } => {
                write!(f, "reused {{ type_name: {} }}", type_name)
            }
            RegistryEvent::ArgumentsDiscarded { type_name } => {
                write!(f, "arguments_discarded {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {}, found: {} }}", type_name, found)
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(
                    f,
                    "contains {{ type_name: {}, found: {} }}",
                    type_name, found
                )
            }
            RegistryEvent::Clear {} => write!(f, "Clearing the Registry"),
        }
    }
}
