//! Error types for Horizon MVVM core.

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors reported by the core observation primitives.
///
/// Most core operations cannot fail; contract violations panic and expected
/// absence is modelled with `Option`. These variants cover the few checked
/// entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID")]
    InvalidConnection,

    /// A command was asked to run while disabled.
    #[error("Command '{name}' is disabled")]
    CommandDisabled {
        /// The command's debug name.
        name: String,
    },
}

impl CoreError {
    /// Create a disabled-command error.
    pub fn command_disabled(name: impl Into<String>) -> Self {
        Self::CommandDisabled { name: name.into() }
    }
}
