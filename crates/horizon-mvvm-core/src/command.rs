//! Commands: executable actions exposed by view models.
//!
//! Item view models expose commands such as `select` and `unselect`. The list
//! delegate consults their presence to decide whether a row is selectable and
//! executes them when the native widget reports a selection change.

use std::fmt;
use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::logging::targets;
use crate::property::Property;

type Action = Arc<dyn Fn() + Send + Sync>;

/// An executable action with a bindable `enabled` state.
///
/// `enabled` is informational for views (a binder may dim a control when it
/// turns false). [`execute`](Self::execute) always runs the action;
/// [`try_execute`](Self::try_execute) honours the enabled state.
///
/// # Example
///
/// ```
/// use horizon_mvvm_core::Command;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let opened = Arc::new(AtomicUsize::new(0));
/// let opened_clone = opened.clone();
/// let open = Command::new("open", move || {
///     opened_clone.fetch_add(1, Ordering::SeqCst);
/// });
///
/// open.execute();
/// open.set_enabled(false);
/// assert!(open.try_execute().is_err());
/// assert_eq!(opened.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Command {
    name: Arc<str>,
    action: Action,
    enabled: Arc<Property<bool>>,
}

impl Command {
    /// Create an enabled command.
    pub fn new<F>(name: impl Into<Arc<str>>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            action: Arc::new(action),
            enabled: Arc::new(Property::new(true)),
        }
    }

    /// The command's debug name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the action unconditionally.
    pub fn execute(&self) {
        tracing::debug!(target: targets::COMMAND, command = %self.name, "executing command");
        (self.action)();
    }

    /// Run the action if the command is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CommandDisabled`] when `enabled` is false.
    pub fn try_execute(&self) -> Result<()> {
        if !self.is_enabled() {
            crate::mvvm_debug!(command = %self.name, "refusing to run disabled command");
            return Err(CoreError::command_disabled(self.name.as_ref()));
        }
        self.execute();
        Ok(())
    }

    /// Whether the command is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Enable or disable the command.
    pub fn set_enabled(&self, enabled: bool) -> bool {
        self.enabled.set(enabled)
    }

    /// The bindable enabled state.
    pub fn enabled(&self) -> &Property<bool> {
        &self.enabled
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

static_assertions::assert_impl_all!(Command: Send, Sync);
