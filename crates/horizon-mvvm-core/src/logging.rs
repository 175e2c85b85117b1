//! Logging facilities for Horizon MVVM.
//!
//! Horizon MVVM uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_mvvm=debug")
//!         .init();
//! }
//! ```
//!
//! The binding engine logs template registration and data-source swaps at
//! `debug`, per-callback activity at `trace`, and wraps every reload in a
//! [`PerfSpan`].

/// Span names used throughout Horizon MVVM for tracing.
pub mod span_names {
    /// Full widget reload after a data-source swap.
    pub const RELOAD: &str = "horizon_mvvm::reload";
    /// View binding pass run by a controller lifecycle.
    pub const BIND_VIEW: &str = "horizon_mvvm::bind_view";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_mvvm_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_mvvm_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "horizon_mvvm_core::property";
    /// Observable values target.
    pub const OBSERVABLE: &str = "horizon_mvvm_core::observable";
    /// Command execution target.
    pub const COMMAND: &str = "horizon_mvvm_core::command";
    /// Template cache target.
    pub const TEMPLATE: &str = "horizon_mvvm::template";
    /// List delegate target.
    pub const DELEGATE: &str = "horizon_mvvm::delegate";
    /// Observation bridge target.
    pub const BRIDGE: &str = "horizon_mvvm::bridge";
    /// Controller lifecycle target.
    pub const LIFECYCLE: &str = "horizon_mvvm::lifecycle";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_mvvm::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_mvvm::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with consistent
/// target naming.
#[macro_export]
macro_rules! mvvm_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_mvvm_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! mvvm_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_mvvm_core", $($arg)*)
    };
}
