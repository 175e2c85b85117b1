//! Core systems for Horizon MVVM.
//!
//! This crate provides the observation primitives the binding engine is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe notification with scoped connections
//! - **Properties**: Value cells with edge-triggered change notification
//! - **Observables**: Value cells that broadcast every replacement
//! - **Commands**: Executable view-model actions with an enabled state
//! - **Logging**: Tracing targets, span names and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_mvvm_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Observable Example
//!
//! ```
//! use horizon_mvvm_core::Observable;
//!
//! let contacts = Observable::new(Vec::<String>::new());
//! let guard = contacts.observe(|list| println!("{} contacts", list.len()));
//! contacts.set(vec!["Ada".into(), "Grace".into()]);
//! drop(guard); // unsubscribes
//! ```

pub mod command;
mod error;
pub mod logging;
pub mod observable;
pub mod property;
pub mod signal;

pub use command::Command;
pub use error::{CoreError, Result};
pub use logging::PerfSpan;
pub use observable::Observable;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
