//! Component controllers and their lifecycle.

mod controller;
mod lifecycle;

pub use controller::ComponentViewController;
pub use lifecycle::{ComponentView, ControllerLifecycle, LifecycleState};
