//! Binding entry points, observers and converters.

mod converter;
mod list;
mod observer;

pub use converter::{Converter, ConverterWithOptions, FnConverter, converter_fn};
pub use list::{bind_list, bind_sectioned_list};
pub use observer::{SubscriptionBag, ViewObserver, bind_property, bind_property_with};
