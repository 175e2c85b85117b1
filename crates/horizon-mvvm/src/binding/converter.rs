//! Value converters used by field bindings.
//!
//! A converter turns a view-model value into the form a view field expects
//! (a count into a badge label, a date into a relative string, ...).
//! Converters are plain values; those that need configuration implement
//! [`ConverterWithOptions`].

use std::fmt;
use std::marker::PhantomData;

/// Converts a view-model value into a view value.
pub trait Converter: Send + Sync + 'static {
    /// The view-model side type.
    type Value;
    /// The view side type.
    type Output;

    /// Performs the conversion.
    fn convert(&self, value: &Self::Value) -> Self::Output;
}

/// A converter constructed from options.
///
/// # Example
///
/// ```
/// use horizon_mvvm::binding::{Converter, ConverterWithOptions};
///
/// struct Truncate(usize);
///
/// impl Converter for Truncate {
///     type Value = String;
///     type Output = String;
///
///     fn convert(&self, value: &String) -> String {
///         value.chars().take(self.0).collect()
///     }
/// }
///
/// impl ConverterWithOptions for Truncate {
///     type Options = usize;
///
///     fn with_options(max: usize) -> Self {
///         Truncate(max)
///     }
/// }
///
/// assert_eq!(Truncate::with_options(3).convert(&"binding".to_string()), "bin");
/// ```
pub trait ConverterWithOptions: Converter + Sized {
    /// The configuration type.
    type Options;

    /// Builds a converter from its options.
    fn with_options(options: Self::Options) -> Self;
}

/// Adapts a closure into a [`Converter`].
pub struct FnConverter<V, O, F> {
    convert: F,
    _types: PhantomData<fn(&V) -> O>,
}

impl<V, O, F> FnConverter<V, O, F>
where
    F: Fn(&V) -> O,
{
    /// Wraps `convert`.
    pub fn new(convert: F) -> Self {
        Self {
            convert,
            _types: PhantomData,
        }
    }
}

impl<V, O, F> Converter for FnConverter<V, O, F>
where
    V: 'static,
    O: 'static,
    F: Fn(&V) -> O + Send + Sync + 'static,
{
    type Value = V;
    type Output = O;

    fn convert(&self, value: &V) -> O {
        (self.convert)(value)
    }
}

impl<V, O, F> fmt::Debug for FnConverter<V, O, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter").finish_non_exhaustive()
    }
}

/// Shorthand for [`FnConverter::new`].
pub fn converter_fn<V, O, F>(convert: F) -> FnConverter<V, O, F>
where
    F: Fn(&V) -> O,
{
    FnConverter::new(convert)
}
