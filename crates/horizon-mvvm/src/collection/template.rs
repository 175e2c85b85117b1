//! Rendering templates and the per-delegate template cache.
//!
//! A [`Template`] describes how the widget should build the reusable view for
//! one visual role. The first time a delegate meets a role it asks its data
//! source for the template and registers it with the widget's reuse pool; the
//! [`TemplateCache`] remembers that decision so registration happens at most
//! once per key for the delegate's lifetime.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use horizon_mvvm_core::logging::targets;

use super::identifier::TemplateKey;

/// An immutable description of how to render one visual role.
///
/// The `name` is opaque to the binding engine; widgets interpret it when a
/// template is registered (a view class, a layout resource, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: Cow<'static, str>,
    needs_view_model: bool,
}

impl Template {
    /// A template whose views are bound to a view model.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            needs_view_model: true,
        }
    }

    /// A purely static template (a separator, a fixed caption).
    ///
    /// Section views rendered with a decoration template never cause a
    /// section view model to be created.
    pub fn decoration(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            needs_view_model: false,
        }
    }

    /// The template name handed to the widget on registration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether views built from this template are bound to a view model.
    pub fn needs_view_model(&self) -> bool {
        self.needs_view_model
    }
}

/// Memoizes resolved templates per [`TemplateKey`].
///
/// There is no eviction: the cache lives exactly as long as the delegate that
/// owns it.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: HashMap<TemplateKey, Arc<Template>>,
}

impl TemplateCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the template stored under `key`, creating it on first use.
    ///
    /// `create` runs at most once per key. Later calls return the identical
    /// `Arc` and do not invoke their factory.
    pub fn find_or_create<F>(&mut self, key: &TemplateKey, create: F) -> Arc<Template>
    where
        F: FnOnce() -> Template,
    {
        if let Some(template) = self.templates.get(key) {
            return Arc::clone(template);
        }

        let template = Arc::new(create());
        tracing::debug!(
            target: targets::TEMPLATE,
            key = %key,
            template = template.name(),
            "template resolved"
        );
        self.templates.insert(key.clone(), Arc::clone(&template));
        template
    }

    /// Looks up a template without creating it.
    pub fn get(&self, key: &TemplateKey) -> Option<&Arc<Template>> {
        self.templates.get(key)
    }

    /// Whether `key` has been resolved.
    pub fn contains(&self, key: &TemplateKey) -> bool {
        self.templates.contains_key(key)
    }

    /// Number of resolved templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
