//! Identifiers for visual roles and the keys templates are cached under.

use std::borrow::Cow;
use std::fmt;

/// An opaque name for a visual role: an item kind ("contact", "loading") or
/// a section kind ("recent", "archived").
///
/// Identifiers double as reuse keys when dequeuing views from the widget's
/// reuse pool. Two identifiers are equal iff their strings are equal; whether
/// an identifier names an item or a section is carried by [`TemplateKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(Cow<'static, str>);

impl Identifier {
    /// Creates an identifier from a static string without allocating.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The identifier's string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Identifier {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Which supplementary view of a section is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// The view above the section's rows.
    Header,
    /// The view below the section's rows.
    Footer,
}

impl SectionKind {
    /// The kind's string name, as used by reuse registrations.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The key a resolved template is cached and registered under.
///
/// An item and a section sharing an identifier string never collide, and a
/// section's header and footer are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// A row template.
    Item {
        /// The row's identifier.
        identifier: Identifier,
    },
    /// A header or footer template.
    Section {
        /// The section's identifier.
        identifier: Identifier,
        /// Header or footer.
        kind: SectionKind,
    },
}

impl TemplateKey {
    /// Key for a row identifier.
    pub fn item(identifier: impl Into<Identifier>) -> Self {
        Self::Item {
            identifier: identifier.into(),
        }
    }

    /// Key for a section identifier and kind.
    pub fn section(identifier: impl Into<Identifier>, kind: SectionKind) -> Self {
        Self::Section {
            identifier: identifier.into(),
            kind,
        }
    }

    /// The identifier part of the key, used as the reuse identifier.
    pub fn identifier(&self) -> &Identifier {
        match self {
            Self::Item { identifier } | Self::Section { identifier, .. } => identifier,
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item { identifier } => write!(f, "item:{identifier}"),
            Self::Section { identifier, kind } => write!(f, "section:{identifier}:{kind}"),
        }
    }
}
