//! List metrics configuration.
//!
//! [`ListMetrics`] holds the fallback dimensions a widget reports when no
//! [`ListLayout`](crate::widget::ListLayout) override applies. Metrics can be
//! loaded from TOML; any key left out keeps its default.
//!
//! ```toml
//! row_height = 56.0
//! section_header_height = 32.0
//! ```

use std::path::{Path, PathBuf};

use horizon_mvvm_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::collection::SectionKind;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading list metrics.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into metrics.
    #[error("Invalid list metrics: {0}")]
    Parse(#[from] toml::de::Error),

    /// The metrics could not be serialized.
    #[error("Failed to serialize list metrics: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// File I/O error.
    #[error("Failed to read list metrics '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dimension is negative or not finite.
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

/// Fallback dimensions of a list widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListMetrics {
    /// Row height.
    pub row_height: f32,
    /// Estimated row height, used before rows are laid out.
    pub estimated_row_height: f32,
    /// Section header height.
    pub section_header_height: f32,
    /// Section footer height.
    pub section_footer_height: f32,
    /// Estimated section header height.
    pub estimated_section_header_height: f32,
    /// Estimated section footer height.
    pub estimated_section_footer_height: f32,
}

impl Default for ListMetrics {
    fn default() -> Self {
        Self {
            row_height: 44.0,
            estimated_row_height: 44.0,
            section_header_height: 28.0,
            section_footer_height: 28.0,
            estimated_section_header_height: 28.0,
            estimated_section_footer_height: 28.0,
        }
    }
}

impl ListMetrics {
    /// Parses metrics from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::InvalidValue`] for negative or non-finite dimensions.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let metrics: Self = toml::from_str(text)?;
        metrics.validate()?;
        Ok(metrics)
    }

    /// Reads metrics from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let metrics = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "list metrics loaded");
        Ok(metrics)
    }

    /// Serializes the metrics to TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Header or footer height.
    pub fn section_height(&self, kind: SectionKind) -> f32 {
        match kind {
            SectionKind::Header => self.section_header_height,
            SectionKind::Footer => self.section_footer_height,
        }
    }

    /// Estimated header or footer height.
    pub fn estimated_section_height(&self, kind: SectionKind) -> f32 {
        match kind {
            SectionKind::Header => self.estimated_section_header_height,
            SectionKind::Footer => self.estimated_section_footer_height,
        }
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("row_height", self.row_height),
            ("estimated_row_height", self.estimated_row_height),
            ("section_header_height", self.section_header_height),
            ("section_footer_height", self.section_footer_height),
            ("estimated_section_header_height", self.estimated_section_header_height),
            ("estimated_section_footer_height", self.estimated_section_footer_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}
