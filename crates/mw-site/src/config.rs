//! Site configuration
//!
//! Every field has a working default, so an empty file (or no file at all)
//! yields the stock site. TOML and YAML are both accepted; the format is
//! picked from the file extension.

use std::path::{Path, PathBuf};

use mw_record::{DossierDefaults, PLACEHOLDER_IMAGE};
use serde::{Deserialize, Serialize};

/// Default access key
pub const DEFAULT_ACCESS_KEY: &str = "TRASK";

/// Default number of ticker lines
pub const DEFAULT_FEED_SIZE: usize = 6;

/// Default report recipient
pub const DEFAULT_REPORT_RECIPIENT: &str = "alt.cq-4p92pch@yopmail.com";

/// Tunable site settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Key accepted by the access gate
    pub access_key: String,
    /// Lines shown by the activity ticker
    pub feed_size: usize,
    /// Address the field report is mailed to
    pub report_recipient: String,
    /// Portrait used when a record has none
    pub placeholder_image: String,
    /// Landing page after the gate
    pub home_page: String,
    /// Access gate page
    pub gate_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            access_key: DEFAULT_ACCESS_KEY.to_string(),
            feed_size: DEFAULT_FEED_SIZE,
            report_recipient: DEFAULT_REPORT_RECIPIENT.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            home_page: "home.html".to_string(),
            gate_page: "index.html".to_string(),
        }
    }
}

impl SiteConfig {
    /// With a different access key
    #[must_use]
    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = key.into();
        self
    }

    /// With a different ticker size
    #[must_use]
    pub fn with_feed_size(mut self, size: usize) -> Self {
        self.feed_size = size;
        self
    }

    /// With a different report recipient
    #[must_use]
    pub fn with_report_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.report_recipient = recipient.into();
        self
    }

    /// With a different placeholder portrait
    #[must_use]
    pub fn with_placeholder_image(mut self, image: impl Into<String>) -> Self {
        self.placeholder_image = image.into();
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidToml`] on malformed input.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidYaml`] on malformed input.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        // An empty YAML document is null, not an empty mapping
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load from a `.toml`, `.yaml` or `.yml` file
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, has an unsupported extension,
    /// or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("toml") => Self::from_toml,
            Some("yaml" | "yml") => Self::from_yaml,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = parse(&text)?;
        tracing::info!(path = %path.display(), "Loaded site configuration");
        Ok(config)
    }

    /// Dossier defaults carrying this site's placeholder portrait
    #[must_use]
    pub fn dossier_defaults(&self) -> DossierDefaults {
        DossierDefaults::default().with_image(self.placeholder_image.clone())
    }
}

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Extension is neither TOML nor YAML
    #[error("unsupported configuration format: {}", path.display())]
    UnsupportedFormat {
        /// Offending file
        path: PathBuf,
    },

    /// TOML parse failure
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// YAML parse failure
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}
