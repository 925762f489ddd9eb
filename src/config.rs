//! Generator configuration.

use crate::DocError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one document-generation run.
///
/// Every field has a default matching the Fedora Infrastructure bus, so an
/// empty TOML file (or none at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Number of leading topic segments dropped to form the stripped topic.
    pub prefix_depth: usize,
    /// Namespace prefix named in the preamble (e.g. `org.fedoraproject`).
    pub namespace: String,
    /// Marker every environment marker is rewritten to.
    pub production_marker: String,
    /// Markers of non-production environments.
    pub environment_markers: Vec<String>,
    /// Base URL of the datagrepper raw query endpoint.
    pub datagrepper_url: String,
    /// File name written inside the output directory.
    pub output_file: String,
    /// Height and width given to embedded icons.
    pub icon_size: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            prefix_depth: 3,
            namespace: "org.fedoraproject".into(),
            production_marker: "prod".into(),
            environment_markers: vec!["stg".into(), "dev".into()],
            datagrepper_url: "https://apps.fedoraproject.org/datagrepper/raw".into(),
            output_file: "topics.rst".into(),
            icon_size: "32px".into(),
        }
    }
}

impl DocConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, DocError> {
        if !path.exists() {
            tracing::debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| DocError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| DocError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Set the number of prefix segments to strip.
    pub fn with_prefix_depth(mut self, depth: usize) -> Self {
        self.prefix_depth = depth;
        self
    }

    /// Set the namespace named in the preamble.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    /// Replace the environment markers rewritten to production.
    pub fn with_environment_markers(mut self, markers: &[&str]) -> Self {
        self.environment_markers = markers.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Set the datagrepper base URL.
    pub fn with_datagrepper_url(mut self, url: &str) -> Self {
        self.datagrepper_url = url.to_string();
        self
    }

    /// Set the output file name.
    pub fn with_output_file(mut self, name: &str) -> Self {
        self.output_file = name.to_string();
        self
    }

    /// Set the icon size used in image directives.
    pub fn with_icon_size(mut self, size: &str) -> Self {
        self.icon_size = size.to_string();
        self
    }

    /// The prefix every production topic carries, e.g. `org.fedoraproject.prod.`.
    pub fn topic_prefix(&self) -> String {
        format!("{}.{}.", self.namespace, self.production_marker)
    }
}
