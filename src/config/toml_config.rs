use crate::domain::model::UnknownMajorPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub resolve: Option<ResolveConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub data_dir: String,
    pub header: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    pub unknown_major: Option<UnknownMajorPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: Option<String>,
}

impl TomlConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RegistrarError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| RegistrarError::ConfigError {
            message: format!("invalid TOML configuration: {e}"),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        &self.source.data_dir
    }

    fn has_header(&self) -> bool {
        self.source.header.unwrap_or(false)
    }

    fn unknown_major_policy(&self) -> UnknownMajorPolicy {
        self.resolve
            .as_ref()
            .and_then(|r| r.unknown_major)
            .unwrap_or(UnknownMajorPolicy::Abort)
    }

    fn output_path(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.output_path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.data_dir", &self.source.data_dir)?;
        if let Some(path) = self.output_path() {
            validation::validate_path("report.output_path", path)?;
        }
        Ok(())
    }
}
