use super::super::{
    AuditConfig, ConstraintConfig, DefaultsConfig, GenerationConfig, IntentConfig,
    ObservabilityConfig, ProfileSourceConfig, RiskConfig, ViabilityConfig,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Workspace directory - computed from home, not serialized
    #[serde(skip)]
    pub workspace_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub risk: RiskConfig,

    #[serde(default)]
    pub viability: ViabilityConfig,

    #[serde(default)]
    pub constraints: ConstraintConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub profiles: ProfileSourceConfig,

    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub intent: IntentConfig,
}

impl Config {
    /// Reject values the pipeline would otherwise have to clamp silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = 0.0..=1.0;

        if !unit.contains(&self.defaults.risk_tolerance) {
            return Err(ConfigError::Validation(format!(
                "defaults.risk_tolerance must be within [0, 1], got {}",
                self.defaults.risk_tolerance
            )));
        }

        for entry in &self.risk.keywords {
            if entry.keyword.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "risk.keywords contains an empty keyword".into(),
                ));
            }
            if !unit.contains(&entry.weight) {
                return Err(ConfigError::Validation(format!(
                    "risk keyword '{}' weight must be within [0, 1], got {}",
                    entry.keyword, entry.weight
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.viability.max_noise) {
            return Err(ConfigError::Validation(format!(
                "viability.max_noise must be within [0, 1], got {}",
                self.viability.max_noise
            )));
        }

        if self.generation.backend == "http" && self.generation.endpoint.is_none() {
            return Err(ConfigError::Validation(
                "generation.endpoint is required for the http backend".into(),
            ));
        }

        Ok(())
    }

    /// Resolve the audit database path against the workspace.
    pub fn audit_db_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.audit.path);
        if path.is_absolute() {
            path
        } else {
            self.workspace_dir.join(path)
        }
    }
}
