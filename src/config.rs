//! Loading seeder configuration (database + auditor settings) from TOML.
//!
//! See `SeedConfig` for the expected schema. Every field is optional in the file.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::DEFAULT_CATEGORY;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
  /// sqlx connection string, e.g. `sqlite://pyquest.db?mode=rwc`.
  pub database_url: String,
  pub max_connections: u32,
  /// Category used for the post-seed record count.
  pub category: String,
  /// Where the auditor writes its report (full overwrite).
  pub report_path: String,
  /// Number of activities each audited collection must hold.
  pub expected_count: usize,
}

impl Default for SeedConfig {
  fn default() -> Self {
    Self {
      database_url: "sqlite://pyquest.db?mode=rwc".into(),
      max_connections: 1,
      category: DEFAULT_CATEGORY.into(),
      report_path: "test-results.txt".into(),
      expected_count: 10,
    }
  }
}

impl SeedConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str::<SeedConfig>(s)
  }

  /// Apply `DATABASE_URL` on top of whatever the file said.
  fn with_env_overrides(mut self) -> Self {
    if let Ok(url) = std::env::var("DATABASE_URL") {
      if !url.trim().is_empty() {
        self.database_url = url;
      }
    }
    self
  }
}

/// Load `SeedConfig` from SEED_CONFIG_PATH. On any IO/parse error, logs and returns defaults.
pub fn load_seed_config_from_env() -> SeedConfig {
  let from_file = match std::env::var("SEED_CONFIG_PATH") {
    Ok(path) => match std::fs::read_to_string(&path) {
      Ok(s) => match SeedConfig::from_toml_str(&s) {
        Ok(cfg) => {
          info!(target: "pyquest_seed", %path, "Loaded seed config (TOML)");
          Some(cfg)
        }
        Err(e) => {
          error!(target: "pyquest_seed", %path, error = %e, "Failed to parse TOML config; using defaults");
          None
        }
      },
      Err(e) => {
        error!(target: "pyquest_seed", %path, error = %e, "Failed to read TOML config file; using defaults");
        None
      }
    },
    Err(_) => None,
  };
  from_file.unwrap_or_default().with_env_overrides()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_file_keeps_defaults_for_missing_keys() {
    let cfg = SeedConfig::from_toml_str("report_path = \"out/report.txt\"\nexpected_count = 12\n").unwrap();
    assert_eq!(cfg.report_path, "out/report.txt");
    assert_eq!(cfg.expected_count, 12);
    assert_eq!(cfg.category, DEFAULT_CATEGORY);
    assert_eq!(cfg.max_connections, 1);
  }

  #[test]
  fn rejects_wrong_types() {
    assert!(SeedConfig::from_toml_str("expected_count = \"ten\"").is_err());
  }
}
