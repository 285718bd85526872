//! CLI configuration from environment variables.

use std::env;
use std::path::PathBuf;

use recipebox_core::DEFAULT_COLLECTION_PATH;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON file holding the recipes.
    pub data_file: PathBuf,
    /// Base path for recipe detail links.
    pub collection_path: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `RECIPEBOX_DATA_FILE`: recipe file (default: "~/.recipebox/recipes.json")
    /// - `RECIPEBOX_COLLECTION_PATH`: detail link base (default: "/collection")
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("RECIPEBOX_DATA_FILE").ok(),
            env::var("RECIPEBOX_COLLECTION_PATH").ok(),
        )
    }

    fn from_vars(data_file: Option<String>, collection_path: Option<String>) -> Self {
        let data_file = data_file
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_data_file);

        let collection_path = collection_path
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_COLLECTION_PATH.to_string());

        Self {
            data_file,
            collection_path,
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        collection_path: Option<String>,
    ) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        if let Some(base) = collection_path {
            self.collection_path = base;
        }
        self
    }

    /// Get the default data file: ~/.recipebox/recipes.json
    pub fn default_data_file() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".recipebox").join("recipes.json"))
            .unwrap_or_else(|| PathBuf::from("data/recipes.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_vars(None, None);
        assert_eq!(config.data_file, CliConfig::default_data_file());
        assert_eq!(config.collection_path, "/collection");
    }

    #[test]
    fn test_empty_vars_use_defaults() {
        let config = CliConfig::from_vars(Some(String::new()), Some(String::new()));
        assert_eq!(config, CliConfig::from_vars(None, None));
    }

    #[test]
    fn test_vars_and_overrides() {
        let config = CliConfig::from_vars(Some("/tmp/r.json".into()), Some("/recipes".into()));
        assert_eq!(config.data_file, PathBuf::from("/tmp/r.json"));
        assert_eq!(config.collection_path, "/recipes");

        let config = config.with_overrides(Some(PathBuf::from("other.json")), None);
        assert_eq!(config.data_file, PathBuf::from("other.json"));
        assert_eq!(config.collection_path, "/recipes");
    }
}
