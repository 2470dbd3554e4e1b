//! Configuration management for ontopath.
//!
//! An optional `ontopath.yaml` supplies the term file and default query
//! terms. It is looked up from the working directory upwards; command-line
//! flags override every value it holds.
//!
//! ```yaml
//! data-file: go-basic.jsonl
//! query:
//!   start: GO:0097435
//!   end: GO:0034314
//! ```

use crate::domain::TermId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "ontopath.yaml";

/// Term file used when neither config nor flags name one
pub const DEFAULT_DATA_FILE: &str = "go-basic.jsonl";

/// Maximum directory depth to traverse when searching for a config file
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct OntopathConfig {
    /// Term records file, relative to the config file's directory
    pub data_file: PathBuf,

    /// Default query terms
    #[serde(default)]
    pub query: QueryConfig,
}

/// Default query section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryConfig {
    /// Default first term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<TermId>,

    /// Default second term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<TermId>,
}

impl Default for OntopathConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            query: QueryConfig::default(),
        }
    }
}

impl OntopathConfig {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Pick the query terms, preferring explicit arguments over config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a term is given by neither.
    pub fn resolve_query(
        &self,
        start: Option<TermId>,
        end: Option<TermId>,
    ) -> Result<(TermId, TermId)> {
        let start = start
            .or_else(|| self.query.start.clone())
            .ok_or_else(|| Error::Config("no start term given".to_string()))?;
        let end = end
            .or_else(|| self.query.end.clone())
            .ok_or_else(|| Error::Config("no end term given".to_string()))?;
        Ok((start, end))
    }
}

/// Configuration together with the directory it was found in.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Parsed configuration
    pub config: OntopathConfig,
    /// Directory relative paths are resolved against
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    /// Absolute location of the term file
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join(&self.config.data_file)
    }
}

/// Find the nearest config file by searching up the directory tree.
///
/// Returns `None` if no config file exists within the depth limit.
#[must_use]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}

/// Load the config at `explicit`, or the nearest one above `start_dir`.
///
/// Without any config file the defaults apply, relative to `start_dir`.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
pub async fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(start_dir),
    };

    let Some(path) = path else {
        tracing::debug!(dir = %start_dir.display(), "No config file found, using defaults");
        return Ok(LoadedConfig {
            config: OntopathConfig::default(),
            base_dir: start_dir.to_path_buf(),
        });
    };

    tracing::debug!(path = %path.display(), "Loading config");
    let config = OntopathConfig::load(&path).await?;
    let base_dir = path
        .parent()
        .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
    Ok(LoadedConfig { config, base_dir })
}

/// Write a default config file into `base_dir`.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file already exists.
pub async fn init(base_dir: &Path, data_file: Option<&Path>) -> Result<PathBuf> {
    let path = base_dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(Error::Config(format!(
            "'{}' already exists",
            path.display()
        )));
    }

    let mut config = OntopathConfig::default();
    if let Some(data_file) = data_file {
        config.data_file = data_file.to_path_buf();
    }
    config.save(&path).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = OntopathConfig::default();
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert!(config.query.start.is_none());
    }

    #[test]
    fn test_config_parses_kebab_case_yaml() {
        let yaml = "data-file: terms.jsonl\nquery:\n  start: GO:1\n  end: GO:2\n";
        let config: OntopathConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.data_file, PathBuf::from("terms.jsonl"));
        assert_eq!(config.query.start, Some(TermId::new("GO:1")));
        assert_eq!(config.query.end, Some(TermId::new("GO:2")));
    }

    #[test]
    fn test_resolve_query_prefers_arguments() {
        let yaml = "data-file: t.jsonl\nquery:\n  start: GO:1\n  end: GO:2\n";
        let config: OntopathConfig = serde_yaml::from_str(yaml).unwrap();

        let (start, end) = config
            .resolve_query(Some(TermId::new("GO:9")), None)
            .unwrap();

        assert_eq!(start, TermId::new("GO:9"));
        assert_eq!(end, TermId::new("GO:2"));
    }

    #[test]
    fn test_resolve_query_requires_both_terms() {
        let config = OntopathConfig::default();

        let err = config
            .resolve_query(Some(TermId::new("GO:1")), None)
            .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_init_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();

        let path = init(dir.path(), Some(Path::new("data/terms.jsonl")))
            .await
            .unwrap();
        let loaded = load_config(None, dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(loaded.data_file(), dir.path().join("data/terms.jsonl"));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        init(dir.path(), None).await.unwrap();

        let err = init(dir.path(), None).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_find_config_searches_parents() {
        let dir = TempDir::new().unwrap();
        init(dir.path(), None).await.unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested);

        assert_eq!(found, Some(dir.path().join(CONFIG_FILE_NAME)));
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "data-file: [unclosed").unwrap();

        let err = OntopathConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
