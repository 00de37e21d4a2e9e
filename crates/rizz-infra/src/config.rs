//! Configuration loader for RizzSite.
//!
//! Reads `config.toml` from the config directory (`~/.rizzsite/` in
//! production) and deserializes it into [`RizzConfig`]. Falls back to
//! defaults when the file is missing or malformed. A file named explicitly on
//! the command line is held to a stricter standard: it has to exist and parse.

use std::path::{Path, PathBuf};

use rizz_types::config::RizzConfig;
use rizz_types::error::ConfigError;

/// File name looked up inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the config directory.
///
/// Priority:
/// 1. `RIZZ_CONFIG_DIR` environment variable
/// 2. `~/.rizzsite`
/// 3. `./.rizzsite` when no home directory is known
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("RIZZ_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".rizzsite");
    }

    PathBuf::from(".rizzsite")
}

/// Load configuration from `{config_dir}/config.toml`.
///
/// - If the file does not exist, returns [`RizzConfig::default()`].
/// - If the file cannot be read or parsed, logs a warning and returns the default.
pub async fn load_config(config_dir: &Path) -> RizzConfig {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return RizzConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return RizzConfig::default();
        }
    };

    match toml::from_str::<RizzConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            RizzConfig::default()
        }
    }
}

/// Load an explicitly requested configuration file.
///
/// # Errors
///
/// [`ConfigError::Read`] when the file cannot be read (including when it does
/// not exist), [`ConfigError::Parse`] when it is not valid configuration.
pub async fn load_config_file(path: &Path) -> Result<RizzConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

    let config = toml::from_str::<RizzConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, RizzConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
request_timeout_secs = 20

[backend]
provider = "openrouter"
model = "meta-llama/llama-3.1-8b-instruct"
api_key_env = "OPENROUTER_API_KEY"
temperature = 0.7
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.backend.provider, "openrouter");
        assert_eq!(config.backend.api_key_env, "OPENROUTER_API_KEY");
        assert!((config.backend.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.server.port, 3000);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join(CONFIG_FILE_NAME), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, RizzConfig::default());
    }

    #[tokio::test]
    async fn load_config_file_missing_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config_file(&tmp.path().join("nope.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn load_config_file_invalid_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        tokio::fs::write(&path, "[server]\nport = \"not a port\"")
            .await
            .unwrap();

        let err = load_config_file(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn load_config_file_valid() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        tokio::fs::write(&path, "description = \"Keep it short.\"")
            .await
            .unwrap();

        let config = load_config_file(&path).await.unwrap();
        assert_eq!(config.description.as_deref(), Some("Keep it short."));
    }

    #[test]
    fn test_resolve_config_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("RIZZ_CONFIG_DIR", "/tmp/test-rizzsite");
        }
        let dir = resolve_config_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-rizzsite"));
        unsafe {
            std::env::remove_var("RIZZ_CONFIG_DIR");
        }
    }
}
