//! Configuration shared by all commands.
//!
//! Values are resolved with the following precedence: command-line flag, environment variable,
//! configuration file, built-in default. Flags and environment variables are both handled by clap
//! (see [`crate::args::GlobalArgs`]), this module merges the result with the configuration file.
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    api::{ApiClient, Credentials, DEFAULT_BASE_URL},
    args::GlobalArgs,
    dependencies::ConfigStore,
};

/// Location of the configuration file relative to the user's config directory.
const CONFIG_DIR: &str = "planetscale";
const CONFIG_FILE: &str = "pscale.yml";

/// Content of the YAML configuration file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Values coming from flags or environment variables. Each one takes precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub organization: Option<String>,
    pub access_token: Option<String>,
    pub service_token_id: Option<String>,
    pub service_token: Option<String>,
    pub api_url: Option<String>,
    pub path: Option<PathBuf>,
}

impl From<&GlobalArgs> for ConfigOverrides {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            organization: args.org.clone(),
            access_token: args.access_token.clone(),
            service_token_id: args.service_token_id.clone(),
            service_token: args.service_token.clone(),
            api_url: args.api_url.clone(),
            path: args.config.clone(),
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub organization: Option<String>,
    pub access_token: Option<String>,
    pub service_token_id: Option<String>,
    pub service_token: Option<String>,
    pub api_url: String,
    /// Path of the configuration file, whether it exists or not.
    pub path: PathBuf,
}

impl Config {
    /// Load the configuration file and apply the overrides on top of it.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let path = match overrides.path.clone() {
            Some(path) => path,
            None => default_config_path()?,
        };

        let file = ConfigFileStore::new(path.clone()).load()?;
        Ok(Self::resolve(path, file, overrides))
    }

    fn resolve(path: PathBuf, file: ConfigFile, overrides: ConfigOverrides) -> Self {
        Self {
            organization: non_empty(overrides.organization).or(non_empty(file.org)),
            access_token: non_empty(overrides.access_token).or(non_empty(file.access_token)),
            service_token_id: non_empty(overrides.service_token_id)
                .or(non_empty(file.service_token_id)),
            service_token: non_empty(overrides.service_token).or(non_empty(file.service_token)),
            api_url: non_empty(overrides.api_url)
                .or(non_empty(file.api_url))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            path,
        }
    }

    /// The organization every command operates in.
    pub fn organization(&self) -> Result<&str> {
        self.organization.as_deref().ok_or_else(|| {
            anyhow!(
                "no organization is set, pass --org, set PLANETSCALE_ORG or run 'pscale org switch'"
            )
        })
    }

    /// Credentials to use for API calls. A service token takes precedence over an access token.
    pub fn credentials(&self) -> Result<Credentials> {
        match (&self.service_token_id, &self.service_token) {
            (Some(id), Some(token)) => Ok(Credentials::ServiceToken {
                id: id.clone(),
                token: token.clone(),
            }),
            (Some(_), None) | (None, Some(_)) => {
                bail!("both a service token id and a service token are required")
            }
            (None, None) => match &self.access_token {
                Some(token) => Ok(Credentials::AccessToken(token.clone())),
                None => bail!(
                    "not authenticated, set PLANETSCALE_ACCESS_TOKEN or PLANETSCALE_SERVICE_TOKEN_ID and PLANETSCALE_SERVICE_TOKEN"
                ),
            },
        }
    }

    /// Create an API client from the configuration.
    pub fn new_client(&self) -> Result<ApiClient> {
        let credentials = self.credentials()?;
        ApiClient::new(&self.api_url, &credentials).context("creating API client")
    }

    pub fn store(&self) -> ConfigFileStore {
        ConfigFileStore::new(self.path.clone())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("cannot determine the configuration directory")?;
    Ok(config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Reads and writes the YAML configuration file.
#[derive(Debug, Clone)]
pub struct ConfigFileStore {
    path: PathBuf,
}

impl ConfigFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the configuration file. A missing file is an empty configuration.
    pub fn load(&self) -> Result<ConfigFile> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no configuration file found");
            return Ok(ConfigFile::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(config).context("cannot serialize config")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("cannot write {}", self.path.display()))?;

        // The file can hold tokens.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("cannot set permissions on {}", self.path.display()))?;
        }

        Ok(())
    }
}

impl ConfigStore for ConfigFileStore {
    fn save_organization(&self, organization: &str) -> Result<()> {
        let mut config = self.load()?;
        config.org = Some(organization.to_string());
        self.save(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides() -> ConfigOverrides {
        ConfigOverrides::default()
    }

    #[test]
    fn test_resolve_defaults() {
        let config = Config::resolve(
            PathBuf::from("pscale.yml"),
            ConfigFile::default(),
            overrides(),
        );

        assert_eq!(config.organization, None);
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert!(config.organization().is_err());
        assert!(config.credentials().is_err());
    }

    #[test]
    fn test_resolve_overrides_take_precedence() {
        let file = ConfigFile {
            org: Some("from-file".to_string()),
            access_token: Some("file-token".to_string()),
            api_url: Some("http://file.example.com".to_string()),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            organization: Some("from-flag".to_string()),
            ..Default::default()
        };

        let config = Config::resolve(PathBuf::from("pscale.yml"), file, overrides);

        assert_eq!(config.organization().unwrap(), "from-flag");
        assert_eq!(config.api_url, "http://file.example.com");
        assert_eq!(
            config.credentials().unwrap(),
            Credentials::AccessToken("file-token".to_string())
        );
    }

    #[test]
    fn test_resolve_ignores_empty_values() {
        let file = ConfigFile {
            org: Some("from-file".to_string()),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            organization: Some("  ".to_string()),
            ..Default::default()
        };

        let config = Config::resolve(PathBuf::from("pscale.yml"), file, overrides);
        assert_eq!(config.organization().unwrap(), "from-file");
    }

    #[test]
    fn test_service_token_takes_precedence() {
        let overrides = ConfigOverrides {
            access_token: Some("access".to_string()),
            service_token_id: Some("id".to_string()),
            service_token: Some("secret".to_string()),
            ..Default::default()
        };

        let config = Config::resolve(
            PathBuf::from("pscale.yml"),
            ConfigFile::default(),
            overrides,
        );

        assert_eq!(
            config.credentials().unwrap(),
            Credentials::ServiceToken {
                id: "id".to_string(),
                token: "secret".to_string(),
            }
        );
    }

    #[test]
    fn test_incomplete_service_token() {
        let overrides = ConfigOverrides {
            service_token_id: Some("id".to_string()),
            ..Default::default()
        };

        let config = Config::resolve(
            PathBuf::from("pscale.yml"),
            ConfigFile::default(),
            overrides,
        );
        let error = config.credentials().unwrap_err();
        assert!(error.to_string().contains("service token"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigFileStore::new(dir.path().join("missing.yml"));
        assert_eq!(store.load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pscale.yml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(
            ConfigFileStore::new(path).load().unwrap(),
            ConfigFile::default()
        );
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pscale.yml");
        std::fs::write(&path, "org: [unterminated").unwrap();

        let error = ConfigFileStore::new(path).load().unwrap_err();
        assert!(error.to_string().contains("cannot parse"));
    }

    #[test]
    fn test_save_organization_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pscale.yml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "org: old\naccess_token: keep-me\n").unwrap();

        let store = ConfigFileStore::new(path.clone());
        store.save_organization("new").unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.org.as_deref(), Some("new"));
        assert_eq!(config.access_token.as_deref(), Some("keep-me"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planetscale").join("pscale.yml");

        ConfigFileStore::new(path.clone())
            .save_organization("acme")
            .unwrap();

        assert!(path.exists());
    }
}
