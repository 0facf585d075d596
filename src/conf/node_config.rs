//! Node configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path within the datadir to the keystore.
pub const DATADIR_DEFAULT_KEYSTORE: &str = "keystore";

/// Prefix of the ephemeral keystore directory created when no datadir is set.
pub const EPHEMERAL_KEYSTORE_PREFIX: &str = "N42-keystore";

/// Node configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not determine the absolute form of a relative path.
    #[error("failed to resolve keystore path {path}")]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create the keystore directory.
    #[error("failed to create keystore directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create the ephemeral keystore directory.
    #[error("failed to create ephemeral keystore directory")]
    Ephemeral(#[source] std::io::Error),
}

/// Settings of a node process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    #[serde(rename = "private")]
    pub node_private: String,

    pub http: bool,
    pub http_host: String,
    pub http_port: String,
    pub http_api: String,
    /// Cross-Origin Resource Sharing header sent to requesting clients.
    /// This is browser enforced and useless for custom HTTP clients.
    pub http_cors: String,

    pub ws: bool,
    pub ws_host: String,
    pub ws_port: String,
    pub ws_api: String,
    /// Domains to accept websocket requests from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ws_origins: String,

    pub ipc_path: String,
    pub data_dir: PathBuf,
    pub min_free_disk_space: u64,
    pub chain: String,
    pub miner: bool,

    pub auth_rpc: bool,
    /// Listening address on which authenticated APIs are provided.
    pub auth_addr: String,
    /// Port on which authenticated APIs are provided.
    pub auth_port: u16,
    /// Virtual hostnames allowed on incoming requests for the authenticated API.
    pub auth_virtual_hosts: Vec<String>,
    /// Path to the hex-encoded JWT secret.
    pub jwt_secret: PathBuf,

    /// Folder containing private keys. Relative paths are resolved against
    /// the current directory.
    ///
    /// When empty, defaults to the `keystore` subdirectory of `data_dir`. If
    /// `data_dir` is also empty an ephemeral directory is created.
    pub key_store_dir: PathBuf,

    /// External URI for a clef-type signer.
    pub external_signer: String,
    /// Lowers the memory and CPU requirements of the keystore scrypt KDF at the
    /// expense of security.
    pub use_lightweight_kdf: bool,
    /// Allow unlocking accounts over insecure HTTP.
    pub insecure_unlock_allowed: bool,
    pub password_file: PathBuf,
}

impl NodeConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the keystore directory.
    pub fn with_key_store_dir(mut self, key_store_dir: impl Into<PathBuf>) -> Self {
        self.key_store_dir = key_store_dir.into();
        self
    }

    /// Enable the HTTP RPC server on the given host and port.
    pub fn with_http(mut self, host: impl Into<String>, port: impl Into<String>) -> Self {
        self.http = true;
        self.http_host = host.into();
        self.http_port = port.into();
        self
    }

    /// Enable the websocket RPC server on the given host and port.
    pub fn with_ws(mut self, host: impl Into<String>, port: impl Into<String>) -> Self {
        self.ws = true;
        self.ws_host = host.into();
        self.ws_port = port.into();
        self
    }

    /// Resolve the keystore directory setting.
    ///
    /// Returns an empty path when neither a keystore dir nor a data dir is
    /// configured.
    pub fn key_dir_config(&self) -> Result<PathBuf, ConfigError> {
        let key_store_dir = self.key_store_dir.as_path();

        if key_store_dir.is_absolute() {
            return Ok(key_store_dir.to_path_buf());
        }
        if !self.data_dir.as_os_str().is_empty() && key_store_dir.as_os_str().is_empty() {
            return Ok(self.data_dir.join(DATADIR_DEFAULT_KEYSTORE));
        }
        if !key_store_dir.as_os_str().is_empty() {
            return absolute(key_store_dir);
        }
        Ok(PathBuf::new())
    }

    /// Resolve the keystore directory and make sure it exists.
    ///
    /// An ephemeral directory is created when none is configured; the returned
    /// flag is `true` in that case and the caller owns its removal.
    pub fn key_store_dir(&self) -> Result<(PathBuf, bool), ConfigError> {
        let mut key_dir = self.key_dir_config()?;
        let mut is_ephemeral = false;

        if key_dir.as_os_str().is_empty() {
            // There is no datadir.
            key_dir = tempfile::Builder::new()
                .prefix(EPHEMERAL_KEYSTORE_PREFIX)
                .tempdir()
                .map_err(ConfigError::Ephemeral)?
                .keep();
            is_ephemeral = true;
        }

        create_private_dir(&key_dir)?;
        debug!(target: "conf", path = %key_dir.display(), is_ephemeral, "Resolved keystore directory");

        Ok((key_dir, is_ephemeral))
    }

    /// Whether the node enables an external RPC endpoint (HTTP or websocket).
    pub fn ext_rpc_enabled(&self) -> bool {
        !self.http_host.is_empty() || !self.ws_host.is_empty()
    }
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })
}

fn create_private_dir(path: &Path) -> Result<(), ConfigError> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path).map_err(|source| ConfigError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_key_store_dir_wins() {
        let config = NodeConfig::default()
            .with_data_dir("/var/lib/n42")
            .with_key_store_dir("/etc/n42/keys");

        assert_eq!(config.key_dir_config().unwrap(), PathBuf::from("/etc/n42/keys"));
    }

    #[test]
    fn test_default_keystore_under_data_dir() {
        let config = NodeConfig::default().with_data_dir("/var/lib/n42");

        assert_eq!(
            config.key_dir_config().unwrap(),
            PathBuf::from("/var/lib/n42/keystore")
        );
    }

    #[test]
    fn test_relative_key_store_dir_made_absolute() {
        let config = NodeConfig::default()
            .with_data_dir("/var/lib/n42")
            .with_key_store_dir("keys");
        let resolved = config.key_dir_config().unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("keys"));
        assert!(!resolved.starts_with("/var/lib/n42"));

        let without_data_dir = NodeConfig::default().with_key_store_dir("keys");
        assert_eq!(without_data_dir.key_dir_config().unwrap(), resolved);
    }

    #[test]
    fn test_nothing_configured_is_empty() {
        let config = NodeConfig::default();
        assert!(config.key_dir_config().unwrap().as_os_str().is_empty());
    }

    #[test]
    fn test_key_store_dir_created() {
        let data_dir = tempfile::tempdir().unwrap();
        let config = NodeConfig::default().with_data_dir(data_dir.path());

        let (key_dir, is_ephemeral) = config.key_store_dir().unwrap();

        assert!(!is_ephemeral);
        assert_eq!(key_dir, data_dir.path().join(DATADIR_DEFAULT_KEYSTORE));
        assert!(key_dir.is_dir());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&key_dir).unwrap().permissions().mode();
            assert_eq!(mode & 0o077, 0);
        }
    }

    #[test]
    fn test_ephemeral_key_store_dir() {
        let (key_dir, is_ephemeral) = NodeConfig::default().key_store_dir().unwrap();

        assert!(is_ephemeral);
        assert!(key_dir.is_dir());
        let name = key_dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(EPHEMERAL_KEYSTORE_PREFIX));

        std::fs::remove_dir_all(key_dir).unwrap();
    }

    #[test]
    fn test_ext_rpc_enabled() {
        assert!(!NodeConfig::default().ext_rpc_enabled());
        assert!(NodeConfig::default().with_http("127.0.0.1", "8545").ext_rpc_enabled());
        assert!(NodeConfig::default().with_ws("0.0.0.0", "8546").ext_rpc_enabled());
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{
            "private": "abc",
            "http": true,
            "http_host": "127.0.0.1",
            "http_port": "8545",
            "data_dir": "/data",
            "auth_port": 8551,
            "auth_virtual_hosts": ["localhost"]
        }"#;
        let config: NodeConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.node_private, "abc");
        assert!(config.http);
        assert_eq!(config.data_dir, PathBuf::from("/data"));
        assert_eq!(config.auth_port, 8551);
        assert_eq!(config.auth_virtual_hosts, vec!["localhost".to_string()]);
        assert!(config.key_store_dir.as_os_str().is_empty());

        let encoded = serde_json::to_value(&config).unwrap();
        assert_eq!(encoded["private"], "abc");
        assert!(encoded.get("ws_origins").is_none());
    }
}
