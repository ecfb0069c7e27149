use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    db::{self, Backend, DatabaseConfig},
    error::ErrorVerbosity,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file `{path}`")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file `{path}`")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Database url is empty, set `database.url` or `DATABASE_URL`")]
    EmptyDatabaseUrl,
    #[error("Unsupported database url scheme `{scheme}`, expected `postgres`, `postgresql` or `sqlite`")]
    UnsupportedDatabaseScheme { scheme: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_socket_address")]
    socket_address: SocketAddr,
    #[serde(default)]
    error_verbosity: ErrorVerbosity,
    #[serde(default)]
    database: DatabaseConfig,
}

fn default_socket_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_address: default_socket_address(),
            error_verbosity: ErrorVerbosity::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(
        socket_address: SocketAddr,
        error_verbosity: ErrorVerbosity,
        database: DatabaseConfig,
    ) -> Self {
        Self {
            socket_address,
            error_verbosity,
            database,
        }
    }

    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_database_url(mut self, url: String) -> Self {
        self.database.url = url;
        self
    }

    /// Checks everything that can be checked before the database is contacted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.database.url.as_str();

        if url.is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        if Backend::from_url(url).is_none() {
            return Err(ConfigError::UnsupportedDatabaseScheme {
                scheme: db::scheme(url).to_string(),
            });
        }

        Ok(())
    }

    pub fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }

    pub fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }
}
