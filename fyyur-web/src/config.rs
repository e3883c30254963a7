//! Server configuration
//!
//! Each setting resolves from the command line or environment first (both
//! handled by `clap`), then the TOML config file, then compiled defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use fyyur_common::config::{CompiledDefaults, RootFolderInitializer, TomlConfig};
use fyyur_common::{Error, Result};

/// Module name used for the config file (`~/.config/fyyur/fyyur-web.toml`)
pub const MODULE_NAME: &str = "fyyur-web";

/// Command-line arguments for fyyur-web
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "fyyur-web")]
#[command(about = "Fyyur venue and artist booking site")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "FYYUR_PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "FYYUR_HOST")]
    pub host: Option<String>,

    /// SQLite database file; relative paths are inside the root folder
    #[arg(short, long, env = "FYYUR_DATABASE")]
    pub database: Option<PathBuf>,

    /// Folder holding the database
    #[arg(short, long, env = "FYYUR_ROOT_FOLDER")]
    pub root_folder: Option<PathBuf>,
}

/// Fully resolved settings for one server run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Merge arguments over the config file over defaults
    ///
    /// `root_folder` has already been resolved by `RootFolderResolver`.
    pub fn resolve(args: &Args, toml: &TomlConfig, root_folder: &RootFolderInitializer) -> Self {
        let defaults = CompiledDefaults::for_current_platform();

        let host = args
            .host
            .clone()
            .or_else(|| toml.host.clone())
            .unwrap_or(defaults.host);
        let port = args.port.or(toml.port).unwrap_or(defaults.port);
        let configured_db = args.database.as_deref().or(toml.database.as_deref());

        Self {
            host,
            port,
            database_path: root_folder.resolve_database_path(configured_db),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid listen address {}:{}: {}", self.host, self.port, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn initializer() -> RootFolderInitializer {
        RootFolderInitializer::new(PathBuf::from("/srv/fyyur"))
    }

    #[test]
    fn test_defaults_when_nothing_configured() {
        let config = ServerConfig::resolve(&Args::default(), &TomlConfig::default(), &initializer());
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_path, Path::new("/srv/fyyur/fyyur.db"));
    }

    #[test]
    fn test_arguments_override_config_file() {
        let toml = TomlConfig {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
            database: Some(PathBuf::from("from-file.db")),
            ..TomlConfig::default()
        };

        let from_file = ServerConfig::resolve(&Args::default(), &toml, &initializer());
        assert_eq!(from_file.host, "0.0.0.0");
        assert_eq!(from_file.port, 8080);
        assert_eq!(from_file.database_path, Path::new("/srv/fyyur/from-file.db"));

        let args = Args::try_parse_from(["fyyur-web", "--port", "9000", "--database", "/tmp/cli.db"])
            .expect("valid arguments");
        let from_args = ServerConfig::resolve(&args, &toml, &initializer());
        assert_eq!(from_args.host, "0.0.0.0");
        assert_eq!(from_args.port, 9000);
        assert_eq!(from_args.database_path, Path::new("/tmp/cli.db"));
    }

    #[test]
    fn test_socket_addr() {
        let mut config = ServerConfig::resolve(&Args::default(), &TomlConfig::default(), &initializer());
        assert_eq!(config.socket_addr().unwrap().port(), 5000);

        config.host = "not a host".to_string();
        assert!(config.socket_addr().is_err());
    }
}
