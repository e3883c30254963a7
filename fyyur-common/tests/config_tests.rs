//! Configuration resolution and graceful degradation
//!
//! Tests that touch `FYYUR_ROOT_FOLDER` are marked `#[serial]` so they do not
//! race each other on the process environment.

use fyyur_common::config::{
    CompiledDefaults, LoggingConfig, RootFolderInitializer, RootFolderResolver, TomlConfig,
    DATABASE_FILE_NAME, DEFAULT_PORT, ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};

#[test]
fn test_compiled_defaults_for_current_platform() {
    let defaults = CompiledDefaults::for_current_platform();

    assert!(!defaults.root_folder.as_os_str().is_empty());
    assert!(defaults.root_folder.ends_with("fyyur") || defaults.root_folder.ends_with("fyyur_data"));
    assert_eq!(defaults.host, "127.0.0.1");
    assert_eq!(defaults.port, DEFAULT_PORT);
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    // Module name that cannot have a config file
    let resolver = RootFolderResolver::new("nonexistent-test-module-12345");
    let root_folder = resolver.resolve();

    assert_eq!(root_folder, CompiledDefaults::for_current_platform().root_folder);
}

#[test]
#[serial]
fn test_resolver_env_var() {
    let test_path = "/tmp/fyyur-test-env-folder";
    env::set_var(ROOT_FOLDER_ENV, test_path);

    let root_folder = RootFolderResolver::new("test-module").resolve();
    assert_eq!(root_folder, PathBuf::from(test_path));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_resolver_cli_arg_beats_env_var() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/fyyur-priority-2");

    let root_folder = RootFolderResolver::new("test-module")
        .with_cli_arg(Some(PathBuf::from("/tmp/fyyur-priority-1")))
        .resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/fyyur-priority-1"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_resolver_ignores_blank_env_var() {
    env::set_var(ROOT_FOLDER_ENV, "   ");

    let root_folder = RootFolderResolver::new("nonexistent-test-module-12345").resolve();
    assert_eq!(root_folder, CompiledDefaults::for_current_platform().root_folder);

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
fn test_initializer_database_path() {
    let root = PathBuf::from("/tmp/fyyur-test-root");
    let initializer = RootFolderInitializer::new(root.clone());

    assert_eq!(initializer.database_path(), root.join(DATABASE_FILE_NAME));
    assert_eq!(initializer.resolve_database_path(None), root.join(DATABASE_FILE_NAME));
    assert_eq!(
        initializer.resolve_database_path(Some(Path::new("other.db"))),
        root.join("other.db")
    );
    assert_eq!(
        initializer.resolve_database_path(Some(Path::new("/srv/fyyur/live.db"))),
        PathBuf::from("/srv/fyyur/live.db")
    );
}

#[test]
fn test_initializer_database_exists() {
    let initializer = RootFolderInitializer::new(PathBuf::from("/tmp/fyyur-test-nonexistent"));
    assert!(!initializer.database_exists());
}

#[test]
fn test_initializer_creates_nested_directories_idempotently() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("level1").join("level2");

    let initializer = RootFolderInitializer::new(root.clone());
    initializer.ensure_directory_exists().expect("first call creates");
    initializer.ensure_directory_exists().expect("second call is a no-op");

    assert!(root.is_dir());
}

#[test]
fn test_toml_roundtrip() {
    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/srv/fyyur")),
        database: Some(PathBuf::from("bookings.db")),
        host: Some("0.0.0.0".to_string()),
        port: Some(8080),
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    };

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: TomlConfig = toml::from_str(&toml_str).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_toml_missing_fields_use_defaults() {
    let config: TomlConfig = toml::from_str(
        r#"
        root_folder = "/srv/fyyur"
        "#,
    )
    .unwrap();

    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/fyyur")));
    assert_eq!(config.port, None);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_toml_load_reports_parse_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("broken.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    let err = TomlConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}
