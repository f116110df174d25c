// ABOUTME: Unit tests for environment configuration and storage URL parsing
// ABOUTME: Validates defaults, overrides and rejected storage URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lockin::config::environment::env_keys;
use lockin::config::{AppConfig, Environment, LogLevel, StorageUrl, DEFAULT_USER};
use lockin::core::errors::ErrorCode;
use lockin::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    for key in [
        env_keys::STORAGE_URL,
        env_keys::USER,
        env_keys::ENVIRONMENT,
        env_keys::LOG_LEVEL,
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
}

#[test]
fn test_storage_url_parsing() {
    let file = StorageUrl::parse_url("sqlite:./data/lockin.db").unwrap();
    assert!(file.is_sqlite());
    assert!(!file.is_ephemeral());
    assert_eq!(file.to_connection_string(), "sqlite:./data/lockin.db");

    let memory_db = StorageUrl::parse_url("sqlite::memory:").unwrap();
    assert_eq!(memory_db, StorageUrl::SQLiteMemory);
    assert!(memory_db.is_ephemeral());

    let memory = StorageUrl::parse_url("MEMORY").unwrap();
    assert_eq!(memory, StorageUrl::Memory);
    assert!(!memory.is_sqlite());

    assert_eq!(
        StorageUrl::parse_url("/var/lib/lockin.db").unwrap(),
        StorageUrl::SQLite {
            path: PathBuf::from("/var/lib/lockin.db")
        }
    );
}

#[test]
fn test_invalid_storage_urls() {
    for url in ["", "   ", "sqlite:", "postgres://localhost/lockin"] {
        let error = StorageUrl::parse_url(url).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{url:?}");
    }
}

#[test]
fn test_default_storage_is_a_sqlite_file() {
    let StorageUrl::SQLite { path } = StorageUrl::default() else {
        panic!("default storage should be a SQLite file");
    };
    assert!(path.ends_with("lockin.db"));
}

#[test]
#[serial]
fn test_config_defaults_without_env() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.user, DEFAULT_USER);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.storage, StorageUrl::default());
}

#[test]
#[serial]
fn test_config_reads_env_overrides() {
    clear_env();
    env::set_var(env_keys::STORAGE_URL, "memory");
    env::set_var(env_keys::USER, "  casey ");
    env::set_var(env_keys::ENVIRONMENT, "production");
    env::set_var(env_keys::LOG_LEVEL, "debug");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.storage, StorageUrl::Memory);
    assert_eq!(config.user, "casey");
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.summary().contains("User: casey"));
    clear_env();
}

#[test]
#[serial]
fn test_config_rejects_bad_storage_env() {
    clear_env();
    env::set_var(env_keys::STORAGE_URL, "redis://localhost");
    assert!(AppConfig::from_env().is_err());
    clear_env();
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_cli_logging_follows_configured_level() {
    clear_env();
    env::set_var(env_keys::LOG_LEVEL, "error");

    let config = AppConfig::from_env().unwrap();
    let logging = LoggingConfig::for_cli(false, config.log_level);
    assert_eq!(logging.level, "error");
    assert_eq!(logging.format, LogFormat::Compact);

    assert_eq!(LoggingConfig::for_cli(true, config.log_level).level, "debug");
    assert_eq!(LoggingConfig::for_cli(false, LogLevel::Warn).level, "warn");

    clear_env();
}
