//! Process configuration: command-line flags with environment fallbacks.

use crate::error::{Error, Result};
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Log output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Compact,
    /// One JSON object per record.
    Json,
}

/// Settings for the `person-store` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "person-store")]
#[command(version)]
#[command(about = "CRUD service for person records kept in a JSON file")]
pub struct Config {
    /// Backing JSON file. Created with an empty collection if missing.
    #[arg(long, env = "PERSON_STORE_DB_PATH", default_value = "people.json", value_name = "FILE")]
    pub db_path: PathBuf,

    /// Address the HTTP server binds to.
    #[arg(long, env = "PERSON_STORE_ADDR", default_value = "127.0.0.1:8080", value_name = "HOST:PORT")]
    pub addr: SocketAddr,

    /// Write indented JSON instead of a single line.
    #[arg(long, env = "PERSON_STORE_PRETTY")]
    pub pretty: bool,

    /// Log output style.
    #[arg(long, env = "PERSON_STORE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    /// Reject settings clap cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(Error::Config("db path must not be empty".into()));
        }
        if self.db_path.file_name().is_none() {
            return Err(Error::Config(format!(
                "db path {} does not name a file",
                self.db_path.display()
            )));
        }
        Ok(())
    }
}
