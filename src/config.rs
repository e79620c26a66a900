//! Runtime configuration.
//!
//! Values come from command-line flags first, then `CATALOG_*` environment
//! variables, then defaults.

use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_PATH: &str = "data/books.json";

pub const ENV_BIND: &str = "CATALOG_BIND";
pub const ENV_DATA: &str = "CATALOG_DATA";
pub const ENV_LOG: &str = "CATALOG_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub log_level: Level,
    /// Keep the catalog in memory instead of the data file.
    pub in_memory: bool,
}

impl Config {
    /// Reads the process arguments and environment.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(&args, |key| std::env::var(key).ok())
    }

    /// Builds a config from `args` (without the program name), falling back to
    /// `env` for anything not given on the command line.
    pub fn from_args<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = None;
        let mut data: Option<String> = None;
        let mut log: Option<String> = None;
        let mut in_memory = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--data" => {
                    data = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--log-level" => {
                    log = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--memory" => {
                    in_memory = true;
                    i += 1;
                }
                other => bail!("Unknown argument: {}", other),
            }
        }

        let bind = bind
            .or_else(|| env(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let data = data
            .or_else(|| env(ENV_DATA))
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
        let log = log.or_else(|| env(ENV_LOG)).unwrap_or_else(|| "info".to_string());

        Ok(Self {
            bind_addr: bind
                .parse()
                .with_context(|| format!("Invalid bind address {:?}", bind))?,
            data_path: PathBuf::from(data),
            log_level: log
                .parse()
                .with_context(|| format!("Invalid log level {:?}", log))?,
            in_memory,
        })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .with_context(|| format!("{} requires a value", args[i]))
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--bind <addr:port>] [--data <path>] [--log-level <level>] [--memory]\n\
         Environment: {ENV_BIND}, {ENV_DATA}, {ENV_LOG}"
    )
}
