//! CLI command implementations
//!
//! Both commands share the same boot sequence: load configuration,
//! then load the dataset. Nothing is served unless boot completes.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::dataset::{self, Dataset, YEAR_COLUMN};
use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::query::aliases;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the backing CSV file
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_data_file() -> String {
    "./cpuo.csv".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file is not an error: defaults apply, so the server
    /// runs with zero configuration next to its CSV. A present but
    /// malformed file is fatal.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_file.is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        Ok(())
    }

    /// Get the data file as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_file)
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Check { config } => check(&config),
    }
}

/// Load the dataset and start the HTTP server
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let dataset = boot_dataset(&config)?;
    let server = HttpServer::new(config.socket_addr(), &config.cors_origins, dataset);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load the dataset and print a one-line summary
///
/// Exercises the full startup precondition without binding a socket.
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let dataset = boot_dataset(&config)?;

    let years: Vec<i64> = dataset.years().into_iter().collect();
    write_response(json!({
        "data_file": config.data_file,
        "rows": dataset.len(),
        "years": years,
        "columns": dataset.columns(),
    }))?;

    Ok(())
}

/// Boot step shared by every command: the dataset must load and carry
/// every column the alias table can resolve to.
fn boot_dataset(config: &Config) -> CliResult<Arc<Dataset>> {
    let mut required: Vec<&str> = vec![YEAR_COLUMN];
    required.extend(aliases::internal_labels());

    let dataset = dataset::load_dataset(config.data_path(), &required)
        .map_err(|e| CliError::boot_failed(format!("Dataset load failed: {}", e)))?;

    let rows = dataset.len().to_string();
    let years = dataset.years().len().to_string();
    Logger::info(
        "DATASET_LOADED",
        &[
            ("path", config.data_file.as_str()),
            ("rows", rows.as_str()),
            ("years", years.as_str()),
        ],
    );

    Ok(Arc::new(dataset))
}
