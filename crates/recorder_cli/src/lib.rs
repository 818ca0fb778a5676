//! Recorder CLI Library
//!
//! JSON script → recording session → JSON report
//! Event list JSON schema export

use anyhow::{Context, Result};
use recorder_core::{api, RecorderConfig, ScriptRequest, ScriptResponse};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output of one scripted run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Script the report was produced from
    pub script: String,
    /// Creation time (RFC3339)
    pub generated_at: String,
    /// Where the session config came from
    pub config_source: ConfigSource,
    #[serde(flatten)]
    pub response: ScriptResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    /// `--config` file
    File,
    /// `config` block inside the script
    Script,
    /// `RECORDER_CONFIG_PATH` or built-in defaults
    Environment,
}

/// Read a script, resolve its config and run it through a session.
///
/// Config precedence: `config_path` > the script's own `config` block >
/// `RECORDER_CONFIG_PATH` > defaults.
pub fn run_script_file(script_path: &Path, config_path: Option<&Path>) -> Result<RunReport> {
    let json_str = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script file: {}", script_path.display()))?;

    let mut request: ScriptRequest =
        serde_json::from_str(&json_str).context("Failed to parse script JSON")?;

    let config_source = match (config_path, request.config.is_some()) {
        (Some(path), _) => {
            let config = RecorderConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            request.config = Some(config);
            ConfigSource::File
        }
        (None, true) => ConfigSource::Script,
        (None, false) => {
            request.config =
                Some(RecorderConfig::from_env().context("Failed to load config from environment")?);
            ConfigSource::Environment
        }
    };
    tracing::debug!("Config source: {:?}", config_source);

    let response = api::run_script(request)
        .with_context(|| format!("Script failed: {}", script_path.display()))?;

    Ok(RunReport {
        script: script_path.display().to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        config_source,
        response,
    })
}

/// Write `report` as pretty JSON, creating parent directories.
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    write_pretty(path, &serde_json::to_string_pretty(report)?)
}

/// Write the event list JSON schema to `path`.
pub fn write_schema(path: &Path) -> Result<()> {
    let schema = api::event_list_schema().context("Failed to generate schema")?;
    write_pretty(path, &schema)
}

fn write_pretty(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
