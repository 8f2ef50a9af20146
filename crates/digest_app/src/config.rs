//! Run configuration, resolved once before the pipeline starts.
//!
//! Read from `digest.ron` in the working directory, or from the file named by
//! `POST_DIGEST_CONFIG`. The API URL carries credentials, so it may instead be
//! supplied through `POST_DIGEST_API_URL`, which takes precedence.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use digest_engine::{ApiConfig, DigestJob, FetchSettings, PartitionOptions};
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "POST_DIGEST_CONFIG";
pub const API_URL_ENV: &str = "POST_DIGEST_API_URL";
const DEFAULT_CONFIG_FILE: &str = "digest.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    pub api_url: Option<String>,
    pub num_files: usize,
    pub space_between: usize,
    pub markdown_dir: PathBuf,
    pub rewritten_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub log_to_file: bool,
    pub analysis: AnalysisConfig,
}

impl Default for DigestConfig {
    fn default() -> Self {
        let partition = PartitionOptions::default();
        Self {
            api_url: None,
            num_files: partition.num_files,
            space_between: partition.space_between,
            markdown_dir: partition.output_dir,
            rewritten_dir: PathBuf::from("./rewritten_files"),
            request_timeout_secs: 30,
            log_to_file: false,
            analysis: AnalysisConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub enabled: bool,
    /// Rows printed from the word table.
    pub top_words: usize,
    /// Rows printed from the part-of-speech table.
    pub top_tags: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            top_words: 20,
            top_tags: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults(PathBuf),
}

pub fn config_path(from_env: Option<OsString>) -> PathBuf {
    from_env
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Loads the config file; a missing file yields defaults.
pub fn load(path: &Path) -> anyhow::Result<(DigestConfig, ConfigSource)> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((
                DigestConfig::default(),
                ConfigSource::Defaults(path.to_path_buf()),
            ));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {path:?}"));
        }
    };

    let config: DigestConfig =
        ron::from_str(&content).with_context(|| format!("failed to parse config {path:?}"))?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

impl DigestConfig {
    /// The environment value wins over the file.
    pub fn api(&self, from_env: Option<String>) -> anyhow::Result<ApiConfig> {
        let url = from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_url.clone());
        match url {
            Some(url) => Ok(ApiConfig::new(url.trim())),
            None => bail!("no content API url: set `api_url` in the config or {API_URL_ENV}"),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            ..FetchSettings::default()
        }
    }

    pub fn job(&self, api: ApiConfig) -> DigestJob {
        DigestJob {
            api,
            partition: PartitionOptions {
                num_files: self.num_files,
                space_between: self.space_between,
                output_dir: self.markdown_dir.clone(),
            },
            rewritten_dir: self.rewritten_dir.clone(),
            analyze: self.analysis.enabled,
        }
    }
}
