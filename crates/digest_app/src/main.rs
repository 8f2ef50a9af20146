mod config;
mod summary;

use anyhow::Context;
use digest_engine::DigestEngine;
use digest_logging::{digest_error, digest_info, digest_warn, LogDestination};
use log::LevelFilter;

use crate::config::{ConfigSource, API_URL_ENV, CONFIG_ENV};
use crate::summary::Summary;

fn main() -> anyhow::Result<()> {
    let path = config::config_path(std::env::var_os(CONFIG_ENV));
    let (config, source) = config::load(&path)?;

    let destination = if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    digest_logging::initialize(
        destination,
        LevelFilter::Info,
        &digest_logging::log_file_path(None),
    );

    match &source {
        ConfigSource::File(path) => digest_info!("Loaded config from {:?}", path),
        ConfigSource::Defaults(path) => {
            digest_warn!("No config at {:?}; using defaults", path)
        }
    }

    let api = config.api(std::env::var(API_URL_ENV).ok())?;
    let engine =
        DigestEngine::new(config.fetch_settings()).context("failed to set up the http client")?;
    let report = match engine.run_blocking(&config.job(api)) {
        Ok(report) => report,
        Err(err) => {
            digest_error!("Digest failed: {}", err);
            return Err(err).context("digest run failed");
        }
    };

    print!("{}", Summary::new(&report, &config.analysis));
    Ok(())
}
