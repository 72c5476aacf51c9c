use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Context};
use order_store::DEFAULT_ORDERS_URL;
use orders_table::PageSize;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub orders_url: String,
    pub orders_file: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub page_size: PageSize,
    pub logo: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orders_url: DEFAULT_ORDERS_URL.into(),
            orders_file: None,
            request_timeout_secs: 10,
            page_size: PageSize::Five,
            logo: "MRI ONLINE".into(),
            log_filter: "warn".into(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    orders_url: Option<String>,
    orders_file: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
    page_size: Option<PageSize>,
    logo: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then `path` if it exists, then `APP__*` environment variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()));
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file.orders_url {
        settings.orders_url = v;
    }
    if let Some(v) = file.orders_file {
        settings.orders_file = Some(v);
    }
    if let Some(v) = file.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = file.page_size {
        settings.page_size = v;
    }
    if let Some(v) = file.logo {
        settings.logo = v;
    }
    if let Some(v) = file.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env(
    settings: &mut Settings,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = var("ORDERS_URL") {
        settings.orders_url = v;
    }
    if let Some(v) = var("APP__ORDERS_URL") {
        settings.orders_url = v;
    }

    if let Some(v) = var("APP__ORDERS_FILE") {
        settings.orders_file = Some(PathBuf::from(v));
    }

    if let Some(v) = var("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = v
            .trim()
            .parse()
            .map_err(|_| anyhow!("APP__REQUEST_TIMEOUT_SECS must be a number of seconds"))?;
    }

    if let Some(v) = var("APP__PAGE_SIZE") {
        settings.page_size = v.parse().context("APP__PAGE_SIZE")?;
    }

    if let Some(v) = var("APP__LOGO") {
        settings.logo = v;
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
