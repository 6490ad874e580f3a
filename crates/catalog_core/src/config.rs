use std::{fs, time::Duration};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::warn;
use url::Url;

pub const SETTINGS_FILE: &str = "storefront.toml";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_url: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_settings(&mut settings, &raw);
    }
    apply_env_settings(&mut settings, |key| std::env::var(key).ok());

    settings
}

#[derive(Debug, Deserialize)]
struct FileSettings {
    backend_url: Option<String>,
    request_timeout_secs: Option<TimeoutValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TimeoutValue {
    Secs(u64),
    Text(String),
}

fn apply_file_settings(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!("config: ignoring unreadable {SETTINGS_FILE}: {err}");
            return;
        }
    };

    if let Some(v) = file_cfg.backend_url {
        set_backend_url(settings, &v);
    }
    match file_cfg.request_timeout_secs {
        Some(TimeoutValue::Secs(secs)) if secs > 0 => settings.request_timeout_secs = secs,
        Some(TimeoutValue::Text(v)) => set_request_timeout(settings, &v),
        _ => {}
    }
}

fn apply_env_settings(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("BACKEND_URL") {
        set_backend_url(settings, &v);
    }
    if let Some(v) = lookup("APP__BACKEND_URL") {
        set_backend_url(settings, &v);
    }
    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        set_request_timeout(settings, &v);
    }
}

fn set_backend_url(settings: &mut Settings, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        settings.backend_url = Some(trimmed.to_string());
    }
}

fn set_request_timeout(settings: &mut Settings, raw: &str) {
    if let Ok(parsed) = raw.trim().parse::<u64>() {
        if parsed > 0 {
            settings.request_timeout_secs = parsed;
        }
    }
}

pub fn api_base_url(settings: &Settings, origin: &Url) -> Result<Url> {
    let Some(backend) = settings.backend_url.as_deref() else {
        return origin
            .join("/api/")
            .with_context(|| format!("failed to resolve same-origin api path for '{origin}'"));
    };

    let api = format!("{}/api/", backend.trim_end_matches('/'));
    let base = Url::parse(&api)
        .or_else(|_| origin.join(&api))
        .with_context(|| format!("invalid backend url '{backend}'"))?;

    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        bail!("invalid backend url '{backend}': expected an http(s) url such as 'http://{backend}'");
    }
    Ok(base)
}
