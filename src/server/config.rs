use std::env;
use std::fs;
use std::time::Duration;

use reqwest::Url;

use super::error::ServerError;
use crate::client::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::summarizer::extractive::DEFAULT_SUMMARY_SENTENCES;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Credential for the generative model; abstractive requests fail without it
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout: Duration,
    /// Sentence count for extractive requests that do not give one
    pub summary_sentences: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            google_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            gemini_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_host(&self.host)?;
        validate_port(self.port)?;

        if self.gemini_model.trim().is_empty() {
            return Err(ServerError::Config("GEMINI_MODEL cannot be empty".into()));
        }
        Url::parse(&self.gemini_base_url).map_err(|e| {
            ServerError::Config(format!(
                "GEMINI_BASE_URL is not a valid URL ({}): {e}",
                self.gemini_base_url
            ))
        })?;
        if self.gemini_timeout.is_zero() {
            return Err(ServerError::Config(
                "GEMINI_TIMEOUT_SECS must be greater than 0".into(),
            ));
        }
        if self.summary_sentences == 0 {
            return Err(ServerError::Config(
                "SUMMARY_SENTENCES must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn validate_host(host: &str) -> Result<(), ServerError> {
    if host.trim().is_empty() {
        return Err(ServerError::Config("Host cannot be empty".into()));
    }
    Ok(())
}

fn validate_port(port: u16) -> Result<(), ServerError> {
    if port == 0 {
        return Err(ServerError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

/// Read a secret from `NAME_FILE` (Docker secrets) or `NAME`
fn get_secret<F>(lookup: &F, name: &str) -> Result<Option<String>, ServerError>
where
    F: Fn(&str) -> Option<String>,
{
    let file_var = format!("{name}_FILE");
    if let Some(path) = lookup(&file_var) {
        let content = fs::read_to_string(&path)
            .map_err(|e| ServerError::Config(format!("Failed to read {file_var}: {e}")))?;
        let content = content.trim().to_string();
        return Ok((!content.is_empty()).then_some(content));
    }

    Ok(lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ServerError::Config(format!("Invalid {name} value {raw:?}: {e}"))),
        None => Ok(default),
    }
}

/// Build settings from an arbitrary variable source
pub fn from_lookup<F>(lookup: F) -> Result<Settings, ServerError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Settings::default();

    let settings = Settings {
        host: lookup("HOST").unwrap_or(defaults.host),
        port: parse_var(&lookup, "PORT", defaults.port)?,
        google_api_key: get_secret(&lookup, "GOOGLE_API_KEY")?,
        gemini_model: lookup("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
        gemini_base_url: lookup("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
        gemini_timeout: Duration::from_secs(parse_var(
            &lookup,
            "GEMINI_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?),
        summary_sentences: parse_var(&lookup, "SUMMARY_SENTENCES", defaults.summary_sentences)?,
    };

    settings.validate()?;
    Ok(settings)
}

/// Build settings from the process environment
pub fn get_configuration() -> Result<Settings, ServerError> {
    from_lookup(|name| env::var(name).ok())
}
