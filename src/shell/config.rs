// Process configuration read from the environment.
//
// Variables
// - BANNERS_HOST              listen host, default 0.0.0.0
// - BANNERS_PORT              listen port, default 9999
// - BANNERS_IMAGE_DIR         directory for uploaded images, default web/banners
// - BANNERS_MAX_UPLOAD_BYTES  multipart body ceiling, default 10 MiB

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9999;
pub const DEFAULT_IMAGE_DIR: &str = "web/banners";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub image_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("BANNERS_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "BANNERS_PORT", defaults.port)?,
            image_dir: lookup("BANNERS_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            max_upload_bytes: parse_or(&lookup, "BANNERS_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
