//! Runtime configuration, read from the environment (and `.env` when present).

use std::env;
use thiserror::Error;

use crate::receipt::generator::ReceiptSettings;

const DEFAULT_ORGANIZATION: &str = "ASOCIACIÓN DE VIVIENDA TALLER LOS GRAMADALES";
const DEFAULT_RUC: &str = "20450192971";
const DEFAULT_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RECIBOS_PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub letterhead_urls: Vec<String>,
    pub typst_bin: String,
    pub organization: String,
    pub ruc: String,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load `.env` if present, then read every `RECIBOS_*` variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = match get("RECIBOS_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 8080,
        };

        let organization = get("RECIBOS_ORGANIZATION").unwrap_or_else(|| {
            log::warn!("RECIBOS_ORGANIZATION not set, using default organization name");
            DEFAULT_ORGANIZATION.to_string()
        });
        let ruc = get("RECIBOS_RUC").unwrap_or_else(|| {
            log::warn!("RECIBOS_RUC not set, using default RUC {}", DEFAULT_RUC);
            DEFAULT_RUC.to_string()
        });

        let allowed_origins = match get("RECIBOS_ALLOWED_ORIGINS") {
            Some(raw) => split_list(&raw),
            None => vec![DEFAULT_ORIGIN.to_string()],
        };

        Ok(Self {
            host: get("RECIBOS_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            letterhead_urls: get("RECIBOS_LETTERHEAD_URLS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            typst_bin: get("RECIBOS_TYPST_BIN").unwrap_or_else(|| "typst".to_string()),
            organization,
            ruc,
            allowed_origins,
        })
    }

    pub fn receipt_settings(&self) -> ReceiptSettings {
        ReceiptSettings {
            organization: self.organization.clone(),
            ruc: self.ruc.clone(),
            letterhead_urls: self.letterhead_urls.clone(),
            typst_bin: self.typst_bin.clone(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
