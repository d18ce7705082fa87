//! Shared application state handed to every handler.

use crate::config::AppConfig;
use crate::receipt::ReceiptGenerator;

pub struct AppState {
    pub generator: ReceiptGenerator,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        // No request timeout: letterhead downloads wait until they load or fail.
        let http_client = reqwest::Client::builder()
            .pool_idle_timeout(std::time::Duration::from_secs(900))
            .user_agent("gramadales-recibos/1.0")
            .build()?;

        let generator = ReceiptGenerator::new(config.receipt_settings(), http_client)?;

        Ok(AppState { generator })
    }
}
