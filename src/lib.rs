pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod view;
pub mod webhook;

use std::sync::Arc;
use config::Config;
use webhook::{Summarizer, WebhookClient};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    /// State backed by the real webhook named in the config.
    pub fn from_config(config: Config) -> error::Result<Self> {
        let client = WebhookClient::new(config.webhook_url.clone())?;

        Ok(AppState {
            config: Arc::new(config),
            summarizer: Arc::new(client),
        })
    }
}
