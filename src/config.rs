use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use url::Url;
use crate::error::{AppError, Result};

/// Automation webhook that receives the article URL and answers with the summary text.
pub const DEFAULT_WEBHOOK_URL: &str = "https://hook.us2.make.com/43w4djaynnojsh85t30397asrj5vuu67";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub webhook_url: Url,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let webhook_url = env::var("WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());

        Self::from_parts(&host, &port, &webhook_url)
    }

    pub fn from_parts(host: &str, port: &str, webhook_url: &str) -> Result<Self> {
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;
        let webhook_url = Url::parse(webhook_url)
            .map_err(|e| AppError::Config(format!("Invalid webhook URL: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            webhook_url,
        })
    }
}
