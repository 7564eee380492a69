use crate::i18n::Locale;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Database (optional: in-memory referral store when unset)
    pub database_url: Option<String>,

    // Content
    pub default_locale: Locale,

    // Referrals
    pub referral_reward_points: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Database
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            // Content
            default_locale: match std::env::var("DEFAULT_LOCALE") {
                Ok(code) => Locale::from_code(&code).context("DEFAULT_LOCALE is not a supported locale")?,
                Err(_) => Locale::default(),
            },

            // Referrals
            referral_reward_points: std::env::var("REFERRAL_REWARD_POINTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        })
    }

    /// Socket address string for the listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
