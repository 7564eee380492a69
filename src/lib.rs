pub mod config;
pub mod content;
pub mod i18n;
pub mod referral;
pub mod retry;
pub mod server;
pub mod terms;
