//! Configuration management for the Media Studio mail service

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Which mail sender backs the dispatch service
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MailTransportKind {
    /// Real delivery through an SMTP relay
    Smtp,
    /// Log the message and report success without sending anything
    Log,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmailConfig {
    pub transport: MailTransportKind,
    /// Label reported by the health endpoint
    pub provider: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_use_tls: bool,
    /// Sender address used on every outgoing message
    pub smtp_from: String,
    /// Display name for messages addressed to students
    pub smtp_from_name: String,
    /// Display name for messages addressed to the administrator
    pub system_from_name: String,
    /// Recipient of admin notifications, also shown as the contact address
    pub admin_email: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. MEDIA_STUDIO_EMAIL__ADMIN_EMAIL)
            .add_source(
                Environment::with_prefix("MEDIA_STUDIO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Gmail account used both as sender and SMTP login
            .set_override_option("email.smtp_from", env::var("GMAIL_USER").ok())?
            .set_override_option("email.smtp_username", env::var("GMAIL_USER").ok())?
            .set_override_option("email.smtp_password", env::var("GMAIL_APP_PASSWORD").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            transport: MailTransportKind::Smtp,
            provider: "Gmail".to_string(),
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            smtp_use_tls: true,
            smtp_from: "uaeumediastudio@gmail.com".to_string(),
            smtp_from_name: "UAEU Media Studio".to_string(),
            system_from_name: "UAEU Media Studio System".to_string(),
            admin_email: "uaeumediastudio@gmail.com".to_string(),
        }
    }
}
