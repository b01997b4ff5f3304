// src/config.rs

use email_address::EmailAddress;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

use crate::shared::store::StoreConfig;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/portfolio";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_HEARTBEAT_SECS: u64 = 10;
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    ZeroDuration { var: &'static str },
}

/// Credentials for the contact notification relay. Only built when both the
/// user and the password are present.
#[derive(Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub smtp_server: String,
    pub username: String,
    pub password: String,
    pub recipient: String,
}

impl std::fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("smtp_server", &self.smtp_server)
            .field("username", &self.username)
            .field("password", &"***")
            .field("recipient", &self.recipient)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub notification: Option<NotificationConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store = StoreConfig {
            url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            connect_timeout: seconds(
                "STORE_CONNECT_TIMEOUT_SECS",
                var("STORE_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            heartbeat_interval: seconds(
                "STORE_HEARTBEAT_SECS",
                var("STORE_HEARTBEAT_SECS"),
                DEFAULT_HEARTBEAT_SECS,
            )?,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: number("PORT", var("PORT"), DEFAULT_PORT)?,
            store,
            notification: notification(&var),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn number<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

fn seconds(var: &'static str, raw: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    match number(var, raw, default)? {
        0 => Err(ConfigError::ZeroDuration { var }),
        secs => Ok(Duration::from_secs(secs)),
    }
}

fn notification<F>(var: &F) -> Option<NotificationConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let (username, password) = match (var("EMAIL_USER"), var("EMAIL_PASS")) {
        (Some(user), Some(pass)) => (user, pass),
        (None, None) => {
            info!("Email credentials not set, contact notifications disabled");
            return None;
        }
        _ => {
            info!("Email credentials incomplete, contact notifications disabled");
            return None;
        }
    };

    let recipient = var("CONTACT_NOTIFY_TO").unwrap_or_else(|| username.clone());
    if !EmailAddress::is_valid(&recipient) {
        warn!(recipient = %recipient, "Invalid notification recipient, contact notifications disabled");
        return None;
    }

    Some(NotificationConfig {
        smtp_server: var("SMTP_SERVER").unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
        username,
        password,
        recipient,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn config_from(vars: HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(HashMap::new()).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.store.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.store.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.store.heartbeat_interval, Duration::from_secs(10));
        assert!(config.notification.is_none());
    }

    #[test]
    fn reads_explicit_values() {
        let config = config_from(hashmap! {
            "DATABASE_URL" => "postgres://db:5432/site",
            "HOST" => "127.0.0.1",
            "PORT" => "8080",
            "STORE_CONNECT_TIMEOUT_SECS" => "2",
            "STORE_HEARTBEAT_SECS" => "30",
        })
        .unwrap();

        assert_eq!(config.store.url, "postgres://db:5432/site");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.store.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.store.heartbeat_interval, Duration::from_secs(30));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(hashmap! { "PORT" => "  ", "EMAIL_USER" => "" }).unwrap();

        assert_eq!(config.port, 5000);
        assert!(config.notification.is_none());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = config_from(hashmap! { "PORT" => "http" }).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "PORT",
                value: "http".to_string()
            }
        );
    }

    #[test]
    fn zero_timeout_is_an_error() {
        let err = config_from(hashmap! { "STORE_CONNECT_TIMEOUT_SECS" => "0" }).unwrap_err();

        assert_eq!(
            err,
            ConfigError::ZeroDuration {
                var: "STORE_CONNECT_TIMEOUT_SECS"
            }
        );
    }

    #[test]
    fn notification_enabled_with_both_credentials() {
        let config = config_from(hashmap! {
            "EMAIL_USER" => "owner@example.com",
            "EMAIL_PASS" => "app-password",
        })
        .unwrap();

        let notification = config.notification.unwrap();
        assert_eq!(notification.smtp_server, "smtp.gmail.com");
        assert_eq!(notification.username, "owner@example.com");
        assert_eq!(notification.recipient, "owner@example.com");
    }

    #[test]
    fn explicit_recipient_overrides_user() {
        let config = config_from(hashmap! {
            "EMAIL_USER" => "relay@example.com",
            "EMAIL_PASS" => "app-password",
            "CONTACT_NOTIFY_TO" => "inbox@example.com",
            "SMTP_SERVER" => "smtp.example.com",
        })
        .unwrap();

        let notification = config.notification.unwrap();
        assert_eq!(notification.recipient, "inbox@example.com");
        assert_eq!(notification.smtp_server, "smtp.example.com");
    }

    #[test]
    fn partial_credentials_disable_notification() {
        let config = config_from(hashmap! { "EMAIL_USER" => "owner@example.com" }).unwrap();

        assert!(config.notification.is_none());
    }

    #[test]
    fn invalid_recipient_disables_notification() {
        let config = config_from(hashmap! {
            "EMAIL_USER" => "not-an-address",
            "EMAIL_PASS" => "app-password",
        })
        .unwrap();

        assert!(config.notification.is_none());
    }

    #[test]
    fn debug_output_hides_password() {
        let config = config_from(hashmap! {
            "EMAIL_USER" => "owner@example.com",
            "EMAIL_PASS" => "app-password",
        })
        .unwrap();

        let rendered = format!("{:?}", config.notification.unwrap());
        assert!(!rendered.contains("app-password"));
    }
}
