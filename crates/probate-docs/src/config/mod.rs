use std::env;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub documents: DocumentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let documents = DocumentConfig::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            documents,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Typography and registry defaults applied to every generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    pub font_family: String,
    pub font_size_points: u16,
    pub default_registry: String,
}

const MIN_FONT_POINTS: u16 = 8;
const MAX_FONT_POINTS: u16 = 20;

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size_points: 12,
            default_registry: String::new(),
        }
    }
}

impl DocumentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let font_family = env::var("DOCS_FONT_FAMILY")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.font_family);

        let font_size_points = match env::var("DOCS_FONT_SIZE") {
            Ok(raw) => {
                let size = raw
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidFontSize(raw.clone()))?;
                if !(MIN_FONT_POINTS..=MAX_FONT_POINTS).contains(&size) {
                    return Err(ConfigError::InvalidFontSize(raw));
                }
                size
            }
            Err(_) => defaults.font_size_points,
        };

        let default_registry = env::var("DOCS_REGISTRY")
            .map(|value| value.trim().to_string())
            .unwrap_or(defaults.default_registry);

        Ok(Self {
            font_family,
            font_size_points,
            default_registry,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },
    #[error(
        "DOCS_FONT_SIZE must be a whole point size between {min} and {max} (found '{0}')",
        min = MIN_FONT_POINTS,
        max = MAX_FONT_POINTS
    )]
    InvalidFontSize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "DOCS_FONT_FAMILY",
            "DOCS_FONT_SIZE",
            "DOCS_REGISTRY",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.documents, DocumentConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_document_settings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DOCS_FONT_FAMILY", "Arial");
        env::set_var("DOCS_FONT_SIZE", "11");
        env::set_var("DOCS_REGISTRY", "Vancouver");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.documents.font_family, "Arial");
        assert_eq!(config.documents.font_size_points, 11);
        assert_eq!(config.documents.default_registry, "Vancouver");
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_font_size() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DOCS_FONT_SIZE", "72");
        let err = AppConfig::load().expect_err("font size rejected");
        assert!(matches!(err, ConfigError::InvalidFontSize(ref value) if value == "72"));
        reset_env();
    }
}
