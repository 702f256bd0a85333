use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

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
    pub catalog: CatalogConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            catalog: CatalogConfig::from_env(),
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

pub const DEFAULT_ORGS_FILE: &str = "organizations_with_specific_majors.csv";
pub const DEFAULT_EVENTS_FILE: &str = "filtered_utd_events_with_categories.csv";
pub const DEFAULT_TUTORING_FILE: &str = "utd_tutoring.csv";

/// Location of the catalog exports loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub directory: PathBuf,
    pub orgs_file: String,
    pub events_file: String,
    pub tutoring_file: String,
}

impl CatalogConfig {
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            orgs_file: DEFAULT_ORGS_FILE.to_string(),
            events_file: DEFAULT_EVENTS_FILE.to_string(),
            tutoring_file: DEFAULT_TUTORING_FILE.to_string(),
        }
    }

    fn from_env() -> Self {
        let directory = env::var("CATALOG_DIR").unwrap_or_else(|_| "data".to_string());
        let mut config = Self::in_directory(directory);

        if let Ok(file) = env::var("CATALOG_ORGS_FILE") {
            config.orgs_file = file;
        }
        if let Ok(file) = env::var("CATALOG_EVENTS_FILE") {
            config.events_file = file;
        }
        if let Ok(file) = env::var("CATALOG_TUTORING_FILE") {
            config.tutoring_file = file;
        }

        config
    }

    pub fn orgs_path(&self) -> PathBuf {
        self.directory.join(&self.orgs_file)
    }

    pub fn events_path(&self) -> PathBuf {
        self.directory.join(&self.events_file)
    }

    pub fn tutoring_path(&self) -> PathBuf {
        self.directory.join(&self.tutoring_file)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
