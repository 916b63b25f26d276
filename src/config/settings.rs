use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub firebase: FirebaseConfig,
    pub cloudinary: CloudinaryConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Shared secret expected in `Authorization: Bearer <secret>`
    #[serde(default)]
    pub secret_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseConfig {
    /// Service-account key file contents (JSON document)
    #[serde(default)]
    pub service_account: String,
    #[serde(default = "default_fcm_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudinaryConfig {
    #[serde(default)]
    pub cloud_name: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    #[serde(default = "default_cloudinary_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Upper bound for a single provider call, in seconds
    #[serde(default = "default_dispatch_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_fcm_endpoint() -> String {
    "https://fcm.googleapis.com".to_string()
}

fn default_cloudinary_endpoint() -> String {
    "https://api.cloudinary.com".to_string()
}

fn default_dispatch_timeout() -> u64 {
    10
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", 3000)?
            .set_default("firebase.endpoint", default_fcm_endpoint())?
            .set_default("cloudinary.endpoint", default_cloudinary_endpoint())?
            .set_default("dispatch.timeout_secs", 10)?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // APP__SERVER__PORT, APP__DISPATCH__TIMEOUT_SECS, ...
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(","),
            )
            // Deployment variables win over everything else
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("auth.secret_key", env::var("NOTIFY_SECRET_KEY").ok())?
            .set_override_option(
                "firebase.service_account",
                env::var("FIREBASE_SERVICE_ACCOUNT").ok(),
            )?
            .set_override_option(
                "cloudinary.cloud_name",
                env::var("CLOUDINARY_CLOUD_NAME").ok(),
            )?
            .set_override_option("cloudinary.api_key", env::var("CLOUDINARY_API_KEY").ok())?
            .set_override_option(
                "cloudinary.api_secret",
                env::var("CLOUDINARY_API_SECRET").ok(),
            )?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations the service must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.secret_key.is_empty() {
            return Err(missing("NOTIFY_SECRET_KEY"));
        }
        if self.firebase.service_account.trim().is_empty() {
            return Err(missing("FIREBASE_SERVICE_ACCOUNT"));
        }
        if self.cloudinary.cloud_name.is_empty() {
            return Err(missing("CLOUDINARY_CLOUD_NAME"));
        }
        if self.cloudinary.api_key.is_empty() {
            return Err(missing("CLOUDINARY_API_KEY"));
        }
        if self.cloudinary.api_secret.is_empty() {
            return Err(missing("CLOUDINARY_API_SECRET"));
        }
        if self.dispatch.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "dispatch.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn missing(var: &str) -> ConfigError {
    ConfigError::Message(format!("{} is not set", var))
}

impl DispatchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_dispatch_timeout(),
        }
    }
}
