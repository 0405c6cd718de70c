//! src/configuration.rs
use config::{Config, ConfigError, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    /// Largest accepted request body, in bytes.
    pub body_limit: usize,
    pub allowed_origin: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Resend,
    Smtp,
}

#[derive(Deserialize, Clone, Debug)]
pub struct EmailSettings {
    pub provider: ProviderKind,
    pub api_url: String,
    pub smtp_host: String,
    pub timeout_milliseconds: u64,
    /// Where contact notifications are delivered.
    pub owner_email: String,
    /// Signs the acknowledgment and welcome messages.
    pub owner_name: String,
    pub sender_email: String,
    pub contact_sender_name: String,
    #[serde(default)]
    pub credentials: Credentials,
}

impl EmailSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Provider secrets. Read from the process environment, never from the
/// configuration files.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct Credentials {
    pub resend_api_key: Option<Secret<String>>,
    pub email_user: Option<String>,
    pub email_app_password: Option<Secret<String>>,
}

impl Credentials {
    pub fn resend_api_key(&self) -> Option<&Secret<String>> {
        self.resend_api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    pub fn smtp_login(&self) -> Option<(&str, &Secret<String>)> {
        let user = self.email_user.as_deref().filter(|u| !u.trim().is_empty())?;
        let password = self
            .email_app_password
            .as_ref()
            .filter(|p| !p.expose_secret().is_empty())?;
        Some((user, password))
    }
}

#[derive(PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        // E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if environment == Environment::Local {
        // A missing .env is fine, credentials may already be exported.
        if let Err(e) = dotenvy::from_path(base_path.join(".env")) {
            tracing::debug!(error = %e, "No .env file loaded");
        }
    }

    settings.email.credentials = envy::from_env::<Credentials>()
        .map_err(|e| ConfigError::Message(format!("Failed to read email credentials: {}", e)))?;

    Ok(settings)
}
