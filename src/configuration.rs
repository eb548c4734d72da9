use std::path::PathBuf;
use std::time::Duration;

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub storage: StorageSettings,
    pub submission: SubmissionSettings,
    pub notification: NotificationSettings,
    pub messages: MessageSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct StorageSettings {
    pub directory: PathBuf,
    pub key: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SubmissionSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub delay_ms: u64,
}

impl SubmissionSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct NotificationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub display_ms: u64,
}

impl NotificationSettings {
    pub fn display_for(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }
}

/// User-facing copy of the signup form.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageSettings {
    pub success: String,
    pub invalid_email: String,
    pub failure: String,
    pub button_label: String,
    pub busy_label: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            success: "Thanks! You'll be notified when we launch.".into(),
            invalid_email: "Please enter a valid email address.".into(),
            failure: "Something went wrong. Please try again.".into(),
            button_label: "Get Notified".into(),
            busy_label: "Submitting...".into(),
        }
    }
}

#[derive(Debug)]
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

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base")).required(true))
        .add_source(config::File::from(conf_dir.join(env.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
