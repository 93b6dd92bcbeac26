use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::forwarder::FormForwarder;

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> String {
        match self {
            Environment::Local => String::from("local"),
            Environment::Production => String::from("production"),
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
                r#"{} is not a supported environment.
            Use either 'local or 'production'."#,
                other
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub form_backend: FormBackendSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Where contact submissions are forwarded. The form identifier addresses a
/// fixed, pre-provisioned form on the hosted service.
#[derive(Debug, Deserialize)]
pub struct FormBackendSettings {
    pub base_url: String,
    pub form_id: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl FormBackendSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn forwarder(&self) -> FormForwarder {
        FormForwarder::new(self.base_url.clone(), self.form_id.clone(), self.timeout())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine current directory");
    let config_dir = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        // try to convert the "local" String into an Environment::Local enum
        .try_into()
        .expect("Failed to parse APP_ENV");

    let environment_file = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(config_dir.join(environment_file)))
        .build()?;

    settings.try_deserialize::<Settings>()
}
