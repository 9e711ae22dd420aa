use config::{Config, ConfigError, File};
use postgres::PsqlSettings;
use serde::Deserialize;
use strum::{AsRefStr, EnumString};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub postgres: PsqlSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub ip: String,
    pub port: u16,
    pub num_workers: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    Test,
    Local,
    Development,
    Production,
}

impl Settings {
    pub fn new() -> Result<Settings, ConfigError> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "Local".into())
            .parse()
            .map_err(|e: strum::ParseError| ConfigError::Message(e.to_string()))?;

        let file = environment.as_ref().to_lowercase();

        Config::builder()
            .add_source(File::with_name(&format!("config/{file}")).required(true))
            .add_source(config::Environment::with_prefix("SHIPMENT_API").separator("__"))
            .set_override("environment", environment.as_ref())?
            .build()?
            .try_deserialize()
    }
}

impl ApiSettings {
    pub fn listener_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
