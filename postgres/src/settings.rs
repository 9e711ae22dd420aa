use std::path::PathBuf;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct PsqlSettings {
    pub ip: String,
    pub port: u16,
    pub db_name: Option<String>,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub root_cert: Option<PathBuf>,
    #[serde(default)]
    pub log_statements: PsqlLogStatements,
}

#[derive(Default, Clone, Copy, Debug, Deserialize)]
pub enum PsqlLogStatements {
    Enable,
    #[default]
    Disable,
}
