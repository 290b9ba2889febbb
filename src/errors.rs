use crate::models::VehicleFamily;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorksError {
    #[error("Unknown vehicle family `{name}`. Known families: {known}")]
    UnknownFamily { name: String, known: String },

    #[error("Vehicle failed pre-build inspection: {0}")]
    FailedInspection(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl WorksError {
    pub fn unknown_family<S: Into<String>>(name: S) -> Self {
        Self::UnknownFamily {
            name: name.into(),
            known: VehicleFamily::known_names(),
        }
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn inspection<S: Into<String>>(msg: S) -> Self {
        Self::FailedInspection(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}
