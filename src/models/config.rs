use crate::{VehicleFamily, WorksError};
use serde::{Deserialize, Serialize};

/// Works-level configuration for the showroom command path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorksConfig {
    /// Name printed on the showroom banner.
    #[serde(default = "default_plant_name")]
    pub plant_name: String,

    /// Families toured, in order, when no family is asked for explicitly.
    #[serde(default = "default_families")]
    pub families: Vec<VehicleFamily>,
}

impl WorksConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Arguments
    /// * `text` - TOML document; missing keys fall back to defaults
    ///
    /// # Returns
    /// * `Ok(WorksConfig)` - Valid configuration
    /// * `Err(WorksError)` - Parse or validation error
    pub fn from_toml_str(text: &str) -> Result<Self, WorksError> {
        let config: WorksConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_plant_name<S: Into<String>>(mut self, plant_name: S) -> Self {
        self.plant_name = plant_name.into();
        self
    }

    pub fn with_families(mut self, families: Vec<VehicleFamily>) -> Self {
        self.families = families;
        self
    }

    /// Checks the configuration invariants.
    pub fn validate(&self) -> Result<(), WorksError> {
        if self.plant_name.trim().is_empty() {
            return Err(WorksError::InvalidConfig(
                "Plant name cannot be blank".to_string(),
            ));
        }

        if self.families.is_empty() {
            return Err(WorksError::InvalidConfig(
                "At least one family must be on the tour".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for WorksConfig {
    fn default() -> Self {
        Self {
            plant_name: default_plant_name(),
            families: default_families(),
        }
    }
}

fn default_plant_name() -> String {
    "Motorworks".to_string()
}

fn default_families() -> Vec<VehicleFamily> {
    VehicleFamily::ALL.to_vec()
}
