// src/factories/mod.rs

mod commissioning;
mod modern;
mod offroad;

pub use commissioning::{MotorcycleStation, SedanStation, commission};
pub use modern::ModernVehicleFactory;
pub use offroad::OffroadVehicleFactory;

use tracing::debug;

use crate::models::VehicleFamily;
use crate::ports::VehicleFactory;

/// Collection of vehicle factories, one per family.
///
/// Factories encapsulate concrete product selection and ensure
/// every vehicle leaving the floor matches its family.
pub struct FactoryFloor {
    modern: ModernVehicleFactory,
    offroad: OffroadVehicleFactory,
}

impl FactoryFloor {
    /// Creates a new factory floor with every family staffed.
    pub fn new() -> Self {
        Self {
            modern: ModernVehicleFactory,
            offroad: OffroadVehicleFactory,
        }
    }

    /// Returns the factory for the given family.
    ///
    /// Every family has a factory, so this lookup cannot miss.
    pub fn for_family(&self, family: VehicleFamily) -> &dyn VehicleFactory {
        match family {
            VehicleFamily::Modern => &self.modern,
            VehicleFamily::Offroad => &self.offroad,
        }
    }

    /// Looks up a factory by family name.
    ///
    /// Names are matched case-insensitively and with surrounding
    /// whitespace ignored. Returns `None` when no family carries
    /// the given name.
    pub fn select(&self, name: &str) -> Option<&dyn VehicleFactory> {
        let family = VehicleFamily::from_name(name);
        debug!(name, resolved = family.is_some(), "factory lookup");
        family.map(|family| self.for_family(family))
    }
}

impl Default for FactoryFloor {
    fn default() -> Self {
        Self::new()
    }
}
