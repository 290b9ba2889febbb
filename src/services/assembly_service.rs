use tracing::info;

use crate::factories::FactoryFloor;
use crate::registry::WorksRegistry;
use crate::{AssemblyReceipt, OwnerProfile, VehicleFamily};

/// Runs the full assembly line for a vehicle family.
///
/// The service asks the factory floor for the family's factory, assembles
/// one car and one bike from it, and records the run on a receipt stamped
/// with a serial from the works registry.
pub struct AssemblyService {
    floor: FactoryFloor,
}

impl AssemblyService {
    pub fn new(floor: FactoryFloor) -> Self {
        Self { floor }
    }

    /// Assembles one car and one bike of the given family.
    pub fn assemble(&self, family: VehicleFamily) -> AssemblyReceipt {
        self.run(family, None)
    }

    /// Assembles one car and one bike of the given family and registers
    /// them to an owner.
    pub fn assemble_for(&self, family: VehicleFamily, owner: OwnerProfile) -> AssemblyReceipt {
        self.run(family, Some(owner))
    }

    fn run(&self, family: VehicleFamily, owner: Option<OwnerProfile>) -> AssemblyReceipt {
        let factory = self.floor.for_family(family);

        let lines = vec![
            factory.create_car().assemble(),
            factory.create_bike().assemble(),
        ];

        let serial = WorksRegistry::instance().issue_serial();
        info!(family = family.name(), serial = %serial, "assembly run complete");

        AssemblyReceipt::new(family, serial, lines, owner)
    }
}

impl Default for AssemblyService {
    fn default() -> Self {
        Self::new(FactoryFloor::new())
    }
}
