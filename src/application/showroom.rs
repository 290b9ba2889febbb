use crate::{
    AssemblyReceipt, OwnerProfile, VehicleFamily, WorksConfig, WorksError,
    factories::{MotorcycleStation, SedanStation, commission},
    services::AssemblyService,
};

/// Main application service that orchestrates showroom operations.
///
/// This is the primary entry point for the demo command path. It resolves
/// family names asked for by visitors, drives the assembly service, and
/// commissions single vehicles straight off their stations.
pub struct Showroom {
    config: WorksConfig,
    service: AssemblyService,
}

impl Showroom {
    pub fn new(config: WorksConfig) -> Self {
        Self {
            config,
            service: AssemblyService::default(),
        }
    }

    /// Returns the plant name printed on the showroom banner.
    pub fn plant_name(&self) -> &str {
        &self.config.plant_name
    }

    /// Assembles the family a visitor asked for by name.
    ///
    /// # Arguments
    /// * `name` - Family name, matched case-insensitively
    ///
    /// # Returns
    /// * `Ok(AssemblyReceipt)` - Receipt for the assembled family
    /// * `Err(WorksError::UnknownFamily)` - No family carries that name
    pub fn tour_family(&self, name: &str) -> Result<AssemblyReceipt, WorksError> {
        let family = self.resolve(name)?;
        Ok(self.service.assemble(family))
    }

    /// Assembles the named family and registers the vehicles to an owner.
    pub fn tour_family_for(
        &self,
        name: &str,
        owner: OwnerProfile,
    ) -> Result<AssemblyReceipt, WorksError> {
        let family = self.resolve(name)?;
        Ok(self.service.assemble_for(family, owner))
    }

    /// Assembles every family on the configured tour, in order.
    pub fn tour_configured(&self) -> Vec<AssemblyReceipt> {
        self.config
            .families
            .iter()
            .map(|family| self.service.assemble(*family))
            .collect()
    }

    /// Commissions one vehicle from each assembly station.
    ///
    /// Each line carries the serial issued by the works registry, so two
    /// runs never report the same stock.
    pub fn commission_stock(&self) -> Result<Vec<String>, WorksError> {
        let sedan = commission(&SedanStation)?;
        let motorcycle = commission(&MotorcycleStation)?;

        Ok(vec![
            format!("{} (serial {})", sedan.build_line, sedan.serial),
            format!("{} (serial {})", motorcycle.build_line, motorcycle.serial),
        ])
    }

    fn resolve(&self, name: &str) -> Result<VehicleFamily, WorksError> {
        VehicleFamily::from_name(name).ok_or_else(|| WorksError::unknown_family(name.trim()))
    }
}

impl Default for Showroom {
    fn default() -> Self {
        Self::new(WorksConfig::default())
    }
}
