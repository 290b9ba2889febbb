// src/factories/commissioning.rs

use crate::registry::WorksRegistry;
use crate::{AssemblyStation, Commissioned, Motorcycle, Sedan, Vehicle, WorksError};
use tracing::debug;

/// Station that fabricates sedans for the line.
#[derive(Debug, Clone)]
pub struct SedanStation;

impl AssemblyStation for SedanStation {
    type Vehicle = Sedan;

    fn fabricate(&self) -> Sedan {
        Sedan
    }
}

/// Station that fabricates motorcycles for the line.
#[derive(Debug, Clone)]
pub struct MotorcycleStation;

impl AssemblyStation for MotorcycleStation {
    type Vehicle = Motorcycle;

    fn fabricate(&self) -> Motorcycle {
        Motorcycle
    }
}

/// Runs a station through the fixed commissioning sequence.
///
/// The step order is owned here, not by the station: fabricate (the hook),
/// inspect, build, stamp. A fabricated vehicle with a blank model
/// designation fails inspection before any finishing work runs.
///
/// # Arguments
/// * `station` - Station supplying the raw vehicle
///
/// # Returns
/// * `Ok(Commissioned)` - Finished vehicle, its build line, and its serial
/// * `Err(WorksError)` - The fabricated vehicle failed inspection
pub fn commission<S: AssemblyStation>(
    station: &S,
) -> Result<Commissioned<S::Vehicle>, WorksError> {
    let vehicle = station.fabricate();

    if vehicle.model().trim().is_empty() {
        return Err(WorksError::inspection(
            "fabricated vehicle has no model designation",
        ));
    }

    let build_line = vehicle.build();
    let serial = WorksRegistry::instance().issue_serial();
    debug!(model = vehicle.model(), serial = %serial, "vehicle commissioned");

    Ok(Commissioned {
        vehicle,
        build_line,
        serial,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_sedan() {
        let commissioned = commission(&SedanStation).unwrap();

        assert_eq!(commissioned.vehicle.model(), "sedan");
        assert_eq!(commissioned.build_line, "Building sedan");
        assert!(commissioned.serial.value() >= 1);
    }

    #[test]
    fn test_commission_motorcycle() {
        let commissioned = commission(&MotorcycleStation).unwrap();

        assert_eq!(commissioned.vehicle.model(), "motorcycle");
        assert_eq!(commissioned.build_line, "Building motorcycle");
    }

    #[test]
    fn test_each_run_gets_its_own_serial() {
        let first = commission(&SedanStation).unwrap();
        let second = commission(&SedanStation).unwrap();

        assert_ne!(first.serial, second.serial);
    }

    struct BlankFrame;

    impl Vehicle for BlankFrame {
        fn model(&self) -> &str {
            "  "
        }

        fn build(&self) -> String {
            unreachable!("inspection must reject a blank model before the build step")
        }
    }

    struct BlankStation;

    impl AssemblyStation for BlankStation {
        type Vehicle = BlankFrame;

        fn fabricate(&self) -> BlankFrame {
            BlankFrame
        }
    }

    #[test]
    fn test_blank_model_fails_inspection_before_build() {
        let result = commission(&BlankStation);

        assert!(matches!(result, Err(WorksError::FailedInspection(_))));
    }
}
