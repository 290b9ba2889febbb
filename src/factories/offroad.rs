// src/factories/offroad.rs

use crate::{Bike, Car, MountainBike, Onissan, VehicleFactory};

/// Factory for the offroad product family.
///
/// Both creation operations are pure constructors: no parameters, no
/// failure modes, always the offroad pair (`Onissan` + `MountainBike`).
#[derive(Debug, Clone)]
pub struct OffroadVehicleFactory;

impl VehicleFactory for OffroadVehicleFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Onissan)
    }

    fn create_bike(&self) -> Box<dyn Bike> {
        Box::new(MountainBike)
    }
}
