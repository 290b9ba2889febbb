// src/factories/modern.rs

use crate::{Bike, Bmx, Car, Missubibi, VehicleFactory};

/// Factory for the modern product family.
///
/// Both creation operations are pure constructors: no parameters, no
/// failure modes, always the modern pair (`Missubibi` + `Bmx`).
#[derive(Debug, Clone)]
pub struct ModernVehicleFactory;

impl VehicleFactory for ModernVehicleFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Missubibi)
    }

    fn create_bike(&self) -> Box<dyn Bike> {
        Box::new(Bmx)
    }
}
