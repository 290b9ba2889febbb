use crate::Bike;

/// Showroom bike of the modern family.
#[derive(Debug, Clone)]
pub struct Bmx;

impl Bike for Bmx {
    fn assemble(&self) -> String {
        "Assembled a bike called bmx".to_string()
    }
}

/// Showroom bike of the offroad family.
#[derive(Debug, Clone)]
pub struct MountainBike;

impl Bike for MountainBike {
    fn assemble(&self) -> String {
        "Assembled a bike called mountain bike".to_string()
    }
}
