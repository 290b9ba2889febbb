// src/ports/mod.rs

pub use assembly::AssemblyStation;
pub use bike::Bike;
pub use car::Car;
pub use vehicle::Vehicle;
pub use vehicle_factory::VehicleFactory;

pub mod assembly;
pub mod bike;
pub mod car;
pub mod vehicle;
pub mod vehicle_factory;
