use crate::{Bike, Car};

pub trait VehicleFactory: Send + Sync {
    fn create_car(&self) -> Box<dyn Car>;

    fn create_bike(&self) -> Box<dyn Bike>;
}
