mod bike;
mod car;
mod owner;
mod receipt;
mod vehicle;

pub use bike::*;
pub use car::*;
pub use owner::*;
pub use receipt::*;
pub use vehicle::*;
