pub mod config;
pub mod family;
pub mod operations;

pub use config::*;
pub use family::*;
pub use operations::*;
