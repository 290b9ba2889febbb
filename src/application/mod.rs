// src/application/mod.rs

mod showroom;

pub use showroom::Showroom;
