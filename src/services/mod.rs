// src/services/mod.rs

mod assembly_service;

pub use assembly_service::AssemblyService;
