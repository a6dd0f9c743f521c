// Service module exports

pub mod grid;
pub mod settings;
