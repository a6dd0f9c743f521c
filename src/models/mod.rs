// Module exports for models

pub mod date;
pub mod error;
pub mod grid;
pub mod settings;
