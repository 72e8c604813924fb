// Quantum Browser services
// Stateless or file-backed helpers: address interpretation and settings.

pub mod address_interpreter;
pub mod settings_engine;
