// SecureGen services
// Services provide the core functionality: character pools, generation, scoring, remote access, settings.

pub mod charset;
pub mod generation_service;
pub mod generator;
pub mod remote_generator;
pub mod settings_engine;
pub mod strength_scorer;
