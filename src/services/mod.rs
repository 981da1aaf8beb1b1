//! Services module
//!
//! Este módulo contiene la lógica de simulación de la aplicación:
//! la fuente aleatoria, los sintetizadores de datos de flota y el
//! asistente conversacional. Todas las funciones son síncronas y puras
//! respecto a la fuente aleatoria que reciben.

pub mod chat_responder;
pub mod model_performance_service;
pub mod overview_service;
pub mod random_source;
pub mod service_center_service;
pub mod snapshot_service;

pub use random_source::{FixtureRng, RandomSource};
