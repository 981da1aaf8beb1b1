//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la configuración
//! de la simulación (semilla, política de búsqueda, snapshot, latencias).

pub mod environment;

pub use environment::*;
