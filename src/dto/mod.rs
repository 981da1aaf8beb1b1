//! DTOs de la API HTTP
//!
//! Parámetros de consulta y respuestas auxiliares que no forman parte
//! del modelo de datos de la flota.

pub mod fleet_dto;

pub use fleet_dto::*;
