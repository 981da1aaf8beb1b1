//! Controladores
//!
//! Este módulo contiene la capa asíncrona entre las rutas HTTP y los
//! sintetizadores de datos.

pub mod fleet_controller;

pub use fleet_controller::{FleetAnalytics, FleetController};
