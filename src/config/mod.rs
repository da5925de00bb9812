//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos, variables de entorno
//! y ajustes del trigger HTTP.

pub mod database;
pub mod environment;

pub use environment::*;
