//! Car Subscription API
//!
//! Catálogo de marcas y vehículos en suscripción, importación del catálogo
//! al almacén de documentos, API HTTP y validación de campos de perfil.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
