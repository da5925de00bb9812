pub mod catalog_controller;
pub mod validation_controller;
