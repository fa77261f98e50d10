pub mod error;
pub mod ports;
pub mod repos;
pub mod service;
pub mod validation;
