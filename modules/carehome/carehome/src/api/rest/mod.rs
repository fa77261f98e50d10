//! JSON-over-HTTP surface.
//!
//! Handlers are thin: extract, check presence, call the domain service,
//! wrap the result in the envelope.

pub mod cookies;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use routes::{RouterSettings, router};

#[cfg(test)]
mod dto_test;
