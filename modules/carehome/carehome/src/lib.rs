//! Care-facility administration module.
//!
//! Record keeping for residents, staff, attendance, contracts, consultations
//! and care assessments over the facility database, plus cookie login and
//! the forgot-password code flow. Public models live in `carehome-sdk` and
//! are re-exported here.

pub use carehome_sdk::*;

pub mod config;
pub mod module;
pub use module::CarehomeModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
