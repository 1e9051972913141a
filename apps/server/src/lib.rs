//! Meridian FHIR server
//!
//! Exposes the schemas of `meridian-models` over the FHIR REST interactions:
//! - Versioned namespaces under `/{base_version}` (`1_0_2`, `3_0_1`, `4_0_0`, `uscore`)
//! - CRUD with versioning, vread and history
//! - Simple equality search
//! - Per-namespace capability statements
//!
//! Storage and search are delegated to a [`service::ResourceService`].

pub mod api;
pub mod config;
pub mod conformance;
pub mod error;
pub mod logging;
pub mod service;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
