//! Calorimeter detector front-end.
//!
//! Ties the address resolution of [`scint_geom`] to the hit aggregation
//! of [`scint_hits`] behind a single per-step entry point. The
//! [`Calorimeter`] is configured once from a [`CalorimeterConfig`],
//! builds its volume tables against the host geometry, and then consumes
//! one [`scint_core::Step`] at a time for the lifetime of the run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod detector;

pub use config::{CalorimeterConfig, ConfigError};
pub use detector::Calorimeter;
