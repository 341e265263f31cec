//! sova-instruments
//!
//! Screening instrument definitions and scoring. Pure data and pure
//! functions, no I/O. Defines the EAT-26 and SCOFF question catalogs,
//! the six-level EAT response scale with its direct/reverse weights,
//! and the threshold-based interpretation of completed screenings.

pub mod catalog;
pub mod error;
pub mod scoring;

pub use catalog::{EatCode, EatQuestion, ScoffQuestion};
pub use scoring::{EatBand, Interpretation, ScoffBand, interpret};
