//! Knit Pattern Studio Core Data Structures
//!
//! This crate contains the domain model for the pattern admin tool:
//! - Category: static garment taxonomy
//! - MeasurementItem: the catalog of named body measurements
//! - SizeRange: canonical size bins
//! - MeasurementRule: required measurement sets per (category, sleeve type)
//! - Template: reusable pattern definitions with per-size measurement tables
//! - Stores: in-memory CRUD layer with referential-integrity checks

pub mod category;
pub mod measurement;
pub mod rule;
pub mod samples;
pub mod size;
pub mod store;
pub mod template;
pub mod user;

pub use category::*;
pub use measurement::*;
pub use rule::*;
pub use size::*;
pub use store::*;
pub use template::*;
pub use user::*;
