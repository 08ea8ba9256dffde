//! Vehrec Core
//!
//! Data model and validation for the vehicle recommendation form.
//!
//! # Overview
//!
//! - **VehicleQuery**: the five form values exactly as entered
//! - **Schema**: per-field length and format rules, validated purely
//! - **VehicleQueryPayload**: the numeric request body
//! - **PredictionResult**: one recommended vehicle from the endpoint
//!
//! # Example
//!
//! ```rust
//! use vehrec_core::{validate_query, VehicleQuery, VehicleQueryPayload};
//!
//! let query = VehicleQuery::new("Toyota", "Hybrid", "Automatic", "140000", "2014");
//! let valid = validate_query(&query).unwrap();
//! let payload = VehicleQueryPayload::from_query(&valid).unwrap();
//! assert_eq!(payload.price, 140_000);
//! ```

#![warn(missing_docs)]

pub mod field;
pub mod prediction;
pub mod query;
pub mod validation;

// Re-exports
pub use field::{Field, FieldKind, UnknownField, COMPANIES, FUEL_TYPES, TRANSMISSIONS};
pub use prediction::{PredictionBody, PredictionEnvelope, PredictionResult};
pub use query::{PayloadError, VehicleQuery, VehicleQueryPayload};
pub use validation::{validate_query, Constraint, FieldError, FieldRule, Schema, ValidationErrors};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and checking queries
    pub use crate::{
        validate_query, Field, PredictionResult, ValidationErrors, VehicleQuery,
        VehicleQueryPayload,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
