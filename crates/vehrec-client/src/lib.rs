//! Vehrec Client
//!
//! Sends a validated vehicle query to the external ML prediction endpoint
//! and decodes the recommended vehicles.
//!
//! # Example
//!
//! ```rust,ignore
//! use vehrec_client::{ClientConfig, HttpRecommendationClient, RecommendationClient};
//!
//! # async fn example(payload: vehrec_core::VehicleQueryPayload) -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpRecommendationClient::new(ClientConfig::from_env()?)?;
//! let predictions = client.recommend(&payload).await?;
//! println!("{} vehicles", predictions.map_or(0, |p| p.len()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{HttpRecommendationClient, RecommendationClient};
pub use config::{ClientConfig, ConfigError, ENDPOINT_ENV};
pub use error::RequestError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
