//! Vehrec Render
//!
//! Pure presentation over the latest predictions: a heading plus one card per
//! vehicle, or a fixed placeholder when there is nothing to show.
//!
//! # Example
//!
//! ```rust
//! use vehrec_core::PredictionResult;
//! use vehrec_render::{Render, RecommendationView, TextRenderer};
//!
//! let predictions = vec![PredictionResult::new("Toyota", "Corolla", "Red", 20000.0, 2020)];
//! let view = RecommendationView::from_predictions(Some(predictions.as_slice()));
//! let text = TextRenderer::new().render(&view);
//! assert!(text.contains("[Price: $20,000]"));
//! ```

#![warn(missing_docs)]

pub mod format;
pub mod render;
pub mod view;

pub use format::{format_price, group_thousands};
pub use render::{escape, HtmlRenderer, Render, TextRenderer, RESULTS_ANCHOR};
pub use view::{Badge, Card, RecommendationView, HEADING, NO_DATA};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
