//! Vehrec Form
//!
//! Explicit view state for the vehicle recommendation page:
//! - **FormState**: values edited by discrete events, validity derived on change
//! - **Phase**: `Idle`, `Pending`, `Ready` and `Failed`, with a transition table
//! - **FormController**: submission, pending lock and stale-response guard
//!
//! # Example
//!
//! ```rust,ignore
//! use vehrec_core::Field;
//! use vehrec_form::FormController;
//!
//! # async fn example(client: &dyn vehrec_client::RecommendationClient) -> Result<(), Box<dyn std::error::Error>> {
//! let mut page = FormController::new();
//! page.edit(Field::Company, "Toyota")?;
//! page.edit(Field::Fuel, "Hybrid")?;
//! page.edit(Field::Transmission, "Automatic")?;
//! page.edit(Field::Price, "140000")?;
//! page.edit(Field::Year, "2014")?;
//!
//! let view = page.submit_with(client).await?;
//! println!("{} cards", view.cards().len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod controller;
pub mod form;
pub mod state;

pub use controller::{
    Completion, Focus, FormController, RequestToken, SubmitError, Submission, PENDING_LABEL,
    SUBMIT_LABEL,
};
pub use form::{FormError, FormEvent, FormState};
pub use state::{allowed_transitions, validate_transition, Phase, StateError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the form
    pub use crate::{FormController, FormEvent, Phase, SubmitError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
