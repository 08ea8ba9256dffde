//! Testing utilities for the vehrec workspace
//!
//! Shared fixtures and a scripted recommendation client.

#![allow(missing_docs)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use vehrec_client::{RecommendationClient, RequestError};
use vehrec_core::{Field, PredictionResult, VehicleQuery, VehicleQueryPayload};

pub type Outcome = Result<Option<Vec<PredictionResult>>, RequestError>;

pub fn valid_query() -> VehicleQuery {
    VehicleQuery::new("Toyota", "Hybrid", "Automatic", "140000", "2014")
}

pub fn valid_edits() -> Vec<(Field, &'static str)> {
    vec![
        (Field::Company, "Toyota"),
        (Field::Fuel, "Hybrid"),
        (Field::Transmission, "Automatic"),
        (Field::Price, "140000"),
        (Field::Year, "2014"),
    ]
}

pub fn toyota_corolla() -> PredictionResult {
    PredictionResult::new("Toyota", "Corolla", "Red", 20_000.0, 2020)
}

pub fn honda_civic() -> PredictionResult {
    PredictionResult::new("Honda", "Civic", "Blue", 18_500.0, 2019)
}

pub fn status_error(status: u16) -> RequestError {
    RequestError::Status {
        status,
        body: String::new(),
    }
}

/// Answers each call with the next queued outcome and records the payload.
///
/// Panics when called with nothing queued.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    outcomes: Mutex<VecDeque<Outcome>>,
    received: Mutex<Vec<VehicleQueryPayload>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, outcome: Outcome) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn returning(predictions: Vec<PredictionResult>) -> Self {
        Self::new().with_outcome(Ok(Some(predictions)))
    }

    pub fn failing(error: RequestError) -> Self {
        Self::new().with_outcome(Err(error))
    }

    pub fn received(&self) -> Vec<VehicleQueryPayload> {
        self.received.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl RecommendationClient for ScriptedClient {
    async fn recommend(&self, payload: &VehicleQueryPayload) -> Outcome {
        self.received.lock().unwrap().push(payload.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedClient called with no outcome queued")
    }
}
