//! Recommendation request pipeline
//!
//! One POST per call, JSON in and JSON out, no retry.

use crate::config::ClientConfig;
use crate::error::RequestError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use vehrec_core::{PredictionEnvelope, PredictionResult, VehicleQueryPayload};

/// Source of vehicle recommendations
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    /// Request recommendations for `payload`
    ///
    /// `Ok(None)` means the endpoint answered without a prediction list.
    ///
    /// # Errors
    /// Any [`RequestError`]; the call is never retried.
    async fn recommend(
        &self,
        payload: &VehicleQueryPayload,
    ) -> Result<Option<Vec<PredictionResult>>, RequestError>;
}

/// `reqwest`-backed client for the ML prediction endpoint
#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpRecommendationClient {
    /// Build client; the connection pool is reused across calls
    ///
    /// # Errors
    /// `RequestError::Transport` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, RequestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl RecommendationClient for HttpRecommendationClient {
    async fn recommend(
        &self,
        payload: &VehicleQueryPayload,
    ) -> Result<Option<Vec<PredictionResult>>, RequestError> {
        tracing::debug!("POST {} with {:?}", self.config.endpoint, payload);

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Prediction request failed: {}", e);
                RequestError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Prediction endpoint answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            tracing::error!("Prediction endpoint returned {}", status);
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: PredictionEnvelope = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Unexpected prediction response shape: {}", e);
            RequestError::MalformedResponse(e)
        })?;

        let predictions = envelope.into_predictions();
        tracing::info!(
            "Received {} recommendations",
            predictions.as_ref().map_or(0, Vec::len)
        );
        Ok(predictions)
    }
}
