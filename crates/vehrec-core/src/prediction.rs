//! Recommended vehicles as returned by the prediction endpoint
//!
//! Wire shape:
//!
//! ```json
//! { "Success": { "prediction": [
//!     { "Car Make": "Toyota", "Car Model": "Corolla", "Color": "Red",
//!       "Price": 20000, "Year": 2020 }
//! ] } }
//! ```

use serde::{Deserialize, Serialize};

/// One recommended vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Vehicle make
    #[serde(rename = "Car Make")]
    pub make: String,
    /// Vehicle model
    #[serde(rename = "Car Model")]
    pub model: String,
    /// Exterior color
    #[serde(rename = "Color")]
    pub color: String,
    /// Price; models may return fractional values
    #[serde(rename = "Price")]
    pub price: f64,
    /// Model year
    #[serde(rename = "Year")]
    pub year: i32,
}

impl PredictionResult {
    /// Create prediction
    #[must_use]
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        price: f64,
        year: i32,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            color: color.into(),
            price,
            year,
        }
    }
}

/// Response envelope: `{ "Success": { "prediction": [...] } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    /// Success body
    #[serde(rename = "Success")]
    pub success: PredictionBody,
}

/// Body of a successful response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionBody {
    /// Recommendations; absent or `null` means no data
    #[serde(default)]
    pub prediction: Option<Vec<PredictionResult>>,
}

impl PredictionEnvelope {
    /// Wrap predictions the way the endpoint does
    #[must_use]
    pub fn new(prediction: Option<Vec<PredictionResult>>) -> Self {
        Self {
            success: PredictionBody { prediction },
        }
    }

    /// Take the prediction list
    #[inline]
    #[must_use]
    pub fn into_predictions(self) -> Option<Vec<PredictionResult>> {
        self.success.prediction
    }
}
