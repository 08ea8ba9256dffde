//! Presentation model for the recommendations section

use crate::format::format_price;
use serde::Serialize;
use std::fmt;
use vehrec_core::PredictionResult;

/// Section heading above the card grid
pub const HEADING: &str = "Recommended Vehicles";

/// Shown instead of the grid when there is nothing to list
pub const NO_DATA: &str = "No data found";

/// Labeled value on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Badge label
    pub label: &'static str,
    /// Display value
    pub value: String,
}

impl Badge {
    /// Create badge
    #[inline]
    #[must_use]
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// One recommended vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// "Make Model"
    pub title: String,
    /// Color, year and price, in that order
    pub badges: Vec<Badge>,
}

impl Card {
    /// Build card for a prediction
    #[must_use]
    pub fn from_prediction(prediction: &PredictionResult) -> Self {
        Self {
            title: format!("{} {}", prediction.make, prediction.model),
            badges: vec![
                Badge::new("Color", prediction.color.clone()),
                Badge::new("Year", prediction.year.to_string()),
                Badge::new("Price", format_price(prediction.price)),
            ],
        }
    }
}

/// What the recommendations section shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationView {
    /// Nothing to list
    Placeholder {
        /// Fixed message
        message: &'static str,
    },
    /// Heading and one card per prediction, in response order
    Grid {
        /// Section heading
        heading: &'static str,
        /// Cards
        cards: Vec<Card>,
    },
}

impl RecommendationView {
    /// Build the view for the latest predictions
    ///
    /// Absent and empty lists both give the placeholder.
    #[must_use]
    pub fn from_predictions(predictions: Option<&[PredictionResult]>) -> Self {
        match predictions {
            Some(list) if !list.is_empty() => Self::Grid {
                heading: HEADING,
                cards: list.iter().map(Card::from_prediction).collect(),
            },
            _ => Self::Placeholder { message: NO_DATA },
        }
    }

    /// Cards shown; empty for the placeholder
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Placeholder { .. } => &[],
            Self::Grid { cards, .. } => cards,
        }
    }

    /// Whether this is the "No data found" placeholder
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}
