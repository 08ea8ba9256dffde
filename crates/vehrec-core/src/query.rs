//! Vehicle query as entered, and the numeric payload sent upstream

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Raw form record; every value is kept as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleQuery {
    /// Vehicle make
    pub company: String,
    /// Fuel type
    pub fuel: String,
    /// Transmission type
    pub transmission: String,
    /// Price as digits
    pub price: String,
    /// Model year as digits
    pub year: String,
}

impl VehicleQuery {
    /// Create query from its five values
    #[must_use]
    pub fn new(
        company: impl Into<String>,
        fuel: impl Into<String>,
        transmission: impl Into<String>,
        price: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            fuel: fuel.into(),
            transmission: transmission.into(),
            price: price.into(),
            year: year.into(),
        }
    }

    /// Value held for `field`
    #[inline]
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Company => &self.company,
            Field::Fuel => &self.fuel,
            Field::Transmission => &self.transmission,
            Field::Price => &self.price,
            Field::Year => &self.year,
        }
    }

    /// Replace the value held for `field`
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Company => &mut self.company,
            Field::Fuel => &mut self.fuel,
            Field::Transmission => &mut self.transmission,
            Field::Price => &mut self.price,
            Field::Year => &mut self.year,
        };
        *slot = value.into();
    }
}

/// Request body for the prediction endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleQueryPayload {
    /// Vehicle make
    pub company: String,
    /// Fuel type
    pub fuel: String,
    /// Transmission type
    pub transmission: String,
    /// Price (at most 8 digits)
    pub price: u32,
    /// Model year
    pub year: u16,
}

impl VehicleQueryPayload {
    /// Convert a validated query, parsing price and year
    ///
    /// # Errors
    /// `PayloadError::NotANumber` if either numeric field does not parse.
    /// Cannot happen for a query accepted by the vehicle schema.
    pub fn from_query(query: &VehicleQuery) -> Result<Self, PayloadError> {
        Ok(Self {
            company: query.company.clone(),
            fuel: query.fuel.clone(),
            transmission: query.transmission.clone(),
            price: parse_number(Field::Price, &query.price)?,
            year: parse_number(Field::Year, &query.year)?,
        })
    }
}

impl TryFrom<&VehicleQuery> for VehicleQueryPayload {
    type Error = PayloadError;

    fn try_from(query: &VehicleQuery) -> Result<Self, Self::Error> {
        Self::from_query(query)
    }
}

fn parse_number<N: std::str::FromStr>(field: Field, value: &str) -> Result<N, PayloadError> {
    value.parse().map_err(|_| PayloadError::NotANumber {
        field,
        value: value.to_string(),
    })
}

/// Payload construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// Numeric field did not parse
    #[error("{field} is not a number: '{value}'")]
    NotANumber {
        /// Offending field
        field: Field,
        /// Raw value
        value: String,
    },
}
