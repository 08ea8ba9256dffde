//! Form fields and the fixed option catalogs
//!
//! The three dropdown fields only ever offer values from these catalogs;
//! the validator itself checks nothing beyond length.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle makes offered by the company dropdown
pub const COMPANIES: &[&str] = &[
    "Aston Martin",
    "Audi",
    "BMW",
    "Bentley",
    "Bugatti",
    "Chevrolet",
    "Chevy",
    "Chrysler",
    "Ferrari",
    "Fiat",
    "Ford",
    "Honda",
    "Hyundai",
    "Jaguar",
    "Kia",
    "Lamborghini",
    "Land Rover",
    "Maserati",
    "Mazda",
    "McLaren",
    "Mercedes",
    "Mercedes-Benz",
    "Nissan",
    "Porsche",
    "Rolls-Royce",
    "Subaru",
    "Tesla",
    "Toyota",
    "Volkswagen",
];

/// Fuel types offered by the fuel dropdown
pub const FUEL_TYPES: &[&str] = &["Hybrid", "Electric", "Gasoline", "Diesel"];

/// Transmissions offered by the transmission dropdown
pub const TRANSMISSIONS: &[&str] = &["Automatic", "Manual"];

/// One of the five query fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Vehicle make
    Company,
    /// Fuel type
    Fuel,
    /// Transmission type
    Transmission,
    /// Target price, digits only
    Price,
    /// Model year, four digits
    Year,
}

impl Field {
    /// All fields in declaration order
    pub const ALL: [Field; 5] = [
        Field::Company,
        Field::Fuel,
        Field::Transmission,
        Field::Price,
        Field::Year,
    ];

    /// Key used in payloads and on the command line
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Company => "company",
            Field::Fuel => "fuel",
            Field::Transmission => "transmission",
            Field::Price => "price",
            Field::Year => "year",
        }
    }

    /// Label shown next to the input
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Company => "Company Name",
            Field::Fuel => "Fuel Type",
            Field::Transmission => "Transmission",
            Field::Price => "Price",
            Field::Year => "Year",
        }
    }

    /// Input kind: dropdowns carry their catalog
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Field::Company => FieldKind::Select(COMPANIES),
            Field::Fuel => FieldKind::Select(FUEL_TYPES),
            Field::Transmission => FieldKind::Select(TRANSMISSIONS),
            Field::Price => FieldKind::Text,
            Field::Year => FieldKind::Text,
        }
    }

    /// Placeholder shown while the input is empty
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Company => "Select company name",
            Field::Fuel => "Select fuel type",
            Field::Transmission => "Select transmission type",
            Field::Price => "e.g. $ 140000",
            Field::Year => "e.g. 2010, 2014",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Returned when a string names no field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Dropdown restricted to a fixed catalog
    Select(&'static [&'static str]),
    /// Free text, judged by the validator
    Text,
}

impl FieldKind {
    /// Whether `value` may be entered into a field of this kind
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            FieldKind::Select(options) => options.contains(&value),
            FieldKind::Text => true,
        }
    }
}
