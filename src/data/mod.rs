//! Core data models for cropdoc
//!
//! This module contains the data types used throughout the application for
//! representing crops, diseases, treatment options, suppliers, and price
//! quotes.

pub mod catalog;
pub mod geocode;
pub mod prices;
pub mod suppliers;

pub use catalog::{all_diseases, diseases_for_crop, get_disease};
pub use geocode::{Coordinates, GeocodeClient, GeocodeError};
pub use prices::{quotes_for_treatment, summarize, PriceQuote, PriceSummary};
pub use suppliers::{Supplier, SupplierClient, SupplierError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Crops covered by the treatment catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Cashew,
    Cassava,
    Maize,
    Tomato,
}

impl Crop {
    /// Parses a crop name (case-insensitive)
    pub fn parse(s: &str) -> Option<Crop> {
        match s.to_ascii_lowercase().as_str() {
            "cashew" => Some(Crop::Cashew),
            "cassava" => Some(Crop::Cassava),
            "maize" => Some(Crop::Maize),
            "tomato" => Some(Crop::Tomato),
            _ => None,
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Crop::Cashew => "cashew",
            Crop::Cassava => "cassava",
            Crop::Maize => "maize",
            Crop::Tomato => "tomato",
        };
        write!(f, "{}", name)
    }
}

/// Disease severity levels, ordered `Mild < Moderate < Severe`
///
/// The derived `Ord` relies on variant declaration order; the severity
/// range check on treatment options depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Parses a severity name (case-insensitive)
    pub fn parse(s: &str) -> Option<Severity> {
        match s.to_ascii_lowercase().as_str() {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        };
        write!(f, "{}", name)
    }
}

/// Treatment categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentCategory {
    Chemical,
    Organic,
}

impl fmt::Display for TreatmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TreatmentCategory::Chemical => "chemical",
            TreatmentCategory::Organic => "organic",
        };
        write!(f, "{}", name)
    }
}

/// A treatment option belonging to a single catalog disease
///
/// Uses `&'static str` for string fields to allow static initialization of
/// the catalog; the catalog is never mutated at runtime. This struct only
/// implements `Serialize` (not `Deserialize`) because the static string
/// references cannot be safely deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreatmentOption {
    /// Unique identifier within the catalog
    pub id: &'static str,
    /// Product or method name
    pub name: &'static str,
    /// Chemical or organic
    pub category: TreatmentCategory,
    /// Lowest severity at which the treatment is effective
    pub min_severity: Severity,
    /// Highest severity at which the treatment is effective
    pub max_severity: Severity,
    /// Estimated cost in Ghana Cedis
    pub cost_ghs: f64,
    /// Effectiveness rating in the range 0.0-1.0
    pub effectiveness: f64,
    /// How to apply the treatment
    pub instructions: &'static str,
}

impl TreatmentOption {
    /// Returns true if this option is effective at the given severity
    pub fn covers(&self, severity: Severity) -> bool {
        self.min_severity <= severity && severity <= self.max_severity
    }
}

/// A crop disease record from the static catalog
///
/// Only implements `Serialize` for the same reason as [`TreatmentOption`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Disease {
    /// Unique identifier (e.g., "anthracnose")
    pub id: &'static str,
    /// The crop this disease affects
    pub crop: Crop,
    /// Human-readable display name
    pub name: &'static str,
    /// Observable symptoms
    pub symptoms: &'static [&'static str],
    /// Prevention practices
    pub prevention: &'static [&'static str],
    /// Treatment options, in catalog order
    pub treatments: &'static [TreatmentOption],
}
