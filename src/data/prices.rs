//! Mock price quote generator
//!
//! Produces market price estimates for treatment products from a fixed base
//! price table and a list of known Ghanaian agro-suppliers. Real price
//! scraping is out of scope; quotes vary per (product, supplier) pair via a
//! stable hash so repeated queries return identical data.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

/// Base prices in GHS for common active ingredients
const BASE_PRICES: [(&str, f64); 10] = [
    ("mancozeb", 35.0),
    ("copper", 45.0),
    ("imidacloprid", 40.0),
    ("neem", 25.0),
    ("abamectin", 50.0),
    ("chlorantraniliprole", 65.0),
    ("metalaxyl", 60.0),
    ("streptomycin", 55.0),
    ("thiamethoxam", 50.0),
    ("malathion", 35.0),
];

/// Fallback when no base price matches the product name
const DEFAULT_BASE_PRICE: f64 = 40.0;

/// Known agro-input suppliers in Ghana
const SUPPLIERS: [&str; 8] = [
    "Yara Ghana Limited",
    "Chemico Limited",
    "Dizengoff Ghana Limited",
    "Agro-Chemical Association",
    "Local Agricultural Store",
    "Farm Supply Center",
    "Crop Protection Ltd",
    "Ghana Agro Supplies",
];

const LOCATIONS: [&str; 6] = ["Accra", "Kumasi", "Tamale", "Cape Coast", "Tema", "Takoradi"];

const QUANTITIES: [&str; 6] = ["500ml", "1L", "1kg", "5kg", "250ml", "2.5L"];

/// Stock status reported with a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    LimitedStock,
    OutOfStock,
    PreOrder,
}

const AVAILABILITY: [Availability; 4] = [
    Availability::InStock,
    Availability::LimitedStock,
    Availability::OutOfStock,
    Availability::PreOrder,
];

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Availability::InStock => "in stock",
            Availability::LimitedStock => "limited stock",
            Availability::OutOfStock => "out of stock",
            Availability::PreOrder => "pre-order",
        };
        write!(f, "{}", name)
    }
}

/// A single price estimate from a supplier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Product name including the quoted quantity
    pub product_name: String,
    /// Price in Ghana Cedis
    pub price_ghs: f64,
    /// Quantity/unit the price covers
    pub quantity: String,
    /// Supplier name
    pub supplier: String,
    /// Supplier location
    pub location: String,
    /// When the price was last updated
    pub last_updated: DateTime<Utc>,
    /// Stock status
    pub availability: Availability,
}

/// Aggregate statistics over a set of quotes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    /// Mean price across quotes, if any
    pub average_ghs: Option<f64>,
    /// Lowest quoted price
    pub min_ghs: Option<f64>,
    /// Highest quoted price
    pub max_ghs: Option<f64>,
}

/// Generates price quotes for a treatment product
///
/// # Arguments
/// * `treatment_name` - Product to price; matched against the base price
///   table by substring
/// * `location` - When set, all quotes use this location; otherwise each
///   supplier gets a stable location from the known list
/// * `quantity` - When set, all quotes use this quantity
/// * `max_results` - Cap on the number of quotes returned
/// * `now` - Timestamp quotes are aged relative to
pub fn quotes_for_treatment(
    treatment_name: &str,
    location: Option<&str>,
    quantity: Option<&str>,
    max_results: usize,
    now: DateTime<Utc>,
) -> Vec<PriceQuote> {
    let base = base_price(treatment_name);
    let mut quotes = Vec::with_capacity(SUPPLIERS.len().min(max_results));

    for supplier in SUPPLIERS.iter().take(max_results) {
        let seed = stable_hash(treatment_name, supplier);

        // Variation in 0.8-1.3, matching the original estimator's spread
        let variation = 0.8 + (seed % 1000) as f64 / 1000.0 * 0.5;
        let price_ghs = round2(base * variation);

        let quote_location = location
            .map(str::to_string)
            .unwrap_or_else(|| LOCATIONS[(seed / 7 % LOCATIONS.len() as u64) as usize].to_string());
        let quote_quantity = quantity
            .map(str::to_string)
            .unwrap_or_else(|| QUANTITIES[(seed / 11 % QUANTITIES.len() as u64) as usize].to_string());
        let availability = AVAILABILITY[(seed / 13 % AVAILABILITY.len() as u64) as usize];
        let age_days = (seed / 17 % 7) as i64;

        quotes.push(PriceQuote {
            product_name: format!("{} - {}", title_case(treatment_name), quote_quantity),
            price_ghs,
            quantity: quote_quantity,
            supplier: supplier.to_string(),
            location: quote_location,
            last_updated: now - Duration::days(age_days),
            availability,
        });
    }

    quotes
}

/// Computes average, min, and max over a set of quotes
pub fn summarize(quotes: &[PriceQuote]) -> PriceSummary {
    let prices: Vec<f64> = quotes
        .iter()
        .map(|q| q.price_ghs)
        .filter(|p| *p > 0.0)
        .collect();

    if prices.is_empty() {
        return PriceSummary {
            average_ghs: None,
            min_ghs: None,
            max_ghs: None,
        };
    }

    let sum: f64 = prices.iter().sum();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    PriceSummary {
        average_ghs: Some(round2(sum / prices.len() as f64)),
        min_ghs: Some(min),
        max_ghs: Some(max),
    }
}

/// Looks up the base price by substring match on the product name
fn base_price(treatment_name: &str) -> f64 {
    let needle = treatment_name.to_lowercase();
    BASE_PRICES
        .iter()
        .find(|(ingredient, _)| needle.contains(ingredient))
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_BASE_PRICE)
}

/// FNV-1a hash over the (product, supplier) pair
fn stable_hash(treatment_name: &str, supplier: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in treatment_name
        .to_lowercase()
        .bytes()
        .chain([b'|'])
        .chain(supplier.bytes())
    {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Capitalizes the first letter of each whitespace-separated word
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_are_deterministic() {
        let now = Utc::now();
        let first = quotes_for_treatment("mancozeb fungicide", None, None, 8, now);
        let second = quotes_for_treatment("mancozeb fungicide", None, None, 8, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_quote_prices_stay_within_variation_band() {
        let quotes = quotes_for_treatment("mancozeb", None, None, 8, Utc::now());
        assert_eq!(quotes.len(), 8);
        for quote in &quotes {
            // Base 35.0 with variation 0.8-1.3
            assert!(
                (28.0..=45.5).contains(&quote.price_ghs),
                "price out of band: {}",
                quote.price_ghs
            );
        }
    }

    #[test]
    fn test_unknown_product_uses_default_base_price() {
        let quotes = quotes_for_treatment("mystery tonic", None, None, 4, Utc::now());
        for quote in &quotes {
            assert!((32.0..=52.0).contains(&quote.price_ghs));
        }
    }

    #[test]
    fn test_base_price_matches_by_substring() {
        assert_eq!(base_price("Copper-based fungicide"), 45.0);
        assert_eq!(base_price("NEEM oil treatment"), 25.0);
        assert_eq!(base_price("something else"), DEFAULT_BASE_PRICE);
    }

    #[test]
    fn test_max_results_caps_quote_count() {
        let quotes = quotes_for_treatment("neem", None, None, 3, Utc::now());
        assert_eq!(quotes.len(), 3);
    }

    #[test]
    fn test_explicit_location_and_quantity_are_used_verbatim() {
        let quotes = quotes_for_treatment("neem", Some("Accra"), Some("1kg"), 5, Utc::now());
        for quote in &quotes {
            assert_eq!(quote.location, "Accra");
            assert_eq!(quote.quantity, "1kg");
            assert!(quote.product_name.ends_with("1kg"));
        }
    }

    #[test]
    fn test_quotes_are_at_most_a_week_old() {
        let now = Utc::now();
        let quotes = quotes_for_treatment("abamectin", None, None, 8, now);
        for quote in &quotes {
            let age = now - quote.last_updated;
            assert!(age >= Duration::zero());
            assert!(age <= Duration::days(7));
        }
    }

    #[test]
    fn test_summarize_computes_average_and_range() {
        let now = Utc::now();
        let mut quotes = quotes_for_treatment("copper", Some("Tema"), Some("1L"), 2, now);
        quotes[0].price_ghs = 40.0;
        quotes[1].price_ghs = 50.0;

        let summary = summarize(&quotes);
        assert_eq!(summary.average_ghs, Some(45.0));
        assert_eq!(summary.min_ghs, Some(40.0));
        assert_eq!(summary.max_ghs, Some(50.0));
    }

    #[test]
    fn test_summarize_empty_quotes_has_no_stats() {
        let summary = summarize(&[]);
        assert_eq!(summary.average_ghs, None);
        assert_eq!(summary.min_ghs, None);
        assert_eq!(summary.max_ghs, None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("neem oil"), "Neem Oil");
        assert_eq!(title_case("mancozeb"), "Mancozeb");
        assert_eq!(title_case(""), "");
    }
}
