//! Treatment recommendation engine
//!
//! Pure selection and ranking over a disease's treatment options: filter by
//! severity range and organic preference, rank by effectiveness then cost,
//! then truncate. Identical inputs always produce identical ordered output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::data::{Disease, Severity, TreatmentCategory, TreatmentOption};

/// Errors that can occur when computing a recommendation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// Filtering left zero applicable options
    ///
    /// For diseases with an empty treatment list (the `healthy` state) this
    /// means "no treatment needed" rather than a system error.
    #[error("no applicable treatments for disease '{0}'")]
    NoApplicableTreatments(String),
}

/// The criteria a recommendation is computed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationCriteria {
    /// Catalog disease identifier
    pub disease_id: String,
    /// Observed severity of the outbreak
    pub severity: Severity,
    /// When true, only organic options are considered
    pub organic_preference: bool,
    /// Optional cap on the number of returned options
    pub max_results: Option<usize>,
}

impl RecommendationCriteria {
    /// Creates criteria with no organic preference and no result cap
    pub fn new(disease_id: impl Into<String>, severity: Severity) -> Self {
        Self {
            disease_id: disease_id.into(),
            severity,
            organic_preference: false,
            max_results: None,
        }
    }

    /// Cache key for this request's semantic fingerprint
    ///
    /// Two criteria with the same (disease, severity, preference) tuple map
    /// to the same key regardless of object identity; `max_results` is not
    /// part of the fingerprint.
    pub fn fingerprint(&self) -> String {
        format!(
            "recommend:{}:{}:{}",
            self.disease_id, self.severity, self.organic_preference
        )
    }
}

/// A ranked, filtered set of treatment options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    /// Applicable options, best first
    pub treatments: Vec<TreatmentOption>,
    /// When the result was computed
    pub generated_at: DateTime<Utc>,
    /// The criteria the result answers
    pub criteria: RecommendationCriteria,
}

/// Computes a ranked recommendation for a disease
///
/// An option is applicable when the requested severity falls within its
/// effective range and, if `organic_preference` is set, its category is
/// organic. Applicable options are sorted by effectiveness descending, cost
/// ascending on ties; the sort is stable, so remaining ties keep catalog
/// insertion order. `max_results` truncation happens after ranking, so the
/// kept prefix is always the global top of the applicable set.
///
/// Pure apart from the `generated_at` timestamp: no caching, no I/O.
pub fn recommend(
    disease: &Disease,
    criteria: &RecommendationCriteria,
) -> Result<RecommendationResult, RecommendError> {
    let mut applicable: Vec<TreatmentOption> = disease
        .treatments
        .iter()
        .filter(|option| option.covers(criteria.severity))
        .filter(|option| {
            !criteria.organic_preference || option.category == TreatmentCategory::Organic
        })
        .copied()
        .collect();

    if applicable.is_empty() {
        return Err(RecommendError::NoApplicableTreatments(
            disease.id.to_string(),
        ));
    }

    applicable.sort_by(|a, b| {
        b.effectiveness
            .total_cmp(&a.effectiveness)
            .then(a.cost_ghs.total_cmp(&b.cost_ghs))
    });

    if let Some(limit) = criteria.max_results {
        applicable.truncate(limit);
    }

    Ok(RecommendationResult {
        treatments: applicable,
        generated_at: Utc::now(),
        criteria: criteria.clone(),
    })
}
