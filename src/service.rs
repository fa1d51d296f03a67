//! Recommendation service
//!
//! Orchestrates the static catalog, the recommendation engine, and the TTL
//! caches. Each data class (recommendations, supplier searches, price
//! quotes) lives in its own typed cache with its own TTL; external lookups
//! always happen outside the cache locks.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::{CacheError, CacheStats, Clock, SystemClock, TtlCache};
use crate::config::Config;
use crate::data::{
    catalog, prices, GeocodeClient, GeocodeError, PriceQuote, Supplier, SupplierClient,
    SupplierError,
};
use crate::engine::{self, RecommendError, RecommendationCriteria, RecommendationResult};
use crate::sweep::Sweepable;

/// Errors surfaced by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested disease is not in the catalog (client error)
    #[error("unknown disease: '{0}'")]
    UnknownDisease(String),

    /// The location could not be geocoded (client error)
    #[error("could not resolve location: '{0}'")]
    UnknownLocation(String),

    /// Engine failures, propagated unchanged
    #[error(transparent)]
    Recommend(#[from] RecommendError),

    /// Geocoding transport/parse failures
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// Supplier search transport failures
    #[error(transparent)]
    Suppliers(#[from] SupplierError),

    /// Cache misuse (non-positive configured TTL)
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Service wiring the engine's output through the caches
///
/// Owns one cache per data class so each can carry its own TTL; the caches
/// share a single injected clock.
pub struct RecommendationService {
    config: Config,
    clock: Arc<dyn Clock>,
    recommendations: Arc<TtlCache<RecommendationResult>>,
    supplier_results: Arc<TtlCache<Vec<Supplier>>>,
    price_results: Arc<TtlCache<Vec<PriceQuote>>>,
    geocoder: GeocodeClient,
    supplier_client: SupplierClient,
}

impl RecommendationService {
    /// Creates a service on the system clock
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a service with a custom clock, shared by all caches
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let geocoder = GeocodeClient::new(&config.nominatim_base_url, &config.user_agent);
        let supplier_client = SupplierClient::new(&config.overpass_base_url, &config.user_agent);

        Self {
            recommendations: Arc::new(new_cache(&clock, config.cache_max_entries)),
            supplier_results: Arc::new(new_cache(&clock, config.cache_max_entries)),
            price_results: Arc::new(new_cache(&clock, config.cache_max_entries)),
            geocoder,
            supplier_client,
            config,
            clock,
        }
    }

    /// Returns a ranked treatment recommendation, cached per fingerprint
    ///
    /// On a cache hit the stored result is returned unchanged. On a miss the
    /// disease is resolved from the catalog (`UnknownDisease` if absent), the
    /// engine runs, and the result is stored under the disease-info TTL.
    /// `NoApplicableTreatments` is never cached: re-deriving it is trivial
    /// and an error is not a result.
    pub fn get_recommendation(
        &self,
        criteria: &RecommendationCriteria,
    ) -> Result<RecommendationResult, ServiceError> {
        let key = criteria.fingerprint();

        if let Some(cached) = self.recommendations.get(&key) {
            debug!(key = %key, "recommendation cache hit");
            return Ok(cached);
        }

        let disease = catalog::get_disease(&criteria.disease_id)
            .ok_or_else(|| ServiceError::UnknownDisease(criteria.disease_id.clone()))?;

        let result = engine::recommend(disease, criteria)?;
        self.recommendations
            .set(key, result.clone(), self.config.cache_ttl_disease_info)?;

        info!(
            disease = disease.id,
            severity = %criteria.severity,
            options = result.treatments.len(),
            "recommendation computed"
        );
        Ok(result)
    }

    /// Finds agricultural suppliers near a free-text location
    ///
    /// Geocodes the location, queries Overpass, and caches the result under
    /// the suppliers TTL. Both external calls happen outside any cache lock.
    pub async fn find_suppliers(
        &self,
        location: &str,
        radius_km: u32,
    ) -> Result<Vec<Supplier>, ServiceError> {
        let key = format!("suppliers:{}:{}", location.trim().to_lowercase(), radius_km);

        if let Some(cached) = self.supplier_results.get(&key) {
            debug!(key = %key, "supplier cache hit");
            return Ok(cached);
        }

        let coords = self
            .geocoder
            .lookup(location)
            .await?
            .ok_or_else(|| ServiceError::UnknownLocation(location.to_string()))?;

        let suppliers = self
            .supplier_client
            .find_nearby(coords, radius_km * 1000)
            .await?;

        if suppliers.is_empty() {
            warn!(location, radius_km, "no suppliers found");
        }

        self.supplier_results
            .set(key, suppliers.clone(), self.config.cache_ttl_suppliers)?;
        info!(location, count = suppliers.len(), "supplier search completed");
        Ok(suppliers)
    }

    /// Returns price quotes for a treatment product, cached per query
    pub fn get_prices(
        &self,
        treatment_name: &str,
        location: Option<&str>,
        max_results: usize,
    ) -> Result<Vec<PriceQuote>, ServiceError> {
        let key = format!(
            "prices:{}:{}:{}",
            treatment_name.trim().to_lowercase(),
            location.unwrap_or("-"),
            max_results
        );

        if let Some(cached) = self.price_results.get(&key) {
            debug!(key = %key, "price cache hit");
            return Ok(cached);
        }

        let quotes = prices::quotes_for_treatment(
            treatment_name,
            location,
            None,
            max_results,
            self.clock.now(),
        );
        self.price_results
            .set(key, quotes.clone(), self.config.cache_ttl_prices)?;
        Ok(quotes)
    }

    /// Snapshot of per-cache statistics, labelled by data class
    pub fn cache_stats(&self) -> Vec<(&'static str, CacheStats)> {
        vec![
            ("recommendations", self.recommendations.stats()),
            ("suppliers", self.supplier_results.stats()),
            ("prices", self.price_results.stats()),
        ]
    }

    /// The caches a background sweeper should cover
    pub fn sweep_targets(&self) -> Vec<Arc<dyn Sweepable>> {
        vec![
            self.recommendations.clone() as Arc<dyn Sweepable>,
            self.supplier_results.clone() as Arc<dyn Sweepable>,
            self.price_results.clone() as Arc<dyn Sweepable>,
        ]
    }
}

/// Builds a cache on the shared clock, bounded when the config asks for it
fn new_cache<V: Clone>(clock: &Arc<dyn Clock>, max_entries: Option<usize>) -> TtlCache<V> {
    match max_entries {
        Some(limit) => TtlCache::with_clock(clock.clone()).with_max_entries(limit),
        None => TtlCache::with_clock(clock.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::data::Severity;
    use chrono::{Duration, Utc};

    fn service_with_manual_clock() -> (RecommendationService, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let service = RecommendationService::with_clock(Config::default(), clock.clone());
        (service, clock)
    }

    #[test]
    fn test_known_disease_returns_ranked_recommendation() {
        let (service, _clock) = service_with_manual_clock();
        let criteria = RecommendationCriteria::new("anthracnose", Severity::Moderate);

        let result = service.get_recommendation(&criteria).unwrap();
        assert!(!result.treatments.is_empty());

        // Ranked: effectiveness never increases down the list
        for pair in result.treatments.windows(2) {
            assert!(pair[0].effectiveness >= pair[1].effectiveness);
        }
    }

    #[test]
    fn test_unknown_disease_is_a_client_error() {
        let (service, _clock) = service_with_manual_clock();
        let criteria = RecommendationCriteria::new("black_sigatoka", Severity::Mild);

        let err = service.get_recommendation(&criteria).unwrap_err();
        assert!(matches!(err, ServiceError::UnknownDisease(id) if id == "black_sigatoka"));
    }

    #[test]
    fn test_second_identical_request_hits_the_cache() {
        let (service, _clock) = service_with_manual_clock();
        let criteria = RecommendationCriteria::new("anthracnose", Severity::Moderate);

        let first = service.get_recommendation(&criteria).unwrap();
        let second = service.get_recommendation(&criteria).unwrap();

        // The cached result is returned unchanged, timestamp included
        assert_eq!(first.generated_at, second.generated_at);
        assert_eq!(first.treatments, second.treatments);

        let stats = service.cache_stats();
        let (_, rec_stats) = stats[0];
        assert_eq!(rec_stats.hit_count, 1);
        assert_eq!(rec_stats.miss_count, 1);
    }

    #[test]
    fn test_expired_recommendation_is_recomputed() {
        let (service, clock) = service_with_manual_clock();
        let criteria = RecommendationCriteria::new("mosaic", Severity::Mild);

        service.get_recommendation(&criteria).unwrap();
        clock.advance(Duration::seconds(Config::default().cache_ttl_disease_info + 1));
        service.get_recommendation(&criteria).unwrap();

        let (_, rec_stats) = service.cache_stats()[0];
        assert_eq!(rec_stats.hit_count, 0);
        assert_eq!(rec_stats.miss_count, 2);
        assert_eq!(rec_stats.eviction_count, 1);
    }

    #[test]
    fn test_no_applicable_treatments_is_not_cached() {
        let (service, _clock) = service_with_manual_clock();
        let criteria = RecommendationCriteria::new("healthy", Severity::Mild);

        for _ in 0..3 {
            let err = service.get_recommendation(&criteria).unwrap_err();
            assert!(matches!(
                err,
                ServiceError::Recommend(RecommendError::NoApplicableTreatments(_))
            ));
        }

        let (_, rec_stats) = service.cache_stats()[0];
        // Every attempt misses; nothing was ever stored
        assert_eq!(rec_stats.miss_count, 3);
        assert_eq!(rec_stats.current_size, 0);
    }

    #[test]
    fn test_different_criteria_use_different_cache_entries() {
        let (service, _clock) = service_with_manual_clock();

        let moderate = RecommendationCriteria::new("anthracnose", Severity::Moderate);
        let severe = RecommendationCriteria::new("anthracnose", Severity::Severe);

        service.get_recommendation(&moderate).unwrap();
        service.get_recommendation(&severe).unwrap();

        let (_, rec_stats) = service.cache_stats()[0];
        assert_eq!(rec_stats.current_size, 2);
        assert_eq!(rec_stats.miss_count, 2);
    }

    #[test]
    fn test_prices_cached_under_their_own_ttl() {
        let (service, clock) = service_with_manual_clock();

        let first = service.get_prices("mancozeb", Some("Accra"), 5).unwrap();
        let second = service.get_prices("mancozeb", Some("Accra"), 5).unwrap();
        assert_eq!(first, second);

        let (_, price_stats) = service.cache_stats()[2];
        assert_eq!(price_stats.hit_count, 1);

        // Past the prices TTL the entry is gone
        clock.advance(Duration::seconds(Config::default().cache_ttl_prices + 1));
        service.get_prices("mancozeb", Some("Accra"), 5).unwrap();
        let (_, price_stats) = service.cache_stats()[2];
        assert_eq!(price_stats.miss_count, 2);
    }

    #[test]
    fn test_sweep_targets_cover_all_three_caches() {
        let (service, _clock) = service_with_manual_clock();
        assert_eq!(service.sweep_targets().len(), 3);
    }
}
