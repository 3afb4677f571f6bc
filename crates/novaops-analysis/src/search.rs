//! Lexical similarity search over the historical incident catalog.
//!
//! This is a stand-in for vector search. Each query token found in an
//! entry's title, description or service adds a fixed weight, and a random
//! baseline is added so every entry scores above zero. Ordering is therefore
//! reproducible only when the caller supplies a seeded generator.

use std::ops::Range;

use chrono::{DateTime, Utc};
use novaops_models::{HistoricalIncident, Severity, CATALOG};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::embedding::round_to;

/// Number of results returned by default.
pub const DEFAULT_TOP_K: usize = 3;

/// Score added for each query token found in an entry.
pub const TOKEN_MATCH_WEIGHT: f64 = 0.15;

/// Range of the random baseline added to every score.
pub const BASELINE_RANGE: Range<f64> = 0.3..0.6;

/// A single ranked catalog match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Catalog identifier.
    pub incident_id: &'static str,
    /// Catalog title.
    pub title: &'static str,
    /// Catalog severity.
    pub severity: Severity,
    /// Affected service.
    pub service: &'static str,
    /// Score in `[0.0, 1.0]`, rounded to three decimals.
    pub similarity_score: f64,
    /// When the historical incident happened.
    pub timestamp: &'static str,
}

/// Outcome of a similarity search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// The query as given.
    pub query: String,
    /// Number of results returned.
    pub result_count: usize,
    /// Matches ordered by descending score.
    pub results: Vec<SearchHit>,
    /// When the search ran.
    pub search_timestamp: DateTime<Utc>,
}

/// Ranks a fixed catalog against free-text queries.
#[derive(Debug, Clone)]
pub struct SimilaritySearch {
    catalog: &'static [HistoricalIncident],
    top_k: usize,
}

impl Default for SimilaritySearch {
    fn default() -> Self {
        Self::new(&CATALOG)
    }
}

impl SimilaritySearch {
    /// Creates a search over the given catalog returning `DEFAULT_TOP_K` results.
    pub fn new(catalog: &'static [HistoricalIncident]) -> Self {
        Self {
            catalog,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Sets how many results are returned.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Returns the configured result limit.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Searches using the thread-local random generator for the baseline.
    pub fn search(&self, query: &str) -> SearchReport {
        self.search_with_rng(query, &mut rand::thread_rng())
    }

    /// Searches using the given random generator for the baseline.
    pub fn search_with_rng<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> SearchReport {
        let query_lower = query.to_lowercase();
        let tokens: Vec<&str> = query_lower.split_whitespace().collect();

        let mut scored: Vec<(f64, &HistoricalIncident)> = self
            .catalog
            .iter()
            .map(|inc| {
                let haystack = inc.search_text();
                let lexical = tokens
                    .iter()
                    .filter(|token| haystack.contains(*token))
                    .count() as f64
                    * TOKEN_MATCH_WEIGHT;
                let score = (lexical + rng.gen_range(BASELINE_RANGE)).min(1.0);
                (round_to(score, 3), inc)
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(self.top_k);

        let results: Vec<SearchHit> = scored
            .into_iter()
            .map(|(score, inc)| SearchHit {
                incident_id: inc.id,
                title: inc.title,
                severity: inc.severity,
                service: inc.service,
                similarity_score: score,
                timestamp: inc.timestamp,
            })
            .collect();

        debug!(
            query = %query,
            tokens = tokens.len(),
            results = results.len(),
            "Searched incident catalog"
        );

        SearchReport {
            query: query.to_string(),
            result_count: results.len(),
            results,
            search_timestamp: Utc::now(),
        }
    }
}
