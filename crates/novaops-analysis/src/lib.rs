//! Incident analysis for NovaOps.
//!
//! - **search**: naive lexical similarity search over the historical catalog
//! - **embedding**: deterministic hash-seeded pseudo-embeddings
//! - **rca**: canned root-cause analysis of catalog incidents
//!
//! Every operation that draws random numbers has a `*_with_rng` variant taking
//! the generator explicitly, so callers and tests control reproducibility.

pub mod embedding;
pub mod error;
pub mod rca;
pub mod search;

pub use embedding::{cosine_similarity, Embedding, EmbeddingGenerator, DEFAULT_EMBEDDING_DIM};
pub use error::{AnalysisError, Result};
pub use rca::{root_cause_analysis, root_cause_analysis_with_rng, RootCauseAnalysis};
pub use search::{SearchHit, SearchReport, SimilaritySearch, DEFAULT_TOP_K};
