//! Deterministic pseudo-embeddings.
//!
//! Stands in for a hosted embedding model. The SHA-256 digest of the text seeds
//! a private `StdRng`, which then draws the vector. The generator is created
//! and dropped inside each call, so embedding never disturbs any other random
//! number consumer in the process.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Default embedding dimension.
pub const DEFAULT_EMBEDDING_DIM: usize = 256;

/// Model name reported alongside generated vectors.
pub const EMBEDDING_MODEL: &str = "amazon.nova-embed-v1";

/// Number of characters of input echoed back in an `Embedding`.
const PREVIEW_CHARS: usize = 100;

/// A generated embedding with its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Embedding {
    /// The first 100 characters of the input, with `...` if truncated.
    pub text: String,
    /// Model name.
    pub model: &'static str,
    /// Vector length.
    pub dimension: usize,
    /// Values in `[-1.0, 1.0]`, rounded to six decimals.
    pub vector: Vec<f64>,
    /// When the embedding was generated.
    pub timestamp: DateTime<Utc>,
}

/// Generates hash-seeded embeddings of a fixed dimension.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddingGenerator {
    dimension: usize,
}

impl Default for EmbeddingGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl EmbeddingGenerator {
    /// Creates a generator producing vectors of `dimension` values.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Get the embedding dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the raw vector for `text`.
    ///
    /// Identical input always yields a bit-identical vector.
    pub fn vector(&self, text: &str) -> Vec<f64> {
        let mut rng = seeded_rng(text);
        (0..self.dimension)
            .map(|_| round_to(rng.gen_range(-1.0..=1.0), 6))
            .collect()
    }

    /// Embeds `text` and wraps the vector with its metadata.
    pub fn embed(&self, text: &str) -> Embedding {
        let vector = self.vector(text);
        debug!(chars = text.chars().count(), dimension = self.dimension, "Generated embedding");

        Embedding {
            text: preview(text),
            model: EMBEDDING_MODEL,
            dimension: self.dimension,
            vector,
            timestamp: Utc::now(),
        }
    }
}

fn seeded_rng(text: &str) -> StdRng {
    let digest = Sha256::digest(text.as_bytes());
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    StdRng::from_seed(seed)
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Rounds to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Calculate cosine similarity between two embeddings.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_deterministic() {
        let gen = EmbeddingGenerator::default();
        let e1 = gen.vector("hello");
        let e2 = gen.vector("hello");

        assert_eq!(e1.len(), 256);
        assert_eq!(e1, e2);
    }

    #[test]
    fn test_embedding_different_texts() {
        let gen = EmbeddingGenerator::default();
        let hello = gen.vector("hello");
        let goodbye = gen.vector("goodbye");

        assert_eq!(goodbye.len(), 256);
        assert_ne!(hello, goodbye);
    }

    #[test]
    fn test_embedding_values_bounded() {
        let gen = EmbeddingGenerator::default();
        for v in gen.vector("bounded values") {
            assert!((-1.0..=1.0).contains(&v));
            assert_eq!(v, round_to(v, 6));
        }
    }

    #[test]
    fn test_embed_metadata() {
        let gen = EmbeddingGenerator::new(16);
        let embedding = gen.embed("short text");

        assert_eq!(embedding.dimension, 16);
        assert_eq!(embedding.vector.len(), 16);
        assert_eq!(embedding.model, EMBEDDING_MODEL);
        assert_eq!(embedding.text, "short text");
        assert_eq!(embedding.vector, gen.vector("short text"));
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "x".repeat(150);
        let embedding = EmbeddingGenerator::new(4).embed(&long);

        assert_eq!(embedding.text.len(), PREVIEW_CHARS + 3);
        assert!(embedding.text.ends_with("..."));

        let exact = "y".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact);
    }

    #[test]
    fn test_empty_text_embeds() {
        let gen = EmbeddingGenerator::default();
        assert_eq!(gen.vector("").len(), DEFAULT_EMBEDDING_DIM);
        assert_eq!(gen.vector(""), gen.vector(""));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456789, 3), 0.123);
        assert_eq!(round_to(0.9996, 3), 1.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
    }

    #[test]
    fn test_cosine_similarity_same() {
        let gen = EmbeddingGenerator::default();
        let e = gen.vector("same");
        assert!((cosine_similarity(&e, &e) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_mismatched_lengths() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
