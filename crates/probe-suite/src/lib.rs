//! # probe-suite
//!
//! The probe contract and the standard probe battery.
//!
//! A probe scores each model on one semantic capability and marks the model
//! with the strictly best score as winner:
//! - `AnalogyProbe`: `Paris - France + England` vs `London` (Euclidean distance)
//! - `PairSimilarityProbe`: mean cosine over paraphrase or translation pairs
//! - `RelevanceProbe`: query/evidence relevance, scored as accuracy or weighted similarity
//!
//! `ProbeRegistry::standard()` builds the battery in report order.

pub mod analogy;
pub mod error;
pub mod fixtures;
pub mod pairs;
pub mod probe;
pub mod registry;
pub mod relevance;
pub mod winner;

pub use analogy::{AnalogyProbe, AnalogyTerms};
pub use error::ProbeError;
pub use pairs::{PairSimilarityProbe, TextPair};
pub use probe::Probe;
pub use registry::ProbeRegistry;
pub use relevance::{
    accuracy, weighted_relevance, Evidence, Judgement, RelevanceProbe, RelevanceScoring,
    DEFAULT_RELEVANCE_THRESHOLD,
};
pub use winner::select_winner;
