//! Query/evidence relevance probes.
//!
//! One query is compared against a set of evidence passages with known
//! relevance. The per-passage similarities are then scored either as
//! thresholded classification accuracy or as a weighted similarity.

use async_trait::async_trait;
use tracing::debug;

use probe_embeddings::{cosine_similarity, EmbeddingClient};
use probe_types::MetricDirection;

use crate::error::ProbeError;
use crate::probe::Probe;

/// Similarity above which a passage is predicted relevant.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.5;

/// An evidence passage with its ground-truth relevance to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub text: String,
    /// Language of the passage, used in error context
    pub language: String,
    pub relevant: bool,
}

impl Evidence {
    pub fn new(text: impl Into<String>, language: impl Into<String>, relevant: bool) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            relevant,
        }
    }
}

/// Query/passage similarity paired with the ground truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Judgement {
    pub similarity: f64,
    pub relevant: bool,
}

/// How judgements are folded into a probe score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelevanceScoring {
    /// Fraction of passages where `similarity > threshold` matches the truth
    Accuracy { threshold: f64 },
    /// Mean of `similarity` for relevant and `1 - similarity` for irrelevant passages
    Weighted,
}

impl RelevanceScoring {
    pub fn metric_label(&self) -> &'static str {
        match self {
            RelevanceScoring::Accuracy { .. } => "Accuracy",
            RelevanceScoring::Weighted => "Weighted Similarity",
        }
    }

    pub fn score(&self, judgements: &[Judgement]) -> f64 {
        match self {
            RelevanceScoring::Accuracy { threshold } => accuracy(judgements, *threshold),
            RelevanceScoring::Weighted => weighted_relevance(judgements),
        }
    }
}

/// Classification accuracy. Returns 0.0 for an empty set.
pub fn accuracy(judgements: &[Judgement], threshold: f64) -> f64 {
    if judgements.is_empty() {
        return 0.0;
    }
    let correct = judgements
        .iter()
        .filter(|j| (j.similarity > threshold) == j.relevant)
        .count();
    correct as f64 / judgements.len() as f64
}

/// Weighted relevance similarity. Returns 0.0 for an empty set.
pub fn weighted_relevance(judgements: &[Judgement]) -> f64 {
    if judgements.is_empty() {
        return 0.0;
    }
    let total: f64 = judgements
        .iter()
        .map(|j| {
            if j.relevant {
                j.similarity
            } else {
                1.0 - j.similarity
            }
        })
        .sum();
    total / judgements.len() as f64
}

/// Single-query relevance probe configured from a fixture.
#[derive(Debug, Clone)]
pub struct RelevanceProbe {
    name: String,
    query: String,
    evidence: Vec<Evidence>,
    scoring: RelevanceScoring,
}

impl RelevanceProbe {
    pub fn new(
        name: impl Into<String>,
        query: impl Into<String>,
        evidence: Vec<Evidence>,
        scoring: RelevanceScoring,
    ) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            evidence,
            scoring,
        }
    }

    /// Accuracy probe with the default 0.5 threshold.
    pub fn accuracy(
        name: impl Into<String>,
        query: impl Into<String>,
        evidence: Vec<Evidence>,
    ) -> Self {
        Self::new(
            name,
            query,
            evidence,
            RelevanceScoring::Accuracy {
                threshold: DEFAULT_RELEVANCE_THRESHOLD,
            },
        )
    }

    pub fn weighted(
        name: impl Into<String>,
        query: impl Into<String>,
        evidence: Vec<Evidence>,
    ) -> Self {
        Self::new(name, query, evidence, RelevanceScoring::Weighted)
    }

    /// Fetch the query and every passage for `model` and compare them.
    pub async fn judge(
        &self,
        client: &dyn EmbeddingClient,
        model: &str,
    ) -> Result<Vec<Judgement>, ProbeError> {
        let query = client
            .get(model, &self.query)
            .await
            .map_err(ProbeError::retrieval("query"))?;

        let mut judgements = Vec::with_capacity(self.evidence.len());
        for (i, evidence) in self.evidence.iter().enumerate() {
            let label = format!("evidence {} ({})", i + 1, evidence.language);
            let passage = client
                .get(model, &evidence.text)
                .await
                .map_err(ProbeError::retrieval(label.clone()))?;
            let similarity = cosine_similarity(query.as_slice(), passage.as_slice())
                .map_err(ProbeError::vector(format!("similarity for {label}")))?;

            debug!(
                probe = %self.name,
                model,
                evidence = i + 1,
                similarity,
                relevant = evidence.relevant,
                "Evidence judged"
            );
            judgements.push(Judgement {
                similarity,
                relevant: evidence.relevant,
            });
        }

        Ok(judgements)
    }
}

#[async_trait]
impl Probe for RelevanceProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn metric_label(&self) -> &str {
        self.scoring.metric_label()
    }

    fn direction(&self) -> MetricDirection {
        MetricDirection::HigherIsBetter
    }

    async fn score(&self, client: &dyn EmbeddingClient, model: &str) -> Result<f64, ProbeError> {
        if self.evidence.is_empty() {
            return Err(ProbeError::EmptyFixture {
                probe: self.name.clone(),
            });
        }

        let judgements = self.judge(client, model).await?;
        Ok(self.scoring.score(&judgements))
    }
}
