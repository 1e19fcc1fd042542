//! Sentence-pair similarity probes (paraphrase and translation).

use async_trait::async_trait;
use tracing::debug;

use probe_embeddings::{cosine_similarity, EmbeddingClient};
use probe_types::MetricDirection;

use crate::error::ProbeError;
use crate::probe::Probe;

/// Two sentences expected to mean the same thing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPair {
    pub left: String,
    pub right: String,
}

impl TextPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Mean cosine similarity over a fixed set of sentence pairs.
///
/// `left_label` and `right_label` name the sides in error messages,
/// e.g. "original"/"modified" or "Russian"/"French".
#[derive(Debug, Clone)]
pub struct PairSimilarityProbe {
    name: String,
    metric_label: String,
    left_label: String,
    right_label: String,
    pairs: Vec<TextPair>,
}

impl PairSimilarityProbe {
    pub fn new(
        name: impl Into<String>,
        metric_label: impl Into<String>,
        (left_label, right_label): (&str, &str),
        pairs: Vec<TextPair>,
    ) -> Self {
        Self {
            name: name.into(),
            metric_label: metric_label.into(),
            left_label: left_label.to_string(),
            right_label: right_label.to_string(),
            pairs,
        }
    }
}

#[async_trait]
impl Probe for PairSimilarityProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn metric_label(&self) -> &str {
        &self.metric_label
    }

    fn direction(&self) -> MetricDirection {
        MetricDirection::HigherIsBetter
    }

    async fn score(&self, client: &dyn EmbeddingClient, model: &str) -> Result<f64, ProbeError> {
        if self.pairs.is_empty() {
            return Err(ProbeError::EmptyFixture {
                probe: self.name.clone(),
            });
        }

        let mut total = 0.0;
        for (i, pair) in self.pairs.iter().enumerate() {
            let n = i + 1;
            let left = client
                .get(model, &pair.left)
                .await
                .map_err(ProbeError::retrieval(format!("{} phrase {n}", self.left_label)))?;
            let right = client
                .get(model, &pair.right)
                .await
                .map_err(ProbeError::retrieval(format!("{} phrase {n}", self.right_label)))?;

            let similarity = cosine_similarity(left.as_slice(), right.as_slice())
                .map_err(ProbeError::vector(format!("similarity for pair {n}")))?;

            debug!(probe = %self.name, model, pair = n, similarity, "Pair similarity");
            total += similarity;
        }

        Ok(total / self.pairs.len() as f64)
    }
}
