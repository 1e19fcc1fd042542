//! Word-analogy probe: how close `base - subtract + add` lands to `expected`.

use async_trait::async_trait;
use tracing::debug;

use probe_embeddings::{euclidean_distance, subtract_add, EmbeddingClient};
use probe_types::MetricDirection;

use crate::error::ProbeError;
use crate::probe::Probe;

/// The four terms of an analogy `base : subtract :: expected : add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogyTerms {
    pub base: String,
    pub subtract: String,
    pub add: String,
    pub expected: String,
}

impl AnalogyTerms {
    pub fn new(
        base: impl Into<String>,
        subtract: impl Into<String>,
        add: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            subtract: subtract.into(),
            add: add.into(),
            expected: expected.into(),
        }
    }
}

/// Scores the Euclidean distance between `base - subtract + add` and
/// `expected`. Lower is better.
#[derive(Debug, Clone)]
pub struct AnalogyProbe {
    name: String,
    terms: AnalogyTerms,
}

impl AnalogyProbe {
    pub fn new(name: impl Into<String>, terms: AnalogyTerms) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }
}

#[async_trait]
impl Probe for AnalogyProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn metric_label(&self) -> &str {
        "Euclidean Distance"
    }

    fn direction(&self) -> MetricDirection {
        MetricDirection::LowerIsBetter
    }

    async fn score(&self, client: &dyn EmbeddingClient, model: &str) -> Result<f64, ProbeError> {
        let terms = &self.terms;
        let mut embeddings = Vec::with_capacity(4);
        for term in [&terms.base, &terms.subtract, &terms.add, &terms.expected] {
            let embedding = client
                .get(model, term)
                .await
                .map_err(ProbeError::retrieval(format!("term '{term}'")))?;
            embeddings.push(embedding);
        }

        let offset = subtract_add(
            embeddings[0].as_slice(),
            embeddings[1].as_slice(),
            embeddings[2].as_slice(),
        )
        .map_err(ProbeError::vector(format!(
            "'{}' - '{}' + '{}'",
            terms.base, terms.subtract, terms.add
        )))?;

        let distance = euclidean_distance(&offset, embeddings[3].as_slice()).map_err(
            ProbeError::vector(format!("distance to '{}'", terms.expected)),
        )?;

        debug!(probe = %self.name, model, distance, "Analogy distance");
        Ok(distance)
    }
}
