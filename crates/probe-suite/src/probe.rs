//! The probe contract.

use async_trait::async_trait;
use tracing::{debug, info};

use probe_embeddings::EmbeddingClient;
use probe_types::{MetricDirection, ModelResults};

use crate::error::ProbeError;
use crate::winner::select_winner;

/// A self-contained evaluation unit comparing embedding models on one
/// semantic capability.
///
/// Implementors provide identity and a per-model score; [`Probe::evaluate`]
/// runs the score over every model in order and marks the winner.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probe name, used as its identity in reports.
    fn name(&self) -> &str;

    /// Label of the metric the score is expressed in.
    fn metric_label(&self) -> &str;

    /// Whether higher or lower scores are better.
    fn direction(&self) -> MetricDirection;

    /// Score a single model. Only vectors of `model` are compared.
    async fn score(&self, client: &dyn EmbeddingClient, model: &str) -> Result<f64, ProbeError>;

    /// Score every model in `models` order and mark the strict winner.
    ///
    /// Stops at the first failing model.
    async fn evaluate(
        &self,
        client: &dyn EmbeddingClient,
        models: &[String],
    ) -> Result<ModelResults, ProbeError> {
        let mut results = ModelResults::with_capacity(models.len());

        for model in models {
            let score = self.score(client, model).await?;
            debug!(probe = self.name(), model = %model, score, "Model scored");
            results.push(model.clone(), score);
        }

        let winner = select_winner(&mut results, self.direction());
        info!(
            probe = self.name(),
            winner = winner.as_deref().unwrap_or("none"),
            "Probe evaluated"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_embeddings::StaticEmbeddingClient;
    use std::collections::HashMap;

    struct FixedProbe {
        scores: HashMap<String, f64>,
        direction: MetricDirection,
    }

    #[async_trait]
    impl Probe for FixedProbe {
        fn name(&self) -> &str {
            "Fixed"
        }

        fn metric_label(&self) -> &str {
            "Score"
        }

        fn direction(&self) -> MetricDirection {
            self.direction
        }

        async fn score(
            &self,
            _client: &dyn EmbeddingClient,
            model: &str,
        ) -> Result<f64, ProbeError> {
            self.scores
                .get(model)
                .copied()
                .ok_or_else(|| ProbeError::EmptyFixture {
                    probe: model.to_string(),
                })
        }
    }

    fn models(names: &[&str]) -> Vec<String> {
        names.iter().map(|m| m.to_string()).collect()
    }

    #[tokio::test]
    async fn test_evaluate_marks_winner() {
        let probe = FixedProbe {
            scores: HashMap::from([("modelA".to_string(), 0.82), ("modelB".to_string(), 0.75)]),
            direction: MetricDirection::HigherIsBetter,
        };
        let client = StaticEmbeddingClient::new();

        let results = probe
            .evaluate(&client, &models(&["modelA", "modelB"]))
            .await
            .unwrap();

        assert_eq!(results.winner(), Some("modelA"));
        assert!(results.get("modelB").unwrap().winning_model.is_none());
        assert_eq!(results.get("modelB").unwrap().score, 0.75);
    }

    #[tokio::test]
    async fn test_evaluate_tie_has_no_winner() {
        let probe = FixedProbe {
            scores: HashMap::from([("modelA".to_string(), 0.5), ("modelB".to_string(), 0.5)]),
            direction: MetricDirection::HigherIsBetter,
        };
        let client = StaticEmbeddingClient::new();

        let results = probe
            .evaluate(&client, &models(&["modelA", "modelB"]))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.winner().is_none());
    }

    #[tokio::test]
    async fn test_evaluate_keeps_model_order() {
        let probe = FixedProbe {
            scores: HashMap::from([("z".to_string(), 1.0), ("a".to_string(), 2.0)]),
            direction: MetricDirection::LowerIsBetter,
        };
        let client = StaticEmbeddingClient::new();

        let results = probe.evaluate(&client, &models(&["z", "a"])).await.unwrap();
        let order: Vec<&str> = results.iter().map(|e| e.model.as_str()).collect();
        assert_eq!(order, vec!["z", "a"]);
        assert_eq!(results.winner(), Some("z"));
    }

    #[tokio::test]
    async fn test_evaluate_propagates_first_failure() {
        let probe = FixedProbe {
            scores: HashMap::from([("known".to_string(), 1.0)]),
            direction: MetricDirection::HigherIsBetter,
        };
        let client = StaticEmbeddingClient::new();

        let err = probe
            .evaluate(&client, &models(&["known", "unknown"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::EmptyFixture { probe } if probe == "unknown"));
    }
}
