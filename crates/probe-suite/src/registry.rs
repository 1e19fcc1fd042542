//! Ordered probe registry.
//!
//! Registration order is the order probes run in and the order rows appear
//! in reports. Names are not deduplicated.

use crate::analogy::AnalogyProbe;
use crate::fixtures::{
    capital_analogy, evidence_set, text_pairs, ENGLISH_EVIDENCE, FRENCH_EVIDENCE,
    MANDARIN_EVIDENCE, MIXED_SPANISH_EVIDENCE, RUSSIAN_EVIDENCE, RUSSIAN_FRENCH_TRANSLATIONS,
    RUSSIAN_PARAPHRASES, WELLNESS_QUERY,
};
use crate::pairs::PairSimilarityProbe;
use crate::probe::Probe;
use crate::relevance::RelevanceProbe;

/// Append-only ordered collection of probes.
#[derive(Default)]
pub struct ProbeRegistry {
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard battery, in report order.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(AnalogyProbe::new("Analogy Task", capital_analogy()));
        registry.register(PairSimilarityProbe::new(
            "Cross-Language Capability Task",
            "Cross-Language Similarity",
            ("Russian", "French"),
            text_pairs(&RUSSIAN_FRENCH_TRANSLATIONS),
        ));
        registry.register(RelevanceProbe::accuracy(
            "French Cross-Language Metric Evidence Task",
            WELLNESS_QUERY,
            evidence_set(&FRENCH_EVIDENCE),
        ));
        registry.register(RelevanceProbe::accuracy(
            "Mandarin Cross-Language Metric Evidence Task",
            WELLNESS_QUERY,
            evidence_set(&MANDARIN_EVIDENCE),
        ));
        registry.register(RelevanceProbe::accuracy(
            "Russian Cross-Language Metric Evidence Task",
            WELLNESS_QUERY,
            evidence_set(&RUSSIAN_EVIDENCE),
        ));
        registry.register(RelevanceProbe::weighted(
            "Semantic Metric Evidence Task",
            WELLNESS_QUERY,
            evidence_set(&ENGLISH_EVIDENCE),
        ));
        registry.register(PairSimilarityProbe::new(
            "Semantic Similarity Task",
            "Semantic Similarity",
            ("original", "modified"),
            text_pairs(&RUSSIAN_PARAPHRASES),
        ));
        registry.register(RelevanceProbe::accuracy(
            "Spanish Cross-Language Metric Evidence Task",
            WELLNESS_QUERY,
            evidence_set(&MIXED_SPANISH_EVIDENCE),
        ));
        registry
    }

    /// Append a probe.
    pub fn register(&mut self, probe: impl Probe + 'static) {
        self.probes.push(Box::new(probe));
    }

    /// Builder-style [`ProbeRegistry::register`].
    pub fn with(mut self, probe: impl Probe + 'static) -> Self {
        self.register(probe);
        self
    }

    /// Probes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Probe> {
        self.probes.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_types::MetricDirection;

    #[test]
    fn test_standard_order() {
        let registry = ProbeRegistry::standard();
        let names: Vec<&str> = registry.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "Analogy Task",
                "Cross-Language Capability Task",
                "French Cross-Language Metric Evidence Task",
                "Mandarin Cross-Language Metric Evidence Task",
                "Russian Cross-Language Metric Evidence Task",
                "Semantic Metric Evidence Task",
                "Semantic Similarity Task",
                "Spanish Cross-Language Metric Evidence Task",
            ]
        );
    }

    #[test]
    fn test_standard_metrics() {
        let registry = ProbeRegistry::standard();
        let metrics: Vec<(&str, MetricDirection)> = registry
            .iter()
            .map(|p| (p.metric_label(), p.direction()))
            .collect();
        assert_eq!(
            metrics[0],
            ("Euclidean Distance", MetricDirection::LowerIsBetter)
        );
        assert_eq!(
            metrics[1],
            ("Cross-Language Similarity", MetricDirection::HigherIsBetter)
        );
        assert_eq!(metrics[2].0, "Accuracy");
        assert_eq!(metrics[5].0, "Weighted Similarity");
        assert_eq!(metrics[6].0, "Semantic Similarity");
        assert!(metrics[1..]
            .iter()
            .all(|(_, d)| *d == MetricDirection::HigherIsBetter));
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let registry = ProbeRegistry::new()
            .with(AnalogyProbe::new("Same", capital_analogy()))
            .with(AnalogyProbe::new("Same", capital_analogy()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProbeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
