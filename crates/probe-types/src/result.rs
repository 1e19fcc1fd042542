//! Probe result types.
//!
//! A run produces one [`ResultTable`]: probe ordinal -> [`ProbeRow`], where
//! each row carries the per-model [`ModelResults`] of that probe.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which way a probe's metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricDirection {
    /// Similarity and accuracy style metrics
    HigherIsBetter,
    /// Distance style metrics
    LowerIsBetter,
}

impl MetricDirection {
    /// Returns true if `candidate` strictly beats `current`.
    ///
    /// NaN never beats anything and is never beaten.
    pub fn is_better(self, candidate: f64, current: f64) -> bool {
        match self {
            MetricDirection::HigherIsBetter => candidate > current,
            MetricDirection::LowerIsBetter => candidate < current,
        }
    }
}

/// Score of one model on one probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Metric value; its meaning depends on the probe's metric
    pub score: f64,

    /// Set to the model's own id on the winning entry only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_model: Option<String>,
}

impl EvaluationResult {
    /// Create an unmarked result.
    pub fn new(score: f64) -> Self {
        Self {
            score,
            winning_model: None,
        }
    }

    /// Whether this entry is marked as the probe winner.
    pub fn is_winner(&self) -> bool {
        self.winning_model.is_some()
    }
}

/// Per-model results of a single probe, in configured model order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResults {
    entries: Vec<ModelEntry>,
}

/// One (model, result) pair inside [`ModelResults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub model: String,
    #[serde(flatten)]
    pub result: EvaluationResult,
}

impl ModelResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append a score for `model`.
    pub fn push(&mut self, model: impl Into<String>, score: f64) {
        self.entries.push(ModelEntry {
            model: model.into(),
            result: EvaluationResult::new(score),
        });
    }

    /// Look up the first entry for `model`.
    pub fn get(&self, model: &str) -> Option<&EvaluationResult> {
        self.entries
            .iter()
            .find(|e| e.model == model)
            .map(|e| &e.result)
    }

    /// The marked winner, if any.
    pub fn winner(&self) -> Option<&str> {
        self.entries
            .iter()
            .find_map(|e| e.result.winning_model.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ModelEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for ModelResults {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut results = ModelResults::new();
        for (model, score) in iter {
            results.push(model, score);
        }
        results
    }
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeRow {
    /// Probe name
    pub name: String,
    /// Metric label shown in reports
    pub metric_label: String,
    pub direction: MetricDirection,
    pub results: ModelResults,
}

/// Results of a full run keyed by 1-based probe ordinal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    rows: BTreeMap<usize, ProbeRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `row` under `ordinal`, replacing any previous row.
    pub fn insert(&mut self, ordinal: usize, row: ProbeRow) {
        self.rows.insert(ordinal, row);
    }

    pub fn get(&self, ordinal: usize) -> Option<&ProbeRow> {
        self.rows.get(&ordinal)
    }

    /// Rows in ordinal order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &ProbeRow)> {
        self.rows.iter().map(|(ordinal, row)| (*ordinal, row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of probes won by `model`.
    pub fn wins_for(&self, model: &str) -> usize {
        self.rows
            .values()
            .filter(|row| row.results.winner() == Some(model))
            .count()
    }
}
