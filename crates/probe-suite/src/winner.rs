//! Winner selection shared by every probe.
//!
//! Models are scanned in configured order. Only a strictly best score wins;
//! when the best score is shared by two or more models nobody is marked.

use probe_types::{MetricDirection, ModelResults};

/// Mark the entry with the strictly best score as winner.
///
/// Clears any previous marks first, so running it twice over the same
/// results gives the same outcome. NaN scores never win. Returns the
/// winning model, or `None` on a tie or when there are no usable scores.
pub fn select_winner(results: &mut ModelResults, direction: MetricDirection) -> Option<String> {
    for entry in results.iter_mut() {
        entry.result.winning_model = None;
    }

    let mut best: Option<(usize, f64)> = None;
    let mut tied = false;

    for (index, entry) in results.iter().enumerate() {
        let score = entry.result.score;
        if score.is_nan() {
            continue;
        }
        match best {
            None => {
                best = Some((index, score));
            }
            Some((_, current)) if direction.is_better(score, current) => {
                best = Some((index, score));
                tied = false;
            }
            Some((_, current)) if score == current => {
                tied = true;
            }
            Some(_) => {}
        }
    }

    if tied {
        return None;
    }

    let (index, _) = best?;
    let entry = results.iter_mut().nth(index)?;
    entry.result.winning_model = Some(entry.model.clone());
    Some(entry.model.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(scores: &[(&str, f64)]) -> ModelResults {
        scores
            .iter()
            .map(|(model, score)| (model.to_string(), *score))
            .collect()
    }

    #[test]
    fn test_higher_score_wins() {
        let mut r = results(&[("modelA", 0.82), ("modelB", 0.75)]);
        let winner = select_winner(&mut r, MetricDirection::HigherIsBetter);

        assert_eq!(winner.as_deref(), Some("modelA"));
        assert_eq!(
            r.get("modelA").unwrap().winning_model.as_deref(),
            Some("modelA")
        );
        assert!(r.get("modelB").unwrap().winning_model.is_none());
    }

    #[test]
    fn test_lower_distance_wins() {
        let mut r = results(&[("modelA", 2.5), ("modelB", 1.25), ("modelC", 4.0)]);
        let winner = select_winner(&mut r, MetricDirection::LowerIsBetter);
        assert_eq!(winner.as_deref(), Some("modelB"));
        assert_eq!(r.winner(), Some("modelB"));
    }

    #[test]
    fn test_exact_tie_has_no_winner() {
        let mut r = results(&[("modelA", 0.5), ("modelB", 0.5)]);
        assert!(select_winner(&mut r, MetricDirection::HigherIsBetter).is_none());
        assert!(r.iter().all(|e| e.result.winning_model.is_none()));
    }

    #[test]
    fn test_tie_below_best_does_not_block_winner() {
        let mut r = results(&[("a", 0.4), ("b", 0.4), ("c", 0.9)]);
        assert_eq!(
            select_winner(&mut r, MetricDirection::HigherIsBetter).as_deref(),
            Some("c")
        );
    }

    #[test]
    fn test_tie_then_strictly_better_wins() {
        let mut r = results(&[("a", 1.0), ("b", 1.0), ("c", 0.5)]);
        assert_eq!(
            select_winner(&mut r, MetricDirection::LowerIsBetter).as_deref(),
            Some("c")
        );
    }

    #[test]
    fn test_single_model_wins() {
        let mut r = results(&[("only", -3.0)]);
        assert_eq!(
            select_winner(&mut r, MetricDirection::HigherIsBetter).as_deref(),
            Some("only")
        );
    }

    #[test]
    fn test_empty_results() {
        let mut r = ModelResults::new();
        assert!(select_winner(&mut r, MetricDirection::HigherIsBetter).is_none());
    }

    #[test]
    fn test_nan_never_wins() {
        let mut r = results(&[("a", f64::NAN), ("b", 0.1)]);
        assert_eq!(
            select_winner(&mut r, MetricDirection::HigherIsBetter).as_deref(),
            Some("b")
        );

        let mut r = results(&[("a", f64::NAN)]);
        assert!(select_winner(&mut r, MetricDirection::HigherIsBetter).is_none());
    }

    #[test]
    fn test_selection_is_idempotent() {
        let mut r = results(&[("a", 0.3), ("b", 0.7), ("c", 0.6)]);
        let first = select_winner(&mut r, MetricDirection::HigherIsBetter);
        let snapshot = r.clone();
        let second = select_winner(&mut r, MetricDirection::HigherIsBetter);

        assert_eq!(first, second);
        assert_eq!(r, snapshot);
    }

    #[test]
    fn test_reselection_clears_stale_mark() {
        let mut r = results(&[("a", 0.5), ("b", 0.5)]);
        for entry in r.iter_mut() {
            entry.result.winning_model = Some(entry.model.clone());
        }
        assert!(select_winner(&mut r, MetricDirection::HigherIsBetter).is_none());
        assert!(r.winner().is_none());
    }
}
