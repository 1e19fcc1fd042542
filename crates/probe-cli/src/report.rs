//! Result table rendering.
//!
//! The text report is a pipe table sized to its widest cell, followed by the
//! per-model win tallies and a verdict. The JSON report carries the same
//! information in machine-readable form.

use serde::Serialize;

use probe_types::ResultTable;

/// Winner column label for probes without a strict winner.
pub const TIE_LABEL: &str = "Tie";

/// Number of probes won by one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinTally {
    pub model: String,
    pub wins: usize,
}

/// Tally wins for each model, in `models` order.
pub fn tally_wins(table: &ResultTable, models: &[String]) -> Vec<WinTally> {
    models
        .iter()
        .map(|model| WinTally {
            model: model.clone(),
            wins: table.wins_for(model),
        })
        .collect()
}

/// One-line verdict over the tallies.
///
/// A model is named only when its win count is strictly greater than every
/// other model's; the runner-up count is the next highest tally.
pub fn verdict(tallies: &[WinTally]) -> String {
    let Some(leader) = tallies.iter().max_by_key(|t| t.wins) else {
        return "All models are equally reliable.".to_string();
    };
    let runner_up = tallies
        .iter()
        .filter(|t| !std::ptr::eq(*t, leader))
        .map(|t| t.wins)
        .max()
        .unwrap_or(0);

    if leader.wins == runner_up {
        return "All models are equally reliable.".to_string();
    }
    format!(
        "{} is more reliable ({} vs. {} wins).",
        leader.model, leader.wins, runner_up
    )
}

/// Render the full text report.
pub fn render_text(table: &ResultTable, models: &[String]) -> String {
    let mut header = vec![
        "Task".to_string(),
        "Task Name".to_string(),
        "Metric".to_string(),
    ];
    header.extend(models.iter().cloned());
    header.push("Winner".to_string());

    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|(ordinal, row)| {
            let mut cells = vec![
                ordinal.to_string(),
                row.name.clone(),
                row.metric_label.clone(),
            ];
            for model in models {
                cells.push(
                    row.results
                        .get(model)
                        .map(|r| format!("{:.4}", r.score))
                        .unwrap_or_else(|| "-".to_string()),
                );
            }
            cells.push(row.results.winner().unwrap_or(TIE_LABEL).to_string());
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::from("Final Results Table:\n");
    out.push_str(&format_line(&header, &widths));
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    out.push_str(&format!("|{}|\n", separator.join("|")));
    for cells in &rows {
        out.push_str(&format_line(cells, &widths));
    }

    let tallies = tally_wins(table, models);
    out.push_str("\nOverall Reliability:\n");
    for tally in &tallies {
        out.push_str(&format!("{} wins: {}\n", tally.model, tally.wins));
    }
    out.push_str(&verdict(&tallies));
    out.push('\n');
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {cell:<width$} "))
        .collect();
    format!("|{}|\n", padded.join("|"))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    models: &'a [String],
    results: &'a ResultTable,
    tallies: Vec<WinTally>,
    verdict: String,
}

/// Render the report as pretty-printed JSON.
pub fn render_json(table: &ResultTable, models: &[String]) -> Result<String, serde_json::Error> {
    let tallies = tally_wins(table, models);
    let verdict = verdict(&tallies);
    serde_json::to_string_pretty(&JsonReport {
        models,
        results: table,
        tallies,
        verdict,
    })
}
