use std::collections::HashSet;

use crate::convert::{unscale_weight, WEIGHT_SCALING_DESCRIPTION};
use crate::domain::problem::NormalizedProblem;
use crate::domain::solve::SolveReport;
use crate::models::{OptimizationResponse, SelectedItem};

pub const DUPLICATES_NOTE: &str =
    "Warning: repeated indices were found in the selection; duplicates were removed.";
pub const INFEASIBLE_NOTE: &str =
    "Result: no subset reaches minValue without exceeding maxWeightKg.";

/// Build the caller-facing response from a solver report.
pub fn assemble(problem: &NormalizedProblem, report: SolveReport) -> OptimizationResponse {
    let strategy = report.strategy_description();
    let SolveReport {
        mut outcome,
        mut notes,
        ..
    } = report;

    let unique = dedup_preserving_order(&outcome.selected);
    if unique.len() != outcome.selected.len() {
        log::warn!("solver returned repeated indices: {:?}", outcome.selected);
        notes.push(DUPLICATES_NOTE.to_string());
        let (weight, value) = problem.totals(&unique);
        outcome.total_weight = weight;
        outcome.total_value = value;
        outcome.selected = unique;
    }

    if !outcome.feasible {
        notes.push(INFEASIBLE_NOTE.to_string());
    }

    OptimizationResponse {
        feasible: outcome.feasible,
        total_weight_kg: unscale_weight(outcome.total_weight),
        total_value: outcome.total_value,
        selected_items: outcome
            .selected
            .iter()
            .map(|&i| SelectedItem::from(&problem.items[i]))
            .collect(),
        strategy,
        weight_scaling: WEIGHT_SCALING_DESCRIPTION.to_string(),
        notes,
    }
}

fn dedup_preserving_order(indices: &[usize]) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(indices.len());
    indices.iter().copied().filter(|i| seen.insert(*i)).collect()
}
