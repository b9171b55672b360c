use crate::domain::problem::NormalizedProblem;
use crate::domain::solver::{Solver, SolverOutcome};

/// Fast approximation for inputs too large for either DP table.
///
/// Takes items by descending value per gram (ties: lighter first, then
/// original order) until the target is met, skipping anything that would
/// overflow the capacity. No optimality guarantee.
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> Self {
        GreedySolver
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

fn ratio(value: u64, scaled_weight: u64) -> f64 {
    if value == 0 {
        0.0
    } else {
        value as f64 / scaled_weight.max(1) as f64
    }
}

impl Solver for GreedySolver {
    fn solve(&self, problem: &NormalizedProblem) -> SolverOutcome {
        let mut order: Vec<(usize, f64)> = problem
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, ratio(item.value, item.scaled_weight)))
            .collect();

        // stable: equal ratio and weight keep their input order
        order.sort_by(|a, b| {
            b.1.total_cmp(&a.1).then_with(|| {
                problem.items[a.0]
                    .scaled_weight
                    .cmp(&problem.items[b.0].scaled_weight)
            })
        });

        let mut selected = Vec::new();
        let mut total_weight = 0u64;
        let mut total_value = 0u64;

        for (i, _) in order {
            if total_value >= problem.target_value {
                break;
            }

            let item = &problem.items[i];
            if total_weight + item.scaled_weight > problem.capacity {
                continue;
            }

            selected.push(i);
            total_weight += item.scaled_weight;
            total_value = total_value.saturating_add(item.value);
        }

        SolverOutcome {
            feasible: total_value >= problem.target_value,
            total_weight,
            total_value,
            selected,
        }
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
