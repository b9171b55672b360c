use crate::domain::problem::NormalizedProblem;
use crate::domain::solver::{DecisionTable, Solver, SolverOutcome};

/// DP over the weight axis.
///
/// `best[w]` is the highest value reachable with a subset weighing exactly
/// `w` grams (`None` when no subset weighs `w`). The lightest `w` whose value
/// meets the target is the answer. O(items × capacity).
pub struct ByWeightSolver;

impl ByWeightSolver {
    pub fn new() -> Self {
        ByWeightSolver
    }
}

impl Default for ByWeightSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for ByWeightSolver {
    fn solve(&self, problem: &NormalizedProblem) -> SolverOutcome {
        let items = &problem.items;
        let capacity = problem.capacity as usize;

        let mut best: Vec<Option<u64>> = vec![None; capacity + 1];
        best[0] = Some(0);
        let mut decisions = DecisionTable::new(items.len(), capacity + 1);

        for (i, item) in items.iter().enumerate() {
            let wi = item.scaled_weight as usize;
            if wi > capacity {
                continue;
            }

            // descending so each item is used at most once
            for w in (wi..=capacity).rev() {
                let Some(prev) = best[w - wi] else {
                    continue;
                };

                let candidate = prev.saturating_add(item.value);
                if best[w].is_none_or(|current| candidate > current) {
                    best[w] = Some(candidate);
                    decisions.set(i, w);
                }
            }
        }

        let Some(best_w) = best
            .iter()
            .position(|v| v.is_some_and(|v| v >= problem.target_value))
        else {
            return SolverOutcome::infeasible();
        };

        let selected = decisions.reconstruct(items.len(), best_w, |i| items[i].scaled_weight as usize);
        SolverOutcome::from_selection(problem, selected)
    }

    fn name(&self) -> &str {
        "DP by weight"
    }
}
