use crate::domain::problem::NormalizedProblem;
use crate::domain::solver::{DecisionTable, Solver, SolverOutcome};

/// Marks a value level no subset reaches. Far above any real sum of weights
/// (each weight fits in 31 bits) and far enough from `u64::MAX` that adding
/// one weight to it cannot wrap.
pub const UNREACHABLE_WEIGHT: u64 = u64::MAX / 4;

/// DP over the value axis.
///
/// `min_weight[c]` is the lightest subset worth exactly `c`. The answer is the
/// lightest level at or above the target that fits the capacity; among equal
/// weights the lowest level wins. Better than [`super::ByWeightSolver`] when
/// the values sum to less than the capacity.
pub struct ByValueSolver;

impl ByValueSolver {
    pub fn new() -> Self {
        ByValueSolver
    }
}

impl Default for ByValueSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for ByValueSolver {
    fn solve(&self, problem: &NormalizedProblem) -> SolverOutcome {
        let items = &problem.items;
        let target = problem.target_value;

        // Levels above the sum of all values are never reached, so the table
        // stops there even when the target is larger.
        let total_value = problem.total_value();
        if target > total_value {
            return SolverOutcome::infeasible();
        }
        let top = total_value as usize;

        let mut min_weight = vec![UNREACHABLE_WEIGHT; top + 1];
        min_weight[0] = 0;
        let mut decisions = DecisionTable::new(items.len(), top + 1);

        for (i, item) in items.iter().enumerate() {
            // zero-value items can't move towards the target, and an item
            // heavier than the capacity never ends up in a fitting subset
            if item.value == 0 || item.scaled_weight > problem.capacity {
                continue;
            }
            let ci = item.value as usize;

            for c in (ci..=top).rev() {
                if min_weight[c - ci] == UNREACHABLE_WEIGHT {
                    continue;
                }

                let candidate = min_weight[c - ci] + item.scaled_weight;
                if candidate < min_weight[c] {
                    min_weight[c] = candidate;
                    decisions.set(i, c);
                }
            }
        }

        let mut best: Option<(usize, u64)> = None;
        for c in target as usize..=top {
            let w = min_weight[c];
            if w <= problem.capacity && best.is_none_or(|(_, best_w)| w < best_w) {
                best = Some((c, w));
            }
        }

        let Some((best_c, _)) = best else {
            return SolverOutcome::infeasible();
        };

        let selected = decisions.reconstruct(items.len(), best_c, |i| items[i].value as usize);
        SolverOutcome::from_selection(problem, selected)
    }

    fn name(&self) -> &str {
        "DP by value"
    }
}
