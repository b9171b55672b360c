use crate::domain::problem::NormalizedProblem;
use crate::domain::solver::{Solver, SolverOutcome};

/// Largest item count enumerated subset by subset (2^25 masks).
pub const EXHAUSTIVE_MAX_ITEMS: usize = 25;

/// Brute force over every subset: lightest fitting subset that meets the
/// target, heavier value winning equal weights. Ground truth for small inputs.
///
/// Problems with more than [`EXHAUSTIVE_MAX_ITEMS`] items are reported as
/// infeasible without being searched.
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    pub fn new() -> Self {
        ExhaustiveSolver
    }

    pub fn applies_to(problem: &NormalizedProblem) -> bool {
        problem.items.len() <= EXHAUSTIVE_MAX_ITEMS
    }
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for ExhaustiveSolver {
    fn solve(&self, problem: &NormalizedProblem) -> SolverOutcome {
        if !Self::applies_to(problem) {
            return SolverOutcome::infeasible();
        }

        let items = &problem.items;
        let n = items.len();

        // (weight, value, mask)
        let mut best: Option<(u64, u64, u32)> = None;

        for mask in 0u32..(1u32 << n) {
            let mut weight = 0u64;
            let mut value = 0u64;

            for (i, item) in items.iter().enumerate() {
                if (mask >> i) & 1 == 1 {
                    weight += item.scaled_weight;
                    if weight > problem.capacity {
                        break;
                    }
                    value = value.saturating_add(item.value);
                }
            }

            if weight > problem.capacity || value < problem.target_value {
                continue;
            }

            let better = match best {
                None => true,
                Some((best_weight, best_value, _)) => {
                    weight < best_weight || (weight == best_weight && value > best_value)
                }
            };
            if better {
                best = Some((weight, value, mask));
            }
        }

        match best {
            Some((weight, value, mask)) => SolverOutcome {
                feasible: true,
                total_weight: weight,
                total_value: value,
                selected: (0..n).filter(|&i| (mask >> i) & 1 == 1).collect(),
            },
            None => SolverOutcome::infeasible(),
        }
    }

    fn name(&self) -> &str {
        "Exhaustive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::problem::test_support::{problem, sample_problem};

    #[test]
    fn test_sample_ground_truth() {
        let outcome = ExhaustiveSolver::new().solve(&sample_problem(15));
        assert!(outcome.feasible);
        assert_eq!(outcome.total_weight, 6000);
        assert_eq!(outcome.total_value, 16);
        assert_eq!(outcome.selected, vec![1, 3, 4]);
    }

    #[test]
    fn test_equal_weight_prefers_higher_value() {
        let outcome = ExhaustiveSolver::new().solve(&problem(&[(3, 5), (3, 9), (3, 7)], 5, 10));
        assert_eq!(outcome.selected, vec![1]);
        assert_eq!(outcome.total_value, 9);
    }

    #[test]
    fn test_nothing_fits() {
        let outcome = ExhaustiveSolver::new().solve(&problem(&[(11, 5), (12, 9)], 5, 10));
        assert_eq!(outcome, SolverOutcome::infeasible());
    }

    #[test]
    fn test_too_many_items_is_not_searched() {
        let items = vec![(1, 1); EXHAUSTIVE_MAX_ITEMS + 1];
        let p = problem(&items, 1, 10);
        assert!(!ExhaustiveSolver::applies_to(&p));
        assert!(!ExhaustiveSolver::new().solve(&p).feasible);
    }
}
