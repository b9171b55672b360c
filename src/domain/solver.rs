use crate::domain::problem::NormalizedProblem;

/// Result shared by every solver strategy.
///
/// `total_weight` is in grams, not kilograms. `selected` holds item indices
/// (equal to the items' original positions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome {
    pub feasible: bool,
    pub total_weight: u64,
    pub total_value: u64,
    pub selected: Vec<usize>,
}

impl SolverOutcome {
    pub fn infeasible() -> Self {
        SolverOutcome {
            feasible: false,
            total_weight: 0,
            total_value: 0,
            selected: Vec::new(),
        }
    }

    /// Feasible outcome whose totals are computed from the selection.
    pub fn from_selection(problem: &NormalizedProblem, selected: Vec<usize>) -> Self {
        let (total_weight, total_value) = problem.totals(&selected);
        SolverOutcome {
            feasible: true,
            total_weight,
            total_value,
            selected,
        }
    }
}

/// Common interface for the knapsack solvers
pub trait Solver {
    /// Pick a subset reaching `problem.target_value` within `problem.capacity`,
    /// as light as the solver can manage.
    fn solve(&self, problem: &NormalizedProblem) -> SolverOutcome;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}

/// One decision bit per (item, index) pair, stored flat.
///
/// The DP solvers record here whether item `i` improved table entry `k` while
/// item `i` was being processed. Walking the items backwards and subtracting
/// each taken item's contribution recovers a subset with no repeats.
pub(crate) struct DecisionTable {
    words_per_item: usize,
    bits: Vec<u64>,
}

impl DecisionTable {
    pub fn new(items: usize, len: usize) -> Self {
        let words_per_item = len.div_ceil(64);
        DecisionTable {
            words_per_item,
            bits: vec![0; items * words_per_item],
        }
    }

    pub fn set(&mut self, item: usize, index: usize) {
        let word = item * self.words_per_item + index / 64;
        self.bits[word] |= 1u64 << (index % 64);
    }

    pub fn get(&self, item: usize, index: usize) -> bool {
        let word = item * self.words_per_item + index / 64;
        self.bits[word] & (1u64 << (index % 64)) != 0
    }

    /// Walk back from `index` to 0. `step(i)` is how far item `i` moves the
    /// index. Returns item indices in ascending order.
    pub fn reconstruct(&self, items: usize, mut index: usize, step: impl Fn(usize) -> usize) -> Vec<usize> {
        let mut selected = Vec::new();

        for item in (0..items).rev() {
            if index == 0 {
                break;
            }
            if self.get(item, index) {
                selected.push(item);
                index -= step(item);
            }
        }

        selected.reverse();
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::problem::test_support::sample_problem;

    #[test]
    fn test_from_selection_computes_totals() {
        let outcome = SolverOutcome::from_selection(&sample_problem(15), vec![1, 3, 4]);
        assert!(outcome.feasible);
        assert_eq!(outcome.total_weight, 6000);
        assert_eq!(outcome.total_value, 16);
    }

    #[test]
    fn test_infeasible_is_empty() {
        let outcome = SolverOutcome::infeasible();
        assert!(!outcome.feasible);
        assert!(outcome.selected.is_empty());
    }

    #[test]
    fn test_decision_table_bits_are_independent_per_item() {
        let mut table = DecisionTable::new(3, 130);
        table.set(0, 129);
        table.set(2, 0);
        table.set(2, 64);

        assert!(table.get(0, 129));
        assert!(!table.get(1, 129));
        assert!(table.get(2, 0));
        assert!(table.get(2, 64));
        assert!(!table.get(2, 63));
    }

    #[test]
    fn test_decision_table_reconstructs_in_ascending_order() {
        // items with steps 1, 2, 4 all taken on the way to index 7
        let steps = [1usize, 2, 4];
        let mut table = DecisionTable::new(3, 8);
        table.set(2, 7);
        table.set(1, 3);
        table.set(0, 1);

        assert_eq!(table.reconstruct(3, 7, |i| steps[i]), vec![0, 1, 2]);
    }
}
