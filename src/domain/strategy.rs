use crate::domain::problem::NormalizedProblem;
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::solvers::{ByValueSolver, ByWeightSolver, GreedySolver};

/// Largest DP axis (table length) either exact solver may allocate.
pub const DP_DIMENSION_CEILING: u64 = 250_000;

/// Largest decision table (items × table length, in bits) an exact solver may
/// allocate: 128 MiB.
pub const DECISION_BIT_BUDGET: u64 = 1 << 30;

/// Available solver paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ByWeight,
    ByValue,
    Greedy,
}

impl Strategy {
    /// Pick the solver whose DP axis is shorter, or the greedy fallback when
    /// that axis exceeds [`DP_DIMENSION_CEILING`] or its decision table would
    /// exceed [`DECISION_BIT_BUDGET`].
    pub fn select(weight_dimension: u64, value_dimension: u64, item_count: usize) -> Self {
        let fits = |dimension: u64| {
            dimension <= DP_DIMENSION_CEILING
                && (item_count as u64).saturating_mul(dimension + 1) <= DECISION_BIT_BUDGET
        };

        if weight_dimension <= value_dimension && fits(weight_dimension) {
            Strategy::ByWeight
        } else if value_dimension < weight_dimension && fits(value_dimension) {
            Strategy::ByValue
        } else {
            Strategy::Greedy
        }
    }

    pub fn for_problem(problem: &NormalizedProblem) -> Self {
        Self::select(problem.capacity, problem.total_value(), problem.items.len())
    }

    pub fn solve(self, problem: &NormalizedProblem) -> SolverOutcome {
        match self {
            Strategy::ByWeight => run(&ByWeightSolver::new(), problem),
            Strategy::ByValue => run(&ByValueSolver::new(), problem),
            Strategy::Greedy => run(&GreedySolver::new(), problem),
        }
    }

    pub fn is_approximate(self) -> bool {
        matches!(self, Strategy::Greedy)
    }

    /// Text returned to the caller in `strategy`.
    pub fn description(self) -> &'static str {
        match self {
            Strategy::ByWeight => {
                "DP by weight (maximizes value for each weight, then picks the lightest feasible weight)"
            }
            Strategy::ByValue => {
                "DP by value (minimizes the weight needed to reach at least the target value)"
            }
            Strategy::Greedy => "Greedy fallback (approximation by value/weight ratio)",
        }
    }
}

fn run(solver: &impl Solver, problem: &NormalizedProblem) -> SolverOutcome {
    let outcome = solver.solve(problem);
    log::debug!(
        "{} solver: feasible={} weight={}g value={} items={}",
        solver.name(),
        outcome.feasible,
        outcome.total_weight,
        outcome.total_value,
        outcome.selected.len()
    );
    outcome
}
