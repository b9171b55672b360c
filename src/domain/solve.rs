use crate::domain::problem::NormalizedProblem;
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::solvers::{ExhaustiveSolver, EXHAUSTIVE_MAX_ITEMS};
use crate::domain::strategy::Strategy;

pub const APPROXIMATION_NOTE: &str = "Approximation: the input is too large for exact dynamic programming; \
a greedy value/weight heuristic was used and the result may not be optimal.";

/// What the solver pipeline produced, before it is turned into a response.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub strategy: Strategy,
    pub outcome: SolverOutcome,
    /// True when the exhaustive search replaced the strategy's outcome.
    pub verified_exhaustively: bool,
    pub notes: Vec<String>,
}

impl SolveReport {
    pub fn strategy_description(&self) -> String {
        let mut description = self.strategy.description().to_string();
        if self.verified_exhaustively {
            description.push_str(&format!(" + exhaustive verification (n<={})", EXHAUSTIVE_MAX_ITEMS));
        }
        description
    }
}

/// Run the selected strategy, then cross-check small inputs against the
/// exhaustive search.
pub fn solve(problem: &NormalizedProblem) -> SolveReport {
    let strategy = Strategy::for_problem(problem);
    log::debug!(
        "strategy {:?} for {} items (capacity {}g, value sum {})",
        strategy,
        problem.items.len(),
        problem.capacity,
        problem.total_value()
    );

    let mut notes = Vec::new();
    if strategy.is_approximate() {
        log::warn!(
            "no DP table fits (capacity {}g, value sum {}, {} items); using greedy fallback",
            problem.capacity,
            problem.total_value(),
            problem.items.len()
        );
        notes.push(APPROXIMATION_NOTE.to_string());
    }

    let outcome = strategy.solve(problem);
    let (outcome, verified_exhaustively) = cross_check(problem, outcome);

    SolveReport {
        strategy,
        outcome,
        verified_exhaustively,
        notes,
    }
}

/// Prefer the exhaustive result when it is feasible and either the current
/// outcome is not, or it is strictly lighter.
fn cross_check(problem: &NormalizedProblem, outcome: SolverOutcome) -> (SolverOutcome, bool) {
    if !ExhaustiveSolver::applies_to(problem) {
        return (outcome, false);
    }

    let exhaustive = ExhaustiveSolver::new().solve(problem);
    if exhaustive.feasible && (!outcome.feasible || exhaustive.total_weight < outcome.total_weight) {
        log::info!(
            "exhaustive search improved the result: {}g -> {}g",
            outcome.total_weight,
            exhaustive.total_weight
        );
        return (exhaustive, true);
    }

    (outcome, false)
}
