pub mod by_value;
pub mod by_weight;
pub mod exhaustive;
pub mod greedy;

pub use by_value::ByValueSolver;
pub use by_weight::ByWeightSolver;
pub use exhaustive::{ExhaustiveSolver, EXHAUSTIVE_MAX_ITEMS};
pub use greedy::GreedySolver;
