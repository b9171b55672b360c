//! Minimum-weight 0/1 knapsack with a calorie floor.
//!
//! Given items with a weight in kilograms and a caloric value, [`optimize`]
//! finds the lightest subset reaching a minimum value without exceeding a
//! weight capacity. Weights are scaled to integer grams and solved with one of
//! two dynamic programs (indexed by weight or by value, whichever axis is
//! shorter), or a greedy approximation when both axes are too large. Small
//! inputs are cross-checked by brute force.
//!
//! ```
//! use calorie_knapsack::{optimize, sample_request};
//!
//! let response = optimize(&sample_request());
//! assert!(response.feasible);
//! assert_eq!(response.total_weight_kg, 6.0);
//! ```

pub mod config;
pub mod convert;
pub mod domain;
pub mod handlers;
pub mod models;
pub mod solve;

pub use models::{OptimizationRequest, OptimizationResponse, RawItem, SelectedItem};
pub use solve::{optimize, sample_request};
