pub mod assemble;
pub mod problem;
pub mod solve;
pub mod solver;
pub mod solvers;
pub mod strategy;
pub mod validate;
