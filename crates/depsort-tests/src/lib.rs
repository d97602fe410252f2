pub mod dags;

// Re-export key testing utilities
pub use dags::{DagSpec, all_dags};
pub use depsort_lib::testing::{GraphFixture, names, position_of};
