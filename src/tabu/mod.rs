//! Tabu Search over the 2-opt neighbourhood.
//!
//! Each iteration applies the best 2-opt move whose endpoints are not tabu,
//! even when it worsens the tour, and remembers when every node was last
//! moved. The tenure (how long a node stays forbidden) follows a pluggable
//! [`TenurePolicy`].
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;
mod tenure;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::{TabuResult, TabuRunner, TabuSearch, TabuStep};
pub use tenure::{default_tenure, TenurePolicy, MIN_TENURE, TENURE_DENOMINATOR};
