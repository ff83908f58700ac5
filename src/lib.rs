//! Local-search refinement for the Euclidean Traveling Salesman Problem.
//!
//! Takes an instance and an initial tour (e.g. from [`construct::nearest_neighbor`])
//! and improves it with one of three controllers:
//!
//! - **2-opt** ([`opt2`]): steepest descent over edge exchanges until no
//!   exchange improves the tour.
//! - **Tabu Search** ([`tabu`]): keeps taking the best non-tabu 2-opt move,
//!   worsening ones included, with pluggable tenure policies.
//! - **Variable Neighborhood Search** ([`vns`]): alternates 2-opt descent
//!   with random segment-reversal kicks.
//!
//! Every controller polls a cooperative wall-clock [`budget::TimeBudget`]
//! between whole steps and returns the best *valid* tour it has seen.
//!
//! # Architecture
//!
//! Single-threaded and synchronous. A [`tour::Tour`] is an ordered node
//! sequence with a cached cost; moves update the cache incrementally and
//! every externally observable tour is checked against a from-scratch
//! recomputation. Randomness comes from an explicitly seeded RNG
//! ([`settings::Settings::seed`]).

pub mod budget;
pub mod construct;
pub mod error;
pub mod incumbent;
pub mod instance;
pub mod opt2;
pub mod progress;
pub mod refine;
pub mod settings;
pub mod tabu;
pub mod tour;
pub mod vns;

pub use error::{RefineError, Result};
