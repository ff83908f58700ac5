//! 2-opt local search.
//!
//! Steepest-descent over the 2-opt neighbourhood: every scan evaluates all
//! non-degenerate edge exchanges with an `O(1)` delta and applies the best
//! one while it improves the tour.
//!
//! # References
//!
//! - Croes, G. A. (1958). "A method for solving traveling-salesman problems",
//!   *Operations Research* 6(6), 791-812.

mod config;
mod moves;
mod runner;

pub use config::TwoOptConfig;
pub use moves::{
    best_move, best_move_where, candidate_pairs, delta_cost, endpoints, is_candidate, TwoOptMove,
};
pub use runner::{descend, scan, Descent, DescentState, TwoOptResult, TwoOptRunner, IMPROVEMENT_EPSILON};
