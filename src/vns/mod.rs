//! Variable Neighborhood Search (VNS).
//!
//! Alternates 2-opt descent (intensification) with random segment-reversal
//! kicks (diversification) and keeps the best tour seen. The working tour
//! may get worse after a kick; the incumbent never does.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod kick;
mod runner;

pub use config::VnsConfig;
pub use kick::{kick, kick_positions, kick_sol, MAX_KICKS, MIN_KICK_DIMENSION};
pub use runner::{VnsResult, VnsRunner, VnsSearch, VnsStep};
