//! Implementation of search problems.
//!
//! These expose concrete state-transition problems so searches can be tested,
//! benchmarked and demoed against something real.

pub mod graph;
pub mod maze_2d;
