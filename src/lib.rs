use shadow_rs::shadow;

shadow!(build);

// Costs
// -----
pub mod cost;
pub mod float_cost;

// Search space and problems
// -------------------------
pub mod problem;
pub mod space;

// Search internals
// ----------------
pub mod frontier;
pub mod heuristic;
pub mod search;

// Problems
// --------
pub mod problems;

// Algorithms
// ----------
pub mod algorithms;
