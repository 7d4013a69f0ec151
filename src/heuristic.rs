//! Cost-to-go estimates for A*.

use crate::cost::Cost;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::State;

/// Estimates the remaining cost from a state to the nearest goal.
///
/// Estimates must be non-negative. A* only returns optimal paths when the
/// estimate never exceeds the true remaining cost (admissible).
///
/// Any `Fn(&St, &P) -> C` closure is a heuristic.
pub trait Heuristic<P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    fn estimate(&self, s: &St, problem: &P) -> C;
}

impl<F, P, St, A, C> Heuristic<P, St, A, C> for F
where
    F: Fn(&St, &P) -> C,
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    fn estimate(&self, s: &St, problem: &P) -> C {
        self(s, problem)
    }
}

/// The trivial heuristic. A* with it expands like uniform-cost search.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHeuristic;

impl<P, St, A, C> Heuristic<P, St, A, C> for NullHeuristic
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    fn estimate(&self, _s: &St, _problem: &P) -> C {
        C::zero()
    }
}
