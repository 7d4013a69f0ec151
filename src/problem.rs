use thiserror::Error;

use crate::cost::Cost;
use crate::space::Action;
use crate::space::State;
use crate::space::Successor;

/// A state-transition problem searches can solve.
///
/// Every method is required. Searches only borrow the problem, so repeated
/// searches over the same instance see the same graph.
pub trait SearchProblem<St, A, C>: std::fmt::Debug
where
    St: State,
    A: Action,
    C: Cost,
{
    /// Where every search starts. Must be deterministic.
    fn start_state(&self) -> St;

    fn is_goal_state(&self, s: &St) -> bool;

    /// Expands a State.
    ///
    /// An empty list is a dead end. The order of the list is the order in
    /// which successors reach the frontier, which decides ties.
    fn successors(&self, s: &St) -> Vec<Successor<St, A, C>>;

    /// Total cost of following `actions` from the start state.
    ///
    /// Searches never call this; it lets callers validate solutions.
    fn cost_of_actions(&self, actions: &[A]) -> Result<C, IllegalActionError<St, A>>;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Action #{step} {action:?} is not legal from {state:?}")]
pub struct IllegalActionError<St, A>
where
    St: State,
    A: Action,
{
    pub step: usize,
    pub state: St,
    pub action: A,
}

/// Follows `actions` from the start state.
///
/// Each action takes the first successor that carries it. Returns the state
/// reached and the accumulated cost.
pub fn replay_actions<P, St, A, C>(
    problem: &P,
    actions: &[A],
) -> Result<(St, C), IllegalActionError<St, A>>
where
    P: SearchProblem<St, A, C> + ?Sized,
    St: State,
    A: Action,
    C: Cost,
{
    let mut state = problem.start_state();
    let mut cost = C::zero();

    for (step, action) in actions.iter().enumerate() {
        let successor = problem
            .successors(&state)
            .into_iter()
            .find(|succ| succ.action == *action)
            .ok_or(IllegalActionError {
                step,
                state,
                action: *action,
            })?;
        state = successor.state;
        cost = cost.saturating_add(&successor.cost);
    }

    Ok((state, cost))
}
