use std::fmt::Debug;
use std::hash::Hash;

use crate::cost::Cost;

/// A transition out of a `State`. Opaque to the search algorithms.
pub trait Action: Copy + Debug + PartialEq + Eq {}
/// A configuration of the problem. Searches only care about its identity.
pub trait State: Copy + Debug + PartialEq + Eq + Hash {}

// Plain values work as labels for small hand-written problems.
macro_rules! primitive_labels {
    ($($t:ty),*) => {
        $(
            impl State for $t {}
            impl Action for $t {}
        )*
    };
}

primitive_labels!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char, bool, &'static str);

impl<X: State, Y: State> State for (X, Y) {}

/// Taking `action` from some state reaches `state`, paying `cost`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Successor<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub state: St,
    pub action: A,
    pub cost: C,
}

impl<St, A, C> Successor<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    pub fn new(state: St, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<St, A, C> From<(St, A, C)> for Successor<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    fn from((state, action, cost): (St, A, C)) -> Self {
        Self::new(state, action, cost)
    }
}

/// A solution found by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub start: St,
    pub end: St,
    pub cost: C,
    pub actions: Vec<A>,
}

impl<St, A, C> Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    pub fn new_from_start(start: St) -> Self {
        Self {
            start,
            end: start,
            cost: C::zero(),
            actions: vec![],
        }
    }

    /// Number of actions.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the start was already a goal.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs sanity checks
    ///
    /// A cost at `max_value()` means it saturated along the way.
    #[inline(always)]
    pub fn seems_valid(&self) -> bool {
        self.cost.valid() && (!self.is_empty() || self.start == self.end)
    }

    #[inline(always)]
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}

impl<St, A, C> std::fmt::Display for Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Path({}, {:?}:{:?}:{:?})",
            self.cost,
            self.start,
            self.actions.iter().take(20).collect::<Vec<_>>(),
            self.end
        )
    }
}
