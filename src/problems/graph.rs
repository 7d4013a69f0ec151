use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::cost::Cost;
use crate::problem::IllegalActionError;
use crate::problem::SearchProblem;
use crate::problem::replay_actions;
use crate::space::Action;
use crate::space::State;
use crate::space::Successor;

/// An explicit directed graph with labelled, weighted edges.
///
/// Successors are listed in the order edges were added, which is the order
/// searches see them in.
#[derive(Clone, Debug)]
pub struct GraphProblem<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    start: St,
    goals: FxHashSet<St>,
    edges: FxHashMap<St, Vec<Successor<St, A, C>>>,
}

impl<St, A, C> GraphProblem<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    /// A graph with a start, no edges and no goals.
    pub fn new(start: St) -> Self {
        Self {
            start,
            goals: FxHashSet::default(),
            edges: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_edge(mut self, from: St, action: A, to: St, cost: C) -> Self {
        self.add_edge(from, action, to, cost);
        self
    }

    #[must_use]
    pub fn with_goal(mut self, goal: St) -> Self {
        self.goals.insert(goal);
        self
    }

    pub fn add_edge(&mut self, from: St, action: A, to: St, cost: C) {
        self.edges
            .entry(from)
            .or_default()
            .push(Successor::new(to, action, cost));
    }

    pub fn goals(&self) -> &FxHashSet<St> {
        &self.goals
    }

    /// Every edge as `(from, successor)`.
    pub fn edges(&self) -> impl Iterator<Item = (St, Successor<St, A, C>)> + '_ {
        self.edges
            .iter()
            .flat_map(|(from, succs)| succs.iter().map(|succ| (*from, *succ)))
    }

    pub fn num_edges(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl GraphProblem<u32, u32, u32> {
    /// A random graph over states `0..nodes`.
    ///
    /// Starts at `0` with `nodes - 1` as the goal. Each edge connects two
    /// random states, costs `1..=max_cost` and is labelled with its own index,
    /// so action sequences replay unambiguously.
    pub fn random<R: rand::Rng>(r: &mut R, nodes: u32, edges: usize, max_cost: u32) -> Self {
        debug_assert!(nodes > 0);
        debug_assert!(max_cost > 0);

        let mut problem = Self::new(0u32).with_goal(nodes - 1);
        for action in 0..edges {
            let from = r.random_range(0..nodes);
            let to = r.random_range(0..nodes);
            let cost = r.random_range(1..=max_cost);
            problem.add_edge(from, action as u32, to, cost);
        }
        problem
    }
}

impl<St, A, C> SearchProblem<St, A, C> for GraphProblem<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn start_state(&self) -> St {
        self.start
    }

    fn is_goal_state(&self, s: &St) -> bool {
        self.goals.contains(s)
    }

    fn successors(&self, s: &St) -> Vec<Successor<St, A, C>> {
        self.edges.get(s).cloned().unwrap_or_default()
    }

    fn cost_of_actions(&self, actions: &[A]) -> Result<C, IllegalActionError<St, A>> {
        replay_actions(self, actions).map(|(_end, cost)| cost)
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn successors_keep_insertion_order() {
        let problem = GraphProblem::new('a')
            .with_edge('a', 'x', 'b', 3u32)
            .with_edge('a', 'y', 'c', 1u32)
            .with_edge('b', 'z', 'c', 1u32);

        assert_eq!(
            problem.successors(&'a'),
            vec![Successor::new('b', 'x', 3), Successor::new('c', 'y', 1)]
        );
        assert!(problem.successors(&'c').is_empty());
        assert_eq!(problem.num_edges(), 3);
        assert!(!problem.is_goal_state(&'c'));
    }

    #[test]
    fn cost_of_actions() {
        let problem = GraphProblem::new('a')
            .with_edge('a', 'x', 'b', 3u32)
            .with_edge('b', 'z', 'c', 1u32);

        assert_eq!(problem.cost_of_actions(&[]), Ok(0));
        assert_eq!(problem.cost_of_actions(&['x', 'z']), Ok(4));
        assert!(problem.cost_of_actions(&['z']).is_err());
    }

    #[test]
    fn random_is_seeded() {
        let a = GraphProblem::<u32, u32, u32>::random(&mut ChaCha8Rng::seed_from_u64(3), 10, 25, 5);
        let b = GraphProblem::<u32, u32, u32>::random(&mut ChaCha8Rng::seed_from_u64(3), 10, 25, 5);

        assert_eq!(a.num_edges(), 25);
        assert_eq!(a.goals().len(), 1);
        assert!(a.is_goal_state(&9));
        for s in 0..10u32 {
            assert_eq!(a.successors(&s), b.successors(&s));
            for succ in a.successors(&s) {
                assert!(succ.state < 10);
                assert!((1..=5).contains(&succ.cost));
            }
        }
    }
}
