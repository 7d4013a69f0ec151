//! Implementation of uniform-cost search (Dijkstra's algorithm).

use std::collections::hash_map::Entry;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::frontier::PriorityQueue;
use crate::problem::SearchProblem;
use crate::search::SearchStats;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;
use crate::search::verify_path;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

/// Uniform-cost search.
///
/// Nodes are popped by increasing accumulated cost `g`, with ties broken by
/// insertion order. The open list has no decrease-key: reaching a state
/// through a cheaper path records the new cost and pushes another node, and
/// the older, costlier node is skipped when it eventually pops.
#[derive(Debug)]
pub struct UniformCostSearch<'p, P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    problem: &'p P,
    stats: SearchStats,

    _phantom_state: PhantomData<St>,
    _phantom_action: PhantomData<A>,
    _phantom_cost: PhantomData<C>,
}

impl<'p, P, St, A, C> UniformCostSearch<'p, P, St, A, C>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn new(problem: &'p P) -> Self {
        Self {
            problem,
            stats: SearchStats::default(),

            _phantom_state: PhantomData,
            _phantom_action: PhantomData,
            _phantom_cost: PhantomData,
        }
    }

    /// Runs the search until the first goal is popped.
    ///
    /// Returns `None` when the open list runs out.
    #[must_use]
    pub fn find_first(&mut self) -> Option<Path<St, A, C>> {
        let tree = SearchTree::<St, A, C>::new();
        let mut open = PriorityQueue::<&SearchTreeNode<St, A, C>, C>::new();
        // Best known g for every state discovered so far.
        let mut best_g = FxHashMap::<St, C>::default();
        self.stats = SearchStats::default();

        let start = self.problem.start_state();
        log::debug!("UCS: Searching from {start:?}");
        best_g.insert(start, C::zero());
        open.push(tree.root(start), C::zero());

        let mut found = None;
        while let Some((node, _rank)) = open.pop_ranked() {
            let state = *node.state();
            let g = node.g();

            // Was a cheaper path found after this node was pushed?
            if best_g.get(&state).is_some_and(|best| *best < g) {
                self.stats.stale += 1;
                continue;
            }

            if self.problem.is_goal_state(&state) {
                found = Some(node.path());
                break;
            }

            self.stats.expanded += 1;
            log::trace!("UCS: Expanding {state:?} (g={g})");
            for successor in self.problem.successors(&state) {
                let new_g = g.saturating_add(&successor.cost);
                match best_g.entry(successor.state) {
                    Entry::Vacant(e) => {
                        e.insert(new_g);
                    }
                    Entry::Occupied(mut e) => {
                        if new_g >= *e.get() {
                            continue;
                        }
                        // Found better path to existing state
                        e.insert(new_g);
                    }
                }
                let child = tree.child(node, &successor);
                debug_assert_eq!(child.g(), new_g);
                open.push(child, new_g);
            }
            self.stats.saw_frontier(open.len());
        }

        self.stats.generated = tree.len();
        self.stats.tree_bytes = tree.memory();
        match &found {
            Some(path) => {
                verify_path(self.problem, path);
                log::debug!(
                    "UCS: Reached {:?} at cost {} after {} expansions",
                    path.end,
                    path.cost,
                    self.stats.expanded
                );
            }
            None => log::debug!(
                "UCS: Exhausted the open list after {} expansions ({} states reached)",
                self.stats.expanded,
                best_g.len()
            ),
        }
        found
    }

    /// Counters of the last run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Searches the node of least total cost first.
///
/// Returns the cheapest actions that reach a goal, or nothing if no goal is
/// reachable (or the start is already a goal).
///
/// ```
/// use graph_search::algorithms::ucs::uniform_cost_search;
/// use graph_search::problems::graph::GraphProblem;
///
/// let problem = GraphProblem::new('a')
///     .with_edge('a', "ab", 'b', 1u32)
///     .with_edge('b', "bc", 'c', 1u32)
///     .with_edge('a', "ac", 'c', 9u32)
///     .with_goal('c');
/// assert_eq!(uniform_cost_search(&problem), vec!["ab", "bc"]);
/// ```
pub fn uniform_cost_search<P, St, A, C>(problem: &P) -> Vec<A>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    UniformCostSearch::new(problem)
        .find_first()
        .map(Path::into_actions)
        .unwrap_or_default()
}
