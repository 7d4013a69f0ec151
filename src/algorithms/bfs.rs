//! Breadth-first search.

use std::marker::PhantomData;

use rustc_hash::FxHashSet;

use crate::cost::Cost;
use crate::frontier::Frontier;
use crate::frontier::Queue;
use crate::problem::SearchProblem;
use crate::search::SearchStats;
use crate::search::SearchTree;
use crate::search::verify_path;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

/// Breadth-first search.
///
/// States are marked as visited when they are enqueued, so each state is
/// expanded at most once. The queue holds nodes in non-decreasing depth, so
/// the first goal dequeued has the fewest actions. Step costs are ignored
/// for ordering (but still added up in the returned `Path`).
#[derive(Debug)]
pub struct BreadthFirstSearch<'p, P, St, A, C>
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

impl<'p, P, St, A, C> BreadthFirstSearch<'p, P, St, A, C>
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

    /// Runs the search until the first goal is dequeued.
    ///
    /// Returns `None` when the queue runs out.
    #[must_use]
    pub fn find_first(&mut self) -> Option<Path<St, A, C>> {
        let tree = SearchTree::<St, A, C>::new();
        let mut open = Queue::new();
        let mut visited = FxHashSet::<St>::default();
        self.stats = SearchStats::default();

        let start = self.problem.start_state();
        log::debug!("BFS: Searching from {start:?}");
        visited.insert(start);
        open.push(tree.root(start));

        let mut found = None;
        while let Some(node) = open.pop() {
            let state = *node.state();
            if self.problem.is_goal_state(&state) {
                found = Some(node.path());
                break;
            }

            self.stats.expanded += 1;
            log::trace!("BFS: Expanding {state:?} (depth={})", node.depth());
            for successor in self.problem.successors(&state) {
                // Mark on discovery, not on expansion.
                if visited.insert(successor.state) {
                    open.push(tree.child(node, &successor));
                }
            }
            self.stats.saw_frontier(open.len());
        }

        self.stats.generated = tree.len();
        self.stats.tree_bytes = tree.memory();
        match &found {
            Some(path) => {
                verify_path(self.problem, path);
                log::debug!(
                    "BFS: Reached {:?} with {} actions after {} expansions",
                    path.end,
                    path.len(),
                    self.stats.expanded
                );
            }
            None => log::debug!(
                "BFS: Exhausted the queue after {} expansions ({} states visited)",
                self.stats.expanded,
                visited.len()
            ),
        }
        found
    }

    /// Counters of the last run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Searches the shallowest nodes first.
///
/// Returns the fewest actions that reach a goal, or nothing if no goal is
/// reachable (or the start is already a goal).
///
/// ```
/// use graph_search::algorithms::bfs::breadth_first_search;
/// use graph_search::problems::graph::GraphProblem;
///
/// let problem = GraphProblem::new('a')
///     .with_edge('a', "ab", 'b', 1u32)
///     .with_edge('b', "bc", 'c', 1u32)
///     .with_edge('a', "ac", 'c', 9u32)
///     .with_goal('c');
/// assert_eq!(breadth_first_search(&problem), vec!["ac"]);
/// ```
pub fn breadth_first_search<P, St, A, C>(problem: &P) -> Vec<A>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    BreadthFirstSearch::new(problem)
        .find_first()
        .map(Path::into_actions)
        .unwrap_or_default()
}
