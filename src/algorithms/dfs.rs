//! Depth-first search.

use std::marker::PhantomData;

use crate::cost::Cost;
use crate::frontier::Frontier;
use crate::frontier::Stack;
use crate::problem::SearchProblem;
use crate::search::SearchStats;
use crate::search::SearchTree;
use crate::search::verify_path;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

/// Depth-first search with per-path cycle checking.
///
/// There's no global visited set. A node only refuses successors already on
/// its own path from the start, so a state may sit in the stack several times
/// through different paths. The first goal popped is returned, which is not
/// necessarily the cheapest nor the shortest.
#[derive(Debug)]
pub struct DepthFirstSearch<'p, P, St, A, C>
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

impl<'p, P, St, A, C> DepthFirstSearch<'p, P, St, A, C>
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
    /// Returns `None` when the stack runs out.
    #[must_use]
    pub fn find_first(&mut self) -> Option<Path<St, A, C>> {
        let tree = SearchTree::<St, A, C>::new();
        let mut open = Stack::new();
        self.stats = SearchStats::default();

        let start = self.problem.start_state();
        log::debug!("DFS: Searching from {start:?}");
        open.push(tree.root(start));

        let mut found = None;
        while let Some(node) = open.pop() {
            let state = *node.state();
            if self.problem.is_goal_state(&state) {
                found = Some(node.path());
                break;
            }

            self.stats.expanded += 1;
            log::trace!("DFS: Expanding {state:?} (depth={})", node.depth());
            for successor in self.problem.successors(&state) {
                // Only this path's own states are off-limits.
                if node.on_path(&successor.state) {
                    continue;
                }
                open.push(tree.child(node, &successor));
            }
            self.stats.saw_frontier(open.len());
        }

        self.stats.generated = tree.len();
        self.stats.tree_bytes = tree.memory();
        match &found {
            Some(path) => {
                verify_path(self.problem, path);
                log::debug!(
                    "DFS: Reached {:?} with {} actions after {} expansions",
                    path.end,
                    path.len(),
                    self.stats.expanded
                );
            }
            None => log::debug!(
                "DFS: Exhausted the stack after {} expansions",
                self.stats.expanded
            ),
        }
        found
    }

    /// Counters of the last run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Searches the deepest nodes first.
///
/// Returns the actions to the first goal found, or nothing if no goal is
/// reachable (or the start is already a goal).
///
/// ```
/// use graph_search::algorithms::dfs::depth_first_search;
/// use graph_search::problems::graph::GraphProblem;
///
/// let problem = GraphProblem::new('a')
///     .with_edge('a', "ab", 'b', 1u32)
///     .with_edge('b', "bc", 'c', 1u32)
///     .with_goal('c');
/// assert_eq!(depth_first_search(&problem), vec!["ab", "bc"]);
/// ```
pub fn depth_first_search<P, St, A, C>(problem: &P) -> Vec<A>
where
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    DepthFirstSearch::new(problem)
        .find_first()
        .map(Path::into_actions)
        .unwrap_or_default()
}
