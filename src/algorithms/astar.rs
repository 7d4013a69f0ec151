use std::collections::hash_map::Entry;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::frontier::PriorityQueue;
use crate::heuristic::Heuristic;
use crate::problem::SearchProblem;
use crate::search::SearchStats;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;
use crate::search::verify_path;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

/// A* search.
///
/// Like `UniformCostSearch`, but nodes are ranked by `f = g + h`, where `h`
/// estimates the cost left to a goal. The best-cost table keeps plain `g`, so
/// deciding whether a path is better never looks at the heuristic; only the
/// order of expansion does.
///
/// Optimal paths are only guaranteed with admissible heuristics. That is not
/// checked.
#[derive(Debug)]
pub struct AStarSearch<'p, 'h, H, P, St, A, C>
where
    H: Heuristic<P, St, A, C>,
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    problem: &'p P,
    heuristic: &'h H,
    stats: SearchStats,

    _phantom_state: PhantomData<St>,
    _phantom_action: PhantomData<A>,
    _phantom_cost: PhantomData<C>,
}

impl<'p, 'h, H, P, St, A, C> AStarSearch<'p, 'h, H, P, St, A, C>
where
    H: Heuristic<P, St, A, C>,
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn new(problem: &'p P, heuristic: &'h H) -> Self {
        Self {
            problem,
            heuristic,
            stats: SearchStats::default(),

            _phantom_state: PhantomData,
            _phantom_action: PhantomData,
            _phantom_cost: PhantomData,
        }
    }

    #[inline(always)]
    #[must_use]
    fn h(&self, s: &St) -> C {
        let h = self.heuristic.estimate(s, self.problem);
        debug_assert!(h >= C::zero(), "Negative estimate {h} for {s:?}");
        h
    }

    /// Runs the search until the first goal is popped.
    ///
    /// Returns `None` when the open list runs out.
    #[must_use]
    pub fn find_first(&mut self) -> Option<Path<St, A, C>> {
        let tree = SearchTree::<St, A, C>::new();
        let mut open = PriorityQueue::<&SearchTreeNode<St, A, C>, C>::new();
        // Best known g for every state discovered so far. No h in here.
        let mut best_g = FxHashMap::<St, C>::default();
        self.stats = SearchStats::default();

        let start = self.problem.start_state();
        log::debug!("A*: Searching from {start:?}");
        best_g.insert(start, C::zero());
        // Alone in the open list, its rank doesn't matter.
        open.push(tree.root(start), C::zero());

        let mut found = None;
        while let Some((node, rank)) = open.pop_ranked() {
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
            log::trace!("A*: Expanding {state:?} (g={g}, f={})", rank.priority());
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
                let f = new_g.saturating_add(&self.h(&successor.state));
                open.push(tree.child(node, &successor), f);
            }
            self.stats.saw_frontier(open.len());
        }

        self.stats.generated = tree.len();
        self.stats.tree_bytes = tree.memory();
        match &found {
            Some(path) => {
                verify_path(self.problem, path);
                log::debug!(
                    "A*: Reached {:?} at cost {} after {} expansions",
                    path.end,
                    path.cost,
                    self.stats.expanded
                );
            }
            None => log::debug!(
                "A*: Exhausted the open list after {} expansions ({} states reached)",
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

/// Searches the node with the lowest combined cost and heuristic first.
///
/// Returns the actions to the first goal popped, or nothing if no goal is
/// reachable (or the start is already a goal). With an admissible heuristic
/// that's a cheapest path.
///
/// ```
/// use graph_search::algorithms::astar::a_star_search;
/// use graph_search::heuristic::NullHeuristic;
/// use graph_search::problems::graph::GraphProblem;
///
/// let problem = GraphProblem::new('a')
///     .with_edge('a', "ab", 'b', 1u32)
///     .with_edge('b', "bc", 'c', 1u32)
///     .with_edge('a', "ac", 'c', 9u32)
///     .with_goal('c');
/// assert_eq!(a_star_search(&problem, &NullHeuristic), vec!["ab", "bc"]);
/// ```
pub fn a_star_search<H, P, St, A, C>(problem: &P, heuristic: &H) -> Vec<A>
where
    H: Heuristic<P, St, A, C>,
    P: SearchProblem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    AStarSearch::new(problem, heuristic)
        .find_first()
        .map(Path::into_actions)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::ucs::UniformCostSearch;
    use crate::heuristic::NullHeuristic;
    use crate::problems::graph::GraphProblem;

    /// 0 - 1 - 2 - ... - 9, with a dead-end branch hanging from every node.
    fn corridor() -> GraphProblem<u32, char, u32> {
        let mut problem = GraphProblem::new(0u32).with_goal(9);
        for i in 0..9u32 {
            problem.add_edge(i, 'b', 100 + i, 1);
            problem.add_edge(i, 'f', i + 1, 1);
        }
        problem
    }

    fn distance_to_nine(s: &u32, _p: &GraphProblem<u32, char, u32>) -> u32 {
        if *s < 100 { 9 - s } else { 9 - (s - 100) + 1 }
    }

    #[test]
    fn heuristic_cuts_expansions() {
        let problem = corridor();

        let mut ucs = UniformCostSearch::new(&problem);
        let ucs_path = ucs.find_first().unwrap();

        let heuristic = distance_to_nine;
        let mut astar = AStarSearch::new(&problem, &heuristic);
        let astar_path = astar.find_first().unwrap();

        assert_eq!(astar_path.cost, 9);
        assert_eq!(astar_path, ucs_path);
        assert_eq!(astar.stats().expanded, 9);
        assert!(astar.stats().expanded < ucs.stats().expanded);
    }

    #[test]
    fn null_heuristic_matches_ucs() {
        let problem = corridor();

        let mut ucs = UniformCostSearch::new(&problem);
        let mut astar = AStarSearch::new(&problem, &NullHeuristic);
        assert_eq!(astar.find_first(), ucs.find_first());
        assert_eq!(astar.stats(), ucs.stats());
    }

    #[test]
    fn relaxation_ignores_the_heuristic() {
        // `a` looks great from `s` but is expensive to get to directly.
        let problem = GraphProblem::new('s')
            .with_edge('s', "s-a", 'a', 10u32)
            .with_edge('s', "s-b", 'b', 1u32)
            .with_edge('b', "b-a", 'a', 1u32)
            .with_edge('a', "a-g", 'g', 1u32)
            .with_goal('g');
        let h = |s: &char, _p: &GraphProblem<char, &str, u32>| -> u32 {
            match s {
                'a' => 1,
                'b' => 2,
                _ => 0,
            }
        };

        let mut search = AStarSearch::new(&problem, &h);
        let path = search.find_first().unwrap();
        assert_eq!(path.actions, vec!["s-b", "b-a", "a-g"]);
        assert_eq!(path.cost, 3);
    }
}
