//! Implementation of search algorithms.
//!
//! These algorithms can do path-finding on generic search problems. All of
//! them return the actions to a goal, and an empty list when there's no goal
//! to reach or the start is a goal already. Use
//! `SearchProblem::is_goal_state` on the start to tell both cases apart.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod ucs;

pub use astar::a_star_search;
pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;
pub use ucs::uniform_cost_search;

// Abbreviations
pub use a_star_search as astar;
pub use breadth_first_search as bfs;
pub use depth_first_search as dfs;
pub use uniform_cost_search as ucs;

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::heuristic::NullHeuristic;
    use crate::problem::SearchProblem;
    use crate::problem::replay_actions;
    use crate::problems::graph::GraphProblem;

    type Graph = GraphProblem<u32, u32, u32>;

    /// Cheapest cost to every reachable state (Bellman-Ford).
    fn cheapest(problem: &Graph, unit_costs: bool) -> FxHashMap<u32, u32> {
        let mut dist = FxHashMap::default();
        dist.insert(problem.start_state(), 0u32);
        loop {
            let mut changed = false;
            for (from, edge) in problem.edges() {
                let Some(&d) = dist.get(&from) else {
                    continue;
                };
                let c = if unit_costs { 1 } else { edge.cost };
                let candidate = d + c;
                if dist.get(&edge.state).is_none_or(|old| candidate < *old) {
                    dist.insert(edge.state, candidate);
                    changed = true;
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    fn nearest_goal(problem: &Graph, unit_costs: bool) -> Option<u32> {
        cheapest(problem, unit_costs)
            .into_iter()
            .filter(|(s, _)| problem.is_goal_state(s))
            .map(|(_, d)| d)
            .min()
    }

    /// A->B(1), A->C(5), B->D(1), C->D(1).
    fn diamond() -> GraphProblem<char, &'static str, u32> {
        GraphProblem::new('A')
            .with_edge('A', "A->B", 'B', 1)
            .with_edge('A', "A->C", 'C', 5)
            .with_edge('B', "B->D", 'D', 1)
            .with_edge('C', "C->D", 'D', 1)
            .with_goal('D')
    }

    #[test]
    fn diamond_cheapest() {
        let problem = diamond();
        assert_eq!(ucs(&problem), vec!["A->B", "B->D"]);
        assert_eq!(astar(&problem, &NullHeuristic), vec!["A->B", "B->D"]);
        assert_eq!(problem.cost_of_actions(&ucs(&problem)), Ok(2));
    }

    #[test]
    fn diamond_reachable() {
        let problem = diamond();

        let bfs_actions = bfs(&problem);
        assert_eq!(bfs_actions.len(), 2);
        assert_eq!(replay_actions(&problem, &bfs_actions).unwrap().0, 'D');

        let dfs_actions = dfs(&problem);
        assert_eq!(replay_actions(&problem, &dfs_actions).unwrap().0, 'D');
    }

    #[test]
    fn start_is_goal() {
        let problem = diamond().with_goal('A');
        assert!(dfs(&problem).is_empty());
        assert!(bfs(&problem).is_empty());
        assert!(ucs(&problem).is_empty());
        assert!(astar(&problem, &NullHeuristic).is_empty());
    }

    #[test]
    fn unreachable_goal() {
        let problem = GraphProblem::new('A')
            .with_edge('A', "A->B", 'B', 1u32)
            .with_edge('B', "B->A", 'A', 1u32)
            .with_edge('B', "B->C", 'C', 1u32)
            .with_edge('Z', "Z->Z", 'Z', 1u32)
            .with_goal('Z');
        assert!(!problem.is_goal_state(&problem.start_state()));

        assert!(dfs(&problem).is_empty());
        assert!(bfs(&problem).is_empty());
        assert!(ucs(&problem).is_empty());
        assert!(astar(&problem, &NullHeuristic).is_empty());
    }

    #[test]
    fn repeated_runs_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let problem = Graph::random(&mut rng, 40, 120, 9);

        assert_eq!(dfs(&problem), dfs(&problem));
        assert_eq!(bfs(&problem), bfs(&problem));
        assert_eq!(ucs(&problem), ucs(&problem));
        assert_eq!(
            astar(&problem, &NullHeuristic),
            astar(&problem, &NullHeuristic)
        );
    }

    #[test]
    fn random_graphs() {
        let mut solved = 0;
        for seed in 0..200u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let nodes = rng.random_range(2..30u32);
            let edges = rng.random_range(nodes as usize..nodes as usize * 3);
            let problem = Graph::random(&mut rng, nodes, edges, 10);

            let dfs_actions = dfs(&problem);
            let bfs_actions = bfs(&problem);
            let ucs_actions = ucs(&problem);
            let astar_actions = astar(&problem, &NullHeuristic);

            match nearest_goal(&problem, false) {
                None => {
                    assert!(dfs_actions.is_empty(), "seed={seed}");
                    assert!(bfs_actions.is_empty(), "seed={seed}");
                    assert!(ucs_actions.is_empty(), "seed={seed}");
                    assert!(astar_actions.is_empty(), "seed={seed}");
                }
                Some(cost) => {
                    solved += 1;
                    let depth = nearest_goal(&problem, true).unwrap();

                    let (end, _) = replay_actions(&problem, &dfs_actions).unwrap();
                    assert!(problem.is_goal_state(&end), "seed={seed}");

                    assert_eq!(bfs_actions.len() as u32, depth, "seed={seed}");
                    let (end, _) = replay_actions(&problem, &bfs_actions).unwrap();
                    assert!(problem.is_goal_state(&end), "seed={seed}");

                    assert_eq!(problem.cost_of_actions(&ucs_actions), Ok(cost), "seed={seed}");
                    assert_eq!(astar_actions, ucs_actions, "seed={seed}");
                }
            }
        }
        // Make sure the generator isn't only producing unsolvable graphs.
        assert!(solved > 20, "Only {solved} solvable graphs");
    }
}
