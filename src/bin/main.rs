use std::path::PathBuf;

use anstream::println;
use clap::Parser;
use clap::ValueEnum;
use indoc::indoc;
use owo_colors::OwoColorize;

use graph_search::algorithms::astar::AStarSearch;
use graph_search::algorithms::bfs::BreadthFirstSearch;
use graph_search::algorithms::dfs::DepthFirstSearch;
use graph_search::algorithms::ucs::UniformCostSearch;
use graph_search::heuristic::Heuristic;
use graph_search::heuristic::NullHeuristic;
use graph_search::problems::maze_2d::Connectivity;
use graph_search::problems::maze_2d::ManhattanDistance;
use graph_search::problems::maze_2d::Maze2DAction;
use graph_search::problems::maze_2d::Maze2DCost;
use graph_search::problems::maze_2d::Maze2DProblem;
use graph_search::problems::maze_2d::Maze2DState;
use graph_search::problems::maze_2d::OctileDistance;
use graph_search::search::SearchStats;
use graph_search::space::Path;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

type MazePath = Path<Maze2DState, Maze2DAction, Maze2DCost>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Depth-first search
    Dfs,
    /// Breadth-first search
    Bfs,
    /// Uniform-cost search
    Ucs,
    /// A* search
    Astar,
}

impl Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Astar => "A*",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HeuristicChoice {
    /// Always zero
    Null,
    /// Straight lines only, inadmissible on 8-connected mazes
    Manhattan,
    /// Diagonals first, then straight lines
    Octile,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ConnectivityChoice {
    Four,
    Eight,
}

impl From<ConnectivityChoice> for Connectivity {
    fn from(c: ConnectivityChoice) -> Self {
        match c {
            ConnectivityChoice::Four => Connectivity::Four,
            ConnectivityChoice::Eight => Connectivity::Eight,
        }
    }
}

/// Solves text mazes with DFS, BFS, uniform-cost search and A*.
///
/// Mazes use '#' for walls, ' ' or '.' for floor, 'S' for the start and 'G'
/// for goals.
#[derive(Parser, Debug)]
#[clap(long_version = graph_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Algorithms to run
    ///
    /// DFS only avoids cycles along its current path and can take
    /// exponential time on open or 8-connected mazes.
    #[arg(short, long, value_enum, default_values = ["bfs", "ucs", "astar"])]
    algorithm: Vec<Algorithm>,

    /// Heuristic used by A*
    #[arg(long, value_enum, default_value = "octile")]
    heuristic: HeuristicChoice,

    #[arg(short, long, value_enum, default_value = "four")]
    connectivity: ConnectivityChoice,

    /// Log filter, as in `RUST_LOG`
    #[arg(long, env = "GRAPH_SEARCH_LOG", default_value = "warn")]
    log: String,

    /// Maze files, a small built-in maze is solved when omitted
    #[arg()]
    problems: Vec<PathBuf>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn run_astar<H>(problem: &Maze2DProblem, heuristic: &H) -> (Option<MazePath>, SearchStats)
where
    H: Heuristic<Maze2DProblem, Maze2DState, Maze2DAction, Maze2DCost>,
{
    let mut search = AStarSearch::new(problem, heuristic);
    let path = search.find_first();
    (path, *search.stats())
}

fn run(
    problem: &Maze2DProblem,
    algorithm: Algorithm,
    heuristic: HeuristicChoice,
) -> (Option<MazePath>, SearchStats) {
    match algorithm {
        Algorithm::Dfs => {
            let mut search = DepthFirstSearch::new(problem);
            let path = search.find_first();
            (path, *search.stats())
        }
        Algorithm::Bfs => {
            let mut search = BreadthFirstSearch::new(problem);
            let path = search.find_first();
            (path, *search.stats())
        }
        Algorithm::Ucs => {
            let mut search = UniformCostSearch::new(problem);
            let path = search.find_first();
            (path, *search.stats())
        }
        Algorithm::Astar => match heuristic {
            HeuristicChoice::Null => run_astar(problem, &NullHeuristic),
            HeuristicChoice::Manhattan => run_astar(problem, &ManhattanDistance),
            HeuristicChoice::Octile => run_astar(problem, &OctileDistance),
        },
    }
}

fn solve(problem: &Maze2DProblem, args: &Args) -> std::io::Result<()> {
    println!("{problem}");

    for algorithm in &args.algorithm {
        let (path, stats) = run(problem, *algorithm, args.heuristic);
        match path {
            Some(path) => {
                let moves: String = path.actions.iter().map(ToString::to_string).collect();
                println!(
                    "{}: {} actions, cost {} {}",
                    algorithm.name().bold(),
                    path.len(),
                    path.cost.green(),
                    moves
                );
            }
            None => println!("{}: {}", algorithm.name().bold(), "No path".red()),
        }
        stats.write_stats(algorithm.name(), anstream::stdout())?;
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.color.write_global();
    env_logger::Builder::new().parse_filters(&args.log).init();

    let connectivity = Connectivity::from(args.connectivity);

    if args.problems.is_empty() {
        let maze_str = indoc! {"
          #######
          #S    #
          # ### #
          #   #G#
          #######
        "};
        let problem = Maze2DProblem::try_from(maze_str)?.with_connectivity(connectivity);
        solve(&problem, &args)?;
    }

    for p in &args.problems {
        println!("{} {:?}", "Maze".yellow(), p);
        let problem = Maze2DProblem::try_from(p.as_path())?.with_connectivity(connectivity);
        solve(&problem, &args)?;
    }

    Ok(())
}
