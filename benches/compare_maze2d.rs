use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use glob::glob;

use graph_search::algorithms::astar::a_star_search;
use graph_search::algorithms::bfs::breadth_first_search;
use graph_search::algorithms::dfs::depth_first_search;
use graph_search::algorithms::ucs::uniform_cost_search;
use graph_search::problems::maze_2d::Connectivity;
use graph_search::problems::maze_2d::Maze2DProblem;
use graph_search::problems::maze_2d::OctileDistance;

fn compare_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Maze2D Search");

    for path in glob("data/mazes/*.txt")
        .unwrap()
        .filter_map(std::result::Result::ok)
    {
        let name = path.file_name().unwrap().to_str().unwrap().to_owned();
        let base_problem = Maze2DProblem::try_from(path.as_path()).unwrap();
        let (x, y) = base_problem.dimensions();

        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let instance_name = format!("{name}[{x}x{y}]:{connectivity}");
            let problem = base_problem.clone().with_connectivity(connectivity);

            // DFS only avoids cycles along its own path, so diagonals make it
            // blow up on these mazes.
            if connectivity == Connectivity::Four {
                group.bench_with_input(BenchmarkId::new("DFS", &instance_name), &problem, |b, p| {
                    b.iter(|| depth_first_search(p))
                });
            }
            group.bench_with_input(BenchmarkId::new("BFS", &instance_name), &problem, |b, p| {
                b.iter(|| breadth_first_search(p))
            });
            group.bench_with_input(BenchmarkId::new("UCS", &instance_name), &problem, |b, p| {
                b.iter(|| uniform_cost_search(p))
            });
            group.bench_with_input(BenchmarkId::new("A*", &instance_name), &problem, |b, p| {
                b.iter(|| a_star_search(p, &OctileDistance))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, compare_search);
criterion_main!(benches);
