// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use bike_lease_model::prelude::*;
use bike_lease_solver::{batch::solve_batch, framework::Solver, greedy::GreedySolver};
use serde::{Deserialize, Serialize};
use std::{
    env,
    fmt::Display,
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

/// Settings of the synthetic benchmark ramp.
#[derive(Debug, Clone)]
struct BenchConfig {
    instances: usize,
    min_users: usize,
    max_users: usize,
    min_surplus: usize,
    max_surplus: usize,
    half_extent: i64,
    seed_base: u64,
    report_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            instances: 10,
            min_users: 50,
            max_users: 5_000,
            min_surplus: 5,
            max_surplus: 500,
            half_extent: 1_000,
            seed_base: 42,
            report_path: PathBuf::from("bench_results.json"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InstanceFile {
    users: Vec<(i64, i64)>,
    bikes: Vec<(i64, i64)>,
}

#[derive(Debug)]
enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Failed to read instance file: {}", e),
            LoadError::Json(e) => write!(f, "Failed to parse instance file: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

fn load_instance(path: &Path) -> Result<LeaseProblem<i64>, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let file: InstanceFile = serde_json::from_reader(reader)?;
    Ok(LeaseProblem::from_coordinates(file.users, file.bikes))
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    half_extent: i64,
    users: usize,
    bikes: usize,
    placement: String,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    total_distance: i64,
    max_distance: Option<i64>,
    p50_distance: f64,
    p90_distance: f64,
    idle_bikes: usize,
    elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct BenchmarkReport {
    description: String,
    batch_elapsed_ms: u128,
    instances: Vec<RunResult>,
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

fn demo_scenarios() -> Vec<(&'static str, Vec<(i64, i64)>, Vec<(i64, i64)>)> {
    vec![
        (
            "three users",
            vec![(0, 0), (1, 1), (2, 0)],
            vec![(1, 0), (2, 2), (2, 1)],
        ),
        (
            "six users",
            vec![(0, 0), (3, 4), (2, 5), (1, 1), (5, 2), (4, 3)],
            vec![(1, 2), (4, 0), (2, 3), (5, 5), (1, 4), (3, 1)],
        ),
        (
            "far first user",
            vec![(7, 2), (2, 5), (1, 1)],
            vec![(0, 0), (1, 4), (0, 1)],
        ),
        (
            "spare bike",
            vec![(0, 0), (1, 1), (3, 3), (5, 0), (6, 11)],
            vec![(1, 0), (2, 2), (2, 1), (6, 6), (10, 10), (2, 3)],
        ),
    ]
}

fn run_demos(solver: &GreedySolver) -> Result<(), Box<dyn std::error::Error>> {
    for (name, users, bikes) in demo_scenarios() {
        let problem = LeaseProblem::from_coordinates(users, bikes);
        let solution = solver.solve(&problem)?;
        solution.validate(&problem)?;

        println!("Scenario: {}", name);
        print!("{}", solution);
        println!("{}", solution.stats());
        println!();
    }
    Ok(())
}

fn run_file(solver: &GreedySolver, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let problem = load_instance(path)?;
    info!(
        users = problem.user_count(),
        bikes = problem.bike_count(),
        "Loaded {}",
        path.display()
    );

    let t0 = Instant::now();
    let solution = solver.solve(&problem)?;
    let elapsed = t0.elapsed();
    solution.validate(&problem)?;

    print!("{}", solution);
    println!("{}", solution.stats());
    info!(elapsed_us = elapsed.as_micros() as u64, "Solved instance");
    Ok(())
}

fn run_benchmark(
    solver: &GreedySolver,
    cfg: &BenchConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut infos = Vec::with_capacity(cfg.instances);
    let mut problems = Vec::with_capacity(cfg.instances);

    for i in 0..cfg.instances {
        let users = interpolate_u(cfg.min_users, cfg.max_users, i, cfg.instances);
        let surplus = interpolate_u(cfg.min_surplus, cfg.max_surplus, i, cfg.instances);
        let seed = cfg.seed_base + i as u64;

        // Odd instances cluster their bikes.
        let mut builder = InstanceGenConfigBuilder::new()
            .half_extent(cfg.half_extent)
            .amount_users(users)
            .bike_surplus(surplus)
            .seed(seed);
        builder = if i % 2 == 0 {
            builder.placement_uniform()
        } else {
            builder.placement_hotspots(4, cfg.half_extent / 10)
        };

        let gen_cfg = builder.build()?;
        infos.push(InstanceInfo {
            idx: i,
            seed,
            half_extent: gen_cfg.half_extent(),
            users: gen_cfg.amount_users(),
            bikes: gen_cfg.amount_bikes(),
            placement: gen_cfg.placement().to_string(),
        });
        let mut generator: InstanceGenerator = gen_cfg.into();
        problems.push(generator.generate());
    }

    let t_batch = Instant::now();
    let batch = solve_batch(solver, &problems);
    let batch_elapsed = t_batch.elapsed();
    info!(
        instances = problems.len(),
        elapsed_ms = batch_elapsed.as_millis() as u64,
        "Batch solved"
    );

    let mut results = Vec::with_capacity(problems.len());
    for ((info, problem), batch_result) in infos.into_iter().zip(&problems).zip(batch) {
        let batch_solution = batch_result?;

        // Time each instance on its own as well; the batch timing is shared.
        let t0 = Instant::now();
        let solution = solver.solve(problem)?;
        let elapsed = t0.elapsed();

        if solution.to_pairs() != batch_solution.to_pairs() {
            warn!(idx = info.idx, "Batch result differs from sequential run");
        }
        solution.validate(problem)?;

        let stats = solution.stats();
        info!(
            idx = info.idx,
            users = info.users,
            total = stats.total_distance().value(),
            "Instance done"
        );
        results.push(RunResult {
            instance: info,
            total_distance: stats.total_distance().value(),
            max_distance: stats.max_distance().map(|d| d.value()),
            p50_distance: stats.p50_distance(),
            p90_distance: stats.p90_distance(),
            idle_bikes: stats.idle_bikes(),
            elapsed_us: elapsed.as_micros(),
        });
    }

    let report = BenchmarkReport {
        description: format!(
            "Greedy nearest-bike assignment: {} instances from {} to {} users.",
            cfg.instances, cfg.min_users, cfg.max_users
        ),
        batch_elapsed_ms: batch_elapsed.as_millis(),
        instances: results,
    };

    let file = File::create(&cfg.report_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report)?;

    println!("Wrote: {}", cfg.report_path.display());
    Ok(())
}

fn main() -> ExitCode {
    enable_tracing();

    let solver = GreedySolver::new();
    let outcome = match env::args_os().nth(1) {
        Some(path) => run_file(&solver, Path::new(&path)),
        None => run_demos(&solver).and_then(|_| run_benchmark(&solver, &BenchConfig::default())),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate_u(10, 100, 0, 10), 10);
        assert_eq!(interpolate_u(10, 100, 9, 10), 100);
        assert_eq!(interpolate_u(10, 100, 0, 1), 100);
    }

    #[test]
    fn test_demo_scenarios_validate() {
        let solver = GreedySolver::new();
        for (name, users, bikes) in demo_scenarios() {
            let problem = LeaseProblem::from_coordinates(users, bikes);
            let solution = solver.solve(&problem).unwrap();
            assert!(solution.validate(&problem).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_load_instance_from_json() {
        let path = env::temp_dir().join(format!("bike-lease-load-{}.json", std::process::id()));
        {
            let mut f = File::create(&path).unwrap();
            write!(f, r#"{{"users": [[0, 0], [1, 1]], "bikes": [[1, 0], [2, 2]]}}"#).unwrap();
        }
        let problem = load_instance(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(problem.user_count(), 2);
        assert_eq!(problem.bike_count(), 2);
    }

    #[test]
    fn test_load_instance_missing_file() {
        let path = env::temp_dir().join("bike-lease-does-not-exist.json");
        assert!(matches!(load_instance(&path), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_load_instance_bad_json() {
        let path = env::temp_dir().join(format!("bike-lease-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{\"users\": [[0, 0]]}").unwrap();
        let result = load_instance(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(LoadError::Json(_))));
    }
}
