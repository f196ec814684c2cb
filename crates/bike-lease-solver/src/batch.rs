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

use crate::framework::Solver;
use bike_lease_core::GridVariable;
use bike_lease_model::{problem::LeaseProblem, sol::LeaseSolution};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Solves independent problems in parallel.
///
/// Every problem gets its own run and its own bike pool, so runs share no
/// mutable state. Results are returned in the order of `problems`.
#[instrument(level = "debug", skip_all, fields(problems = problems.len()))]
pub fn solve_batch<T, S>(
    solver: &S,
    problems: &[LeaseProblem<T>],
) -> Vec<Result<LeaseSolution<T>, S::Error>>
where
    T: GridVariable,
    S: Solver<T> + Sync,
    S::Error: Send,
{
    let results: Vec<_> = problems.par_iter().map(|p| solver.solve(p)).collect();
    debug!(
        failed = results.iter().filter(|r| r.is_err()).count(),
        "Batch finished"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy::{GreedySolver, GreedySolverError};
    use bike_lease_model::generator::{BikePlacementPolicy, InstanceGenConfig, InstanceGenerator};
    use static_assertions::assert_impl_all;

    assert_impl_all!(GreedySolver: Send, Sync);
    assert_impl_all!(LeaseProblem<i64>: Send, Sync);
    assert_impl_all!(LeaseSolution<i64>: Send);
    assert_impl_all!(GreedySolverError<i64>: Send, Sync);

    #[test]
    fn test_batch_matches_sequential_runs() {
        let mut generator = InstanceGenerator::new(
            InstanceGenConfig::new(30, 40, 4, BikePlacementPolicy::Uniform, 11).unwrap(),
        );
        let mut problems: Vec<LeaseProblem<i64>> = (0..16).map(|_| generator.generate()).collect();
        problems.push(LeaseProblem::from_coordinates([(0, 0), (1, 1)], [(2, 2)]));

        let solver = GreedySolver::new();
        let batch = solve_batch(&solver, &problems);
        assert_eq!(batch.len(), problems.len());

        for (p, r) in problems.iter().zip(batch) {
            assert_eq!(r, solver.solve(p));
        }
    }

    #[test]
    fn test_batch_empty() {
        let solver = GreedySolver::new();
        let out = solve_batch::<i64, _>(&solver, &[]);
        assert!(out.is_empty());
    }
}
