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

use crate::{framework::Solver, pool::BikePool};
use bike_lease_core::GridVariable;
use bike_lease_model::{
    err::{DistanceOverflowError, InsufficientBikesError},
    problem::LeaseProblem,
    sol::{Assignment, LeaseSolution},
};
use std::fmt::Display;
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreedySolverError<T: GridVariable> {
    InsufficientBikes(InsufficientBikesError),
    DistanceOverflow(DistanceOverflowError<T>),
}

impl<T: GridVariable> Display for GreedySolverError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GreedySolverError::InsufficientBikes(e) => write!(f, "{e}"),
            GreedySolverError::DistanceOverflow(e) => write!(f, "{e}"),
        }
    }
}

impl<T: GridVariable> std::error::Error for GreedySolverError<T> {}

impl<T: GridVariable> From<InsufficientBikesError> for GreedySolverError<T> {
    fn from(value: InsufficientBikesError) -> Self {
        GreedySolverError::InsufficientBikes(value)
    }
}

impl<T: GridVariable> From<DistanceOverflowError<T>> for GreedySolverError<T> {
    fn from(value: DistanceOverflowError<T>) -> Self {
        GreedySolverError::DistanceOverflow(value)
    }
}

/// First come, first served nearest-bike assignment.
///
/// Users are processed in arrival order. Each one scans the bikes that are
/// still available and takes the closest by Manhattan distance; among equally
/// close bikes the one earliest in the pool wins. Earlier decisions are never
/// revisited, so the result is not a minimum cost matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> Self {
        Self
    }
}

impl<T> Solver<T> for GreedySolver
where
    T: GridVariable,
{
    type Error = GreedySolverError<T>;

    #[instrument(
        level = "debug",
        skip_all,
        fields(users = problem.user_count(), bikes = problem.bike_count()),
        err(Display)
    )]
    fn solve(&self, problem: &LeaseProblem<T>) -> Result<LeaseSolution<T>, Self::Error> {
        problem.check_coverage()?;

        let mut pool = BikePool::from(problem);
        let mut assignments = Vec::with_capacity(problem.user_count());

        for user in problem.iter_users() {
            let nearest = pool.nearest(user)?.ok_or_else(|| {
                InsufficientBikesError::new(problem.user_count(), problem.bike_count())
            })?;
            let bike = pool.take(nearest.index()).ok_or_else(|| {
                InsufficientBikesError::new(problem.user_count(), problem.bike_count())
            })?;
            trace!(
                user = %user.id(),
                bike = %bike.id(),
                distance = %nearest.distance(),
                remaining = pool.len(),
                "Assigned nearest bike"
            );
            assignments.push(Assignment::try_new(*user, bike)?);
        }

        let solution = LeaseSolution::new(assignments, pool.len());
        debug!(
            total_distance = %solution.stats().total_distance(),
            idle_bikes = solution.stats().idle_bikes(),
            "Greedy lease finished"
        );
        Ok(solution)
    }
}
