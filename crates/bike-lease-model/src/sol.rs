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

use crate::{
    err::{
        AssignmentCountMismatchError, BikePositionMismatchError, BikeReusedError,
        DistanceOverflowError, NotGreedyError, SolutionValidationError, UnknownBikeError,
        UserOrderMismatchError,
    },
    id::{BikeId, UserId},
    lease::{Bike, User},
    problem::LeaseProblem,
};
use bike_lease_core::{GridVariable, grid::GridDistance};
use std::{collections::HashMap, fmt::Display};

/// One completed pairing of a user with a bike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment<T = i64>
where
    T: GridVariable,
{
    user: User<T>,
    bike: Bike<T>,
    distance: GridDistance<T>,
}

impl<T: GridVariable> Assignment<T> {
    #[inline]
    pub fn try_new(user: User<T>, bike: Bike<T>) -> Result<Self, DistanceOverflowError<T>> {
        let distance = user
            .position()
            .checked_manhattan_distance(&bike.position())
            .ok_or_else(|| {
                DistanceOverflowError::new(user.id(), bike.id(), user.position(), bike.position())
            })?;
        Ok(Self {
            user,
            bike,
            distance,
        })
    }

    #[inline]
    pub fn user(&self) -> &User<T> {
        &self.user
    }

    #[inline]
    pub fn bike(&self) -> &Bike<T> {
        &self.bike
    }

    #[inline]
    pub fn distance(&self) -> GridDistance<T> {
        self.distance
    }

    #[inline]
    pub fn to_pair(&self) -> ((T, T), (T, T)) {
        (
            self.user.position().into_tuple(),
            self.bike.position().into_tuple(),
        )
    }
}

impl<T: GridVariable> Display for Assignment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User: {}, Bike: {}",
            self.user.position(),
            self.bike.position()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaseStats<T = i64>
where
    T: GridVariable,
{
    /// Sum of all assigned distances, saturating at `T::max_value()`.
    total_distance: GridDistance<T>,
    max_distance: Option<GridDistance<T>>,
    p50_distance: f64,
    p90_distance: f64,
    /// Bikes still in the pool after every user was served.
    idle_bikes: usize,
}

impl<T: GridVariable> LeaseStats<T> {
    fn from_assignments(assignments: &[Assignment<T>], idle_bikes: usize) -> Self {
        let total_distance = assignments
            .iter()
            .fold(GridDistance::zero(), |acc, a| acc.saturating_add(a.distance()));
        let max_distance = assignments.iter().map(|a| a.distance()).max();
        let distances: Vec<f64> = assignments
            .iter()
            .filter_map(|a| a.distance().value().to_f64())
            .collect();

        Self {
            total_distance,
            max_distance,
            p50_distance: stats::percentile(&distances, 0.50),
            p90_distance: stats::percentile(&distances, 0.90),
            idle_bikes,
        }
    }

    #[inline]
    pub fn total_distance(&self) -> GridDistance<T> {
        self.total_distance
    }

    #[inline]
    pub fn max_distance(&self) -> Option<GridDistance<T>> {
        self.max_distance
    }

    #[inline]
    pub fn p50_distance(&self) -> f64 {
        self.p50_distance
    }

    #[inline]
    pub fn p90_distance(&self) -> f64 {
        self.p90_distance
    }

    #[inline]
    pub fn idle_bikes(&self) -> usize {
        self.idle_bikes
    }
}

impl<T: GridVariable> Display for LeaseStats<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lease statistics:")?;
        writeln!(f, "  Total distance: {}", self.total_distance.value())?;
        match self.max_distance {
            Some(d) => writeln!(f, "  Max distance: {}", d.value())?,
            None => writeln!(f, "  Max distance: -")?,
        }
        writeln!(f, "  P50 distance: {:.2}", self.p50_distance)?;
        writeln!(f, "  P90 distance: {:.2}", self.p90_distance)?;
        writeln!(f, "  Idle bikes: {}", self.idle_bikes)?;
        Ok(())
    }
}

/// The ordered result of a lease run: one assignment per user, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaseSolution<T = i64>
where
    T: GridVariable,
{
    assignments: Vec<Assignment<T>>,
    stats: LeaseStats<T>,
}

impl<T: GridVariable> LeaseSolution<T> {
    #[inline]
    pub fn new(assignments: Vec<Assignment<T>>, idle_bikes: usize) -> Self {
        let stats = LeaseStats::from_assignments(&assignments, idle_bikes);
        Self { assignments, stats }
    }

    #[inline]
    pub fn assignments(&self) -> &[Assignment<T>] {
        &self.assignments
    }

    #[inline]
    pub fn into_assignments(self) -> Vec<Assignment<T>> {
        self.assignments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Assignment<T>> {
        self.assignments.iter()
    }

    #[inline]
    pub fn stats(&self) -> &LeaseStats<T> {
        &self.stats
    }

    /// The bike assigned to `user`, if the user is part of this solution.
    #[inline]
    pub fn bike_of(&self, user: UserId) -> Option<&Bike<T>> {
        self.assignments
            .get(user.value())
            .filter(|a| a.user().id() == user)
            .map(|a| a.bike())
    }

    /// The solution as plain `((user_x, user_y), (bike_x, bike_y))` pairs.
    #[inline]
    pub fn to_pairs(&self) -> Vec<((T, T), (T, T))> {
        self.assignments.iter().map(|a| a.to_pair()).collect()
    }

    /// Checks this solution against `problem`.
    ///
    /// Verifies that there is exactly one assignment per user in arrival order,
    /// that every bike exists in the problem and is used at most once, and that
    /// each user received the first nearest bike still available at its turn.
    pub fn validate(&self, problem: &LeaseProblem<T>) -> Result<(), SolutionValidationError<T>> {
        if self.assignments.len() != problem.user_count() {
            return Err(SolutionValidationError::AssignmentCountMismatch(
                AssignmentCountMismatchError::new(problem.user_count(), self.assignments.len()),
            ));
        }

        let mut pool: Vec<Bike<T>> = problem.bikes().to_vec();
        let mut owners: HashMap<BikeId, UserId> = HashMap::with_capacity(self.assignments.len());

        for (index, (a, expected_user)) in self.assignments.iter().zip(problem.users()).enumerate()
        {
            if a.user() != expected_user {
                return Err(SolutionValidationError::UserOrderMismatch(
                    UserOrderMismatchError::new(index, expected_user.id(), a.user().id()),
                ));
            }

            let user_id = a.user().id();
            let bike_id = a.bike().id();
            let Some(known) = problem.get_bike(bike_id) else {
                return Err(SolutionValidationError::UnknownBike(UnknownBikeError::new(
                    user_id, bike_id,
                )));
            };
            if known.position() != a.bike().position() {
                return Err(SolutionValidationError::BikePositionMismatch(
                    BikePositionMismatchError::new(
                        bike_id,
                        known.position(),
                        a.bike().position(),
                    ),
                ));
            }
            if let Some(&first) = owners.get(&bike_id) {
                return Err(SolutionValidationError::BikeReused(BikeReusedError::new(
                    bike_id, first, user_id,
                )));
            }
            owners.insert(bike_id, user_id);

            let user_pos = a.user().position();
            let mut nearest: Option<(usize, GridDistance<T>)> = None;
            for (i, b) in pool.iter().enumerate() {
                let d = user_pos
                    .checked_manhattan_distance(&b.position())
                    .ok_or_else(|| {
                        DistanceOverflowError::new(user_id, b.id(), user_pos, b.position())
                    })?;
                if nearest.is_none_or(|(_, best)| d < best) {
                    nearest = Some((i, d));
                }
            }

            // The bike is known and unused, so it is still in the pool and `nearest` is set.
            if let Some((i, d)) = nearest {
                let expected = pool[i];
                if expected.id() != bike_id {
                    return Err(SolutionValidationError::NotGreedy(NotGreedyError::new(
                        user_id,
                        bike_id,
                        a.distance(),
                        expected.id(),
                        d,
                    )));
                }
                pool.remove(i);
            }
        }

        Ok(())
    }
}

impl<T: GridVariable> Display for LeaseSolution<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for a in &self.assignments {
            writeln!(f, "{}", a)?;
        }
        Ok(())
    }
}

impl<'a, T: GridVariable> IntoIterator for &'a LeaseSolution<T> {
    type Item = &'a Assignment<T>;
    type IntoIter = std::slice::Iter<'a, Assignment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

mod stats {
    use statrs::statistics::{Data, OrderStatistics};

    #[inline]
    pub fn percentile(data: &[f64], p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        let vals: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        if vals.is_empty() {
            return 0.0;
        }
        let mut d = Data::new(vals);
        d.quantile(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_lease_core::grid::GridPosition;

    fn user(id: usize, x: i64, y: i64) -> User {
        User::new(UserId::new(id), GridPosition::new(x, y))
    }

    fn bike(id: usize, x: i64, y: i64) -> Bike {
        Bike::new(BikeId::new(id), GridPosition::new(x, y))
    }

    fn asg(u: User, b: Bike) -> Assignment {
        Assignment::try_new(u, b).expect("distance fits")
    }

    fn first_problem() -> LeaseProblem {
        LeaseProblem::from_coordinates([(0, 0), (1, 1), (2, 0)], [(1, 0), (2, 2), (2, 1)])
    }

    #[test]
    fn test_assignment_distance_and_display() {
        let a = asg(user(0, 7, 2), bike(1, 1, 4));
        assert_eq!(a.distance(), GridDistance::new(8));
        assert_eq!(a.to_string(), "User: (7, 2), Bike: (1, 4)");
        assert_eq!(a.to_pair(), ((7, 2), (1, 4)));
    }

    #[test]
    fn test_assignment_overflow_is_reported() {
        let u = User::new(UserId::new(0), GridPosition::new(i8::MIN, 0));
        let b = Bike::new(BikeId::new(3), GridPosition::new(i8::MAX, 0));
        let err = Assignment::try_new(u, b).unwrap_err();
        assert_eq!(err.user(), UserId::new(0));
        assert_eq!(err.bike(), BikeId::new(3));
    }

    #[test]
    fn test_solution_display_lists_pairs_in_order() {
        let sol = LeaseSolution::new(
            vec![
                asg(user(0, 0, 0), bike(0, 1, 0)),
                asg(user(1, 1, 1), bike(2, 2, 1)),
            ],
            1,
        );
        assert_eq!(
            sol.to_string(),
            "User: (0, 0), Bike: (1, 0)\nUser: (1, 1), Bike: (2, 1)\n"
        );
    }

    #[test]
    fn test_stats() {
        let sol = LeaseSolution::new(
            vec![
                asg(user(0, 0, 0), bike(0, 1, 0)),
                asg(user(1, 1, 1), bike(2, 2, 1)),
                asg(user(2, 2, 0), bike(1, 2, 2)),
            ],
            0,
        );
        let stats = sol.stats();
        assert_eq!(stats.total_distance(), GridDistance::new(4));
        assert_eq!(stats.max_distance(), Some(GridDistance::new(2)));
        assert_eq!(stats.idle_bikes(), 0);
        assert!(stats.p50_distance() >= 1.0 && stats.p50_distance() <= 2.0);
        assert!(stats.p90_distance() >= stats.p50_distance());
    }

    #[test]
    fn test_stats_empty() {
        let sol: LeaseSolution = LeaseSolution::new(Vec::new(), 4);
        assert!(sol.is_empty());
        assert_eq!(sol.stats().total_distance(), GridDistance::zero());
        assert_eq!(sol.stats().max_distance(), None);
        assert_eq!(sol.stats().p50_distance(), 0.0);
        assert_eq!(sol.stats().idle_bikes(), 4);
    }

    #[test]
    fn test_stats_display_prints_plain_numbers() {
        let sol = LeaseSolution::new(
            vec![
                asg(user(0, 0, 0), bike(0, 1, 0)),
                asg(user(1, 1, 1), bike(2, 2, 1)),
                asg(user(2, 2, 0), bike(1, 2, 2)),
            ],
            1,
        );
        let text = sol.stats().to_string();
        assert!(text.contains("  Total distance: 4\n"), "{text}");
        assert!(text.contains("  Max distance: 2\n"), "{text}");
        assert!(text.contains("  Idle bikes: 1\n"), "{text}");
        assert!(!text.contains("GridDistance"), "{text}");

        let empty: LeaseSolution = LeaseSolution::new(Vec::new(), 0);
        assert!(empty.stats().to_string().contains("  Max distance: -\n"));
    }

    #[test]
    fn test_bike_of() {
        let sol = LeaseSolution::new(vec![asg(user(0, 0, 0), bike(2, 5, 5))], 0);
        assert_eq!(sol.bike_of(UserId::new(0)).map(|b| b.id()), Some(BikeId::new(2)));
        assert!(sol.bike_of(UserId::new(1)).is_none());
    }

    #[test]
    fn test_validate_ok() {
        let problem = first_problem();
        let sol = LeaseSolution::new(
            vec![
                asg(user(0, 0, 0), bike(0, 1, 0)),
                asg(user(1, 1, 1), bike(2, 2, 1)),
                asg(user(2, 2, 0), bike(1, 2, 2)),
            ],
            0,
        );
        assert!(sol.validate(&problem).is_ok());
    }

    #[test]
    fn test_validate_err_count_mismatch() {
        let problem = first_problem();
        let sol = LeaseSolution::new(vec![asg(user(0, 0, 0), bike(0, 1, 0))], 2);
        let err = sol.validate(&problem).unwrap_err();
        assert_eq!(
            err,
            SolutionValidationError::AssignmentCountMismatch(AssignmentCountMismatchError::new(
                3, 1
            ))
        );
    }

    #[test]
    fn test_validate_err_reordered_users() {
        let problem = first_problem();
        let sol = LeaseSolution::new(
            vec![
                asg(user(1, 1, 1), bike(2, 2, 1)),
                asg(user(0, 0, 0), bike(0, 1, 0)),
                asg(user(2, 2, 0), bike(1, 2, 2)),
            ],
            0,
        );
        let err = sol.validate(&problem).unwrap_err();
        assert!(matches!(err, SolutionValidationError::UserOrderMismatch(_)));
    }

    #[test]
    fn test_validate_err_unknown_bike() {
        let problem = first_problem();
        let sol = LeaseSolution::new(
            vec![
                asg(user(0, 0, 0), bike(9, 1, 0)),
                asg(user(1, 1, 1), bike(2, 2, 1)),
                asg(user(2, 2, 0), bike(1, 2, 2)),
            ],
            0,
        );
        let err = sol.validate(&problem).unwrap_err();
        assert!(matches!(err, SolutionValidationError::UnknownBike(_)));
    }

    #[test]
    fn test_validate_err_bike_position_mismatch() {
        let problem = first_problem();
        let sol = LeaseSolution::new(
            vec![
                asg(user(0, 0, 0), bike(0, 0, 1)),
                asg(user(1, 1, 1), bike(2, 2, 1)),
                asg(user(2, 2, 0), bike(1, 2, 2)),
            ],
            0,
        );
        let err = sol.validate(&problem).unwrap_err();
        assert!(matches!(err, SolutionValidationError::BikePositionMismatch(_)));
    }

    #[test]
    fn test_validate_err_bike_reused() {
        let problem = LeaseProblem::from_coordinates([(0, 0), (0, 0)], [(1, 0), (1, 0)]);
        let sol = LeaseSolution::new(
            vec![
                asg(user(0, 0, 0), bike(0, 1, 0)),
                asg(user(1, 0, 0), bike(0, 1, 0)),
            ],
            1,
        );
        let err = sol.validate(&problem).unwrap_err();
        assert_eq!(
            err,
            SolutionValidationError::BikeReused(BikeReusedError::new(
                BikeId::new(0),
                UserId::new(0),
                UserId::new(1)
            ))
        );
    }

    #[test]
    fn test_validate_err_not_greedy() {
        let problem = first_problem();
        // User 0 takes (2, 2) although (1, 0) is closer.
        let sol = LeaseSolution::new(
            vec![
                asg(user(0, 0, 0), bike(1, 2, 2)),
                asg(user(1, 1, 1), bike(2, 2, 1)),
                asg(user(2, 2, 0), bike(0, 1, 0)),
            ],
            0,
        );
        let err = sol.validate(&problem).unwrap_err();
        assert_eq!(
            err,
            SolutionValidationError::NotGreedy(NotGreedyError::new(
                UserId::new(0),
                BikeId::new(1),
                GridDistance::new(4),
                BikeId::new(0),
                GridDistance::new(1),
            ))
        );
    }

    #[test]
    fn test_validate_err_tie_not_broken_by_pool_order() {
        // Both bikes are at distance 1; the first one in the pool must win.
        let problem = LeaseProblem::from_coordinates([(0, 0)], [(1, 0), (0, 1)]);
        let sol = LeaseSolution::new(vec![asg(user(0, 0, 0), bike(1, 0, 1))], 1);
        let err = sol.validate(&problem).unwrap_err();
        assert!(matches!(err, SolutionValidationError::NotGreedy(_)));
    }
}
