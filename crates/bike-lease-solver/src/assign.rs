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
    framework::Solver,
    greedy::{GreedySolver, GreedySolverError},
};
use bike_lease_core::GridVariable;
use bike_lease_model::problem::LeaseProblem;

/// Assigns each user the closest available bike, first come first served.
///
/// `users` is in arrival order. The returned pairs follow the same order.
/// Fails with [`GreedySolverError::InsufficientBikes`] when there are fewer
/// bikes than users. The caller's slices are never modified.
///
/// # Examples
///
/// ```
/// use bike_lease_solver::assign;
///
/// let pairs = assign(&[(0i64, 0), (1, 1), (2, 0)], &[(1, 0), (2, 2), (2, 1)]).unwrap();
/// assert_eq!(pairs, vec![((0, 0), (1, 0)), ((1, 1), (2, 1)), ((2, 0), (2, 2))]);
///
/// assert!(assign::<i64>(&[(0, 0)], &[]).is_err());
/// ```
pub fn assign<T>(
    users: &[(T, T)],
    bikes: &[(T, T)],
) -> Result<Vec<((T, T), (T, T))>, GreedySolverError<T>>
where
    T: GridVariable,
{
    let problem = LeaseProblem::from_coordinates(users.iter().copied(), bikes.iter().copied());
    let solution = GreedySolver::new().solve(&problem)?;
    Ok(solution.to_pairs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_lease_model::err::InsufficientBikesError;

    #[test]
    fn test_assign_plain_tuples() {
        let users = [(0i64, 0), (3, 4), (2, 5), (1, 1), (5, 2), (4, 3)];
        let bikes = [(1i64, 2), (4, 0), (2, 3), (5, 5), (1, 4), (3, 1)];
        let got = assign(&users, &bikes).unwrap();
        assert_eq!(got.len(), users.len());
        assert_eq!(got[0], ((0, 0), (1, 2)));
        assert_eq!(got[5], ((4, 3), (5, 5)));
    }

    #[test]
    fn test_assign_leaves_inputs_untouched() {
        let users = vec![(0i64, 0), (0, 0)];
        let bikes = vec![(1i64, 0), (1, 0), (7, 7)];
        let snapshot = bikes.clone();
        let got = assign(&users, &bikes).unwrap();
        assert_eq!(got, vec![((0, 0), (1, 0)), ((0, 0), (1, 0))]);
        assert_eq!(bikes, snapshot);
    }

    #[test]
    fn test_assign_insufficient() {
        assert_eq!(
            assign::<i64>(&[(0, 0)], &[]),
            Err(GreedySolverError::InsufficientBikes(
                InsufficientBikesError::new(1, 0)
            ))
        );
    }
}
