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

use crate::id::{BikeId, UserId};
use bike_lease_core::{
    GridVariable,
    grid::{GridDistance, GridPosition},
};
use std::fmt::Display;

/// The bike pool cannot cover every user of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsufficientBikesError {
    users: usize,
    bikes: usize,
}

impl InsufficientBikesError {
    #[inline]
    pub fn new(users: usize, bikes: usize) -> Self {
        Self { users, bikes }
    }

    #[inline]
    pub fn users(&self) -> usize {
        self.users
    }

    #[inline]
    pub fn bikes(&self) -> usize {
        self.bikes
    }

    /// Number of bikes missing to serve every user.
    #[inline]
    pub fn shortfall(&self) -> usize {
        self.users.saturating_sub(self.bikes)
    }
}

impl Display for InsufficientBikesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Insufficient bikes: {} users but only {} bikes available",
            self.users, self.bikes
        )
    }
}

impl std::error::Error for InsufficientBikesError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceOverflowError<T: GridVariable> {
    user: UserId,
    bike: BikeId,
    user_position: GridPosition<T>,
    bike_position: GridPosition<T>,
}

impl<T: GridVariable> DistanceOverflowError<T> {
    #[inline]
    pub fn new(
        user: UserId,
        bike: BikeId,
        user_position: GridPosition<T>,
        bike_position: GridPosition<T>,
    ) -> Self {
        Self {
            user,
            bike,
            user_position,
            bike_position,
        }
    }

    #[inline]
    pub fn user(&self) -> UserId {
        self.user
    }

    #[inline]
    pub fn bike(&self) -> BikeId {
        self.bike
    }

    #[inline]
    pub fn user_position(&self) -> GridPosition<T> {
        self.user_position
    }

    #[inline]
    pub fn bike_position(&self) -> GridPosition<T> {
        self.bike_position
    }
}

impl<T: GridVariable> Display for DistanceOverflowError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Distance between {} at {} and {} at {} overflows the coordinate type",
            self.user, self.user_position, self.bike, self.bike_position
        )
    }
}

impl<T: GridVariable> std::error::Error for DistanceOverflowError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignmentCountMismatchError {
    expected: usize,
    actual: usize,
}

impl AssignmentCountMismatchError {
    #[inline]
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }

    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    #[inline]
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl Display for AssignmentCountMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expected {} assignments, one per user, but found {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for AssignmentCountMismatchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserOrderMismatchError {
    index: usize,
    expected: UserId,
    actual: UserId,
}

impl UserOrderMismatchError {
    #[inline]
    pub fn new(index: usize, expected: UserId, actual: UserId) -> Self {
        Self {
            index,
            expected,
            actual,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn expected(&self) -> UserId {
        self.expected
    }

    #[inline]
    pub fn actual(&self) -> UserId {
        self.actual
    }
}

impl Display for UserOrderMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment {} belongs to {} but {} arrived at that position",
            self.index, self.actual, self.expected
        )
    }
}

impl std::error::Error for UserOrderMismatchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownBikeError {
    user: UserId,
    bike: BikeId,
}

impl UnknownBikeError {
    #[inline]
    pub fn new(user: UserId, bike: BikeId) -> Self {
        Self { user, bike }
    }

    #[inline]
    pub fn user(&self) -> UserId {
        self.user
    }

    #[inline]
    pub fn bike(&self) -> BikeId {
        self.bike
    }
}

impl Display for UnknownBikeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} was assigned {} which is not part of the problem",
            self.user, self.bike
        )
    }
}

impl std::error::Error for UnknownBikeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BikePositionMismatchError<T: GridVariable> {
    bike: BikeId,
    expected: GridPosition<T>,
    actual: GridPosition<T>,
}

impl<T: GridVariable> BikePositionMismatchError<T> {
    #[inline]
    pub fn new(bike: BikeId, expected: GridPosition<T>, actual: GridPosition<T>) -> Self {
        Self {
            bike,
            expected,
            actual,
        }
    }

    #[inline]
    pub fn bike(&self) -> BikeId {
        self.bike
    }

    #[inline]
    pub fn expected(&self) -> GridPosition<T> {
        self.expected
    }

    #[inline]
    pub fn actual(&self) -> GridPosition<T> {
        self.actual
    }
}

impl<T: GridVariable> Display for BikePositionMismatchError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is recorded at {} but the problem places it at {}",
            self.bike, self.actual, self.expected
        )
    }
}

impl<T: GridVariable> std::error::Error for BikePositionMismatchError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BikeReusedError {
    bike: BikeId,
    first: UserId,
    second: UserId,
}

impl BikeReusedError {
    #[inline]
    pub fn new(bike: BikeId, first: UserId, second: UserId) -> Self {
        Self {
            bike,
            first,
            second,
        }
    }

    #[inline]
    pub fn bike(&self) -> BikeId {
        self.bike
    }

    #[inline]
    pub fn first(&self) -> UserId {
        self.first
    }

    #[inline]
    pub fn second(&self) -> UserId {
        self.second
    }
}

impl Display for BikeReusedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is assigned to both {} and {}",
            self.bike, self.first, self.second
        )
    }
}

impl std::error::Error for BikeReusedError {}

/// A user did not receive the first nearest bike still available at its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotGreedyError<T: GridVariable> {
    user: UserId,
    chosen: BikeId,
    chosen_distance: GridDistance<T>,
    expected: BikeId,
    expected_distance: GridDistance<T>,
}

impl<T: GridVariable> NotGreedyError<T> {
    #[inline]
    pub fn new(
        user: UserId,
        chosen: BikeId,
        chosen_distance: GridDistance<T>,
        expected: BikeId,
        expected_distance: GridDistance<T>,
    ) -> Self {
        Self {
            user,
            chosen,
            chosen_distance,
            expected,
            expected_distance,
        }
    }

    #[inline]
    pub fn user(&self) -> UserId {
        self.user
    }

    #[inline]
    pub fn chosen(&self) -> BikeId {
        self.chosen
    }

    #[inline]
    pub fn chosen_distance(&self) -> GridDistance<T> {
        self.chosen_distance
    }

    #[inline]
    pub fn expected(&self) -> BikeId {
        self.expected
    }

    #[inline]
    pub fn expected_distance(&self) -> GridDistance<T> {
        self.expected_distance
    }
}

impl<T: GridVariable> Display for NotGreedyError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} was assigned {} at {} but {} at {} was available first",
            self.user, self.chosen, self.chosen_distance, self.expected, self.expected_distance
        )
    }
}

impl<T: GridVariable> std::error::Error for NotGreedyError<T> {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionValidationError<T = i64>
where
    T: GridVariable,
{
    AssignmentCountMismatch(AssignmentCountMismatchError),
    UserOrderMismatch(UserOrderMismatchError),
    UnknownBike(UnknownBikeError),
    BikePositionMismatch(BikePositionMismatchError<T>),
    BikeReused(BikeReusedError),
    NotGreedy(NotGreedyError<T>),
    DistanceOverflow(DistanceOverflowError<T>),
}

impl<T: GridVariable> Display for SolutionValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionValidationError::AssignmentCountMismatch(e) => write!(f, "{e}"),
            SolutionValidationError::UserOrderMismatch(e) => write!(f, "{e}"),
            SolutionValidationError::UnknownBike(e) => write!(f, "{e}"),
            SolutionValidationError::BikePositionMismatch(e) => write!(f, "{e}"),
            SolutionValidationError::BikeReused(e) => write!(f, "{e}"),
            SolutionValidationError::NotGreedy(e) => write!(f, "{e}"),
            SolutionValidationError::DistanceOverflow(e) => write!(f, "{e}"),
        }
    }
}

impl<T: GridVariable> std::error::Error for SolutionValidationError<T> {}

impl<T: GridVariable> From<DistanceOverflowError<T>> for SolutionValidationError<T> {
    fn from(err: DistanceOverflowError<T>) -> Self {
        Self::DistanceOverflow(err)
    }
}
