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
    err::InsufficientBikesError,
    id::{BikeId, UserId},
    lease::{Bike, User},
};
use bike_lease_core::{GridVariable, grid::GridPosition};
use std::fmt::Display;

/// A bike lease instance: users in arrival order and the initial bike pool.
///
/// Ids are the indices into the two sequences, so a user or bike is identified
/// by where it appears, never by its coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseProblem<T = i64>
where
    T: GridVariable,
{
    users: Vec<User<T>>,
    bikes: Vec<Bike<T>>,
}

impl<T: GridVariable> LeaseProblem<T> {
    /// Builds a problem from raw `(x, y)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bike_lease_model::problem::LeaseProblem;
    ///
    /// let problem = LeaseProblem::<i64>::from_coordinates(
    ///     [(0, 0), (1, 1), (2, 0)],
    ///     [(1, 0), (2, 2), (2, 1)],
    /// );
    /// assert_eq!(problem.user_count(), 3);
    /// assert_eq!(problem.bike_count(), 3);
    /// ```
    pub fn from_coordinates<U, B>(users: U, bikes: B) -> Self
    where
        U: IntoIterator<Item = (T, T)>,
        B: IntoIterator<Item = (T, T)>,
    {
        let mut builder = LeaseProblemBuilder::new();
        for u in users {
            builder.add_user(GridPosition::from(u));
        }
        for b in bikes {
            builder.add_bike(GridPosition::from(b));
        }
        builder.build()
    }

    #[inline]
    pub fn users(&self) -> &[User<T>] {
        &self.users
    }

    #[inline]
    pub fn bikes(&self) -> &[Bike<T>] {
        &self.bikes
    }

    #[inline]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[inline]
    pub fn bike_count(&self) -> usize {
        self.bikes.len()
    }

    #[inline]
    pub fn get_user(&self, id: UserId) -> Option<&User<T>> {
        self.users.get(id.value())
    }

    #[inline]
    pub fn get_bike(&self, id: BikeId) -> Option<&Bike<T>> {
        self.bikes.get(id.value())
    }

    #[inline]
    pub fn iter_users(&self) -> impl Iterator<Item = &User<T>> {
        self.users.iter()
    }

    #[inline]
    pub fn iter_bikes(&self) -> impl Iterator<Item = &Bike<T>> {
        self.bikes.iter()
    }

    /// Bikes left over once every user is served, or `None` if the pool is too small.
    #[inline]
    pub fn bike_surplus(&self) -> Option<usize> {
        self.bikes.len().checked_sub(self.users.len())
    }

    /// Checks that the bike pool can serve every user.
    #[inline]
    pub fn check_coverage(&self) -> Result<(), InsufficientBikesError> {
        match self.bike_surplus() {
            Some(_) => Ok(()),
            None => Err(InsufficientBikesError::new(
                self.users.len(),
                self.bikes.len(),
            )),
        }
    }
}

impl<T: GridVariable> Display for LeaseProblem<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Problem:")?;
        writeln!(f, "  Users ({}):", self.users.len())?;
        for u in &self.users {
            writeln!(f, "    {}", u)?;
        }
        writeln!(f, "  Bikes ({}):", self.bikes.len())?;
        for b in &self.bikes {
            writeln!(f, "    {}", b)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeaseProblemBuilder<T = i64>
where
    T: GridVariable,
{
    users: Vec<User<T>>,
    bikes: Vec<Bike<T>>,
}

impl<T: GridVariable> LeaseProblemBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            bikes: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(users: usize, bikes: usize) -> Self {
        Self {
            users: Vec::with_capacity(users),
            bikes: Vec::with_capacity(bikes),
        }
    }

    /// Appends a user to the arrival sequence and returns its id.
    #[inline]
    pub fn add_user(&mut self, position: GridPosition<T>) -> UserId {
        let id = UserId::new(self.users.len());
        self.users.push(User::new(id, position));
        id
    }

    /// Appends a bike to the pool and returns its id.
    #[inline]
    pub fn add_bike(&mut self, position: GridPosition<T>) -> BikeId {
        let id = BikeId::new(self.bikes.len());
        self.bikes.push(Bike::new(id, position));
        id
    }

    #[inline]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[inline]
    pub fn bike_count(&self) -> usize {
        self.bikes.len()
    }

    #[must_use]
    #[inline]
    pub fn build(&self) -> LeaseProblem<T> {
        LeaseProblem {
            users: self.users.clone(),
            bikes: self.bikes.clone(),
        }
    }
}
