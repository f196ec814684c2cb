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

use bike_lease_core::{GridVariable, grid::GridDistance};
use bike_lease_model::{
    err::DistanceOverflowError,
    lease::{Bike, User},
    problem::LeaseProblem,
};

/// The closest bike found by a pool scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestBike<T: GridVariable> {
    index: usize,
    bike: Bike<T>,
    distance: GridDistance<T>,
}

impl<T: GridVariable> NearestBike<T> {
    /// Index of the bike in the pool at the time of the scan.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn bike(&self) -> &Bike<T> {
        &self.bike
    }

    #[inline]
    pub fn distance(&self) -> GridDistance<T> {
        self.distance
    }
}

/// Bikes still available during one lease run.
///
/// The pool is a private copy of the problem's bikes. Removal is by index and
/// keeps the relative order of the remaining bikes, which is what the
/// first-wins tie break relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BikePool<T: GridVariable> {
    bikes: Vec<Bike<T>>,
}

impl<T: GridVariable> From<&LeaseProblem<T>> for BikePool<T> {
    fn from(problem: &LeaseProblem<T>) -> Self {
        Self::new(problem.bikes().to_vec())
    }
}

impl<T: GridVariable> BikePool<T> {
    #[inline]
    pub fn new(bikes: Vec<Bike<T>>) -> Self {
        Self { bikes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bikes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bikes.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Bike<T>> {
        self.bikes.iter()
    }

    /// Scans the whole pool for the bike closest to `user`.
    ///
    /// Returns `Ok(None)` for an empty pool. On equal distances the bike that
    /// comes first in the pool wins.
    pub fn nearest(
        &self,
        user: &User<T>,
    ) -> Result<Option<NearestBike<T>>, DistanceOverflowError<T>> {
        let origin = user.position();
        let mut best: Option<NearestBike<T>> = None;

        for (index, bike) in self.bikes.iter().enumerate() {
            let distance = origin
                .checked_manhattan_distance(&bike.position())
                .ok_or_else(|| {
                    DistanceOverflowError::new(user.id(), bike.id(), origin, bike.position())
                })?;
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(NearestBike {
                    index,
                    bike: *bike,
                    distance,
                });
            }
        }

        Ok(best)
    }

    /// Removes and returns the bike at `index`, shifting later bikes forward.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<Bike<T>> {
        if index < self.bikes.len() {
            Some(self.bikes.remove(index))
        } else {
            None
        }
    }
}
