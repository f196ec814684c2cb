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
use bike_lease_core::{GridVariable, grid::GridPosition};
use std::{fmt::Display, marker::PhantomData};

/// Role of a located entity on the grid.
pub trait Kind: Clone {
    type Id: Copy
        + Eq
        + Ord
        + std::hash::Hash
        + From<usize>
        + Into<usize>
        + Display
        + std::fmt::Debug;
    const NAME: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserKind;
impl Kind for UserKind {
    type Id = UserId;
    const NAME: &'static str = "User";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BikeKind;
impl Kind for BikeKind {
    type Id = BikeId;
    const NAME: &'static str = "Bike";
}

/// A grid position tagged with its role and its index in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Located<K: Kind, T: GridVariable = i64> {
    id: K::Id,
    position: GridPosition<T>,
    _k: PhantomData<K>,
}

pub type User<T = i64> = Located<UserKind, T>;
pub type Bike<T = i64> = Located<BikeKind, T>;

impl<K: Kind, T: GridVariable> Located<K, T> {
    #[inline]
    pub fn new(id: K::Id, position: GridPosition<T>) -> Self {
        Self {
            id,
            position,
            _k: PhantomData,
        }
    }

    #[inline]
    pub fn id(&self) -> K::Id {
        self.id
    }

    #[inline]
    pub fn position(&self) -> GridPosition<T> {
        self.position
    }
}

impl<K: Kind, T: GridVariable> Display for Located<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", K::NAME, self.id, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_located_accessors() {
        let b: Bike = Bike::new(BikeId::new(2), GridPosition::new(1, 4));
        assert_eq!(b.id(), BikeId::new(2));
        assert_eq!(b.position(), GridPosition::new(1, 4));
    }

    #[test]
    fn test_located_display() {
        let u: User = User::new(UserId::new(0), GridPosition::new(0, 0));
        assert_eq!(format!("{u}"), "User UserId(0) at (0, 0)");
    }

    #[test]
    fn test_same_position_distinct_ids() {
        let a: Bike = Bike::new(BikeId::new(0), GridPosition::new(1, 0));
        let b: Bike = Bike::new(BikeId::new(1), GridPosition::new(1, 0));
        assert_eq!(a.position(), b.position());
        assert_ne!(a, b);
    }
}
