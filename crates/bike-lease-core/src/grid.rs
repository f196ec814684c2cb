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

use crate::GridVariable;
use num_traits::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};
use std::{iter::Sum, ops::Add};

/// A point `(x, y)` on the integer grid.
///
/// Positions are plain values: they are `Copy`, have no setters and compare
/// by their coordinates only.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
pub struct GridPosition<T = i64> {
    x: T,
    y: T,
}

impl<T: GridVariable> GridPosition<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn into_tuple(self) -> (T, T) {
        (self.x, self.y)
    }

    /// Manhattan distance `|a.x - b.x| + |a.y - b.y|`, or `None` if it does
    /// not fit into `T`.
    #[inline]
    pub fn checked_manhattan_distance(&self, other: &Self) -> Option<GridDistance<T>> {
        let dx = checked_abs_diff(self.x, other.x)?;
        let dy = checked_abs_diff(self.y, other.y)?;
        dx.checked_add(&dy).map(GridDistance)
    }

    /// Manhattan distance `|a.x - b.x| + |a.y - b.y|`.
    ///
    /// # Panics
    ///
    /// Panics if the distance overflows `T`. Use
    /// [`GridPosition::checked_manhattan_distance`] for coordinates near the
    /// bounds of the primitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use bike_lease_core::grid::{GridDistance, GridPosition};
    ///
    /// let a = GridPosition::new(0i64, 0);
    /// let b = GridPosition::new(3i64, -4);
    /// assert_eq!(a.manhattan_distance(&b), GridDistance::new(7));
    /// ```
    #[inline]
    pub fn manhattan_distance(&self, other: &Self) -> GridDistance<T> {
        self.checked_manhattan_distance(other)
            .expect("overflow in GridPosition::manhattan_distance")
    }
}

#[inline]
fn checked_abs_diff<T: GridVariable>(a: T, b: T) -> Option<T> {
    let d = a.checked_sub(&b)?;
    if d < T::zero() {
        T::zero().checked_sub(&d)
    } else {
        Some(d)
    }
}

impl<T: GridVariable> std::fmt::Display for GridPosition<T> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: GridVariable> From<(T, T)> for GridPosition<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        GridPosition::new(x, y)
    }
}

impl<T: GridVariable> From<GridPosition<T>> for (T, T) {
    #[inline]
    fn from(p: GridPosition<T>) -> Self {
        p.into_tuple()
    }
}

/// A non-negative Manhattan distance on the grid.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
pub struct GridDistance<T = i64>(T);

impl<T: GridVariable> std::fmt::Display for GridDistance<T> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GridDistance({})", self.0)
    }
}

impl<T: GridVariable> GridDistance<T> {
    #[inline]
    pub fn new(v: T) -> Self {
        assert!(v >= T::zero(), "GridDistance must be non-negative");
        GridDistance(v)
    }

    #[inline]
    pub fn zero() -> Self {
        GridDistance(T::zero())
    }

    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(GridDistance)
    }

    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        GridDistance(self.0.saturating_add(rhs.0))
    }
}

impl<T: GridVariable> Zero for GridDistance<T> {
    #[inline]
    fn zero() -> Self {
        GridDistance(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T: GridVariable> Add for GridDistance<T> {
    type Output = GridDistance<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        GridDistance(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in GridDistance + GridDistance"),
        )
    }
}

impl<T: GridVariable> CheckedAdd for GridDistance<T> {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(GridDistance)
    }
}

impl<T: GridVariable> Sum for GridDistance<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: GridVariable> Sum<&'a GridDistance<T>> for GridDistance<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(GridPosition<i64>: Send, Sync, Copy);
    assert_impl_all!(GridDistance<i32>: Send, Sync, Copy, Ord);

    #[test]
    fn test_grid_position_creation() {
        let p = GridPosition::new(3i64, -2);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), -2);
        assert_eq!(p.into_tuple(), (3, -2));
    }

    #[test]
    fn test_grid_position_origin() {
        assert_eq!(GridPosition::<i32>::origin(), GridPosition::new(0, 0));
    }

    #[test]
    fn test_grid_position_display() {
        let p = GridPosition::new(1i64, 4);
        assert_eq!(format!("{}", p), "(1, 4)");
        assert_eq!(format!("{}", GridPosition::new(-7i64, 0)), "(-7, 0)");
    }

    #[test]
    fn test_grid_position_equality_is_by_coordinates() {
        let a: GridPosition<i64> = (2, 5).into();
        let b = GridPosition::new(2i64, 5);
        assert_eq!(a, b);
        assert_ne!(a, GridPosition::new(5, 2));
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridPosition::new(0i64, 0);
        assert_eq!(a.manhattan_distance(&a), GridDistance::zero());
        assert_eq!(
            a.manhattan_distance(&GridPosition::new(1, 1)),
            GridDistance::new(2)
        );
        assert_eq!(
            GridPosition::new(7i64, 2).manhattan_distance(&GridPosition::new(1, 4)),
            GridDistance::new(8)
        );
    }

    #[test]
    fn test_manhattan_distance_is_symmetric_with_negative_coordinates() {
        let a = GridPosition::new(-3i64, 4);
        let b = GridPosition::new(5i64, -6);
        assert_eq!(a.manhattan_distance(&b), GridDistance::new(18));
        assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
    }

    #[test]
    fn test_checked_manhattan_distance_overflow() {
        let a = GridPosition::new(i8::MIN, 0);
        let b = GridPosition::new(i8::MAX, 0);
        assert_eq!(a.checked_manhattan_distance(&b), None);

        let c = GridPosition::new(100i8, 0);
        let d = GridPosition::new(0i8, 100);
        assert_eq!(c.checked_manhattan_distance(&d), None);

        let e = GridPosition::new(60i8, 0);
        let f = GridPosition::new(0i8, 60);
        assert_eq!(e.checked_manhattan_distance(&f), Some(GridDistance::new(120)));
    }

    #[test]
    #[should_panic(expected = "overflow in GridPosition::manhattan_distance")]
    fn test_manhattan_distance_panics_on_overflow() {
        let a = GridPosition::new(i16::MIN, 0);
        let b = GridPosition::new(i16::MAX, 0);
        let _ = a.manhattan_distance(&b);
    }

    #[test]
    #[should_panic(expected = "GridDistance must be non-negative")]
    fn test_grid_distance_rejects_negative() {
        let _ = GridDistance::new(-1i64);
    }

    #[test]
    fn test_grid_distance_sum() {
        let ds = [GridDistance::new(1i64), GridDistance::new(2), GridDistance::new(3)];
        let total: GridDistance<i64> = ds.iter().sum();
        assert_eq!(total, GridDistance::new(6));
        let owned: GridDistance<i64> = ds.into_iter().sum();
        assert_eq!(owned.value(), 6);
    }

    #[test]
    fn test_grid_distance_checked_add_overflow() {
        let a = GridDistance::new(i32::MAX);
        assert_eq!(a.checked_add(GridDistance::new(1)), None);
        assert_eq!(a.saturating_add(GridDistance::new(1)), GridDistance::new(i32::MAX));
    }

    #[test]
    fn test_grid_distance_display() {
        assert_eq!(format!("{}", GridDistance::new(5i64)), "GridDistance(5)");
    }

    #[test]
    fn test_grid_position_serde() {
        let p = GridPosition::new(4i64, -1);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":4,"y":-1}"#);
        let back: GridPosition<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
