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

use std::fmt::Display;

/// Index of a user in the arrival sequence of a problem.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(usize);

impl UserId {
    #[inline]
    pub const fn new(id: usize) -> Self {
        UserId(id)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl From<usize> for UserId {
    fn from(value: usize) -> Self {
        UserId(value)
    }
}

impl From<UserId> for usize {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Index of a bike in the initial pool of a problem.
///
/// Two bikes at the same coordinates are told apart by their id.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BikeId(usize);

impl BikeId {
    #[inline]
    pub const fn new(id: usize) -> Self {
        BikeId(id)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Display for BikeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BikeId({})", self.0)
    }
}

impl From<usize> for BikeId {
    fn from(value: usize) -> Self {
        BikeId(value)
    }
}

impl From<BikeId> for usize {
    fn from(value: BikeId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip_and_display() {
        let u = UserId::new(3);
        let b: BikeId = 7.into();
        assert_eq!(usize::from(u), 3);
        assert_eq!(b.value(), 7);
        assert_eq!(format!("{u}"), "UserId(3)");
        assert_eq!(format!("{b}"), "BikeId(7)");
    }
}
