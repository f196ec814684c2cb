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

/// Bikes are parked around a few hotspots instead of across the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotspotPolicy {
    pub count: usize,
    pub radius: i64,
}

impl HotspotPolicy {
    pub fn new(count: usize, radius: i64) -> Self {
        Self { count, radius }
    }
}

impl Display for HotspotPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HotspotPolicy {{ count: {}, radius: {} }}",
            self.count, self.radius
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BikePlacementPolicy {
    #[default]
    Uniform,
    Hotspots(HotspotPolicy),
}

impl BikePlacementPolicy {
    #[inline]
    pub fn uniform() -> Self {
        Self::Uniform
    }

    #[inline]
    pub fn hotspots(count: usize, radius: i64) -> Self {
        Self::Hotspots(HotspotPolicy::new(count, radius))
    }
}

impl Display for BikePlacementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BikePlacementPolicy::Uniform => write!(f, "Uniform"),
            BikePlacementPolicy::Hotspots(h) => write!(f, "Hotspots({})", h),
        }
    }
}
