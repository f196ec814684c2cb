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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHalfExtentError {
    half_extent: i64,
    max: i64,
}

impl InvalidHalfExtentError {
    pub fn new(half_extent: i64, max: i64) -> Self {
        Self { half_extent, max }
    }
    pub fn half_extent(&self) -> i64 {
        self.half_extent
    }
    pub fn max(&self) -> i64 {
        self.max
    }
}

impl Display for InvalidHalfExtentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InvalidHalfExtentError: half_extent {} is outside [0, {}]",
            self.half_extent, self.max
        )
    }
}

impl std::error::Error for InvalidHalfExtentError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceGenConfigBuildError {
    InvalidHalfExtent(InvalidHalfExtentError),
    EmptyHotspots,
    NegativeHotspotRadius(i64),
    MissingHalfExtent,
    MissingAmountUsers,
    MissingBikeSurplus,
}

impl Display for InstanceGenConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InstanceGenConfigBuildError::*;
        match self {
            InvalidHalfExtent(e) => write!(f, "{}", e),
            EmptyHotspots => write!(f, "Hotspot placement needs at least one hotspot"),
            NegativeHotspotRadius(r) => write!(f, "Negative hotspot radius {}", r),
            MissingHalfExtent => write!(f, "Missing half_extent"),
            MissingAmountUsers => write!(f, "Missing amount_users"),
            MissingBikeSurplus => write!(f, "Missing bike_surplus"),
        }
    }
}

impl From<InvalidHalfExtentError> for InstanceGenConfigBuildError {
    fn from(err: InvalidHalfExtentError) -> Self {
        Self::InvalidHalfExtent(err)
    }
}

impl std::error::Error for InstanceGenConfigBuildError {}
