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

use rand::Rng;

use super::err::{InstanceGenConfigBuildError, InvalidHalfExtentError};
use super::policies::BikePlacementPolicy;

/// Largest half extent for which every Manhattan distance on the grid fits in `i64`.
pub const MAX_HALF_EXTENT: i64 = i64::MAX / 4;

/// Configuration for synthetic lease instances on the square grid
/// `[-half_extent, half_extent]²`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceGenConfig {
    pub(crate) half_extent: i64,
    pub(crate) amount_users: usize,
    pub(crate) bike_surplus: usize,
    pub(crate) placement: BikePlacementPolicy,
    pub(crate) seed: u64,
}

impl Default for InstanceGenConfig {
    fn default() -> Self {
        Self {
            half_extent: 100,
            amount_users: 50,
            bike_surplus: 10,
            placement: BikePlacementPolicy::Uniform,
            seed: 42,
        }
    }
}

impl InstanceGenConfig {
    pub fn new(
        half_extent: i64,
        amount_users: usize,
        bike_surplus: usize,
        placement: BikePlacementPolicy,
        seed: u64,
    ) -> Result<Self, InstanceGenConfigBuildError> {
        if !(0..=MAX_HALF_EXTENT).contains(&half_extent) {
            return Err(InvalidHalfExtentError::new(half_extent, MAX_HALF_EXTENT).into());
        }
        if let BikePlacementPolicy::Hotspots(h) = placement {
            if h.count == 0 {
                return Err(InstanceGenConfigBuildError::EmptyHotspots);
            }
            if h.radius < 0 {
                return Err(InstanceGenConfigBuildError::NegativeHotspotRadius(h.radius));
            }
        }

        Ok(Self {
            half_extent,
            amount_users,
            bike_surplus,
            placement,
            seed,
        })
    }

    #[inline]
    pub fn half_extent(&self) -> i64 {
        self.half_extent
    }
    #[inline]
    pub fn amount_users(&self) -> usize {
        self.amount_users
    }
    #[inline]
    pub fn bike_surplus(&self) -> usize {
        self.bike_surplus
    }
    #[inline]
    pub fn amount_bikes(&self) -> usize {
        self.amount_users.saturating_add(self.bike_surplus)
    }
    #[inline]
    pub fn placement(&self) -> &BikePlacementPolicy {
        &self.placement
    }
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Display for InstanceGenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InstanceGenConfig {{ half_extent: {}, amount_users: {}, bike_surplus: {}, \
             placement: {}, seed: {} }}",
            self.half_extent, self.amount_users, self.bike_surplus, self.placement, self.seed
        )
    }
}

/// Builder for `InstanceGenConfig`.
pub struct InstanceGenConfigBuilder {
    // Required
    half_extent: Option<i64>,
    amount_users: Option<usize>,
    bike_surplus: Option<usize>,

    // Optional with defaults
    placement: BikePlacementPolicy,
    seed: u64,
}

impl Default for InstanceGenConfigBuilder {
    fn default() -> Self {
        Self {
            half_extent: None,
            amount_users: None,
            bike_surplus: None,
            placement: BikePlacementPolicy::Uniform,
            seed: rand::rng().random(),
        }
    }
}

impl InstanceGenConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn half_extent(mut self, v: i64) -> Self {
        self.half_extent = Some(v);
        self
    }

    #[inline]
    pub fn amount_users(mut self, v: usize) -> Self {
        self.amount_users = Some(v);
        self
    }

    #[inline]
    pub fn bike_surplus(mut self, v: usize) -> Self {
        self.bike_surplus = Some(v);
        self
    }

    #[inline]
    pub fn placement(mut self, p: BikePlacementPolicy) -> Self {
        self.placement = p;
        self
    }

    #[inline]
    pub fn placement_uniform(self) -> Self {
        self.placement(BikePlacementPolicy::uniform())
    }

    #[inline]
    pub fn placement_hotspots(self, count: usize, radius: i64) -> Self {
        self.placement(BikePlacementPolicy::hotspots(count, radius))
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<InstanceGenConfig, InstanceGenConfigBuildError> {
        let half_extent = self
            .half_extent
            .ok_or(InstanceGenConfigBuildError::MissingHalfExtent)?;
        let amount_users = self
            .amount_users
            .ok_or(InstanceGenConfigBuildError::MissingAmountUsers)?;
        let bike_surplus = self
            .bike_surplus
            .ok_or(InstanceGenConfigBuildError::MissingBikeSurplus)?;

        InstanceGenConfig::new(
            half_extent,
            amount_users,
            bike_surplus,
            self.placement,
            self.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_fields() {
        let err = InstanceGenConfigBuilder::new()
            .amount_users(3)
            .bike_surplus(0)
            .build()
            .unwrap_err();
        assert_eq!(err, InstanceGenConfigBuildError::MissingHalfExtent);

        let err = InstanceGenConfigBuilder::new()
            .half_extent(5)
            .bike_surplus(0)
            .build()
            .unwrap_err();
        assert_eq!(err, InstanceGenConfigBuildError::MissingAmountUsers);

        let err = InstanceGenConfigBuilder::new()
            .half_extent(5)
            .amount_users(3)
            .build()
            .unwrap_err();
        assert_eq!(err, InstanceGenConfigBuildError::MissingBikeSurplus);
    }

    #[test]
    fn test_builder_ok() {
        let cfg = InstanceGenConfigBuilder::new()
            .half_extent(20)
            .amount_users(8)
            .bike_surplus(2)
            .placement_hotspots(3, 4)
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(cfg.half_extent(), 20);
        assert_eq!(cfg.amount_bikes(), 10);
        assert_eq!(cfg.placement(), &BikePlacementPolicy::hotspots(3, 4));
        assert_eq!(cfg.seed(), 7);
    }

    #[test]
    fn test_new_rejects_invalid_extent() {
        let err = InstanceGenConfig::new(-1, 1, 0, BikePlacementPolicy::Uniform, 0).unwrap_err();
        assert_eq!(
            err,
            InstanceGenConfigBuildError::InvalidHalfExtent(InvalidHalfExtentError::new(
                -1,
                MAX_HALF_EXTENT
            ))
        );
        assert!(
            InstanceGenConfig::new(MAX_HALF_EXTENT, 1, 0, BikePlacementPolicy::Uniform, 0).is_ok()
        );
        assert!(
            InstanceGenConfig::new(MAX_HALF_EXTENT + 1, 1, 0, BikePlacementPolicy::Uniform, 0)
                .is_err()
        );
    }

    #[test]
    fn test_new_rejects_bad_hotspots() {
        assert_eq!(
            InstanceGenConfig::new(10, 1, 0, BikePlacementPolicy::hotspots(0, 2), 0).unwrap_err(),
            InstanceGenConfigBuildError::EmptyHotspots
        );
        assert_eq!(
            InstanceGenConfig::new(10, 1, 0, BikePlacementPolicy::hotspots(2, -2), 0).unwrap_err(),
            InstanceGenConfigBuildError::NegativeHotspotRadius(-2)
        );
    }

    #[test]
    fn test_default_is_valid() {
        let d = InstanceGenConfig::default();
        let rebuilt = InstanceGenConfig::new(
            d.half_extent(),
            d.amount_users(),
            d.bike_surplus(),
            *d.placement(),
            d.seed(),
        )
        .unwrap();
        assert_eq!(d, rebuilt);
    }
}
