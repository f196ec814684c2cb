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

mod config;
mod err;
mod policies;

pub use config::{InstanceGenConfig, InstanceGenConfigBuilder, MAX_HALF_EXTENT};
pub use err::{InstanceGenConfigBuildError, InvalidHalfExtentError};
pub use policies::{BikePlacementPolicy, HotspotPolicy};

use crate::problem::{LeaseProblem, LeaseProblemBuilder};
use bike_lease_core::grid::GridPosition;
use rand::{SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Uniform};

/// Seeded generator of random lease instances.
///
/// Two generators built from the same configuration produce the same
/// sequence of problems.
pub struct InstanceGenerator {
    config: InstanceGenConfig,
    rng: SmallRng,
    coordinate_distribution: Uniform<i64>,
    hotspot_offset_distribution: Option<Uniform<i64>>,
}

impl From<InstanceGenConfig> for InstanceGenerator {
    fn from(config: InstanceGenConfig) -> Self {
        Self::new(config)
    }
}

impl InstanceGenerator {
    pub fn new(config: InstanceGenConfig) -> Self {
        let h = config.half_extent();
        let hotspot_offset_distribution = match config.placement() {
            BikePlacementPolicy::Uniform => None,
            BikePlacementPolicy::Hotspots(p) => Some(
                Uniform::new_inclusive(-p.radius, p.radius).expect("valid [-radius, radius]"),
            ),
        };
        Self {
            coordinate_distribution: Uniform::new_inclusive(-h, h)
                .expect("valid [-half_extent, half_extent]"),
            hotspot_offset_distribution,
            rng: SmallRng::seed_from_u64(config.seed()),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &InstanceGenConfig {
        &self.config
    }

    #[inline]
    fn sample_position(&mut self) -> GridPosition<i64> {
        let x = self.coordinate_distribution.sample(&mut self.rng);
        let y = self.coordinate_distribution.sample(&mut self.rng);
        GridPosition::new(x, y)
    }

    #[inline]
    fn clamp_to_grid(&self, v: i64) -> i64 {
        let h = self.config.half_extent();
        v.clamp(-h, h)
    }

    fn sample_near(
        &mut self,
        center: GridPosition<i64>,
        offsets: &Uniform<i64>,
    ) -> GridPosition<i64> {
        let dx = offsets.sample(&mut self.rng);
        let dy = offsets.sample(&mut self.rng);
        GridPosition::new(
            self.clamp_to_grid(center.x().saturating_add(dx)),
            self.clamp_to_grid(center.y().saturating_add(dy)),
        )
    }

    fn sample_bikes(&mut self, amount: usize) -> Vec<GridPosition<i64>> {
        match (*self.config.placement(), self.hotspot_offset_distribution.clone()) {
            (BikePlacementPolicy::Hotspots(policy), Some(offsets)) => {
                let centers: Vec<GridPosition<i64>> =
                    (0..policy.count).map(|_| self.sample_position()).collect();
                let pick = Uniform::new(0, centers.len()).expect("at least one hotspot");
                (0..amount)
                    .map(|_| {
                        let center = centers[pick.sample(&mut self.rng)];
                        self.sample_near(center, &offsets)
                    })
                    .collect()
            }
            _ => (0..amount).map(|_| self.sample_position()).collect(),
        }
    }

    /// Generates the next instance.
    pub fn generate(&mut self) -> LeaseProblem<i64> {
        let amount_users = self.config.amount_users();
        let amount_bikes = self.config.amount_bikes();
        let mut builder = LeaseProblemBuilder::with_capacity(amount_users, amount_bikes);

        for _ in 0..amount_users {
            let p = self.sample_position();
            builder.add_user(p);
        }
        for p in self.sample_bikes(amount_bikes) {
            builder.add_bike(p);
        }

        builder.build()
    }
}
