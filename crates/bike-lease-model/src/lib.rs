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

//! # Bike Lease Model (`bike-lease-model`)
//!
//! This crate provides the data model of the **bike lease problem**: users arriving
//! one after another on an integer grid, each of whom must be handed one bike out of
//! a shared pool. It builds on the grid primitives of `bike-lease-core`.
//!
//! ## Key Data Structures
//!
//! - **`UserId` / `BikeId`**: the index of a user in the arrival sequence and of a
//!   bike in the initial pool. Entities are identified by these indices, so two users
//!   (or bikes) standing on the same cell remain distinct.
//!
//! - **`User<T>` / `Bike<T>`**: a `GridPosition<T>` tagged with its role through a
//!   zero-sized `Kind` marker and carrying its id.
//!
//! - **`LeaseProblem<T>`**: users in arrival order plus the initial bike pool, built
//!   with `LeaseProblemBuilder` or `LeaseProblem::from_coordinates`.
//!
//! - **`LeaseSolution<T>`**: the ordered list of `Assignment`s, one per user, with
//!   `LeaseStats` summarising the distances travelled. `LeaseSolution::validate`
//!   checks a solution against its problem.
//!
//! - **`InstanceGenerator`**: a seeded generator of synthetic instances, used by
//!   benchmarks and randomized tests.

pub mod err;
pub mod generator;
pub mod id;
pub mod lease;
pub mod problem;
pub mod sol;

pub mod prelude {
    pub use crate::err::{
        AssignmentCountMismatchError, BikePositionMismatchError, BikeReusedError,
        DistanceOverflowError, InsufficientBikesError, NotGreedyError, SolutionValidationError,
        UnknownBikeError, UserOrderMismatchError,
    };
    pub use crate::generator::{
        BikePlacementPolicy, HotspotPolicy, InstanceGenConfig, InstanceGenConfigBuildError,
        InstanceGenConfigBuilder, InstanceGenerator,
    };
    pub use crate::id::{BikeId, UserId};
    pub use crate::lease::{Bike, BikeKind, Kind, Located, User, UserKind};
    pub use crate::problem::{LeaseProblem, LeaseProblemBuilder};
    pub use crate::sol::{Assignment, LeaseSolution, LeaseStats};
}
