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

//! # Bike Lease Core (`bike-lease-core`)
//!
//! Grid primitives shared by the model and solver crates: integer positions on an
//! unbounded 2D grid and the Manhattan distance between them.

use num_traits::{PrimInt, Signed, Zero};
use std::fmt::{Debug, Display};

pub mod grid;

/// Coordinate primitive of the grid. Any signed primitive integer qualifies.
pub trait GridVariable: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
impl<T> GridVariable for T where T: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
