#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for immutable 2D coordinates."]
#![doc = ""]
#![doc = "This crate provides an immutable coordinate value constructed from"]
#![doc = "Cartesian or polar inputs through named factory functions, with a"]
#![doc = "plain-text rendering."]

use core::fmt;
use libm::{cos, sin};

/// An immutable point in the 2-D plane.
///
/// Instances are created exclusively through [`Coordinate::from_xy`] and
/// [`Coordinate::from_angles`]. The fields are private, so no raw
/// construction path exists, and no mutator is exposed: once built, a
/// coordinate never changes.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    /// Horizontal offset from the origin.
    x: f64,
    /// Vertical offset from the origin.
    y: f64,
}

impl Coordinate {
    /// Construct a coordinate directly from Cartesian components.
    ///
    /// The inputs are stored as given. No validation is performed; non-finite
    /// values are kept as-is.
    ///
    /// # Arguments
    ///
    /// * `x`: Horizontal offset from the origin.
    /// * `y`: Vertical offset from the origin.
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Construct a coordinate from a polar pair.
    ///
    /// Computes `x = distance * cos(angle)` and `y = distance * sin(angle)`.
    /// Non-finite inputs propagate through the trigonometric functions and
    /// yield NaN components rather than an error.
    ///
    /// # Arguments
    ///
    /// * `angle`: Angle in radians, measured counter-clockwise from the
    ///   x-axis.
    /// * `distance`: Distance from the origin. A negative distance places the
    ///   point on the opposite ray.
    pub fn from_angles(angle: f64, distance: f64) -> Self {
        Coordinate {
            x: distance * cos(angle),
            y: distance * sin(angle),
        }
    }

    /// Returns the horizontal component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the vertical component.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Coordinate {
    /// Renders the literal format `X: <x>Y: <y>` with no separator between
    /// the x value and the `Y:` label. Components use Rust's default `f64`
    /// rendering (shortest round-trippable decimal, so `3.0` prints as `3`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}Y: {}", self.x, self.y)
    }
}
