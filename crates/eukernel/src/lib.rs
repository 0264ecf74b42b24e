//! Canonical 3D rotations and ordered linecast intersections for Euclidean
//! geometry.
//!
//! The two halves of the crate are independent:
//!
//! - [`rotation`] exposes any rigid 3D rotation as a single canonical
//!   axis/angle pair via the [`Rotation3`] trait.
//! - [`linecast`] represents the points where a line crosses a boundary and
//!   orders them deterministically with [`linecast::abscissa_order`].
//!
//! ```
//! use std::f64::consts::FRAC_PI_2;
//!
//! use eukernel::prelude::*;
//!
//! // Three quarter turns one way is one quarter turn the other way.
//! let r = QuaternionRotation::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 3.0 * FRAC_PI_2)
//!     .unwrap();
//! eukernel::assert_approx_eq!(r.axis(), Unit::<Vector3>::MINUS_Z);
//! eukernel::assert_approx_eq!(r.angle(), FRAC_PI_2);
//! assert!(r.apply_hyperplane(&Plane::new(Vector3::new(1.0, 0.0, 0.0), 0.0).unwrap()).is_err());
//! ```

pub use approx;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Names for the axes of 3D space.
pub const AXIS_NAMES: &str = "XYZ";

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

#[macro_use]
mod impl_macros;

pub mod error;
pub mod line;
pub mod linecast;
pub mod plane;
pub mod precision;
pub mod rotation;
pub mod transform;
pub mod vector;
pub mod which_side;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::error::TransformError;
    pub use crate::line::{Line, Segment};
    pub use crate::linecast::{LinecastPoint, LinecastPoint2, Linecastable2, abscissa_order};
    pub use crate::plane::{Plane, SubPlane};
    pub use crate::precision::{APPROX, Precision};
    pub use crate::rotation::{AxisAngleRotation, QuaternionRotation};
    pub use crate::traits::*;
    pub use crate::transform::Translation3;
    pub use crate::vector::{Unit, Vector2, Vector3};
    pub use crate::which_side::PointWhichSide;
    pub use crate::{AXIS_NAMES, EPSILON, Float};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;

    pub use crate::linecast::Embedding;
    pub use crate::rotation::Rotation3;
    pub use crate::transform::{HyperplaneTransform, Transform};
    pub use crate::vector::EuclideanVector;
}
