use nalgebra as na;

use crate::geometry::Length2d;
use crate::quantity::{Angle, Area, Length, Volume};
use crate::types::Vector2;
use crate::types::units::{cubic_meter, degree, meter, si, square_meter};

/// Implements `From` both ways between a quantity and its uom counterpart,
/// going through the canonical unit.
macro_rules! uom_bridge {
    ($quantity:ident, $uom:ty, $unit:ident, $canonical:ident, $from_canonical:ident) => {
        impl From<$uom> for $quantity {
            fn from(value: $uom) -> Self {
                $quantity::$from_canonical(value.get::<$unit>())
            }
        }

        impl From<$quantity> for $uom {
            fn from(value: $quantity) -> Self {
                <$uom>::new::<$unit>(value.$canonical())
            }
        }
    };
}

uom_bridge!(Angle, si::Angle, degree, degrees, from_degrees);
uom_bridge!(Length, si::Length, meter, meters, from_meters);
uom_bridge!(Area, si::Area, square_meter, square_meters, from_square_meters);
uom_bridge!(Volume, si::Volume, cubic_meter, cubic_meters, from_cubic_meters);

impl Length2d {
    /// Build from two uom lengths
    pub fn from_uom(x: si::Length, y: si::Length) -> Self {
        Self::new(x.into(), y.into())
    }
}

impl From<Vector2> for Length2d {
    fn from(meters: Vector2) -> Self {
        Self::from_meters(meters.x, meters.y)
    }
}

impl From<Length2d> for Vector2 {
    fn from(value: Length2d) -> Self {
        value.meters()
    }
}

impl From<na::Point2<f64>> for Length2d {
    fn from(point: na::Point2<f64>) -> Self {
        Self::from_meters(point.x, point.y)
    }
}

impl From<Length2d> for na::Point2<f64> {
    fn from(value: Length2d) -> Self {
        na::Point2::from(value.meters())
    }
}

/// Create Point2 (meters) from two lengths
pub fn point_from_lengths(x: Length, y: Length) -> na::Point2<f64> {
    na::Point2::new(x.meters(), y.meters())
}

/// Extract X coordinate as Length
pub fn x_length(point: &na::Point2<f64>) -> Length {
    Length::from_meters(point.x)
}

/// Extract Y coordinate as Length
pub fn y_length(point: &na::Point2<f64>) -> Length {
    Length::from_meters(point.y)
}
