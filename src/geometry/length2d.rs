use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::quantity::{Length, canonical_bits, pad_rendered, render_number, total_compare};
use crate::types::Vector2;

/// A position (or displacement) in two dimensions, stored in meters.
///
/// X and Y are independent lengths; nothing ties one to the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length2d {
    meters: Vector2,
}

/// Generates the per-axis unit surface from `Length`'s unit table.
macro_rules! planar_units {
    ($( $unit:ident, $from_unit:ident; )*) => {
        impl Length2d {
            $(
                pub fn $from_unit(x: f64, y: f64) -> Self {
                    Self::new(Length::$from_unit(x), Length::$from_unit(y))
                }

                pub fn $unit(&self) -> Vector2 {
                    Vector2::new(self.x().$unit(), self.y().$unit())
                }
            )*
        }
    };
}

planar_units! {
    kilometers, from_kilometers;
    decimeters, from_decimeters;
    centimeters, from_centimeters;
    millimeters, from_millimeters;
    micrometers, from_micrometers;
    nanometers, from_nanometers;
    miles, from_miles;
    yards, from_yards;
    feet, from_feet;
    inches, from_inches;
}

impl Length2d {
    pub const ZERO: Self = Self::from_meters(0.0, 0.0);

    pub const fn new(x: Length, y: Length) -> Self {
        Self::from_meters(x.meters(), y.meters())
    }

    pub const fn from_meters(x_meters: f64, y_meters: f64) -> Self {
        Self { meters: Vector2::new(x_meters, y_meters) }
    }

    /// Both components in meters
    pub fn meters(&self) -> Vector2 {
        self.meters
    }

    pub fn x(&self) -> Length {
        Length::from_meters(self.meters.x)
    }

    pub fn y(&self) -> Length {
        Length::from_meters(self.meters.y)
    }

    /// Euclidean norm, `sqrt(x² + y²)`.
    pub fn length(&self) -> Length {
        let (x, y) = (self.meters.x, self.meters.y);
        Length::from_meters((x * x + y * y).sqrt())
    }

    pub fn distance_to(&self, other: Length2d) -> Length {
        (*self - other).length()
    }

    /// Euclidean distance between two positions.
    pub fn distance(a: Length2d, b: Length2d) -> Length {
        a.distance_to(b)
    }

    /// Key for hash-based containers, comparing by meters.
    pub fn meters_key(&self) -> ByMeters {
        ByMeters(*self)
    }

    /// Equality against an untyped value: `false` for `None` or anything that
    /// is not a `Length2d`. NaN components match NaN, unlike `==`.
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| {
                total_compare(self.meters.x, other.meters.x) == Ordering::Equal
                    && total_compare(self.meters.y, other.meters.y) == Ordering::Equal
            })
    }

    fn bits(&self) -> [u64; 2] {
        [canonical_bits(self.meters.x), canonical_bits(self.meters.y)]
    }
}

impl Default for Length2d {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for Length2d {
    type Output = Self;
    fn neg(self) -> Self {
        Self { meters: -self.meters }
    }
}

impl Add for Length2d {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { meters: self.meters + rhs.meters }
    }
}

impl Sub for Length2d {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { meters: self.meters - rhs.meters }
    }
}

impl Mul<f64> for Length2d {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { meters: self.meters * rhs }
    }
}

impl Mul<Length2d> for f64 {
    type Output = Length2d;
    fn mul(self, rhs: Length2d) -> Length2d {
        rhs * self
    }
}

/// Component-wise, not a dot or cross product.
impl Mul for Length2d {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self { meters: self.meters.component_mul(&rhs.meters) }
    }
}

impl Div<f64> for Length2d {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self { meters: self.meters / rhs }
    }
}

/// Component-wise ratio, dimensionless per axis.
impl Div for Length2d {
    type Output = Vector2;
    fn div(self, rhs: Self) -> Vector2 {
        self.meters.component_div(&rhs.meters)
    }
}

impl Hash for Length2d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

/// `"(x, y) m"`, formatted like the scalar quantities.
impl fmt::Display for Length2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!(
            "({}, {}) m",
            render_number(self.meters.x, f),
            render_number(self.meters.y, f)
        );
        pad_rendered(f, &rendered)
    }
}

/// `Length2d` keyed by its canonical meters, usable in `HashMap`/`HashSet`.
///
/// Equality is bitwise on the meters, except that `-0.0` and `0.0` are the
/// same key. A NaN key only matches the identical NaN bit pattern.
#[derive(Debug, Clone, Copy)]
pub struct ByMeters(pub Length2d);

impl PartialEq for ByMeters {
    fn eq(&self, other: &Self) -> bool {
        self.0.bits() == other.0.bits()
    }
}

impl Eq for ByMeters {}

impl Hash for ByMeters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl From<Length2d> for ByMeters {
    fn from(value: Length2d) -> Self {
        Self(value)
    }
}
