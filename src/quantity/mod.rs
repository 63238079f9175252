//! Scalar quantity types.
//!
//! Every quantity has the same shape: one canonical `f64` magnitude, named
//! factories and accessors that scale it by a fixed ratio, and a fixed
//! operator set. The shape is written once in `quantity!` and instantiated
//! per quantity, so each quantity stays its own nominal type and mixing
//! (say) an [`Angle`] with a [`Volume`] does not compile.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt::{self, Write as _};

use crate::types::QuantityError;

/// Declares a quantity newtype over its canonical magnitude.
///
/// Each unit line reads `accessor, factory => RATIO;`, where `RATIO` is how
/// many canonical units one of that unit holds.
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $name:ident in $canonical:ident ($from_canonical:ident, $symbol:literal) {
            $(
                $(#[$unit_meta:meta])*
                $unit:ident, $from_unit:ident => $ratio:path;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            PartialOrd,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            pub const ZERO: Self = Self(0.0);

            /// Wraps a magnitude already expressed in the canonical unit.
            #[inline]
            pub const fn new($canonical: f64) -> Self {
                Self($canonical)
            }

            #[inline]
            pub const fn $from_canonical($canonical: f64) -> Self {
                Self($canonical)
            }

            /// Magnitude in the canonical unit.
            #[inline]
            pub const fn $canonical(&self) -> f64 {
                self.0
            }

            $(
                #[inline]
                pub const fn $from_unit(value: f64) -> Self {
                    Self(value * $ratio)
                }

                $(#[$unit_meta])*
                #[inline]
                pub const fn $unit(&self) -> f64 {
                    self.0 / $ratio
                }
            )*

            /// False for NaN and infinite magnitudes. Construction never checks this.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.0.is_finite()
            }
        }

        impl $crate::quantity::Quantity for $name {
            const NAME: &'static str = stringify!($name);
            const SYMBOL: &'static str = $symbol;

            #[inline]
            fn from_canonical(value: f64) -> Self {
                Self(value)
            }

            #[inline]
            fn canonical(&self) -> f64 {
                self.0
            }
        }

        impl ::std::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl ::std::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Mul<f64> for $name {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl ::std::ops::Mul<$name> for f64 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name(self * rhs.0)
            }
        }

        impl ::std::ops::Div<f64> for $name {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                Self(self.0 / rhs)
            }
        }

        /// Ratio of two values of the same quantity.
        impl ::std::ops::Div for $name {
            type Output = f64;
            fn div(self, rhs: Self) -> f64 {
                self.0 / rhs.0
            }
        }

        impl ::std::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|q| q.0).sum())
            }
        }

        impl<'a> ::std::iter::Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|q| q.0).sum())
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&$crate::quantity::canonical_bits(self.0), state);
            }
        }

        /// `"<canonical> <symbol>"`. Precision and `+` apply to the number,
        /// width and alignment to the whole rendering.
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let rendered = ::std::format!("{} {}", $crate::quantity::render_number(self.0, f), $symbol);
                $crate::quantity::pad_rendered(f, &rendered)
            }
        }
    };
}

mod angle;
mod area;
mod length;
mod products;
mod volume;

pub use angle::Angle;
pub use area::Area;
pub use length::Length;
pub use volume::Volume;

/// Behaviour shared by every scalar quantity.
///
/// `compare_to` and `equals_any` accept any value as `&dyn Any`. A missing
/// value or a value of another type is an error for `compare_to`, but
/// `equals_any` simply answers `false`.
pub trait Quantity: Copy + PartialOrd + Any {
    /// Type name reported by [`QuantityError`].
    const NAME: &'static str;
    /// Symbol of the canonical unit, as rendered by `Display`.
    const SYMBOL: &'static str;

    fn from_canonical(value: f64) -> Self;

    fn canonical(&self) -> f64;

    /// Orders by canonical magnitude. Unlike `partial_cmp` this never gives
    /// up: NaN sorts below every number and equals itself.
    fn compare(&self, other: &Self) -> Ordering {
        total_compare(self.canonical(), other.canonical())
    }

    /// # Errors
    ///
    /// [`QuantityError::NullArgument`] when `other` is `None`,
    /// [`QuantityError::TypeMismatch`] when it is not a `Self`.
    fn compare_to(&self, other: Option<&dyn Any>) -> Result<Ordering, QuantityError> {
        let other = other.ok_or(QuantityError::NullArgument { expected: Self::NAME })?;
        let other = other
            .downcast_ref::<Self>()
            .ok_or(QuantityError::TypeMismatch { expected: Self::NAME })?;
        Ok(self.compare(other))
    }

    fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self.compare(other) == Ordering::Equal)
    }
}

pub(crate) fn total_compare(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        },
    }
}

/// Bit pattern used for hashing; `-0.0` folds into `0.0` so hashing agrees with `==`.
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 { 0.0_f64.to_bits() } else { value.to_bits() }
}

/// Formats a magnitude with the formatter's precision and sign flag, but
/// without its width.
pub(crate) fn render_number(value: f64, f: &fmt::Formatter<'_>) -> String {
    match (f.precision(), f.sign_plus()) {
        (Some(precision), true) => format!("{value:+.precision$}"),
        (Some(precision), false) => format!("{value:.precision$}"),
        (None, true) => format!("{value:+}"),
        (None, false) => value.to_string(),
    }
}

/// Writes `rendered` padded to the formatter's width as one unit. Text is
/// left-aligned unless the formatter asks otherwise.
pub(crate) fn pad_rendered(f: &mut fmt::Formatter<'_>, rendered: &str) -> fmt::Result {
    let Some(width) = f.width() else {
        return f.write_str(rendered);
    };
    let padding = width.saturating_sub(rendered.chars().count());
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Right) => (padding, 0),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        _ => (0, padding),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(rendered)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}
