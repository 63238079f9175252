//! Cross-quantity operators.
//!
//! Only the combinations listed here exist. Each one multiplies or divides
//! canonical magnitudes, which works because meters, square meters and cubic
//! meters share one base.

use std::ops::{Div, Mul};

use super::{Area, Length, Volume};

impl Mul for Length {
    type Output = Area;
    fn mul(self, rhs: Length) -> Area {
        Area::from_square_meters(self.meters() * rhs.meters())
    }
}

impl Mul<Length> for Area {
    type Output = Volume;
    fn mul(self, rhs: Length) -> Volume {
        Volume::from_cubic_meters(self.square_meters() * rhs.meters())
    }
}

impl Mul<Area> for Length {
    type Output = Volume;
    fn mul(self, rhs: Area) -> Volume {
        rhs * self
    }
}

impl Div<Length> for Area {
    type Output = Length;
    fn div(self, rhs: Length) -> Length {
        Length::from_meters(self.square_meters() / rhs.meters())
    }
}

impl Div<Length> for Volume {
    type Output = Area;
    fn div(self, rhs: Length) -> Area {
        Area::from_square_meters(self.cubic_meters() / rhs.meters())
    }
}

impl Div<Area> for Volume {
    type Output = Length;
    fn div(self, rhs: Area) -> Length {
        Length::from_meters(self.cubic_meters() / rhs.square_meters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_length_times_length_is_area() {
        let floor = Length::from_meters(4.0) * Length::from_meters(2.5);
        assert_eq!(floor, Area::from_square_meters(10.0));

        let sheet = Length::from_feet(4.0) * Length::from_feet(8.0);
        assert_abs_diff_eq!(sheet.square_feet(), 32.0, epsilon = 1e-9);
    }

    #[test]
    fn test_area_and_length_make_volume() {
        let base = Area::from_square_meters(10.0);
        let height = Length::from_centimeters(50.0);

        assert_eq!(base * height, Volume::from_cubic_meters(5.0));
        assert_eq!(height * base, base * height);
        assert_abs_diff_eq!((base * height).liters(), 5000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_divisions_undo_products() {
        let tank = Volume::from_liters(1200.0);
        let depth = Length::from_meters(0.6);

        let footprint = tank / depth;
        assert_abs_diff_eq!(footprint.square_meters(), 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!((tank / footprint).meters(), 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!((footprint / depth).meters(), 2.0 / 0.6, epsilon = 1e-9);
    }
}
