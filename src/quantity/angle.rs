use std::f64::consts::PI;

const RADIANS_TO_DEGREES: f64 = 180.0 / PI;
const GRADIANS_TO_DEGREES: f64 = 0.9;

quantity! {
    /// A plane angle, stored in degrees.
    ///
    /// Any magnitude is accepted; angles are not wrapped into `[0, 360)`.
    Angle in degrees (from_degrees, "°") {
        radians, from_radians => RADIANS_TO_DEGREES;
        gradians, from_gradians => GRADIANS_TO_DEGREES;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;
    use crate::types::QuantityError;
    use crate::types::units::{degree, gon, radian, si};
    use approx::assert_abs_diff_eq;
    use std::any::Any;
    use std::cmp::Ordering;

    const DELTA: f64 = 1e-5;

    #[test]
    fn test_degrees_to_angle_units() {
        let angle = Angle::from_degrees(90.0);

        assert_abs_diff_eq!(angle.radians(), PI / 2.0, epsilon = DELTA);
        assert_abs_diff_eq!(angle.gradians(), 100.0, epsilon = DELTA);
    }

    #[test]
    fn test_angle_units_round_trip() {
        let angle = Angle::from_degrees(90.0);

        assert_abs_diff_eq!(Angle::from_radians(angle.radians()).degrees(), 90.0, epsilon = DELTA);
        assert_abs_diff_eq!(Angle::from_gradians(angle.gradians()).degrees(), 90.0, epsilon = DELTA);

        for value in [-720.0, -1.5, 0.0, 33.3, 1e6] {
            assert_abs_diff_eq!(Angle::from_radians(value).radians(), value, epsilon = DELTA);
            assert_abs_diff_eq!(Angle::from_gradians(value).gradians(), value, epsilon = DELTA);
        }
    }

    #[test]
    fn test_ratios_agree_with_uom() {
        // 200 gon is a half turn
        let half_turn = si::Angle::new::<gon>(200.0);
        assert_abs_diff_eq!(Angle::from_gradians(200.0).degrees(), half_turn.get::<degree>(), epsilon = DELTA);
        assert_abs_diff_eq!(Angle::from_degrees(180.0).radians(), half_turn.get::<radian>(), epsilon = DELTA);
    }

    #[test]
    fn test_arithmetic_operators() {
        let a = Angle::from_degrees(90.0);

        assert_abs_diff_eq!((-a).degrees(), -90.0, epsilon = DELTA);
        assert_abs_diff_eq!((Angle::from_degrees(270.0) - a).degrees(), 180.0, epsilon = DELTA);
        assert_abs_diff_eq!((a + a).degrees(), 180.0, epsilon = DELTA);
        assert_abs_diff_eq!((a * 10.0).degrees(), 900.0, epsilon = DELTA);
        assert_abs_diff_eq!((10.0 * a).degrees(), 900.0, epsilon = DELTA);
        assert_abs_diff_eq!((a / 5.0).degrees(), 18.0, epsilon = DELTA);
        assert_abs_diff_eq!(a / Angle::from_degrees(5.0), 18.0, epsilon = DELTA);
    }

    #[test]
    fn test_arithmetic_identities() {
        let a = Angle::from_degrees(37.5);

        assert_eq!(a + (-a), Angle::ZERO);
        assert_eq!(a - a, Angle::ZERO);
        assert_eq!(a * 1.0, a);
        assert_eq!(a / a, 1.0);
        assert_eq!(3.0 * a, a * 3.0);
    }

    #[test]
    fn test_subtraction_is_exact_in_degrees() {
        assert_eq!(
            Angle::from_degrees(270.0) - Angle::from_degrees(90.0),
            Angle::from_degrees(180.0)
        );
    }

    #[test]
    fn test_comparison_operators() {
        let degrees90 = Angle::from_degrees(90.0);
        let degrees180 = Angle::from_degrees(180.0);

        assert!(degrees90 < degrees180);
        assert!(degrees90 <= degrees180);
        assert!(degrees180 > degrees90);
        assert!(degrees180 >= degrees90);

        assert!(!(degrees90 > degrees180));
        assert!(!(degrees90 >= degrees180));
        assert!(!(degrees180 < degrees90));
        assert!(!(degrees180 <= degrees90));
    }

    #[test]
    fn test_equality_operators() {
        let a = Angle::from_degrees(90.0);
        let b = Angle::from_degrees(180.0);

        assert!(a == a);
        assert!(a != b);
        assert!(!(a == b));
        assert!(!(a != a));
    }

    #[test]
    fn test_compare_to() {
        let one_degree = Angle::from_degrees(1.0);

        assert_eq!(one_degree.compare_to(Some(&one_degree as &dyn Any)), Ok(Ordering::Equal));
        assert_eq!(one_degree.compare_to(Some(&Angle::ZERO as &dyn Any)), Ok(Ordering::Greater));
        assert_eq!(Angle::ZERO.compare_to(Some(&one_degree as &dyn Any)), Ok(Ordering::Less));
    }

    #[test]
    fn test_compare_to_fails_on_type_mismatch() {
        let angle = Angle::from_degrees(90.0);
        let err = angle.compare_to(Some(&"not an angle" as &dyn Any)).unwrap_err();

        assert_eq!(err, QuantityError::TypeMismatch { expected: "Angle" });
        assert_eq!(err.to_string(), "Expected type Angle, found another type");
    }

    #[test]
    fn test_compare_to_fails_on_none() {
        let angle = Angle::from_degrees(90.0);

        assert_eq!(
            angle.compare_to(None),
            Err(QuantityError::NullArgument { expected: "Angle" })
        );
    }

    #[test]
    fn test_equals_any() {
        let angle = Angle::from_degrees(0.0);

        assert!(angle.equals_any(Some(&Angle::ZERO as &dyn Any)));
        assert!(!angle.equals_any(Some(&Angle::from_degrees(1.0) as &dyn Any)));
        assert!(!angle.equals_any(Some(&() as &dyn Any)));
        assert!(!angle.equals_any(None));
    }

    #[test]
    fn test_display_uses_degrees() {
        assert_eq!(Angle::from_degrees(90.0).to_string(), "90 °");
        assert_eq!(format!("{:.1}", Angle::from_radians(PI)), "180.0 °");
    }
}
