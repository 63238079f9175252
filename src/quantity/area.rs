const SQUARE_KILOMETERS_TO_SQUARE_METERS: f64 = 1e6;
const SQUARE_DECIMETERS_TO_SQUARE_METERS: f64 = 1e-2;
const SQUARE_CENTIMETERS_TO_SQUARE_METERS: f64 = 1e-4;
const SQUARE_MILLIMETERS_TO_SQUARE_METERS: f64 = 1e-6;
const SQUARE_MILES_TO_SQUARE_METERS: f64 = 2589988.110336;
const SQUARE_YARDS_TO_SQUARE_METERS: f64 = 0.83612736;
const SQUARE_FEET_TO_SQUARE_METERS: f64 = 0.09290304;
const SQUARE_INCHES_TO_SQUARE_METERS: f64 = 6.4516e-4;

quantity! {
    /// An area, stored in square meters.
    Area in square_meters (from_square_meters, "m²") {
        square_kilometers, from_square_kilometers => SQUARE_KILOMETERS_TO_SQUARE_METERS;
        square_decimeters, from_square_decimeters => SQUARE_DECIMETERS_TO_SQUARE_METERS;
        square_centimeters, from_square_centimeters => SQUARE_CENTIMETERS_TO_SQUARE_METERS;
        square_millimeters, from_square_millimeters => SQUARE_MILLIMETERS_TO_SQUARE_METERS;
        square_miles, from_square_miles => SQUARE_MILES_TO_SQUARE_METERS;
        square_yards, from_square_yards => SQUARE_YARDS_TO_SQUARE_METERS;
        square_feet, from_square_feet => SQUARE_FEET_TO_SQUARE_METERS;
        square_inches, from_square_inches => SQUARE_INCHES_TO_SQUARE_METERS;
    }
}

impl Area {
    /// Largest representable area.
    pub const MAX: Self = Self::new(f64::MAX);
    /// Most negative representable area.
    pub const MIN: Self = Self::new(f64::MIN);
}
