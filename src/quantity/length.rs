const KILOMETERS_TO_METERS: f64 = 1e3;
const DECIMETERS_TO_METERS: f64 = 1e-1;
const CENTIMETERS_TO_METERS: f64 = 1e-2;
const MILLIMETERS_TO_METERS: f64 = 1e-3;
const MICROMETERS_TO_METERS: f64 = 1e-6;
const NANOMETERS_TO_METERS: f64 = 1e-9;
const MILES_TO_METERS: f64 = 1609.344;
const YARDS_TO_METERS: f64 = 0.9144;
const FEET_TO_METERS: f64 = 0.3048;
const INCHES_TO_METERS: f64 = 2.54e-2;

quantity! {
    /// A length, stored in meters.
    Length in meters (from_meters, "m") {
        kilometers, from_kilometers => KILOMETERS_TO_METERS;
        decimeters, from_decimeters => DECIMETERS_TO_METERS;
        centimeters, from_centimeters => CENTIMETERS_TO_METERS;
        millimeters, from_millimeters => MILLIMETERS_TO_METERS;
        micrometers, from_micrometers => MICROMETERS_TO_METERS;
        nanometers, from_nanometers => NANOMETERS_TO_METERS;
        /// International mile.
        miles, from_miles => MILES_TO_METERS;
        yards, from_yards => YARDS_TO_METERS;
        feet, from_feet => FEET_TO_METERS;
        inches, from_inches => INCHES_TO_METERS;
    }
}

impl Length {
    /// Largest representable length.
    pub const MAX: Self = Self::new(f64::MAX);
    /// Most negative representable length.
    pub const MIN: Self = Self::new(f64::MIN);
}
