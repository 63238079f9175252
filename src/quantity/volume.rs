const CUBIC_KILOMETERS_TO_CUBIC_METERS: f64 = 1e9;
const CUBIC_DECIMETERS_TO_CUBIC_METERS: f64 = 1e-3;
const CUBIC_CENTIMETERS_TO_CUBIC_METERS: f64 = 1e-6;
const CUBIC_MILLIMETERS_TO_CUBIC_METERS: f64 = 1e-9;
const HECTOLITERS_TO_CUBIC_METERS: f64 = 1e-1;
const LITERS_TO_CUBIC_METERS: f64 = 1e-3;
const DECILITERS_TO_CUBIC_METERS: f64 = 1e-4;
const CENTILITERS_TO_CUBIC_METERS: f64 = 1e-5;
const MILLILITERS_TO_CUBIC_METERS: f64 = 1e-6;

quantity! {
    /// A volume, stored in cubic meters.
    ///
    /// Negative volumes are representable; nothing here rejects them.
    Volume in cubic_meters (from_cubic_meters, "m³") {
        cubic_kilometers, from_cubic_kilometers => CUBIC_KILOMETERS_TO_CUBIC_METERS;
        cubic_decimeters, from_cubic_decimeters => CUBIC_DECIMETERS_TO_CUBIC_METERS;
        cubic_centimeters, from_cubic_centimeters => CUBIC_CENTIMETERS_TO_CUBIC_METERS;
        cubic_millimeters, from_cubic_millimeters => CUBIC_MILLIMETERS_TO_CUBIC_METERS;
        hectoliters, from_hectoliters => HECTOLITERS_TO_CUBIC_METERS;
        liters, from_liters => LITERS_TO_CUBIC_METERS;
        deciliters, from_deciliters => DECILITERS_TO_CUBIC_METERS;
        centiliters, from_centiliters => CENTILITERS_TO_CUBIC_METERS;
        milliliters, from_milliliters => MILLILITERS_TO_CUBIC_METERS;
    }
}

impl Volume {
    /// The maximum representable volume in cubic meters.
    pub const MAX: Self = Self::new(f64::MAX);
    /// The smallest representable volume in cubic meters.
    pub const MIN: Self = Self::new(f64::MIN);
}
