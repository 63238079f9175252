//! `uom` vocabulary used when bridging to the wider units ecosystem.

pub use uom::si::f64 as si;

pub use uom::si::{
    angle::{degree, gon, radian},
    area::{
        square_centimeter, square_decimeter, square_foot, square_inch, square_kilometer,
        square_meter, square_mile, square_millimeter, square_yard,
    },
    length::{
        centimeter, decimeter, foot, inch, kilometer, meter, micrometer, mile, millimeter,
        nanometer, yard,
    },
    volume::{
        centiliter, cubic_centimeter, cubic_decimeter, cubic_kilometer, cubic_meter,
        cubic_millimeter, deciliter, hectoliter, liter, milliliter,
    },
};

