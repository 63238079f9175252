use std::any::Any;

use units_core::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let right = Angle::from_degrees(90.0);
    println!("Right angle: {} = {:.4} rad = {} gon", right, right.radians(), right.gradians());
    println!("Sectors of 5°: {}", right / Angle::from_degrees(5.0));

    let tank = Volume::from_liters(1200.0);
    println!("Tank: {} ({} L)", tank, tank.liters());

    let footprint = Length::from_meters(2.0) * Length::from_meters(1.0);
    println!("Footprint: {}, fill height: {}", footprint, tank / footprint);

    let a = Length2d::from_meters(0.0, 0.0);
    let b = Length2d::from_meters(3.0, 4.0);
    println!("Distance {} -> {}: {}", a, b, Length2d::distance(a, b));

    // The dynamic comparison fails on the wrong quantity
    match right.compare_to(Some(&tank as &dyn Any)) {
        Ok(ordering) => println!("Compared: {:?}", ordering),
        Err(e) => println!("Comparison failed: {}", e),
    }
    let ordering = right.compare_to(Some(&Angle::from_radians(1.0) as &dyn Any))?;
    println!("90° vs 1 rad: {:?}", ordering);

    Ok(())
}
