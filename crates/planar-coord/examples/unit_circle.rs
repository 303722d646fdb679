use planar_coord::*;
use std::f64::consts::PI;

fn main() {
    let spokes = 8;
    let radius = 1.0;

    println!("Sampling points on a circle...");
    println!("  Radius: {}", radius);
    println!("  Spokes: {}", spokes);
    println!();

    for i in 0..spokes {
        let angle = 2.0 * PI * (i as f64) / (spokes as f64);
        let coord = Coordinate::from_angles(angle, radius);
        println!("Spoke {:>2}: {}", i, coord);
    }

    println!();
    println!("The same point, built both ways:");
    let direct = Coordinate::from_xy(3.0, 4.0);
    let polar = Coordinate::from_angles((4.0_f64 / 3.0).atan(), 5.0);
    println!("  from_xy:     {}", direct);
    println!("  from_angles: {}", polar);
}
