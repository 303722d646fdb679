mod config; // brings `config.rs` in as `crate::config`

use anyhow::Context;
use planar_coord::Coordinate;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Planar demo started. Loading point definitions...");

    let points = config::load_points().context("could not load point definitions")?;

    for entry in &points.cartesian {
        let coord = Coordinate::from_xy(entry.x, entry.y);
        info!(x = entry.x, y = entry.y, "Cartesian input rendered as {}", coord);
    }

    for entry in &points.polar {
        let coord = Coordinate::from_angles(entry.angle, entry.distance);
        info!(
            angle = entry.angle,
            distance = entry.distance,
            "Polar input rendered as {}",
            coord
        );
    }

    info!(
        "Rendered {} coordinates.",
        points.cartesian.len() + points.polar.len()
    );

    Ok(())
}
