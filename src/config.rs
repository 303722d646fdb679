use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// A point definition given as Cartesian offsets.
#[derive(Debug, Clone, Deserialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
}

/// A point definition given as a polar pair (angle in radians, distance).
#[derive(Debug, Clone, Deserialize)]
pub struct PolarPoint {
    pub angle: f64,
    pub distance: f64,
}

/// All point definitions found in the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointSet {
    #[serde(default)]
    pub cartesian: Vec<CartesianPoint>,
    #[serde(default)]
    pub polar: Vec<PolarPoint>,
}

pub fn load_points() -> Result<PointSet, ConfigError> {
    info!("Loading point definitions from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .build()?;

    match settings.try_deserialize::<PointSet>() {
        Ok(points) => {
            info!(
                cartesian = points.cartesian.len(),
                polar = points.polar.len(),
                "Point definitions loaded"
            );
            Ok(points)
        }
        Err(e) => {
            error!("Failed to parse point definitions: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_from_toml() {
        let toml = r#"
            [[cartesian]]
            x = 3.0
            y = 4.0

            [[polar]]
            angle = 0.0
            distance = 2.0
        "#;
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        let points: PointSet = settings.try_deserialize().unwrap();
        assert_eq!(points.cartesian.len(), 1);
        assert_eq!(points.cartesian[0].x, 3.0);
        assert_eq!(points.cartesian[0].y, 4.0);
        assert_eq!(points.polar.len(), 1);
        assert_eq!(points.polar[0].angle, 0.0);
        assert_eq!(points.polar[0].distance, 2.0);
    }

    #[test]
    fn test_point_set_sections_default_to_empty() {
        let settings = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap();
        let points: PointSet = settings.try_deserialize().unwrap();
        assert!(points.cartesian.is_empty());
        assert!(points.polar.is_empty());
    }
}
