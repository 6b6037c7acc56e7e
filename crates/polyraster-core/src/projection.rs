//! WGS84 → Web Mercator (EPSG:900913) conversion.
//!
//! The render backend consumes coordinates in spherical-mercator meters,
//! so viewport corners are converted once per render cycle before the
//! spec is built.

use crate::geometry::{GeoPoint, ProjectedPoint};

/// Half the circumference of the spherical-mercator earth, in meters.
pub const ORIGIN_SHIFT: f64 = 20_037_508.342_789_244;

/// Convert a WGS84 point to Web Mercator meters.
pub fn wgs84_to_mercator(p: &GeoPoint) -> ProjectedPoint {
    let x = p.lng * ORIGIN_SHIFT / 180.0;
    let y = ((90.0 + p.lat) * std::f64::consts::PI / 360.0).tan().ln()
        / (std::f64::consts::PI / 180.0)
        * ORIGIN_SHIFT
        / 180.0;
    ProjectedPoint::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        let p = wgs84_to_mercator(&GeoPoint::new(0.0, 0.0));
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_antimeridian_maps_to_origin_shift() {
        let p = wgs84_to_mercator(&GeoPoint::new(180.0, 0.0));
        assert!((p.x - ORIGIN_SHIFT).abs() < 1e-6);
    }

    #[test]
    fn test_known_point() {
        // San Francisco, cross-checked against proj's EPSG:3857 output.
        let p = wgs84_to_mercator(&GeoPoint::new(-122.4194, 37.7749));
        assert!((p.x - -13_627_665.0).abs() < 100.0);
        assert!((p.y - 4_547_679.0).abs() < 100.0);
    }

    #[test]
    fn test_north_is_positive_y() {
        let north = wgs84_to_mercator(&GeoPoint::new(0.0, 45.0));
        let south = wgs84_to_mercator(&GeoPoint::new(0.0, -45.0));
        assert!(north.y > 0.0);
        assert!((north.y + south.y).abs() < 1e-6);
    }
}
