//! # Geography
//!
//! Coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other`, in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(self, other)
    }
}

/// Great-circle surface distance between two points in meters.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}

/// Walking/driving directions URL with the given destination.
pub fn directions_url(destination: &Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        destination.latitude, destination.longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Coordinate::new(12.9716, 77.5946);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.01)),
            (Coordinate::new(-6.2088, 106.8456), Coordinate::new(-6.9175, 107.6191)),
            (Coordinate::new(51.5074, -0.1278), Coordinate::new(40.7128, -74.0060)),
            (Coordinate::new(89.9, 179.9), Coordinate::new(-89.9, -179.9)),
        ];
        for (a, b) in pairs {
            let forward = haversine_distance(&a, &b);
            let backward = haversine_distance(&b, &a);
            assert!((forward - backward).abs() < 1e-9, "{forward} != {backward}");
        }
    }

    #[test]
    fn test_one_hundredth_degree_on_equator() {
        // 0.01° of longitude on the equator is ~1112 m
        let d = haversine_distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 0.01));
        assert!((d - 1111.95).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_jakarta_bandung_is_about_116_km() {
        let jakarta = Coordinate::new(-6.2088, 106.8456);
        let bandung = Coordinate::new(-6.9175, 107.6191);
        let km = jakarta.distance_to(&bandung) / 1000.0;
        assert!(km > 100.0 && km < 150.0, "got {km}");
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let d = haversine_distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1.0);
    }

    #[test]
    fn test_directions_url() {
        let url = directions_url(&Coordinate::new(12.5, -70.25));
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=12.5,-70.25"
        );
    }
}
