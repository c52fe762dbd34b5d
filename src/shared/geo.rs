/// Earth's mean radius in kilometres (for Haversine formula)
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Calculate Haversine great-circle distance between two points in kilometres.
///
/// Inputs are degrees and are expected to be within [-90, 90] / [-180, 180];
/// range checking happens at the request boundary, not here.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// A validated point on the globe, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_km_to(&self, other: Coordinates) -> f64 {
        haversine_distance_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        assert_eq!(haversine_distance_km(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(haversine_distance_km(-6.2088, 106.8456, -6.2088, 106.8456), 0.0);
        assert_eq!(haversine_distance_km(89.9, -179.5, 89.9, -179.5), 0.0);
    }

    #[test]
    fn test_haversine_london_paris() {
        let london = (51.5074, -0.1278);
        let paris = (48.8566, 2.3522);

        let distance = haversine_distance_km(london.0, london.1, paris.0, paris.1);

        assert!(distance > 343.0 && distance < 344.0, "got {}", distance);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let pairs = [
            ((51.5074, -0.1278), (48.8566, 2.3522)),
            ((-6.2088, 106.8456), (-6.9175, 107.6191)),
            ((40.7128, -74.0060), (-33.8688, 151.2093)),
        ];

        for (a, b) in pairs {
            let there = haversine_distance_km(a.0, a.1, b.0, b.1);
            let back = haversine_distance_km(b.0, b.1, a.0, a.1);
            assert!((there - back).abs() < 1e-9);
        }
    }

    #[test]
    fn test_haversine_antipodal_points() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;

        let distance = haversine_distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((distance - half_circumference).abs() < 1e-6);

        let pole_to_pole = haversine_distance_km(90.0, 0.0, -90.0, 0.0);
        assert!((pole_to_pole - 20_015.0).abs() < 1.0);
    }

    #[test]
    fn test_haversine_crosses_antimeridian() {
        // 179.5E to 179.5W is one degree of longitude on the equator, not 359
        let distance = haversine_distance_km(0.0, 179.5, 0.0, -179.5);
        assert!(distance > 110.0 && distance < 112.0, "got {}", distance);
    }
}
