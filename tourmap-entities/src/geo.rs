use std::fmt;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A validated WGS84 coordinate pair.
///
/// Construction rejects non-finite values and degrees outside the valid
/// latitude/longitude ranges. Records without a valid position are treated
/// as "not mappable", never as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return None;
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
