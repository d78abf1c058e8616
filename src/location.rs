use serde::{Deserialize, Serialize};

/// A named place with fixed coordinates, drawn from the static city table.
///
/// Locations are read-only reference data; profiles point at them by name
/// through their `address` field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    /// Build the embeddable map URL for this location.
    pub fn map_embed_url(&self) -> String {
        format!(
            "https://www.google.com/maps/embed?pb=!1m14!1m12!1m3!1d15000!2d{}!3d{}!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!5e0!3m2!1sen!2sin!4v1700000000000",
            self.longitude, self.latitude
        )
    }
}

lazy_static! {
    /// The fixed city table. Defined once at process start, never mutated.
    pub static ref CITIES: Vec<Location> = vec![
        Location::new("Mumbai", 19.0760, 72.8777),
        Location::new("Delhi", 28.7041, 77.1025),
        Location::new("Bangalore", 12.9716, 77.5946),
        Location::new("Hyderabad", 17.3850, 78.4867),
        Location::new("Chennai", 13.0827, 80.2707),
        Location::new("Kolkata", 22.5726, 88.3639),
        Location::new("Pune", 18.5204, 73.8567),
        Location::new("Jaipur", 26.9124, 75.7873),
        Location::new("Jhanjharpur", 26.2647, 86.2799),
    ];
}

/// Look up a city by the name a profile's `address` field carries.
pub fn find_city(name: &str) -> Option<&'static Location> {
    CITIES.iter().find(|city| city.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_nine_cities() {
        assert_eq!(CITIES.len(), 9);
    }

    #[test]
    fn find_city_is_exact_by_name() {
        let pune = find_city("Pune").unwrap();
        assert_eq!(pune.latitude, 18.5204);
        assert_eq!(pune.longitude, 73.8567);
        assert!(find_city("pune").is_none());
        assert!(find_city("Atlantis").is_none());
    }

    #[test]
    fn embed_url_interpolates_longitude_then_latitude() {
        let delhi = find_city("Delhi").unwrap();
        let url = delhi.map_embed_url();
        assert!(url.contains("!2d77.1025!3d28.7041"));
        assert!(url.starts_with("https://www.google.com/maps/embed?pb="));
    }

    #[test]
    fn location_json_round_trip() {
        let city = find_city("Kolkata").unwrap().clone();
        let json = serde_json::to_string(&city).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, city);
    }
}
