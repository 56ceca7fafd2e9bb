//! Geo Resolver
//! Joins per-region sums with the fixed state coordinate table.

use log::debug;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Latitude/longitude of a known region's marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A region sum placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub region: String,
    pub value: u64,
    pub point: GeoPoint,
}

/// Marker positions for the 30 mapped states. Regions not listed here are
/// left off the map; adding or renaming one needs an entry here.
const REGION_COORDINATES: [(&str, f64, f64); 30] = [
    ("Andhra Pradesh", 15.9129, 79.7400),
    ("Arunachal Pradesh", 28.2180, 94.7278),
    ("Assam", 26.2006, 92.9376),
    ("Bihar", 25.0961, 85.3131),
    ("Chhattisgarh", 21.2787, 81.8661),
    ("Delhi", 28.7041, 77.1025),
    ("Goa", 15.2993, 74.1240),
    ("Gujarat", 22.2587, 71.1924),
    ("Haryana", 29.0588, 76.0856),
    ("Himachal Pradesh", 31.1048, 77.1734),
    ("Jammu and Kashmir", 33.7782, 76.5762),
    ("Jharkhand", 23.6102, 85.2799),
    ("Karnataka", 15.3173, 75.7139),
    ("Kerala", 10.8505, 76.2711),
    ("Madhya Pradesh", 22.9734, 78.6569),
    ("Maharashtra", 19.7515, 75.7139),
    ("Manipur", 24.6637, 93.9063),
    ("Meghalaya", 25.4670, 91.3662),
    ("Mizoram", 23.1645, 92.9376),
    ("Nagaland", 26.1584, 94.5624),
    ("Odisha", 20.9517, 85.0985),
    ("Punjab", 31.1471, 75.3412),
    ("Rajasthan", 27.0238, 74.2179),
    ("Sikkim", 27.5330, 88.5122),
    ("Tamil Nadu", 11.1271, 78.6569),
    ("Telangana", 18.1124, 79.0193),
    ("Tripura", 23.9408, 91.9882),
    ("Uttar Pradesh", 26.8467, 80.9462),
    ("Uttarakhand", 30.0668, 79.0193),
    ("West Bengal", 22.9868, 87.8550),
];

static COORDINATES: LazyLock<HashMap<&'static str, GeoPoint>> = LazyLock::new(|| {
    REGION_COORDINATES
        .iter()
        .map(|&(name, lat, lon)| (name, GeoPoint { lat, lon }))
        .collect()
});

pub struct GeoResolver;

impl GeoResolver {
    pub fn lookup(region: &str) -> Option<GeoPoint> {
        COORDINATES.get(region).copied()
    }

    /// Keep the sums whose region has coordinates, in input order.
    pub fn resolve(region_sums: &[(String, u64)]) -> Vec<MapEntry> {
        region_sums
            .iter()
            .filter_map(|(region, value)| match Self::lookup(region) {
                Some(point) => Some(MapEntry {
                    region: region.clone(),
                    value: *value,
                    point,
                }),
                None => {
                    debug!("No map coordinates for {region:?}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_thirty_distinct_regions() {
        let names: HashSet<&str> = REGION_COORDINATES.iter().map(|&(name, _, _)| name).collect();
        assert_eq!(names.len(), 30);
        assert_eq!(COORDINATES.len(), 30);
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(
            GeoResolver::lookup("Kerala"),
            Some(GeoPoint {
                lat: 10.8505,
                lon: 76.2711
            })
        );
        assert_eq!(GeoResolver::lookup("Ladakh"), None);
        assert_eq!(GeoResolver::lookup("kerala"), None);
    }

    #[test]
    fn resolve_drops_unmapped_regions() {
        let sums = vec![
            ("Atlantis".to_string(), 500),
            ("Goa".to_string(), 20),
            ("Ladakh".to_string(), 7),
            ("Kerala".to_string(), 300),
        ];
        let entries = GeoResolver::resolve(&sums);

        let names: Vec<&str> = entries.iter().map(|e| e.region.as_str()).collect();
        assert_eq!(names, vec!["Goa", "Kerala"]);
        assert_eq!(entries[1].value, 300);
        assert!(entries
            .iter()
            .all(|e| GeoResolver::lookup(&e.region).is_some()));
    }
}
