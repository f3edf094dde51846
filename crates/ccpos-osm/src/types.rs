use std::collections::HashMap;

/// An OpenStreetMap node with the attributes the import pipeline cares
/// about: the node ID, optional coordinates, and the free-form tag map.
///
/// Lives only for the duration of one import invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct OsmNode {
    pub node_id: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tags: HashMap<String, String>,
}

impl OsmNode {
    /// Returns `(lat, lon)` when both coordinates were present and
    /// well-formed in the source document. The parser never sets one
    /// without the other.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Returns the tag value for `key`, or `None` if absent.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
