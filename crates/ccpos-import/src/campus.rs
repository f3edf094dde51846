//! Campus zone classification.
//!
//! Best-effort heuristic over the address city and node coordinates. Never
//! fails: anything that cannot be placed lands in `Altstadt`.

use ccpos_core::CampusType;

// Approximate campus boundaries in Heidelberg:
// ALTSTADT around 49.41/8.70, BERGHEIM around 49.40/8.69,
// INF (Im Neuenheimer Feld) around 49.42/8.68.
const INF_MIN_LAT: f64 = 49.415;
const INF_MAX_LON: f64 = 8.685;
const BERGHEIM_MAX_LAT: f64 = 49.405;

/// Classifies a POS into a campus zone from its city and coordinates.
///
/// A city that does not contain "heidelberg" (case-insensitive) is always
/// `Altstadt`, regardless of coordinates. Missing coordinates also default
/// to `Altstadt`.
#[must_use]
pub fn classify_campus(city: &str, coordinates: Option<(f64, f64)>) -> CampusType {
    if !city.to_lowercase().contains("heidelberg") {
        return CampusType::Altstadt;
    }

    match coordinates {
        Some((lat, lon)) if lat > INF_MIN_LAT && lon < INF_MAX_LON => CampusType::Inf,
        Some((lat, _)) if lat < BERGHEIM_MAX_LAT => CampusType::Bergheim,
        _ => CampusType::Altstadt,
    }
}
