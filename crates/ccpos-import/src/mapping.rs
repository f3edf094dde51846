//! Field extraction and validation: `OsmNode` → `Pos`.
//!
//! Pure transformation over the node's tag map and coordinates. Required
//! fields fail eagerly at the first one that is absent, blank, or
//! unparseable; there is no error accumulation.

use tracing::warn;

use ccpos_core::{Pos, PosType};
use ccpos_osm::OsmNode;

use crate::campus::classify_campus;
use crate::error::ImportError;

// Tag-to-type tables, consulted in precedence order: `amenity` strictly
// before `shop`. An amenity that is present but unmapped yields no type at
// all; `shop` is never consulted as a fallback.
const AMENITY_TYPES: &[(&str, PosType)] = &[
    ("cafe", PosType::Cafe),
    ("coffee_shop", PosType::Cafe),
    ("cafeteria", PosType::Cafeteria),
    ("restaurant", PosType::Cafeteria),
    ("vending_machine", PosType::VendingMachine),
];

const SHOP_TYPES: &[(&str, PosType)] = &[
    ("coffee", PosType::Cafe),
    ("cafe", PosType::Cafe),
    ("bakery", PosType::Bakery),
];

/// Builds a [`Pos`] (no id, no timestamps) from an OSM node.
///
/// # Errors
///
/// Returns [`ImportError::MissingFields`] if `name` or any of the four
/// address tags is absent or blank, the postal code does not parse as an
/// integer, or neither `amenity` nor `shop` yields a POS type.
pub fn pos_from_node(node: &OsmNode) -> Result<Pos, ImportError> {
    let name = required_tag(node, "name")?;

    let description = node
        .tag("description")
        .or_else(|| node.tag("note"))
        .unwrap_or("")
        .trim();

    let street = required_tag(node, "addr:street")?;
    let house_number = required_tag(node, "addr:housenumber")?;
    let postal_code_raw = required_tag(node, "addr:postcode")?;
    let city = required_tag(node, "addr:city")?;

    let postal_code = postal_code_raw.parse::<i32>().map_err(|_| {
        warn!(
            node_id = node.node_id,
            postal_code = %postal_code_raw,
            "invalid postal code on OSM node"
        );
        ImportError::MissingFields {
            node_id: node.node_id,
            field: "addr:postcode",
        }
    })?;

    let pos_type = classify_pos_type(node).ok_or(ImportError::MissingFields {
        node_id: node.node_id,
        field: "amenity/shop",
    })?;

    let campus = classify_campus(city, node.coordinates());

    Ok(Pos {
        id: None,
        name: name.to_owned(),
        description: description.to_owned(),
        pos_type,
        campus,
        street: street.to_owned(),
        house_number: house_number.to_owned(),
        postal_code,
        city: city.to_owned(),
        created_at: None,
        updated_at: None,
    })
}

/// Classifies the POS type from the node's `amenity`/`shop` tags, or `None`
/// if neither table matches.
fn classify_pos_type(node: &OsmNode) -> Option<PosType> {
    if let Some(amenity) = node.tag("amenity") {
        return table_lookup(AMENITY_TYPES, amenity);
    }
    node.tag("shop")
        .and_then(|shop| table_lookup(SHOP_TYPES, shop))
}

fn table_lookup(table: &[(&str, PosType)], value: &str) -> Option<PosType> {
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(value))
        .map(|&(_, pos_type)| pos_type)
}

/// Returns the trimmed tag value, or `MissingFields` when the tag is absent
/// or blank.
fn required_tag<'a>(node: &'a OsmNode, key: &'static str) -> Result<&'a str, ImportError> {
    match node.tag(key).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ImportError::MissingFields {
            node_id: node.node_id,
            field: key,
        }),
    }
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;
