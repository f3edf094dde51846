//! OSM XML node parsing.
//!
//! The OSM API returns a document like:
//!
//! ```xml
//! <osm version="0.6">
//!   <node id="123" lat="49.41" lon="8.70" ...>
//!     <tag k="name" v="Cafe Botanik"/>
//!     <tag k="amenity" v="cafe"/>
//!   </node>
//! </osm>
//! ```
//!
//! Only the first `<node>` element is read. Structural failures, a missing
//! node element, and an ID mismatch all collapse to [`OsmError::NodeNotFound`];
//! the detail is logged, not propagated.

use std::borrow::Cow;
use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{error, warn};

use crate::error::OsmError;
use crate::types::OsmNode;

/// Parse an OSM XML document into the node with the requested ID.
///
/// # Errors
///
/// Returns [`OsmError::NodeNotFound`] if the document is malformed, contains
/// no `<node>` element, or the first node's `id` attribute does not match
/// `node_id`.
pub fn parse_node_xml(xml: &str, node_id: i64) -> Result<OsmNode, OsmError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut node: Option<OsmNode> = None;
    let mut in_node = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"node" if node.is_none() => {
                    node = Some(node_from_attributes(&e, node_id)?);
                    in_node = true;
                }
                b"tag" if in_node => {
                    if let Some(n) = node.as_mut() {
                        insert_tag(&e, &mut n.tags);
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"node" if node.is_none() => {
                    // Self-closing node element: no tag children to collect.
                    return node_from_attributes(&e, node_id);
                }
                b"tag" if in_node => {
                    if let Some(n) = node.as_mut() {
                        insert_tag(&e, &mut n.tags);
                    }
                }
                _ => {}
            },
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"node" && in_node {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                error!(node_id, error = %e, "malformed OSM XML");
                return Err(OsmError::NodeNotFound(node_id));
            }
            _ => {}
        }
    }

    match node {
        Some(n) => Ok(n),
        None => {
            warn!(node_id, "no node element in OSM response");
            Err(OsmError::NodeNotFound(node_id))
        }
    }
}

/// Build an [`OsmNode`] from a `<node>` element's attributes, with an empty
/// tag map.
///
/// The `id` attribute is compared against the requested ID as a decimal
/// string; a mismatch means the endpoint returned a different record than
/// asked for. Coordinates are populated only when both `lat` and `lon` are
/// present and parse — a malformed pair is logged and dropped, never an
/// error.
fn node_from_attributes(e: &BytesStart<'_>, node_id: i64) -> Result<OsmNode, OsmError> {
    let xml_id = attr(e, b"id").unwrap_or_default();
    if xml_id != node_id.to_string() {
        warn!(node_id, xml_id = %xml_id, "node ID mismatch in OSM response");
        return Err(OsmError::NodeNotFound(node_id));
    }

    let (latitude, longitude) = match (attr(e, b"lat"), attr(e, b"lon")) {
        (Some(lat), Some(lon)) => match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(la), Ok(lo)) => (Some(la), Some(lo)),
            _ => {
                warn!(node_id, lat = %lat, lon = %lon, "invalid coordinates on OSM node, dropping both");
                (None, None)
            }
        },
        _ => (None, None),
    };

    Ok(OsmNode {
        node_id,
        latitude,
        longitude,
        tags: HashMap::new(),
    })
}

/// Insert a `<tag k v>` pair into the map. Pairs with an empty key or value
/// are skipped; a duplicate key overwrites the earlier value (last wins).
fn insert_tag(e: &BytesStart<'_>, tags: &mut HashMap<String, String>) {
    let key = attr(e, b"k").unwrap_or_default();
    let value = attr(e, b"v").unwrap_or_default();
    if key.is_empty() || value.is_empty() {
        return;
    }
    tags.insert(key, value);
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(Result::ok)
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| a.unescape_value().ok())
        .map(Cow::into_owned)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;
