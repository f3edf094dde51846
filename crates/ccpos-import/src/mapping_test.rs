use std::collections::HashMap;

use super::*;
use ccpos_core::CampusType;

fn node_with(tags: &[(&str, &str)], coordinates: Option<(f64, f64)>) -> OsmNode {
    let tags: HashMap<String, String> = tags
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    OsmNode {
        node_id: 42,
        latitude: coordinates.map(|(lat, _)| lat),
        longitude: coordinates.map(|(_, lon)| lon),
        tags,
    }
}

fn full_tags<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "Cafe Botanik"),
        ("amenity", "cafe"),
        ("addr:street", "Hauptstrasse"),
        ("addr:housenumber", "52"),
        ("addr:postcode", "69117"),
        ("addr:city", "Heidelberg"),
    ]
}

fn missing_field(result: Result<Pos, ImportError>) -> &'static str {
    match result {
        Err(ImportError::MissingFields { field, .. }) => field,
        other => panic!("expected MissingFields, got: {other:?}"),
    }
}

#[test]
fn full_node_maps_to_cafe_with_empty_description() {
    let pos = pos_from_node(&node_with(&full_tags(), None)).expect("should map");

    assert_eq!(pos.id, None);
    assert_eq!(pos.name, "Cafe Botanik");
    assert_eq!(pos.description, "");
    assert_eq!(pos.pos_type, PosType::Cafe);
    assert_eq!(pos.street, "Hauptstrasse");
    assert_eq!(pos.house_number, "52");
    assert_eq!(pos.postal_code, 69117);
    assert_eq!(pos.city, "Heidelberg");
    assert_eq!(pos.created_at, None);
}

#[test]
fn fields_are_trimmed() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "name" && k != "addr:street");
    tags.push(("name", "  Cafe Botanik "));
    tags.push(("addr:street", " Hauptstrasse  "));

    let pos = pos_from_node(&node_with(&tags, None)).expect("should map");
    assert_eq!(pos.name, "Cafe Botanik");
    assert_eq!(pos.street, "Hauptstrasse");
}

#[test]
fn each_required_tag_missing_fails() {
    for required in [
        "name",
        "addr:street",
        "addr:housenumber",
        "addr:postcode",
        "addr:city",
    ] {
        let mut tags = full_tags();
        tags.retain(|&(k, _)| k != required);
        let field = missing_field(pos_from_node(&node_with(&tags, None)));
        assert_eq!(field, required);
    }
}

#[test]
fn blank_required_tag_fails() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "name");
    tags.push(("name", "   "));
    assert_eq!(missing_field(pos_from_node(&node_with(&tags, None))), "name");
}

#[test]
fn description_tag_is_used_and_trimmed() {
    let mut tags = full_tags();
    tags.push(("description", " Best coffee on campus "));
    let pos = pos_from_node(&node_with(&tags, None)).expect("should map");
    assert_eq!(pos.description, "Best coffee on campus");
}

#[test]
fn note_is_fallback_for_missing_description() {
    let mut tags = full_tags();
    tags.push(("note", "cash only"));
    let pos = pos_from_node(&node_with(&tags, None)).expect("should map");
    assert_eq!(pos.description, "cash only");
}

#[test]
fn description_takes_precedence_over_note() {
    let mut tags = full_tags();
    tags.push(("description", "main"));
    tags.push(("note", "ignored"));
    let pos = pos_from_node(&node_with(&tags, None)).expect("should map");
    assert_eq!(pos.description, "main");
}

#[test]
fn non_numeric_postal_code_fails() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "addr:postcode");
    tags.push(("addr:postcode", "N/A"));
    assert_eq!(
        missing_field(pos_from_node(&node_with(&tags, None))),
        "addr:postcode"
    );
}

#[test]
fn postal_code_is_parsed_after_trimming() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "addr:postcode");
    tags.push(("addr:postcode", " 69120 "));
    let pos = pos_from_node(&node_with(&tags, None)).expect("should map");
    assert_eq!(pos.postal_code, 69120);
}

#[test]
fn amenity_restaurant_maps_to_cafeteria() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "amenity");
    tags.push(("amenity", "restaurant"));
    let pos = pos_from_node(&node_with(&tags, None)).expect("should map");
    assert_eq!(pos.pos_type, PosType::Cafeteria);
}

#[test]
fn amenity_lookup_is_case_insensitive() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "amenity");
    tags.push(("amenity", "Vending_Machine"));
    let pos = pos_from_node(&node_with(&tags, None)).expect("should map");
    assert_eq!(pos.pos_type, PosType::VendingMachine);
}

#[test]
fn shop_bakery_maps_to_bakery_when_amenity_absent() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "amenity");
    tags.push(("shop", "bakery"));
    let pos = pos_from_node(&node_with(&tags, None)).expect("should map");
    assert_eq!(pos.pos_type, PosType::Bakery);
}

#[test]
fn unmapped_amenity_blocks_shop_fallback() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "amenity");
    tags.push(("amenity", "unknown_value"));
    tags.push(("shop", "bakery"));
    assert_eq!(
        missing_field(pos_from_node(&node_with(&tags, None))),
        "amenity/shop"
    );
}

#[test]
fn no_classification_tags_fails() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "amenity");
    assert_eq!(
        missing_field(pos_from_node(&node_with(&tags, None))),
        "amenity/shop"
    );
}

#[test]
fn heidelberg_north_west_is_inf_campus() {
    let pos = pos_from_node(&node_with(&full_tags(), Some((49.42, 8.68)))).expect("should map");
    assert_eq!(pos.campus, CampusType::Inf);
}

#[test]
fn heidelberg_south_is_bergheim_campus() {
    let pos = pos_from_node(&node_with(&full_tags(), Some((49.40, 8.69)))).expect("should map");
    assert_eq!(pos.campus, CampusType::Bergheim);
}

#[test]
fn other_city_is_altstadt_regardless_of_coordinates() {
    let mut tags = full_tags();
    tags.retain(|&(k, _)| k != "addr:city");
    tags.push(("addr:city", "Berlin"));
    let pos = pos_from_node(&node_with(&tags, Some((49.42, 8.68)))).expect("should map");
    assert_eq!(pos.campus, CampusType::Altstadt);
}

#[test]
fn heidelberg_without_coordinates_is_altstadt() {
    let pos = pos_from_node(&node_with(&full_tags(), None)).expect("should map");
    assert_eq!(pos.campus, CampusType::Altstadt);
}
