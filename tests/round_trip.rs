//! Serialization contract: lossless round-trips, string tag keys, and
//! corruption detection on load.

use framegen::prelude::*;

fn build_model() -> StructuralModel {
    ModelBuilder::new()
        .create_model(&ModelRequest::new(1.5, 10.0, 4, 4).with_name("round_trip"))
        .unwrap()
}

#[test]
fn document_round_trip_is_lossless() {
    let model = build_model();
    let restored = StructuralModel::from_document(model.to_document()).unwrap();
    assert_eq!(restored, model);
}

#[test]
fn json_round_trip_is_lossless() {
    let model = build_model();
    let json = model.to_json().unwrap();
    let restored = StructuralModel::from_json(&json).unwrap();
    assert_eq!(restored, model);
}

#[test]
fn save_and_load_through_a_file() {
    let model = build_model();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models").join("round_trip.json");

    model.save(&path).unwrap();
    let restored = StructuralModel::load(&path).unwrap();
    assert_eq!(restored, model);
}

#[test]
fn tag_keys_are_decimal_strings() {
    let model = build_model();
    let value = serde_json::to_value(model.to_document()).unwrap();

    let nodes = value["nodes"].as_object().unwrap();
    assert_eq!(nodes.len(), 75);
    assert!(nodes.contains_key("1"));
    assert!(nodes.contains_key("75"));

    let elements = value["elements"].as_object().unwrap();
    assert!(elements.contains_key("162"));

    let sections = value["sections"].as_object().unwrap();
    assert_eq!(
        sections.keys().collect::<Vec<_>>(),
        vec!["1", "2", "3"]
    );

    let transformations = value["transformations"].as_object().unwrap();
    assert_eq!(transformations.keys().collect::<Vec<_>>(), vec!["1", "2"]);
}

#[test]
fn document_layout_matches_contract() {
    let model = build_model();
    let value = serde_json::to_value(model.to_document()).unwrap();

    assert_eq!(value["name"], "round_trip");
    assert_eq!(value["parameters"]["length"], 15.0);
    assert_eq!(value["parameters"]["footprint_area"], 150.0);
    assert!(value["material"]["E"].is_number());
    assert!(value["material"]["G"].is_number());

    let slab = &value["sections"]["1"];
    assert_eq!(slab["section_kind"], "shell");
    assert_eq!(slab["element_kind"], "slab");
    assert_eq!(slab["thickness"], 0.10);

    let column = &value["sections"]["2"];
    assert_eq!(column["section_kind"], "frame");
    assert_eq!(column["transform_ref"], 1);

    let vertical = &value["transformations"]["1"];
    assert_eq!(vertical["kind"], "vertical");
    assert_eq!(
        vertical["reference_axis"],
        serde_json::json!([0.0, 1.0, 0.0])
    );

    let first_slab = &value["elements"]["1"];
    assert_eq!(first_slab["kind"], "slab");
    assert_eq!(first_slab["section_ref"], 1);

    let config = &value["analysis_config"];
    assert_eq!(config["enabled"], serde_json::json!(["static", "modal"]));
    assert_eq!(config["static"]["steps"], 10);
    assert_eq!(config["modal"]["num_modes"], 6);
    assert!(config.get("dynamic").is_none());
    assert_eq!(config["visualization"]["enabled"], false);
}

#[test]
fn missing_section_is_corrupt() {
    let model = build_model();
    let mut doc = model.to_document();
    // Remove the beam section while elements still reference it
    doc.sections.remove("3");

    let err = StructuralModel::from_document(doc);
    assert!(matches!(err, Err(ModelError::CorruptModel(_))));
}

#[test]
fn dangling_node_ref_is_corrupt() {
    let model = build_model();
    let mut doc = model.to_document();
    doc.elements.get_mut("1").unwrap().node_refs[0] = 9999;

    let err = StructuralModel::from_document(doc);
    assert!(matches!(err, Err(ModelError::CorruptModel(_))));
}

#[test]
fn dangling_load_target_is_corrupt() {
    let model = build_model();
    let mut doc = model.to_document();
    let load = doc.loads.remove("51").unwrap();
    doc.loads.insert("9999".to_string(), load);

    let err = StructuralModel::from_document(doc);
    assert!(matches!(err, Err(ModelError::CorruptModel(_))));
}

#[test]
fn missing_transformation_is_corrupt() {
    let model = build_model();
    let mut doc = model.to_document();
    doc.transformations.remove("2");

    let err = StructuralModel::from_document(doc);
    assert!(matches!(err, Err(ModelError::CorruptModel(_))));
}

#[test]
fn non_integer_tag_key_is_corrupt() {
    let model = build_model();
    let mut doc = model.to_document();
    let node = doc.nodes.remove("1").unwrap();
    doc.nodes.insert("first".to_string(), node);

    let err = StructuralModel::from_document(doc);
    assert!(matches!(err, Err(ModelError::CorruptModel(_))));
}

#[test]
fn missing_required_field_is_corrupt() {
    let model = build_model();
    let mut value = serde_json::to_value(model.to_document()).unwrap();
    value.as_object_mut().unwrap().remove("material");

    let err = StructuralModel::from_json(&value.to_string());
    assert!(matches!(err, Err(ModelError::CorruptModel(_))));
}

#[test]
fn enabled_kind_without_config_is_corrupt() {
    let model = build_model();
    let mut value = serde_json::to_value(model.to_document()).unwrap();
    value["analysis_config"]
        .as_object_mut()
        .unwrap()
        .remove("modal");

    let err = StructuralModel::from_json(&value.to_string());
    assert!(matches!(err, Err(ModelError::CorruptModel(_))));
}

#[test]
fn empty_name_is_corrupt() {
    let model = build_model();
    let mut doc = model.to_document();
    doc.name.clear();

    let err = StructuralModel::from_document(doc);
    assert!(matches!(err, Err(ModelError::CorruptModel(_))));
}
