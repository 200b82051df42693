//! Generation properties: determinism, tag density, referential integrity,
//! load placement, and the reference building scenario.

use std::collections::BTreeSet;

use framegen::prelude::*;

fn reference_model() -> StructuralModel {
    let _ = env_logger::builder().is_test(true).try_init();
    ModelBuilder::new()
        .create_model(&ModelRequest::new(1.5, 10.0, 4, 4))
        .unwrap()
}

#[test]
fn reference_building_counts() {
    let model = reference_model();
    let geom = model.geometry();

    assert_eq!(model.parameters().length(), 15.0);
    assert_eq!(geom.node_count(), 75);
    assert_eq!(geom.elements_of_kind(ElementKind::Slab).count(), 32);
    assert_eq!(geom.elements_of_kind(ElementKind::Column).count(), 50);
    assert_eq!(
        geom.elements_of_kind(ElementKind::BeamAlongX).count()
            + geom.elements_of_kind(ElementKind::BeamAlongY).count(),
        80
    );
    assert_eq!(geom.element_count(), 162);
    assert_eq!(model.loads().len(), 25);
}

#[test]
fn generation_is_deterministic() {
    let a = GeometryBuilder::create(2.0, 8.0, 3, 5, 4, 2.8).unwrap();
    let b = GeometryBuilder::create(2.0, 8.0, 3, 5, 4, 2.8).unwrap();
    assert_eq!(a, b);
}

#[test]
fn tags_are_dense_and_one_based() {
    let geom = GeometryBuilder::create(1.5, 10.0, 4, 4, 2, 3.0).unwrap();

    let node_tags: BTreeSet<u32> = geom.nodes().keys().copied().collect();
    let expected: BTreeSet<u32> = (1..=75).collect();
    assert_eq!(node_tags, expected);

    let element_tags: BTreeSet<u32> = geom.elements().keys().copied().collect();
    let expected: BTreeSet<u32> = (1..=162).collect();
    assert_eq!(element_tags, expected);
}

#[test]
fn all_references_resolve() {
    let model = reference_model();
    let geom = model.geometry();
    let sections = model.sections();

    for element in geom.elements().values() {
        for node_ref in &element.node_refs {
            assert!(geom.node(*node_ref).is_some(), "dangling node ref");
        }
        assert!(
            sections.section(element.section_ref).is_some(),
            "dangling section ref"
        );
    }
    for frame in sections.frame_sections() {
        assert!(
            sections.transformation(frame.transform_ref).is_some(),
            "dangling transform ref"
        );
    }
    for load in model.loads().loads().values() {
        assert!(geom.node(load.target_node).is_some(), "dangling load target");
    }
}

#[test]
fn loads_sit_on_the_top_floor_only() {
    let model = reference_model();
    let geom = model.geometry();
    let top = geom.num_floors();

    let loaded: BTreeSet<u32> = model.loads().loaded_nodes().into_iter().collect();
    for node in geom.nodes().values() {
        assert_eq!(loaded.contains(&node.tag), node.floor == top);
    }
    for load in model.loads().loads().values() {
        assert_eq!(load.axis, LoadAxis::Z);
        assert!(load.magnitude < 0.0, "gravity loads must point downward");
    }
}

#[test]
fn fixity_plan_matches_base_floor() {
    let model = reference_model();
    let plan = fixity_plan(model.geometry());

    assert_eq!(plan.restrained_nodes.len(), 25);
    let base: Vec<u32> = model.geometry().base_node_tags();
    assert_eq!(plan.restrained_nodes, base);
}

#[test]
fn corner_coordinates_span_the_footprint() {
    let geom = GeometryBuilder::create(1.5, 10.0, 4, 4, 2, 3.0).unwrap();

    let origin = geom.node(1).unwrap();
    assert_eq!(origin.coords(), [0.0, 0.0, 0.0]);

    // Last node: far corner of the top floor
    let last = geom.node(75).unwrap();
    assert_eq!(last.coords(), [15.0, 10.0, 6.0]);
    assert_eq!(last.grid_pos, Some((4, 4)));
    assert_eq!(last.floor, 2);
}

#[test]
fn element_categories_are_contiguous_blocks() {
    let geom = GeometryBuilder::create(1.5, 10.0, 4, 4, 2, 3.0).unwrap();

    // Slabs 1-32, columns 33-82, beams along X 83+, beams along Y interleave
    // per floor after the X beams of that floor.
    for tag in 1..=32 {
        assert_eq!(geom.element(tag).unwrap().kind, ElementKind::Slab);
    }
    for tag in 33..=82 {
        assert_eq!(geom.element(tag).unwrap().kind, ElementKind::Column);
    }
    for tag in 83..=162 {
        let kind = geom.element(tag).unwrap().kind;
        assert!(matches!(
            kind,
            ElementKind::BeamAlongX | ElementKind::BeamAlongY
        ));
    }
}

#[test]
fn config_completeness_across_subsets() {
    use AnalysisKind::*;
    let subsets: &[&[AnalysisKind]] = &[
        &[Static],
        &[Modal],
        &[Dynamic],
        &[Static, Modal],
        &[Static, Dynamic],
        &[Modal, Dynamic],
        &[Static, Modal, Dynamic],
    ];
    for kinds in subsets {
        let config = AnalysisConfigBuilder::create_default(kinds).unwrap();
        assert_eq!(config.static_cfg().is_some(), kinds.contains(&Static));
        assert_eq!(config.modal_cfg().is_some(), kinds.contains(&Modal));
        assert_eq!(config.dynamic_cfg().is_some(), kinds.contains(&Dynamic));
    }
}
