//! Geometry builder - deterministic mesh generation
//!
//! Node and element tags are assigned in a fixed order that downstream
//! consumers (loads, fixities, solver scripts) rely on byte-for-byte:
//!
//! - Nodes: floor-major, then row (j), then column (i), starting at 1.
//! - Elements: all slabs, then all columns, then beams along X, then beams
//!   along Y, tags continuing sequentially from 1.
//!
//! Changing either order silently breaks every serialized model and exported
//! script, so any edit here must reproduce it exactly.

use std::collections::BTreeMap;

use crate::error::ModelResult;
use crate::geometry::{Element, ElementKind, Geometry, Node};
use crate::parameters::Parameters;
use crate::sections::{BEAM_SECTION_TAG, COLUMN_SECTION_TAG, SLAB_SECTION_TAG};

/// Builds the mesh of a structural model from its parameters.
pub struct GeometryBuilder;

impl GeometryBuilder {
    /// Create a geometry from raw parameter values.
    ///
    /// Fails with `InvalidParameter` if any input violates the parameter
    /// constraints.
    pub fn create(
        aspect_ratio: f64,
        width: f64,
        nx: u32,
        ny: u32,
        num_floors: u32,
        floor_height: f64,
    ) -> ModelResult<Geometry> {
        let params = Parameters::new(aspect_ratio, width, nx, ny, num_floors, floor_height)?;
        Ok(Self::from_parameters(&params))
    }

    /// Create a geometry from an already-validated parameter set.
    pub fn from_parameters(params: &Parameters) -> Geometry {
        let nodes = Self::create_nodes(params);
        let elements = Self::create_elements(params);
        log::debug!(
            "generated {} nodes and {} elements for {}x{} grid, {} floors",
            nodes.len(),
            elements.len(),
            params.nx(),
            params.ny(),
            params.num_floors()
        );
        Geometry::new(nodes, elements, params.num_floors())
    }

    /// Tag of the node at grid position (i, j) on the given floor.
    fn node_tag(params: &Parameters, floor: u32, i: u32, j: u32) -> u32 {
        let per_floor = (params.nx() + 1) * (params.ny() + 1);
        floor * per_floor + j * (params.nx() + 1) + i + 1
    }

    fn create_nodes(params: &Parameters) -> BTreeMap<u32, Node> {
        let mut nodes = BTreeMap::new();
        let (dx, dy) = params.grid_spacing();
        let dz = params.floor_height();

        let mut tag = 1;
        for floor in 0..=params.num_floors() {
            let z = floor as f64 * dz;
            for j in 0..=params.ny() {
                for i in 0..=params.nx() {
                    nodes.insert(
                        tag,
                        Node {
                            tag,
                            x: i as f64 * dx,
                            y: j as f64 * dy,
                            z,
                            floor,
                            grid_pos: Some((i, j)),
                        },
                    );
                    tag += 1;
                }
            }
        }
        nodes
    }

    fn create_elements(params: &Parameters) -> BTreeMap<u32, Element> {
        let mut elements = BTreeMap::new();
        let mut tag = 1;

        // Slabs: one quad per grid cell on each elevated floor, corner nodes
        // in counter-clockwise order.
        for floor in 1..=params.num_floors() {
            for j in 0..params.ny() {
                for i in 0..params.nx() {
                    let refs = vec![
                        Self::node_tag(params, floor, i, j),
                        Self::node_tag(params, floor, i + 1, j),
                        Self::node_tag(params, floor, i + 1, j + 1),
                        Self::node_tag(params, floor, i, j + 1),
                    ];
                    elements.insert(
                        tag,
                        Element {
                            tag,
                            kind: ElementKind::Slab,
                            node_refs: refs,
                            floor,
                            section_ref: SLAB_SECTION_TAG,
                        },
                    );
                    tag += 1;
                }
            }
        }

        // Columns: one per grid point per story, bottom node first.
        for j in 0..=params.ny() {
            for i in 0..=params.nx() {
                for floor in 0..params.num_floors() {
                    let refs = vec![
                        Self::node_tag(params, floor, i, j),
                        Self::node_tag(params, floor + 1, i, j),
                    ];
                    elements.insert(
                        tag,
                        Element {
                            tag,
                            kind: ElementKind::Column,
                            node_refs: refs,
                            floor,
                            section_ref: COLUMN_SECTION_TAG,
                        },
                    );
                    tag += 1;
                }
            }
        }

        // Beams along X on each elevated floor.
        for floor in 1..=params.num_floors() {
            for j in 0..=params.ny() {
                for i in 0..params.nx() {
                    let refs = vec![
                        Self::node_tag(params, floor, i, j),
                        Self::node_tag(params, floor, i + 1, j),
                    ];
                    elements.insert(
                        tag,
                        Element {
                            tag,
                            kind: ElementKind::BeamAlongX,
                            node_refs: refs,
                            floor,
                            section_ref: BEAM_SECTION_TAG,
                        },
                    );
                    tag += 1;
                }
            }

            // Beams along Y on the same floor.
            for j in 0..params.ny() {
                for i in 0..=params.nx() {
                    let refs = vec![
                        Self::node_tag(params, floor, i, j),
                        Self::node_tag(params, floor, i, j + 1),
                    ];
                    elements.insert(
                        tag,
                        Element {
                            tag,
                            kind: ElementKind::BeamAlongY,
                            node_refs: refs,
                            floor,
                            section_ref: BEAM_SECTION_TAG,
                        },
                    );
                    tag += 1;
                }
            }
        }

        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small() -> Geometry {
        // 2x2 grid, 1 floor: 2 stories of nodes, 18 nodes total
        GeometryBuilder::create(1.0, 4.0, 2, 2, 1, 3.0).unwrap()
    }

    #[test]
    fn test_node_order_is_floor_major() {
        let geom = small();
        assert_eq!(geom.node_count(), 18);

        // Tag 1 is the origin, tag 2 the next node along X
        let n1 = geom.node(1).unwrap();
        assert_eq!(n1.coords(), [0.0, 0.0, 0.0]);
        let n2 = geom.node(2).unwrap();
        assert_relative_eq!(n2.x, 2.0);
        assert_eq!(n2.grid_pos, Some((1, 0)));

        // Tag 4 wraps to the next row
        let n4 = geom.node(4).unwrap();
        assert_eq!(n4.grid_pos, Some((0, 1)));

        // Tag 10 starts the second floor
        let n10 = geom.node(10).unwrap();
        assert_eq!(n10.floor, 1);
        assert_relative_eq!(n10.z, 3.0);
    }

    #[test]
    fn test_element_category_order() {
        let geom = small();
        // 4 slabs, 9 columns, 6+6 beams
        assert_eq!(geom.element_count(), 25);

        let e1 = geom.element(1).unwrap();
        assert_eq!(e1.kind, ElementKind::Slab);
        // First slab connects the floor-1 cell at the origin, CCW
        assert_eq!(e1.node_refs, vec![10, 11, 14, 13]);
        assert_eq!(e1.section_ref, SLAB_SECTION_TAG);

        let e5 = geom.element(5).unwrap();
        assert_eq!(e5.kind, ElementKind::Column);
        assert_eq!(e5.node_refs, vec![1, 10]);
        assert_eq!(e5.section_ref, COLUMN_SECTION_TAG);

        let e14 = geom.element(14).unwrap();
        assert_eq!(e14.kind, ElementKind::BeamAlongX);
        assert_eq!(e14.node_refs, vec![10, 11]);

        let e20 = geom.element(20).unwrap();
        assert_eq!(e20.kind, ElementKind::BeamAlongY);
        assert_eq!(e20.node_refs, vec![10, 13]);
        assert_eq!(e20.section_ref, BEAM_SECTION_TAG);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(GeometryBuilder::create(0.0, 4.0, 2, 2, 1, 3.0).is_err());
        assert!(GeometryBuilder::create(1.0, 4.0, 0, 2, 1, 3.0).is_err());
        assert!(GeometryBuilder::create(1.0, 4.0, 2, 2, 0, 3.0).is_err());
    }
}
