//! Geometry domain objects - nodes, elements, and the mesh that owns them

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A structural node on the building grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Tag, unique within the model's node namespace
    pub tag: u32,
    /// X coordinate (m)
    pub x: f64,
    /// Y coordinate (m)
    pub y: f64,
    /// Z coordinate (m)
    pub z: f64,
    /// Floor level index, 0 = base
    pub floor: u32,
    /// Grid position (i, j) on the floor plate, if the node lies on the grid
    pub grid_pos: Option<(u32, u32)>,
}

impl Node {
    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Kind of structural element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// 4-node shell element spanning one grid cell
    Slab,
    /// 2-node vertical frame element between consecutive floors
    Column,
    /// 2-node horizontal frame element along the X grid lines
    BeamAlongX,
    /// 2-node horizontal frame element along the Y grid lines
    BeamAlongY,
}

impl ElementKind {
    /// Whether this is a 2-node line element requiring a transformation
    pub fn is_frame(&self) -> bool {
        !matches!(self, ElementKind::Slab)
    }

    /// Number of nodes an element of this kind connects
    pub fn node_count(&self) -> usize {
        match self {
            ElementKind::Slab => 4,
            ElementKind::Column | ElementKind::BeamAlongX | ElementKind::BeamAlongY => 2,
        }
    }
}

/// A structural element referencing nodes by tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Tag, unique within the model's element namespace
    pub tag: u32,
    /// Kind of element
    pub kind: ElementKind,
    /// Ordered node tags: 4 (counter-clockwise) for slabs, 2 for frames
    pub node_refs: Vec<u32>,
    /// Floor the element belongs to (columns: the lower floor)
    pub floor: u32,
    /// Tag of the section assigned to this element
    pub section_ref: u32,
}

/// The mesh of a structural model.
///
/// Exclusively owns its node and element maps. Tags in each namespace are
/// dense, 1-based, and contiguous, assigned in the fixed generation order
/// that downstream consumers rely on; the `BTreeMap`s preserve that order
/// when iterating and serializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    nodes: BTreeMap<u32, Node>,
    elements: BTreeMap<u32, Element>,
    num_floors: u32,
}

impl Geometry {
    pub(crate) fn new(
        nodes: BTreeMap<u32, Node>,
        elements: BTreeMap<u32, Element>,
        num_floors: u32,
    ) -> Self {
        Self {
            nodes,
            elements,
            num_floors,
        }
    }

    /// All nodes, keyed by tag
    pub fn nodes(&self) -> &BTreeMap<u32, Node> {
        &self.nodes
    }

    /// All elements, keyed by tag
    pub fn elements(&self) -> &BTreeMap<u32, Element> {
        &self.elements
    }

    /// Number of floors above the base
    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    /// Look up a node by tag
    pub fn node(&self, tag: u32) -> Option<&Node> {
        self.nodes.get(&tag)
    }

    /// Look up an element by tag
    pub fn element(&self, tag: u32) -> Option<&Element> {
        self.elements.get(&tag)
    }

    /// Number of nodes in the mesh
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements in the mesh
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Nodes on a given floor, in tag order
    pub fn floor_nodes(&self, floor: u32) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(move |n| n.floor == floor)
    }

    /// Tags of the base (floor 0) nodes, in tag order
    pub fn base_node_tags(&self) -> Vec<u32> {
        self.floor_nodes(0).map(|n| n.tag).collect()
    }

    /// Tags of the topmost-floor nodes, in tag order
    pub fn top_floor_node_tags(&self) -> Vec<u32> {
        self.floor_nodes(self.num_floors).map(|n| n.tag).collect()
    }

    /// Elements of a given kind, in tag order
    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements.values().filter(move |e| e.kind == kind)
    }
}
