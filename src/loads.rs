//! Nodal load domain objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Degree-of-freedom axis a load acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadAxis {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
}

/// A load applied to a single node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Tag of the loaded node
    pub target_node: u32,
    /// Signed magnitude; negative Z is downward
    pub magnitude: f64,
    /// Axis the load acts on
    pub axis: LoadAxis,
    /// Load case label, e.g. "dead" or "live"
    pub case: Option<String>,
}

/// Container for all nodal loads of a model, keyed by node tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loads {
    loads: BTreeMap<u32, Load>,
}

impl Loads {
    pub(crate) fn new(loads: BTreeMap<u32, Load>) -> Self {
        Self { loads }
    }

    /// All loads, keyed by node tag
    pub fn loads(&self) -> &BTreeMap<u32, Load> {
        &self.loads
    }

    /// The load on a specific node, if any
    pub fn load_on(&self, node_tag: u32) -> Option<&Load> {
        self.loads.get(&node_tag)
    }

    /// Number of loaded nodes
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Whether no loads are present
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Tags of all loaded nodes, in tag order
    pub fn loaded_nodes(&self) -> Vec<u32> {
        self.loads.keys().copied().collect()
    }

    /// Sum of absolute Z-axis load magnitudes
    pub fn total_vertical_load(&self) -> f64 {
        self.loads
            .values()
            .filter(|l| l.axis == LoadAxis::Z)
            .map(|l| l.magnitude.abs())
            .sum()
    }

    /// Loads belonging to a given case, in node-tag order
    pub fn loads_in_case<'a>(&'a self, case: &'a str) -> impl Iterator<Item = &'a Load> {
        self.loads
            .values()
            .filter(move |l| l.case.as_deref() == Some(case))
    }
}
