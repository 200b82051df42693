//! Loads builder - top-floor gravity load generation

use std::collections::BTreeMap;

use crate::geometry::Geometry;
use crate::loads::{Load, LoadAxis, Loads};

/// Load case label applied to generated gravity loads
const GRAVITY_CASE: &str = "dead";

/// Builds the nodal load set of a model.
pub struct LoadsBuilder;

impl LoadsBuilder {
    /// Place one downward Z load of the given magnitude on every node of the
    /// topmost floor. The sign of `magnitude` is ignored; the emitted loads
    /// always point downward.
    ///
    /// A geometry with no top-floor nodes yields an empty load set.
    pub fn create(geometry: &Geometry, magnitude: f64) -> Loads {
        let mut loads = BTreeMap::new();
        let top_floor = geometry.num_floors();

        for node in geometry.floor_nodes(top_floor) {
            loads.insert(
                node.tag,
                Load {
                    target_node: node.tag,
                    magnitude: -magnitude.abs(),
                    axis: LoadAxis::Z,
                    case: Some(GRAVITY_CASE.to_string()),
                },
            );
        }

        log::debug!(
            "placed {} gravity loads on floor {}",
            loads.len(),
            top_floor
        );
        Loads::new(loads)
    }
}
