//! Seam to the external structural solver
//!
//! The solver is an external collaborator with a single global "active
//! model" concept, so it is modeled here as a capability with explicit
//! lifecycle operations rather than implicit global state. Orchestration
//! must keep a single-active-job discipline: `reset` before `build`, one
//! model per session, and never interleave two models against the same
//! session. The numerical algorithms behind `run` are entirely the
//! collaborator's responsibility.

use crate::analysis::AnalysisKind;
use crate::geometry::Geometry;
use crate::model::StructuralModel;

/// A session with an external solver.
///
/// Implementations translate the model's nodes, elements, sections, and
/// transformations into solver primitives, apply the fixity plan and load
/// set, and execute the enabled analyses. Errors are the collaborator's
/// own and are surfaced as `anyhow` errors at this boundary.
pub trait SolverSession {
    /// Clear any previously active model from the session.
    fn reset(&mut self) -> anyhow::Result<()>;

    /// Translate the model into the session's active solver state.
    fn build(&mut self, model: &StructuralModel) -> anyhow::Result<()>;

    /// Execute one enabled analysis against the active model.
    fn run(&mut self, kind: AnalysisKind) -> anyhow::Result<()>;
}

/// Boundary conditions the solver must apply to a model.
///
/// Policy: every base (floor 0) node is fully restrained in all six
/// degrees of freedom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixityPlan {
    /// Tags of fully restrained nodes, in tag order
    pub restrained_nodes: Vec<u32>,
}

/// Derive the fixity plan for a geometry.
pub fn fixity_plan(geometry: &Geometry) -> FixityPlan {
    FixityPlan {
        restrained_nodes: geometry.base_node_tags(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::GeometryBuilder;

    #[test]
    fn test_fixity_covers_exactly_the_base_floor() {
        let geom = GeometryBuilder::create(1.5, 10.0, 4, 4, 2, 3.0).unwrap();
        let plan = fixity_plan(&geom);

        assert_eq!(plan.restrained_nodes.len(), 25);
        for tag in &plan.restrained_nodes {
            assert_eq!(geom.node(*tag).unwrap().floor, 0);
        }
        // No node above the base is restrained
        let restrained: std::collections::BTreeSet<_> =
            plan.restrained_nodes.iter().copied().collect();
        for node in geom.nodes().values() {
            assert_eq!(restrained.contains(&node.tag), node.floor == 0);
        }
    }
}
