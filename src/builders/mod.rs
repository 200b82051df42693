//! Specialized builders producing the model sub-aggregates
//!
//! Every builder is a pure function of its inputs: it validates, allocates a
//! fresh aggregate, and never touches shared state. The orchestrating
//! [`ModelBuilder`] wires them together into complete models.

mod analysis;
mod geometry;
mod loads;
mod model;
mod sections;

pub use analysis::AnalysisConfigBuilder;
pub use geometry::GeometryBuilder;
pub use loads::LoadsBuilder;
pub use model::{ModelBuilder, ModelRequest, SweepOutcome};
pub use sections::{SectionSizes, SectionsBuilder};
