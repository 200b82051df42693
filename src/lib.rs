//! framegen - parametric generation of frame-and-slab building models
//!
//! This library turns a handful of high-level parameters (plan aspect
//! ratio, width, grid density, floor count and height) into a consistent
//! finite-element mesh - nodes, elements, section references, geometric
//! transformations, and nodal loads - and packages it, together with
//! per-model analysis configuration, into a self-contained JSON document
//! for an external structural solver.
//!
//! Generation is deterministic: identical parameters always produce
//! identical tag-to-content mappings, in a fixed numbering order that
//! downstream consumers rely on. All builders are pure, so many models can
//! be generated concurrently without synchronization.
//!
//! ## Example
//! ```rust
//! use framegen::prelude::*;
//!
//! let builder = ModelBuilder::new();
//! let request = ModelRequest::new(1.5, 10.0, 4, 4)
//!     .with_analyses(&[AnalysisKind::Static, AnalysisKind::Modal]);
//!
//! let model = builder.create_model(&request).unwrap();
//! assert_eq!(model.geometry().node_count(), 75);
//!
//! // Round-trip through the serialized document form
//! let doc = model.to_document();
//! let restored = StructuralModel::from_document(doc).unwrap();
//! assert_eq!(restored.summary(), model.summary());
//! ```

pub mod analysis;
pub mod builders;
pub mod document;
pub mod error;
pub mod geometry;
pub mod loads;
pub mod material;
pub mod model;
pub mod parameters;
pub mod sections;
pub mod solver;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        AnalysisConfig, AnalysisKind, AnalysisOverrides, DynamicConfig, DynamicOverrides,
        ModalConfig, ModalOverrides, StaticConfig, StaticOverrides, VisualizationConfig,
        VisualizationOverrides,
    };
    pub use crate::builders::{
        AnalysisConfigBuilder, GeometryBuilder, LoadsBuilder, ModelBuilder, ModelRequest,
        SectionSizes, SectionsBuilder, SweepOutcome,
    };
    pub use crate::document::ModelDocument;
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::geometry::{Element, ElementKind, Geometry, Node};
    pub use crate::loads::{Load, LoadAxis, Loads};
    pub use crate::material::Material;
    pub use crate::model::{ModelSummary, StructuralModel};
    pub use crate::parameters::Parameters;
    pub use crate::sections::{
        FrameSection, Section, SectionTarget, Sections, ShellSection, TransformKind,
        Transformation,
    };
    pub use crate::solver::{fixity_plan, FixityPlan, SolverSession};
}
