//! Model builder - top-level orchestrator
//!
//! Wires the specialized builders together: parameters drive the geometry,
//! the geometry drives the loads, fixed section sizes drive the sections,
//! and the requested analysis kinds drive the config. Each call produces a
//! fresh, fully-validated model; nothing is shared between calls, so many
//! models can be built concurrently.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisKind, AnalysisOverrides};
use crate::builders::{
    AnalysisConfigBuilder, GeometryBuilder, LoadsBuilder, SectionSizes, SectionsBuilder,
};
use crate::error::{ModelError, ModelResult};
use crate::material::Material;
use crate::model::StructuralModel;
use crate::parameters::Parameters;

/// End-user parameters for one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRequest {
    /// Length to width ratio (L/B)
    pub aspect_ratio: f64,
    /// Width in Y direction (m)
    pub width: f64,
    /// Grid divisions in X
    pub nx: u32,
    /// Grid divisions in Y
    pub ny: u32,
    /// Model name; auto-generated from the parameters when `None`
    pub name: Option<String>,
    /// Analyses to enable
    pub enabled_analyses: Vec<AnalysisKind>,
    /// Per-kind analysis parameter overrides
    pub overrides: AnalysisOverrides,
}

impl ModelRequest {
    /// Create a request with the default analysis set (static + modal).
    pub fn new(aspect_ratio: f64, width: f64, nx: u32, ny: u32) -> Self {
        Self {
            aspect_ratio,
            width,
            nx,
            ny,
            name: None,
            enabled_analyses: vec![AnalysisKind::Static, AnalysisKind::Modal],
            overrides: AnalysisOverrides::default(),
        }
    }

    /// Set an explicit model name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the enabled analysis kinds
    pub fn with_analyses(mut self, kinds: &[AnalysisKind]) -> Self {
        self.enabled_analyses = kinds.to_vec();
        self
    }

    /// Set analysis parameter overrides
    pub fn with_overrides(mut self, overrides: AnalysisOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Outcome of a parametric sweep: built models plus the requests that were
/// skipped, each with the error that rejected it
#[derive(Debug)]
pub struct SweepOutcome {
    pub models: Vec<StructuralModel>,
    pub skipped: Vec<(ModelRequest, ModelError)>,
}

/// Orchestrating factory for structural models.
///
/// Holds the fixed (non-swept) parameters: section sizes, floor layout,
/// material, and the gravity load magnitude.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    section_sizes: SectionSizes,
    num_floors: u32,
    floor_height: f64,
    material: Material,
    distributed_load: f64,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self {
            section_sizes: SectionSizes::default(),
            num_floors: 2,
            floor_height: 3.0,
            material: Material::concrete_c210(),
            distributed_load: 1.0,
        }
    }
}

impl ModelBuilder {
    /// Create a builder with the default fixed parameters: 2 floors of
    /// 3.0 m, C210 concrete, default section sizes, 1.0 distributed load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixed section sizes
    pub fn with_section_sizes(mut self, sizes: SectionSizes) -> Self {
        self.section_sizes = sizes;
        self
    }

    /// Set the floor count and floor height
    pub fn with_floors(mut self, num_floors: u32, floor_height: f64) -> Self {
        self.num_floors = num_floors;
        self.floor_height = floor_height;
        self
    }

    /// Set the material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Set the top-floor distributed load magnitude
    pub fn with_distributed_load(mut self, magnitude: f64) -> Self {
        self.distributed_load = magnitude;
        self
    }

    /// Build one structural model from a request.
    pub fn create_model(&self, request: &ModelRequest) -> ModelResult<StructuralModel> {
        let name = match &request.name {
            Some(name) => name.clone(),
            None => encode_model_name(request.aspect_ratio, request.width, request.nx, request.ny),
        };
        log::info!(
            "building model '{}' (L/B={}, B={}, grid {}x{})",
            name,
            request.aspect_ratio,
            request.width,
            request.nx,
            request.ny
        );

        let parameters = Parameters::new(
            request.aspect_ratio,
            request.width,
            request.nx,
            request.ny,
            self.num_floors,
            self.floor_height,
        )?;
        let geometry = GeometryBuilder::from_parameters(&parameters);
        let sections = SectionsBuilder::create(&self.section_sizes)?;
        let loads = LoadsBuilder::create(&geometry, self.distributed_load);
        let analysis_config =
            AnalysisConfigBuilder::create(&request.enabled_analyses, &request.overrides)?;

        StructuralModel::new(
            &name,
            parameters,
            self.material.clone(),
            geometry,
            sections,
            loads,
            analysis_config,
        )
    }

    /// Build many models, recording and skipping failed configurations so a
    /// sweep survives individual bad parameter sets.
    pub fn create_many(&self, requests: &[ModelRequest]) -> SweepOutcome {
        let mut models = Vec::new();
        let mut skipped = Vec::new();

        for request in requests {
            match self.create_model(request) {
                Ok(model) => models.push(model),
                Err(err) => {
                    log::warn!(
                        "skipping model (L/B={}, B={}, grid {}x{}): {}",
                        request.aspect_ratio,
                        request.width,
                        request.nx,
                        request.ny,
                        err
                    );
                    skipped.push((request.clone(), err));
                }
            }
        }

        SweepOutcome { models, skipped }
    }
}

/// Encode a model name from its swept parameters, e.g. `F01_15_10_0404`.
fn encode_model_name(aspect_ratio: f64, width: f64, nx: u32, ny: u32) -> String {
    let aspect_code = (aspect_ratio * 10.0) as u32;
    let width_code = width as u32;
    let grid_code = nx * 100 + ny;
    format!("F01_{aspect_code:02}_{width_code:02}_{grid_code:04}")
}
