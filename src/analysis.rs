//! Analysis configuration domain objects
//!
//! Each analysis kind carries a solver recipe (system, numberer, constraint
//! handler, integrator, algorithm) plus kind-specific parameters. A
//! sub-config is present exactly when its kind is enabled; the visualization
//! config is always present and independently togglable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Kind of structural analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Linear static analysis under the applied load pattern
    Static,
    /// Eigenvalue analysis for natural modes
    Modal,
    /// Transient time-history analysis
    Dynamic,
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisKind::Static => "static",
            AnalysisKind::Modal => "modal",
            AnalysisKind::Dynamic => "dynamic",
        };
        f.write_str(name)
    }
}

impl FromStr for AnalysisKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(AnalysisKind::Static),
            "modal" => Ok(AnalysisKind::Modal),
            "dynamic" => Ok(AnalysisKind::Dynamic),
            other => Err(ModelError::InvalidParameter(format!(
                "unrecognized analysis kind '{other}'"
            ))),
        }
    }
}

/// Configuration for static analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub system: String,
    pub numberer: String,
    pub constraints: String,
    pub integrator: String,
    pub algorithm: String,
    pub analysis: String,
    /// Number of load steps
    pub steps: u32,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            system: "BandGeneral".to_string(),
            numberer: "RCM".to_string(),
            constraints: "Plain".to_string(),
            integrator: "LoadControl".to_string(),
            algorithm: "Linear".to_string(),
            analysis: "Static".to_string(),
            steps: 10,
        }
    }
}

/// Configuration for modal analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub system: String,
    pub numberer: String,
    pub constraints: String,
    pub integrator: String,
    pub algorithm: String,
    pub analysis: String,
    /// Number of natural modes to extract
    pub num_modes: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            system: "BandGeneral".to_string(),
            numberer: "RCM".to_string(),
            constraints: "Plain".to_string(),
            integrator: "LoadControl".to_string(),
            algorithm: "Linear".to_string(),
            analysis: "Static".to_string(),
            num_modes: 6,
        }
    }
}

/// Configuration for dynamic (time-history) analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicConfig {
    pub system: String,
    pub numberer: String,
    pub constraints: String,
    pub integrator: String,
    pub algorithm: String,
    pub analysis: String,
    /// Integration time step (s)
    pub dt: f64,
    /// Number of time steps
    pub num_steps: u32,
}

impl Default for DynamicConfig {
    fn default() -> Self {
        Self {
            system: "BandGeneral".to_string(),
            numberer: "RCM".to_string(),
            constraints: "Plain".to_string(),
            integrator: "Newmark".to_string(),
            algorithm: "Newton".to_string(),
            analysis: "Transient".to_string(),
            dt: 0.01,
            num_steps: 1000,
        }
    }
}

/// Configuration for result visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    pub enabled: bool,
    pub static_deformed: bool,
    pub modal_shapes: bool,
    pub deform_scale: u32,
    pub save_html: bool,
    pub show_nodes: bool,
    pub line_width: u32,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            static_deformed: false,
            modal_shapes: false,
            deform_scale: 100,
            save_html: true,
            show_nodes: true,
            line_width: 2,
        }
    }
}

/// Per-key overrides for static analysis; `None` keeps the default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticOverrides {
    pub system: Option<String>,
    pub numberer: Option<String>,
    pub constraints: Option<String>,
    pub integrator: Option<String>,
    pub algorithm: Option<String>,
    pub analysis: Option<String>,
    pub steps: Option<u32>,
}

impl StaticConfig {
    /// Apply overrides on top of this config; set keys win, unset keys keep
    /// their current value.
    pub fn apply(&mut self, ov: &StaticOverrides) {
        if let Some(v) = &ov.system {
            self.system = v.clone();
        }
        if let Some(v) = &ov.numberer {
            self.numberer = v.clone();
        }
        if let Some(v) = &ov.constraints {
            self.constraints = v.clone();
        }
        if let Some(v) = &ov.integrator {
            self.integrator = v.clone();
        }
        if let Some(v) = &ov.algorithm {
            self.algorithm = v.clone();
        }
        if let Some(v) = &ov.analysis {
            self.analysis = v.clone();
        }
        if let Some(v) = ov.steps {
            self.steps = v;
        }
    }
}

/// Per-key overrides for modal analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModalOverrides {
    pub system: Option<String>,
    pub numberer: Option<String>,
    pub constraints: Option<String>,
    pub integrator: Option<String>,
    pub algorithm: Option<String>,
    pub analysis: Option<String>,
    pub num_modes: Option<u32>,
}

impl ModalConfig {
    pub fn apply(&mut self, ov: &ModalOverrides) {
        if let Some(v) = &ov.system {
            self.system = v.clone();
        }
        if let Some(v) = &ov.numberer {
            self.numberer = v.clone();
        }
        if let Some(v) = &ov.constraints {
            self.constraints = v.clone();
        }
        if let Some(v) = &ov.integrator {
            self.integrator = v.clone();
        }
        if let Some(v) = &ov.algorithm {
            self.algorithm = v.clone();
        }
        if let Some(v) = &ov.analysis {
            self.analysis = v.clone();
        }
        if let Some(v) = ov.num_modes {
            self.num_modes = v;
        }
    }
}

/// Per-key overrides for dynamic analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicOverrides {
    pub system: Option<String>,
    pub numberer: Option<String>,
    pub constraints: Option<String>,
    pub integrator: Option<String>,
    pub algorithm: Option<String>,
    pub analysis: Option<String>,
    pub dt: Option<f64>,
    pub num_steps: Option<u32>,
}

impl DynamicConfig {
    pub fn apply(&mut self, ov: &DynamicOverrides) {
        if let Some(v) = &ov.system {
            self.system = v.clone();
        }
        if let Some(v) = &ov.numberer {
            self.numberer = v.clone();
        }
        if let Some(v) = &ov.constraints {
            self.constraints = v.clone();
        }
        if let Some(v) = &ov.integrator {
            self.integrator = v.clone();
        }
        if let Some(v) = &ov.algorithm {
            self.algorithm = v.clone();
        }
        if let Some(v) = &ov.analysis {
            self.analysis = v.clone();
        }
        if let Some(v) = ov.dt {
            self.dt = v;
        }
        if let Some(v) = ov.num_steps {
            self.num_steps = v;
        }
    }
}

/// Per-key overrides for visualization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationOverrides {
    pub enabled: Option<bool>,
    pub static_deformed: Option<bool>,
    pub modal_shapes: Option<bool>,
    pub deform_scale: Option<u32>,
    pub save_html: Option<bool>,
    pub show_nodes: Option<bool>,
    pub line_width: Option<u32>,
}

impl VisualizationConfig {
    pub fn apply(&mut self, ov: &VisualizationOverrides) {
        if let Some(v) = ov.enabled {
            self.enabled = v;
        }
        if let Some(v) = ov.static_deformed {
            self.static_deformed = v;
        }
        if let Some(v) = ov.modal_shapes {
            self.modal_shapes = v;
        }
        if let Some(v) = ov.deform_scale {
            self.deform_scale = v;
        }
        if let Some(v) = ov.save_html {
            self.save_html = v;
        }
        if let Some(v) = ov.show_nodes {
            self.show_nodes = v;
        }
        if let Some(v) = ov.line_width {
            self.line_width = v;
        }
    }
}

/// Caller-supplied overrides for the analysis config builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOverrides {
    #[serde(rename = "static")]
    pub static_cfg: Option<StaticOverrides>,
    #[serde(rename = "modal")]
    pub modal_cfg: Option<ModalOverrides>,
    #[serde(rename = "dynamic")]
    pub dynamic_cfg: Option<DynamicOverrides>,
    pub visualization: Option<VisualizationOverrides>,
}

/// Analysis configuration of a model.
///
/// Invariant: a sub-config is present if and only if its kind is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    enabled: Vec<AnalysisKind>,
    #[serde(rename = "static", skip_serializing_if = "Option::is_none")]
    static_cfg: Option<StaticConfig>,
    #[serde(rename = "modal", skip_serializing_if = "Option::is_none")]
    modal_cfg: Option<ModalConfig>,
    #[serde(rename = "dynamic", skip_serializing_if = "Option::is_none")]
    dynamic_cfg: Option<DynamicConfig>,
    visualization: VisualizationConfig,
}

impl AnalysisConfig {
    pub(crate) fn new(
        enabled: Vec<AnalysisKind>,
        static_cfg: Option<StaticConfig>,
        modal_cfg: Option<ModalConfig>,
        dynamic_cfg: Option<DynamicConfig>,
        visualization: VisualizationConfig,
    ) -> ModelResult<Self> {
        let config = Self {
            enabled,
            static_cfg,
            modal_cfg,
            dynamic_cfg,
            visualization,
        };
        config
            .check_completeness()
            .map_err(ModelError::InvalidParameter)?;
        Ok(config)
    }

    /// Enabled analysis kinds, in the order they were requested
    pub fn enabled(&self) -> &[AnalysisKind] {
        &self.enabled
    }

    /// Whether a given kind is enabled
    pub fn is_enabled(&self, kind: AnalysisKind) -> bool {
        self.enabled.contains(&kind)
    }

    /// Static sub-config, present iff static analysis is enabled
    pub fn static_cfg(&self) -> Option<&StaticConfig> {
        self.static_cfg.as_ref()
    }

    /// Modal sub-config, present iff modal analysis is enabled
    pub fn modal_cfg(&self) -> Option<&ModalConfig> {
        self.modal_cfg.as_ref()
    }

    /// Dynamic sub-config, present iff dynamic analysis is enabled
    pub fn dynamic_cfg(&self) -> Option<&DynamicConfig> {
        self.dynamic_cfg.as_ref()
    }

    /// Visualization config, always present
    pub fn visualization(&self) -> &VisualizationConfig {
        &self.visualization
    }

    /// Verify the enabled-iff-present invariant.
    pub(crate) fn check_completeness(&self) -> Result<(), String> {
        if self.enabled.is_empty() {
            return Err("at least one analysis kind must be enabled".to_string());
        }
        let pairs = [
            (AnalysisKind::Static, self.static_cfg.is_some()),
            (AnalysisKind::Modal, self.modal_cfg.is_some()),
            (AnalysisKind::Dynamic, self.dynamic_cfg.is_some()),
        ];
        for (kind, present) in pairs {
            let enabled = self.is_enabled(kind);
            if enabled && !present {
                return Err(format!("{kind} analysis is enabled but has no config"));
            }
            if !enabled && present {
                return Err(format!("{kind} config is present but not enabled"));
            }
        }
        Ok(())
    }
}
