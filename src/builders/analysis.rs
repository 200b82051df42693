//! Analysis config builder - defaults merged with per-key overrides

use crate::analysis::{
    AnalysisConfig, AnalysisKind, AnalysisOverrides, DynamicConfig, ModalConfig, StaticConfig,
    VisualizationConfig,
};
use crate::error::{ModelError, ModelResult};

/// Builds the analysis configuration of a model.
pub struct AnalysisConfigBuilder;

impl AnalysisConfigBuilder {
    /// Build a config for the given kinds. Each enabled kind starts from its
    /// default record and takes any caller-supplied override keys on top;
    /// disabled kinds get no sub-config at all. The visualization config is
    /// always built, defaulting to disabled.
    ///
    /// Fails with `InvalidParameter` if `enabled` is empty.
    pub fn create(enabled: &[AnalysisKind], overrides: &AnalysisOverrides) -> ModelResult<AnalysisConfig> {
        if enabled.is_empty() {
            return Err(ModelError::InvalidParameter(
                "at least one analysis kind must be enabled".to_string(),
            ));
        }

        // Preserve caller order, drop duplicates.
        let mut kinds: Vec<AnalysisKind> = Vec::new();
        for kind in enabled {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }

        let static_cfg = kinds.contains(&AnalysisKind::Static).then(|| {
            let mut cfg = StaticConfig::default();
            if let Some(ov) = &overrides.static_cfg {
                cfg.apply(ov);
            }
            cfg
        });

        let modal_cfg = kinds.contains(&AnalysisKind::Modal).then(|| {
            let mut cfg = ModalConfig::default();
            if let Some(ov) = &overrides.modal_cfg {
                cfg.apply(ov);
            }
            cfg
        });

        let dynamic_cfg = kinds.contains(&AnalysisKind::Dynamic).then(|| {
            let mut cfg = DynamicConfig::default();
            if let Some(ov) = &overrides.dynamic_cfg {
                cfg.apply(ov);
            }
            cfg
        });

        let mut visualization = VisualizationConfig::default();
        if let Some(ov) = &overrides.visualization {
            visualization.apply(ov);
        }

        AnalysisConfig::new(kinds, static_cfg, modal_cfg, dynamic_cfg, visualization)
    }

    /// Build a config with defaults for every enabled kind.
    pub fn create_default(enabled: &[AnalysisKind]) -> ModelResult<AnalysisConfig> {
        Self::create(enabled, &AnalysisOverrides::default())
    }
}
