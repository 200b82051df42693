//! Serialized document form of a structural model
//!
//! The wire format is a tree-structured key-value document. Every integer
//! tag used as a mapping key (nodes, elements, sections, transformations,
//! loads) is rendered as its decimal-string form, because the target
//! serialization format does not support non-string mapping keys; loading
//! reverses the conversion exactly. Field names are part of the
//! compatibility contract shared with the external solver adapter and the
//! report layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisConfig;
use crate::error::{ModelError, ModelResult};
use crate::geometry::ElementKind;
use crate::loads::LoadAxis;
use crate::sections::{SectionTarget, TransformKind};

/// Serialized form of a complete structural model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    pub name: String,
    pub parameters: ParametersDoc,
    pub material: MaterialDoc,
    pub sections: BTreeMap<String, SectionDoc>,
    pub transformations: BTreeMap<String, TransformationDoc>,
    pub nodes: BTreeMap<String, NodeDoc>,
    pub elements: BTreeMap<String, ElementDoc>,
    pub loads: BTreeMap<String, LoadDoc>,
    pub analysis_config: AnalysisConfig,
}

/// Parameters with their derived quantities included for consumers that
/// do not want to recompute them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersDoc {
    pub aspect_ratio: f64,
    pub width: f64,
    pub nx: u32,
    pub ny: u32,
    pub num_floors: u32,
    pub floor_height: f64,
    pub length: f64,
    pub total_height: f64,
    pub footprint_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDoc {
    pub name: String,
    #[serde(rename = "E")]
    pub e: f64,
    pub nu: f64,
    pub rho: f64,
    /// Derived shear modulus, recomputed on load
    #[serde(rename = "G")]
    pub g: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fy: Option<f64>,
}

/// Section record, discriminated by `section_kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section_kind", rename_all = "snake_case")]
pub enum SectionDoc {
    Shell {
        element_kind: SectionTarget,
        thickness: f64,
    },
    Frame {
        element_kind: SectionTarget,
        width: f64,
        height: f64,
        transform_ref: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationDoc {
    pub kind: TransformKind,
    pub reference_axis: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDoc {
    pub coords: [f64; 3],
    pub floor: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_pos: Option<[u32; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDoc {
    pub kind: ElementKind,
    pub node_refs: Vec<u32>,
    pub floor: u32,
    pub section_ref: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadDoc {
    pub magnitude: f64,
    pub axis: LoadAxis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
}

/// Render an integer tag as its document key.
pub(crate) fn tag_key(tag: u32) -> String {
    tag.to_string()
}

/// Parse a document key back into a positive integer tag.
pub(crate) fn parse_tag(key: &str, context: &str) -> ModelResult<u32> {
    let tag: u32 = key.parse().map_err(|_| {
        ModelError::CorruptModel(format!("{context} key '{key}' is not an integer tag"))
    })?;
    if tag == 0 {
        return Err(ModelError::CorruptModel(format!(
            "{context} key '{key}' is not a positive tag"
        )));
    }
    Ok(tag)
}
