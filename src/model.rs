//! Structural model - the aggregate root
//!
//! A `StructuralModel` exclusively owns one of each sub-aggregate and is
//! immutable once assembled: updates mean rebuilding the relevant aggregate
//! and reassembling. Serialization goes through [`ModelDocument`], the
//! string-keyed wire form shared with the external solver adapter.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::analysis::{AnalysisConfig, AnalysisKind};
use crate::document::{
    parse_tag, tag_key, ElementDoc, LoadDoc, MaterialDoc, ModelDocument, NodeDoc, ParametersDoc,
    SectionDoc, TransformationDoc,
};
use crate::error::{ModelError, ModelResult};
use crate::geometry::{Element, ElementKind, Geometry, Node};
use crate::loads::{Load, Loads};
use crate::material::Material;
use crate::parameters::Parameters;
use crate::sections::{
    FrameSection, Section, SectionTarget, Sections, ShellSection, Transformation,
};

/// A complete, internally consistent structural model
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralModel {
    name: String,
    parameters: Parameters,
    material: Material,
    geometry: Geometry,
    sections: Sections,
    loads: Loads,
    analysis_config: AnalysisConfig,
}

impl StructuralModel {
    /// Assemble a model from builder outputs.
    ///
    /// Fails with `InvalidModel` if the name is empty or any cross-aggregate
    /// reference is inconsistent; a model is never observable in a
    /// partially-built state.
    pub fn new(
        name: &str,
        parameters: Parameters,
        material: Material,
        geometry: Geometry,
        sections: Sections,
        loads: Loads,
        analysis_config: AnalysisConfig,
    ) -> ModelResult<Self> {
        if name.is_empty() {
            return Err(ModelError::InvalidModel(
                "model name cannot be empty".to_string(),
            ));
        }
        check_integrity(&geometry, &sections, &loads).map_err(ModelError::InvalidModel)?;
        analysis_config
            .check_completeness()
            .map_err(ModelError::InvalidModel)?;

        Ok(Self {
            name: name.to_string(),
            parameters,
            material,
            geometry,
            sections,
            loads,
            analysis_config,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn loads(&self) -> &Loads {
        &self.loads
    }

    pub fn analysis_config(&self) -> &AnalysisConfig {
        &self.analysis_config
    }

    /// Serialize to the string-keyed document form.
    pub fn to_document(&self) -> ModelDocument {
        let parameters = ParametersDoc {
            aspect_ratio: self.parameters.aspect_ratio(),
            width: self.parameters.width(),
            nx: self.parameters.nx(),
            ny: self.parameters.ny(),
            num_floors: self.parameters.num_floors(),
            floor_height: self.parameters.floor_height(),
            length: self.parameters.length(),
            total_height: self.parameters.total_height(),
            footprint_area: self.parameters.footprint_area(),
        };

        let material = MaterialDoc {
            name: self.material.name.clone(),
            e: self.material.e,
            nu: self.material.nu,
            rho: self.material.rho,
            g: self.material.g(),
            fc: self.material.fc,
            fy: self.material.fy,
        };

        let sections = self
            .sections
            .sections()
            .iter()
            .map(|(tag, section)| {
                let doc = match section {
                    Section::Shell(s) => SectionDoc::Shell {
                        element_kind: SectionTarget::Slab,
                        thickness: s.thickness,
                    },
                    Section::Frame(f) => SectionDoc::Frame {
                        element_kind: f.target,
                        width: f.width,
                        height: f.height,
                        transform_ref: f.transform_ref,
                    },
                };
                (tag_key(*tag), doc)
            })
            .collect();

        let transformations = self
            .sections
            .transformations()
            .iter()
            .map(|(tag, t)| {
                (
                    tag_key(*tag),
                    TransformationDoc {
                        kind: t.kind,
                        reference_axis: t.reference_axis,
                    },
                )
            })
            .collect();

        let nodes = self
            .geometry
            .nodes()
            .iter()
            .map(|(tag, node)| {
                (
                    tag_key(*tag),
                    NodeDoc {
                        coords: node.coords(),
                        floor: node.floor,
                        grid_pos: node.grid_pos.map(|(i, j)| [i, j]),
                    },
                )
            })
            .collect();

        let elements = self
            .geometry
            .elements()
            .iter()
            .map(|(tag, element)| {
                (
                    tag_key(*tag),
                    ElementDoc {
                        kind: element.kind,
                        node_refs: element.node_refs.clone(),
                        floor: element.floor,
                        section_ref: element.section_ref,
                    },
                )
            })
            .collect();

        let loads = self
            .loads
            .loads()
            .iter()
            .map(|(tag, load)| {
                (
                    tag_key(*tag),
                    LoadDoc {
                        magnitude: load.magnitude,
                        axis: load.axis,
                        case: load.case.clone(),
                    },
                )
            })
            .collect();

        ModelDocument {
            name: self.name.clone(),
            parameters,
            material,
            sections,
            transformations,
            nodes,
            elements,
            loads,
            analysis_config: self.analysis_config.clone(),
        }
    }

    /// Reconstruct a model from its document form, converting string keys
    /// back to integer tags and re-validating every referential invariant.
    ///
    /// Fails with `CorruptModel` on any dangling reference, malformed key,
    /// or inconsistent field; a lookup miss is never papered over with a
    /// default.
    pub fn from_document(doc: ModelDocument) -> ModelResult<Self> {
        if doc.name.is_empty() {
            return Err(ModelError::CorruptModel(
                "model name cannot be empty".to_string(),
            ));
        }

        let p = &doc.parameters;
        let parameters = Parameters::new(
            p.aspect_ratio,
            p.width,
            p.nx,
            p.ny,
            p.num_floors,
            p.floor_height,
        )
        .map_err(|e| ModelError::CorruptModel(format!("bad parameters: {e}")))?;

        let m = &doc.material;
        let mut material = Material::new(&m.name, m.e, m.nu, m.rho)
            .map_err(|e| ModelError::CorruptModel(format!("bad material: {e}")))?;
        material.fc = m.fc;
        material.fy = m.fy;

        let mut sections = BTreeMap::new();
        for (key, section_doc) in &doc.sections {
            let tag = parse_tag(key, "section")?;
            let section = match section_doc {
                SectionDoc::Shell {
                    element_kind,
                    thickness,
                } => {
                    if *element_kind != SectionTarget::Slab {
                        return Err(ModelError::CorruptModel(format!(
                            "shell section {tag} has non-slab element_kind"
                        )));
                    }
                    Section::Shell(ShellSection::new(tag, *thickness).map_err(|e| {
                        ModelError::CorruptModel(format!("bad section {tag}: {e}"))
                    })?)
                }
                SectionDoc::Frame {
                    element_kind,
                    width,
                    height,
                    transform_ref,
                } => Section::Frame(
                    FrameSection::new(tag, *element_kind, *width, *height, *transform_ref)
                        .map_err(|e| {
                            ModelError::CorruptModel(format!("bad section {tag}: {e}"))
                        })?,
                ),
            };
            sections.insert(tag, section);
        }

        let mut transformations = BTreeMap::new();
        for (key, t) in &doc.transformations {
            let tag = parse_tag(key, "transformation")?;
            transformations.insert(
                tag,
                Transformation {
                    tag,
                    kind: t.kind,
                    reference_axis: t.reference_axis,
                },
            );
        }
        let sections = Sections::new(sections, transformations);

        let mut nodes = BTreeMap::new();
        for (key, n) in &doc.nodes {
            let tag = parse_tag(key, "node")?;
            nodes.insert(
                tag,
                Node {
                    tag,
                    x: n.coords[0],
                    y: n.coords[1],
                    z: n.coords[2],
                    floor: n.floor,
                    grid_pos: n.grid_pos.map(|[i, j]| (i, j)),
                },
            );
        }

        let mut elements = BTreeMap::new();
        for (key, e) in &doc.elements {
            let tag = parse_tag(key, "element")?;
            elements.insert(
                tag,
                Element {
                    tag,
                    kind: e.kind,
                    node_refs: e.node_refs.clone(),
                    floor: e.floor,
                    section_ref: e.section_ref,
                },
            );
        }
        let geometry = Geometry::new(nodes, elements, parameters.num_floors());

        let mut loads = BTreeMap::new();
        for (key, l) in &doc.loads {
            let tag = parse_tag(key, "load")?;
            loads.insert(
                tag,
                Load {
                    target_node: tag,
                    magnitude: l.magnitude,
                    axis: l.axis,
                    case: l.case.clone(),
                },
            );
        }
        let loads = Loads::new(loads);

        check_integrity(&geometry, &sections, &loads).map_err(ModelError::CorruptModel)?;
        doc.analysis_config
            .check_completeness()
            .map_err(ModelError::CorruptModel)?;

        Ok(Self {
            name: doc.name,
            parameters,
            material,
            geometry,
            sections,
            loads,
            analysis_config: doc.analysis_config,
        })
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let doc: ModelDocument = serde_json::from_str(json)
            .map_err(|e| ModelError::CorruptModel(format!("malformed document: {e}")))?;
        Self::from_document(doc)
    }

    /// Save the model as a JSON document file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ModelResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        log::info!("saved model '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Load a model from a JSON document file.
    pub fn load<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read-only summary of the model's key characteristics.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            name: self.name.clone(),
            dimensions: SummaryDimensions {
                length: self.parameters.length(),
                width: self.parameters.width(),
                aspect_ratio: self.parameters.aspect_ratio(),
                total_height: self.parameters.total_height(),
                footprint_area: self.parameters.footprint_area(),
            },
            mesh: SummaryMesh {
                nx: self.parameters.nx(),
                ny: self.parameters.ny(),
                num_floors: self.parameters.num_floors(),
            },
            counts: SummaryCounts {
                nodes: self.geometry.node_count(),
                elements: self.geometry.element_count(),
                sections: self.sections.section_count(),
                loads: self.loads.len(),
            },
            enabled_analyses: self.analysis_config.enabled().to_vec(),
        }
    }
}

/// Verify every cross-aggregate reference of a model.
fn check_integrity(geometry: &Geometry, sections: &Sections, loads: &Loads) -> Result<(), String> {
    for element in geometry.elements().values() {
        if element.node_refs.len() != element.kind.node_count() {
            return Err(format!(
                "element {} has {} node refs, expected {}",
                element.tag,
                element.node_refs.len(),
                element.kind.node_count()
            ));
        }
        for node_ref in &element.node_refs {
            if geometry.node(*node_ref).is_none() {
                return Err(format!(
                    "element {} references missing node {}",
                    element.tag, node_ref
                ));
            }
        }
        match sections.section(element.section_ref) {
            None => {
                return Err(format!(
                    "element {} references missing section {}",
                    element.tag, element.section_ref
                ));
            }
            Some(section) => {
                let compatible = match element.kind {
                    ElementKind::Slab => matches!(section, Section::Shell(_)),
                    ElementKind::Column | ElementKind::BeamAlongX | ElementKind::BeamAlongY => {
                        matches!(section, Section::Frame(_))
                    }
                };
                if !compatible {
                    return Err(format!(
                        "element {} ({:?}) is assigned incompatible section {}",
                        element.tag, element.kind, element.section_ref
                    ));
                }
            }
        }
    }

    sections.check_transform_refs()?;

    for load in loads.loads().values() {
        if geometry.node(load.target_node).is_none() {
            return Err(format!(
                "load targets missing node {}",
                load.target_node
            ));
        }
    }

    Ok(())
}

/// Key characteristics of a model, for reports and quick inspection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub dimensions: SummaryDimensions,
    pub mesh: SummaryMesh,
    pub counts: SummaryCounts,
    pub enabled_analyses: Vec<AnalysisKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDimensions {
    pub length: f64,
    pub width: f64,
    pub aspect_ratio: f64,
    pub total_height: f64,
    pub footprint_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMesh {
    pub nx: u32,
    pub ny: u32,
    pub num_floors: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCounts {
    pub nodes: usize,
    pub elements: usize,
    pub sections: usize,
    pub loads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{
        AnalysisConfigBuilder, GeometryBuilder, LoadsBuilder, SectionSizes, SectionsBuilder,
    };

    fn assemble(name: &str) -> ModelResult<StructuralModel> {
        let parameters = Parameters::new(1.0, 4.0, 2, 2, 1, 3.0)?;
        let geometry = GeometryBuilder::from_parameters(&parameters);
        let sections = SectionsBuilder::create(&SectionSizes::default())?;
        let loads = LoadsBuilder::create(&geometry, 1.0);
        let config = AnalysisConfigBuilder::create_default(&[AnalysisKind::Static])?;
        StructuralModel::new(
            name,
            parameters,
            Material::concrete_c210(),
            geometry,
            sections,
            loads,
            config,
        )
    }

    #[test]
    fn test_assembly_and_summary() {
        let model = assemble("test_model").unwrap();
        let summary = model.summary();
        assert_eq!(summary.counts.nodes, 18);
        assert_eq!(summary.counts.elements, 25);
        assert_eq!(summary.counts.sections, 3);
        assert_eq!(summary.counts.loads, 9);
        assert_eq!(summary.enabled_analyses, vec![AnalysisKind::Static]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = assemble("");
        assert!(matches!(err, Err(ModelError::InvalidModel(_))));
    }

    #[test]
    fn test_dangling_section_ref_rejected_at_assembly() {
        let parameters = Parameters::new(1.0, 4.0, 2, 2, 1, 3.0).unwrap();
        let geometry = GeometryBuilder::from_parameters(&parameters);
        // Section set missing the beam/column/slab records entirely
        let sections = Sections::new(BTreeMap::new(), BTreeMap::new());
        let loads = LoadsBuilder::create(&geometry, 1.0);
        let config = AnalysisConfigBuilder::create_default(&[AnalysisKind::Static]).unwrap();

        let err = StructuralModel::new(
            "broken",
            parameters,
            Material::concrete_c210(),
            geometry,
            sections,
            loads,
            config,
        );
        assert!(matches!(err, Err(ModelError::InvalidModel(_))));
    }
}
