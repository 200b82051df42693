//! Section and geometric-transformation domain objects
//!
//! Sections come in two variants: shell sections carrying a thickness (used
//! by slabs) and frame sections carrying a rectangular size plus a reference
//! to the geometric transformation orienting the member's local axes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Tag of the slab shell section in the generated section set
pub const SLAB_SECTION_TAG: u32 = 1;
/// Tag of the column frame section in the generated section set
pub const COLUMN_SECTION_TAG: u32 = 2;
/// Tag of the beam frame section in the generated section set
pub const BEAM_SECTION_TAG: u32 = 3;

/// Tag of the vertical-member transformation
pub const VERTICAL_TRANSFORM_TAG: u32 = 1;
/// Tag of the horizontal-member transformation
pub const HORIZONTAL_TRANSFORM_TAG: u32 = 2;

/// Which element family a section is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionTarget {
    Slab,
    Column,
    Beam,
}

/// Thickness-bearing section for shell elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSection {
    /// Tag, unique within the section namespace
    pub tag: u32,
    /// Slab thickness (m)
    pub thickness: f64,
}

impl ShellSection {
    pub fn new(tag: u32, thickness: f64) -> ModelResult<Self> {
        if tag == 0 {
            return Err(ModelError::InvalidParameter(
                "section tag must be positive".to_string(),
            ));
        }
        if !(thickness > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "shell thickness must be positive, got {thickness}"
            )));
        }
        Ok(Self { tag, thickness })
    }
}

/// Rectangular section for frame elements (columns and beams)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSection {
    /// Tag, unique within the section namespace
    pub tag: u32,
    /// Element family this section serves (column or beam)
    pub target: SectionTarget,
    /// Section width (m)
    pub width: f64,
    /// Section height (m)
    pub height: f64,
    /// Tag of the geometric transformation for members using this section
    pub transform_ref: u32,
}

impl FrameSection {
    pub fn new(
        tag: u32,
        target: SectionTarget,
        width: f64,
        height: f64,
        transform_ref: u32,
    ) -> ModelResult<Self> {
        if tag == 0 {
            return Err(ModelError::InvalidParameter(
                "section tag must be positive".to_string(),
            ));
        }
        if target == SectionTarget::Slab {
            return Err(ModelError::InvalidParameter(
                "frame sections serve columns or beams, not slabs".to_string(),
            ));
        }
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "frame section size must be positive, got {width}x{height}"
            )));
        }
        if transform_ref == 0 {
            return Err(ModelError::InvalidParameter(
                "transform_ref must be positive".to_string(),
            ));
        }
        Ok(Self {
            tag,
            target,
            width,
            height,
            transform_ref,
        })
    }

    /// Cross-sectional area (m²)
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A cross-section record, shell or frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Section {
    Shell(ShellSection),
    Frame(FrameSection),
}

impl Section {
    /// Tag, unique within the section namespace
    pub fn tag(&self) -> u32 {
        match self {
            Section::Shell(s) => s.tag,
            Section::Frame(s) => s.tag,
        }
    }

    /// Element family this section serves
    pub fn target(&self) -> SectionTarget {
        match self {
            Section::Shell(_) => SectionTarget::Slab,
            Section::Frame(s) => s.target,
        }
    }

    /// Transformation reference, present only for frame sections
    pub fn transform_ref(&self) -> Option<u32> {
        match self {
            Section::Shell(_) => None,
            Section::Frame(s) => Some(s.transform_ref),
        }
    }
}

/// Orientation family of a geometric transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// For columns and other vertical members
    Vertical,
    /// For beams and other horizontal members
    Horizontal,
}

/// Local-axis orientation for frame elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    /// Tag, unique within the transformation namespace
    pub tag: u32,
    /// Orientation family
    pub kind: TransformKind,
    /// Reference axis vector defining the local xz plane
    pub reference_axis: [f64; 3],
}

/// Container for all sections and transformations of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    sections: BTreeMap<u32, Section>,
    transformations: BTreeMap<u32, Transformation>,
}

impl Sections {
    pub(crate) fn new(
        sections: BTreeMap<u32, Section>,
        transformations: BTreeMap<u32, Transformation>,
    ) -> Self {
        Self {
            sections,
            transformations,
        }
    }

    /// All sections, keyed by tag
    pub fn sections(&self) -> &BTreeMap<u32, Section> {
        &self.sections
    }

    /// All transformations, keyed by tag
    pub fn transformations(&self) -> &BTreeMap<u32, Transformation> {
        &self.transformations
    }

    /// Look up a section by tag
    pub fn section(&self, tag: u32) -> Option<&Section> {
        self.sections.get(&tag)
    }

    /// Look up a transformation by tag
    pub fn transformation(&self, tag: u32) -> Option<&Transformation> {
        self.transformations.get(&tag)
    }

    /// Number of sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Frame sections only, in tag order
    pub fn frame_sections(&self) -> impl Iterator<Item = &FrameSection> {
        self.sections.values().filter_map(|s| match s {
            Section::Frame(f) => Some(f),
            Section::Shell(_) => None,
        })
    }

    /// Shell sections only, in tag order
    pub fn shell_sections(&self) -> impl Iterator<Item = &ShellSection> {
        self.sections.values().filter_map(|s| match s {
            Section::Shell(sh) => Some(sh),
            Section::Frame(_) => None,
        })
    }

    /// Check that every frame section references an existing transformation.
    pub(crate) fn check_transform_refs(&self) -> Result<(), String> {
        for frame in self.frame_sections() {
            if !self.transformations.contains_key(&frame.transform_ref) {
                return Err(format!(
                    "section {} references missing transformation {}",
                    frame.tag, frame.transform_ref
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_section_validation() {
        assert!(ShellSection::new(1, 0.10).is_ok());
        assert!(ShellSection::new(0, 0.10).is_err());
        assert!(ShellSection::new(1, 0.0).is_err());
    }

    #[test]
    fn test_frame_section_validation() {
        let col = FrameSection::new(2, SectionTarget::Column, 0.40, 0.40, 1).unwrap();
        assert_eq!(col.area(), 0.40 * 0.40);
        assert!(FrameSection::new(2, SectionTarget::Slab, 0.40, 0.40, 1).is_err());
        assert!(FrameSection::new(2, SectionTarget::Beam, -0.25, 0.40, 1).is_err());
        assert!(FrameSection::new(2, SectionTarget::Beam, 0.25, 0.40, 0).is_err());
    }

    #[test]
    fn test_missing_transform_is_detected() {
        let mut sections = BTreeMap::new();
        sections.insert(
            2,
            Section::Frame(FrameSection::new(2, SectionTarget::Column, 0.4, 0.4, 9).unwrap()),
        );
        let aggregate = Sections::new(sections, BTreeMap::new());
        assert!(aggregate.check_transform_refs().is_err());
    }
}
