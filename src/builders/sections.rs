//! Sections builder - fixed section and transformation records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::sections::{
    FrameSection, Section, SectionTarget, Sections, ShellSection, Transformation, TransformKind,
    BEAM_SECTION_TAG, COLUMN_SECTION_TAG, HORIZONTAL_TRANSFORM_TAG, SLAB_SECTION_TAG,
    VERTICAL_TRANSFORM_TAG,
};

/// Fixed cross-section dimensions for a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSizes {
    /// Slab thickness (m)
    pub slab_thickness: f64,
    /// Column section (width, height) (m)
    pub column: (f64, f64),
    /// Beam section (width, height) (m)
    pub beam: (f64, f64),
}

impl Default for SectionSizes {
    fn default() -> Self {
        // 40x40 cm columns, 25x40 cm beams, 10 cm slabs
        Self {
            slab_thickness: 0.10,
            column: (0.40, 0.40),
            beam: (0.25, 0.40),
        }
    }
}

/// Builds the section and transformation set of a model.
pub struct SectionsBuilder;

impl SectionsBuilder {
    /// Create the section aggregate: one shell section for slabs, one frame
    /// section each for columns and beams, and the two geometric
    /// transformations frame members reference.
    ///
    /// Fails with `InvalidParameter` if any dimension is non-positive.
    pub fn create(sizes: &SectionSizes) -> ModelResult<Sections> {
        let mut sections = BTreeMap::new();
        sections.insert(
            SLAB_SECTION_TAG,
            Section::Shell(ShellSection::new(SLAB_SECTION_TAG, sizes.slab_thickness)?),
        );
        sections.insert(
            COLUMN_SECTION_TAG,
            Section::Frame(FrameSection::new(
                COLUMN_SECTION_TAG,
                SectionTarget::Column,
                sizes.column.0,
                sizes.column.1,
                VERTICAL_TRANSFORM_TAG,
            )?),
        );
        sections.insert(
            BEAM_SECTION_TAG,
            Section::Frame(FrameSection::new(
                BEAM_SECTION_TAG,
                SectionTarget::Beam,
                sizes.beam.0,
                sizes.beam.1,
                HORIZONTAL_TRANSFORM_TAG,
            )?),
        );

        let mut transformations = BTreeMap::new();
        transformations.insert(
            VERTICAL_TRANSFORM_TAG,
            Transformation {
                tag: VERTICAL_TRANSFORM_TAG,
                kind: TransformKind::Vertical,
                reference_axis: [0.0, 1.0, 0.0],
            },
        );
        transformations.insert(
            HORIZONTAL_TRANSFORM_TAG,
            Transformation {
                tag: HORIZONTAL_TRANSFORM_TAG,
                kind: TransformKind::Horizontal,
                reference_axis: [0.0, 0.0, 1.0],
            },
        );

        Ok(Sections::new(sections, transformations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_set() {
        let sections = SectionsBuilder::create(&SectionSizes::default()).unwrap();
        assert_eq!(sections.section_count(), 3);
        assert_eq!(sections.transformations().len(), 2);
        assert!(sections.check_transform_refs().is_ok());

        match sections.section(SLAB_SECTION_TAG).unwrap() {
            Section::Shell(s) => assert_eq!(s.thickness, 0.10),
            Section::Frame(_) => panic!("slab section should be a shell section"),
        }

        match sections.section(BEAM_SECTION_TAG).unwrap() {
            Section::Frame(f) => {
                assert_eq!((f.width, f.height), (0.25, 0.40));
                assert_eq!(f.transform_ref, HORIZONTAL_TRANSFORM_TAG);
            }
            Section::Shell(_) => panic!("beam section should be a frame section"),
        }
    }

    #[test]
    fn test_transform_axes() {
        let sections = SectionsBuilder::create(&SectionSizes::default()).unwrap();
        let vertical = sections.transformation(VERTICAL_TRANSFORM_TAG).unwrap();
        assert_eq!(vertical.reference_axis, [0.0, 1.0, 0.0]);
        let horizontal = sections.transformation(HORIZONTAL_TRANSFORM_TAG).unwrap();
        assert_eq!(horizontal.reference_axis, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let mut sizes = SectionSizes::default();
        sizes.slab_thickness = 0.0;
        assert!(SectionsBuilder::create(&sizes).is_err());

        let mut sizes = SectionSizes::default();
        sizes.beam = (0.25, -0.40);
        assert!(SectionsBuilder::create(&sizes).is_err());
    }
}
