//! Parametric configuration driving model generation
//!
//! These are the master keys of a model: every node coordinate, element
//! count, and load position is a deterministic function of these six values.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Validated geometric parameters of a structural model.
///
/// Immutable once constructed; every derived quantity is recomputed from the
/// primary fields so the struct can never hold inconsistent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    aspect_ratio: f64,
    width: f64,
    nx: u32,
    ny: u32,
    num_floors: u32,
    floor_height: f64,
}

impl Parameters {
    /// Create a validated parameter set.
    ///
    /// # Arguments
    /// * `aspect_ratio` - Length to width ratio (L/B)
    /// * `width` - Width of the structure in Y direction (m)
    /// * `nx` - Number of grid divisions in X direction
    /// * `ny` - Number of grid divisions in Y direction
    /// * `num_floors` - Number of floors above the base
    /// * `floor_height` - Height of each floor (m)
    pub fn new(
        aspect_ratio: f64,
        width: f64,
        nx: u32,
        ny: u32,
        num_floors: u32,
        floor_height: f64,
    ) -> ModelResult<Self> {
        if !(aspect_ratio > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "aspect_ratio must be positive, got {aspect_ratio}"
            )));
        }
        if !(width > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "width must be positive, got {width}"
            )));
        }
        if nx == 0 || ny == 0 {
            return Err(ModelError::InvalidParameter(format!(
                "nx and ny must be positive, got nx={nx} ny={ny}"
            )));
        }
        if num_floors == 0 {
            return Err(ModelError::InvalidParameter(
                "num_floors must be positive".to_string(),
            ));
        }
        if !(floor_height > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "floor_height must be positive, got {floor_height}"
            )));
        }

        Ok(Self {
            aspect_ratio,
            width,
            nx,
            ny,
            num_floors,
            floor_height,
        })
    }

    /// Length to width ratio (L/B)
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Width in Y direction (m)
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of grid divisions in X direction
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Number of grid divisions in Y direction
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Number of floors above the base
    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    /// Height of each floor (m)
    pub fn floor_height(&self) -> f64 {
        self.floor_height
    }

    /// Length in X direction, derived from width and aspect ratio (m)
    pub fn length(&self) -> f64 {
        self.width * self.aspect_ratio
    }

    /// Total height of the structure (m)
    pub fn total_height(&self) -> f64 {
        self.num_floors as f64 * self.floor_height
    }

    /// Footprint area (m²)
    pub fn footprint_area(&self) -> f64 {
        self.length() * self.width
    }

    /// Approximate enclosed volume (m³)
    pub fn volume(&self) -> f64 {
        self.footprint_area() * self.total_height()
    }

    /// Spacing between grid lines in X and Y (m)
    pub fn grid_spacing(&self) -> (f64, f64) {
        (self.length() / self.nx as f64, self.width / self.ny as f64)
    }

    /// Total number of nodes the mesh will contain
    pub fn node_count(&self) -> usize {
        (self.nx as usize + 1) * (self.ny as usize + 1) * (self.num_floors as usize + 1)
    }

    /// Number of nodes on a single floor plate
    pub fn nodes_per_floor(&self) -> usize {
        (self.nx as usize + 1) * (self.ny as usize + 1)
    }

    /// Total number of elements the mesh will contain:
    /// slabs + columns + beams along X + beams along Y.
    pub fn element_count(&self) -> usize {
        let nx = self.nx as usize;
        let ny = self.ny as usize;
        let floors = self.num_floors as usize;

        let slabs = nx * ny * floors;
        let columns = (nx + 1) * (ny + 1) * floors;
        let beams = (nx * (ny + 1) + (nx + 1) * ny) * floors;
        slabs + columns + beams
    }
}
