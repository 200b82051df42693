//! Material properties

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Elastic and physical properties of a structural material.
///
/// Units follow the tonf/m² convention used by the section and load
/// defaults: modulus and strengths in tonf/m², density in tonf·s²/m⁴.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Identifying name
    pub name: String,
    /// Modulus of elasticity (Young's modulus)
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density
    pub rho: f64,
    /// Concrete compressive strength (optional)
    pub fc: Option<f64>,
    /// Steel yield strength (optional)
    pub fy: Option<f64>,
}

impl Material {
    /// Create a new material with the given elastic properties.
    pub fn new(name: &str, e: f64, nu: f64, rho: f64) -> ModelResult<Self> {
        if !(e > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "elastic modulus must be positive, got {e}"
            )));
        }
        if !(0.0..=0.5).contains(&nu) {
            return Err(ModelError::InvalidParameter(format!(
                "Poisson's ratio must be in [0, 0.5], got {nu}"
            )));
        }
        if !(rho > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "density must be positive, got {rho}"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            e,
            nu,
            rho,
            fc: None,
            fy: None,
        })
    }

    /// Attach a concrete compressive strength
    pub fn with_compressive_strength(mut self, fc: f64) -> Self {
        self.fc = Some(fc);
        self
    }

    /// Attach a steel yield strength
    pub fn with_yield_strength(mut self, fy: f64) -> Self {
        self.fy = Some(fy);
        self
    }

    /// Shear modulus, G = E / (2 * (1 + nu))
    pub fn g(&self) -> f64 {
        self.e / (2.0 * (1.0 + self.nu))
    }

    /// C210 concrete with typical properties (E from the ACI formula).
    pub fn concrete_c210() -> Self {
        let e = 15000.0 * 210.0_f64.sqrt() * 0.001 / 0.01_f64.powi(2);
        Self {
            name: "concrete_c210".to_string(),
            e,
            nu: 0.2,
            rho: 2.4 / 9.81,
            fc: Some(210.0),
            fy: None,
        }
    }

    /// A36 structural steel with typical properties.
    pub fn steel_a36() -> Self {
        Self {
            name: "steel_a36".to_string(),
            e: 2_040_000.0,
            nu: 0.3,
            rho: 7.85 / 9.81,
            fc: None,
            fy: Some(2530.0),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::concrete_c210()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shear_modulus() {
        let mat = Material::new("test", 2_000_000.0, 0.25, 0.24).unwrap();
        assert_relative_eq!(mat.g(), 2_000_000.0 / 2.5);
    }

    #[test]
    fn test_concrete_preset() {
        let mat = Material::concrete_c210();
        assert_relative_eq!(mat.nu, 0.2);
        assert_eq!(mat.fc, Some(210.0));
        assert!(mat.fy.is_none());
        assert!(mat.e > 0.0);
    }

    #[test]
    fn test_steel_preset() {
        let mat = Material::steel_a36();
        assert_eq!(mat.fy, Some(2530.0));
        assert_relative_eq!(mat.e, 2_040_000.0);
    }

    #[test]
    fn test_rejects_invalid_properties() {
        assert!(Material::new("m", 0.0, 0.2, 1.0).is_err());
        assert!(Material::new("m", 1.0, 0.6, 1.0).is_err());
        assert!(Material::new("m", 1.0, -0.1, 1.0).is_err());
        assert!(Material::new("m", 1.0, 0.2, 0.0).is_err());
    }
}
