//! Detector configuration, validation, and error types.
//!
//! [`CalorimeterConfig`] is the builder-input for constructing a
//! [`Calorimeter`](crate::Calorimeter).
//! [`validate()`](CalorimeterConfig::validate) checks all invariants at
//! startup, so a misconfigured run fails before the first event rather
//! than mid-batch.

use std::error::Error;
use std::fmt;

use scint_geom::{GeomError, GeometryVersion, ValidationMode};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CalorimeterConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The geometry version selector matches no supported layout.
    Geometry(GeomError),
    /// The non-uniformity percentage is negative or not finite.
    InvalidNonUniformity {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "geometry: {e}"),
            Self::InvalidNonUniformity { value } => {
                write!(
                    f,
                    "non_uniformity must be finite and >= 0 percent, got {value}"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeomError> for ConfigError {
    fn from(e: GeomError) -> Self {
        Self::Geometry(e)
    }
}

// ── CalorimeterConfig ──────────────────────────────────────────────

/// Complete configuration for constructing a [`Calorimeter`](crate::Calorimeter).
#[derive(Clone, Debug)]
pub struct CalorimeterConfig {
    /// Raw geometry version selector. Default: 1 (barrel 7.05).
    pub geometry_version: i32,
    /// Light-collection non-uniformity half-width, percent. Default: 0.
    pub non_uniformity: f64,
    /// How decode faults are handled. Default: [`ValidationMode::Warn`].
    pub validation: ValidationMode,
    /// RNG seed for the non-uniformity smearing. Default: 0.
    pub seed: u64,
    /// End-of-event summary verbosity. 0 silences the summary, values
    /// above 1 additionally log every hit. Default: 1.
    pub verbosity: u8,
}

impl Default for CalorimeterConfig {
    fn default() -> Self {
        Self {
            geometry_version: 1,
            non_uniformity: 0.0,
            validation: ValidationMode::default(),
            seed: 0,
            verbosity: 1,
        }
    }
}

impl CalorimeterConfig {
    /// Validate all invariants and resolve the geometry layout.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: an unsupported geometry
    /// version or a non-uniformity outside `[0, inf)`.
    pub fn validate(&self) -> Result<GeometryVersion, ConfigError> {
        let version = GeometryVersion::from_raw(self.geometry_version)?;
        if !self.non_uniformity.is_finite() || self.non_uniformity < 0.0 {
            return Err(ConfigError::InvalidNonUniformity {
                value: self.non_uniformity,
            });
        }
        Ok(version)
    }
}
