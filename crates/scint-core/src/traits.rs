//! Collaborator traits implemented by the surrounding transport stack.

use crate::id::VolumeId;
use crate::vec3::Vec3;

/// Init-time geometry name resolution.
///
/// The resolver queries this once per known volume name while building
/// its lookup tables, before the first event. Names absent from the
/// constructed geometry return `None` (a layout only instantiates a
/// subset of the historically known volumes).
pub trait VolumeRegistry {
    /// Resolve a logical volume name to its stable id, if the volume
    /// exists in the constructed geometry.
    fn volume_id(&self, name: &str) -> Option<VolumeId>;
}

/// Geometric boundary query used for the exit-position correction.
///
/// Abstracts the navigator's locate-then-safety capability: position the
/// navigator at `point` and return the safety distance to the nearest
/// volume boundary along `direction`. Returns `None` when the point
/// cannot be located in the geometry.
pub trait BoundaryProbe {
    /// Safety distance (cm) from `point` to the nearest boundary along
    /// `direction`.
    fn boundary_safety(&self, point: Vec3, direction: Vec3) -> Option<f64>;
}
