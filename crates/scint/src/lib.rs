//! Scint: crystal calorimeter response simulation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Scint sub-crates. For most users, adding `scint` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use scint::prelude::*;
//!
//! // The host geometry: only one alveolus shape is registered here.
//! struct Geometry;
//! impl VolumeRegistry for Geometry {
//!     fn volume_id(&self, name: &str) -> Option<VolumeId> {
//!         (name == "Alveolus_1").then_some(VolumeId(11))
//!     }
//! }
//!
//! // A transport backend that cannot locate points (no exit correction).
//! struct NoProbe;
//! impl BoundaryProbe for NoProbe {
//!     fn boundary_safety(&self, _point: Vec3, _direction: Vec3) -> Option<f64> {
//!         None
//!     }
//! }
//!
//! let mut cal = Calorimeter::new(CalorimeterConfig::default(), &Geometry).unwrap();
//!
//! // One track enters crystal 1 of alveolus 1 and ranges out, leaving 10 keV.
//! let step = Step {
//!     path: VolumePath::new("CrystalWithWrapping_1A")
//!         .with_level(Some(VolumeId(5)), 0)
//!         .with_level(None, 1)
//!         .with_level(Some(VolumeId(11)), 0),
//!     status: TrackStatus {
//!         entering: true,
//!         stopped: true,
//!         ..TrackStatus::default()
//!     },
//!     energy_deposit: 1.0e-5,
//!     time: 4.0e-9,
//!     length: 0.0,
//!     track_id: TrackId(1),
//!     detector_volume: VolumeId(5),
//!     position: Vec3::ZERO,
//!     momentum: Vec3::new(0.0, 0.0, 1.0),
//! };
//! cal.process_step(&step, &NoProbe).unwrap();
//!
//! let hit = cal.hit_for(1).unwrap();
//! assert_eq!(hit.crystal_id, 1);
//! assert_eq!(hit.time, 4.0); // ns
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `scint-core` | IDs, steps, volume paths, core traits |
//! | [`geom`] | `scint-geom` | Geometry layouts and address resolution |
//! | [`hits`] | `scint-hits` | Per-event point and hit aggregation |
//! | [`det`] | `scint-det` | Detector configuration and front-end |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`scint-core`).
///
/// Contains the step record, volume hierarchy types, the crystal
/// address, and the host-integration traits
/// ([`types::VolumeRegistry`], [`types::BoundaryProbe`]).
pub use scint_core as types;

/// Geometry layouts and address resolution (`scint-geom`).
///
/// One [`geom::GeometryVersion`] per supported layout; the
/// [`geom::AddressResolver`] decodes volume hierarchies into crystal
/// addresses.
pub use scint_geom as geom;

/// Per-event point and hit aggregation (`scint-hits`).
///
/// The [`hits::HitAggregator`] folds steps into [`hits::Point`]s and
/// merged [`hits::CrystalHit`]s, with optional light-collection
/// non-uniformity smearing ([`hits::NonUniformity`]).
pub use scint_hits as hits;

/// Detector configuration and front-end (`scint-det`).
///
/// [`det::Calorimeter`] ties resolution and aggregation together behind
/// a single per-step entry point.
pub use scint_det as det;

/// Common imports for typical Scint usage.
///
/// ```rust
/// use scint::prelude::*;
/// ```
///
/// This imports the most frequently used types: the detector front-end,
/// step and address types, layout selection, and the host traits.
pub mod prelude {
    // Core types and traits
    pub use scint_core::{
        BoundaryProbe, CrystalAddress, Step, TrackId, TrackStatus, Vec3, VolumeId, VolumeLevel,
        VolumePath, VolumeRegistry,
    };

    // Geometry
    pub use scint_geom::{AddressResolver, GeometryVersion, ResolveError, ValidationMode};

    // Hits
    pub use scint_hits::{CrystalHit, NonUniformity, Point, StepOutcome};

    // Detector front-end
    pub use scint_det::{Calorimeter, CalorimeterConfig, ConfigError};
}
