//! Core types and traits for the scint calorimeter simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared across the scint workspace:
//! typed identifiers, the step record delivered by the transport engine,
//! the decoded crystal address, and the collaborator traits through
//! which geometry queries flow.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod address;
pub mod id;
pub mod step;
pub mod traits;
pub mod vec3;

pub use address::CrystalAddress;
pub use id::{TrackId, VolumeId};
pub use step::{Step, TrackStatus, VolumeLevel, VolumePath};
pub use traits::{BoundaryProbe, VolumeRegistry};
pub use vec3::Vec3;
