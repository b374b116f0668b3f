//! Geometry layouts and crystal address resolution.
//!
//! This crate turns the hierarchical volume copy numbers reported by the
//! transport engine into a flat [`scint_core::CrystalAddress`], according
//! to one of the historically evolved detector layouts.
//!
//! # Layouts
//!
//! Each [`GeometryVersion`] variant is one layout with its own addressing
//! arithmetic and documented closed crystal-id range. The
//! [`AddressResolver`] is configured with a version once, builds its
//! immutable [`VolumeTables`] from the geometry at initialization, and is
//! a pure function of its inputs from then on.
//!
//! # Validation
//!
//! Out-of-range decodes are diagnostics, not failures, under the default
//! [`ValidationMode::Warn`] — the long-running batch simulation must not
//! abort on one malformed step. [`ValidationMode::Strict`] turns the same
//! conditions into [`ResolveError`]s for test environments.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod resolver;
pub mod tables;
pub mod version;

pub use error::{GeomError, ResolveError};
pub use resolver::{AddressResolver, ValidationMode};
pub use tables::VolumeTables;
pub use version::GeometryVersion;
