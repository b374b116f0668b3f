//! Error types for geometry configuration and address resolution.

use crate::version::GeometryVersion;
use scint_core::{CrystalAddress, VolumeId};
use std::error::Error;
use std::fmt;

/// Errors from geometry configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// The raw version selector matches no supported layout.
    UnknownVersion {
        /// The rejected raw selector value.
        raw: i32,
    },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVersion { raw } => {
                write!(f, "geometry version {raw} matches no supported layout")
            }
        }
    }
}

impl Error for GeomError {}

/// Faults detected while decoding a crystal address.
///
/// Under [`ValidationMode::Warn`](crate::ValidationMode) these are logged
/// and the (partial or out-of-range) address is returned anyway; under
/// `Strict` they surface as the `Err` of
/// [`AddressResolver::resolve`](crate::AddressResolver::resolve).
#[derive(Clone, Debug, PartialEq)]
pub enum ResolveError {
    /// The decoded address violates the layout's documented bounds.
    AddressOutOfRange {
        /// The layout the address was decoded for.
        version: GeometryVersion,
        /// The offending decoded address.
        address: CrystalAddress,
    },
    /// The crystal type index is impossible for the legacy single-level
    /// layout (beyond its 30 known crystal shapes).
    ImpossibleCrystalType {
        /// The impossible type index.
        crystal_type: i32,
    },
    /// The alveolus volume id does not belong to the end-cap alveolus
    /// table required by the layout.
    WrongAlveolusVolume {
        /// The unrecognized alveolus volume id, if any was reported.
        volume: Option<VolumeId>,
    },
    /// No crystal index could be parsed out of the raw volume name.
    UnparseableVolumeName {
        /// The raw volume name.
        name: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressOutOfRange { version, address } => {
                write!(f, "wrong crystal number in {version}: {address}")
            }
            Self::ImpossibleCrystalType { crystal_type } => {
                write!(f, "impossible crystal type {crystal_type} for legacy layout")
            }
            Self::WrongAlveolusVolume { volume } => match volume {
                Some(id) => write!(f, "wrong alveolus volume {id} for end-cap layout"),
                None => write!(f, "no alveolus volume reported for end-cap layout"),
            },
            Self::UnparseableVolumeName { name } => {
                write!(f, "no crystal index in volume name '{name}'")
            }
        }
    }
}

impl Error for ResolveError {}
