//! Strongly-typed identifiers.

use std::fmt;

/// Identifier of a logical volume in the transport engine's geometry.
///
/// Assigned by the geometry builder when the volume tree is constructed;
/// stable for the lifetime of a run. The transport engine reports one per
/// hierarchy level on every step, and the resolver's lookup tables are
/// keyed by these ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VolumeId(pub i32);

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for VolumeId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Identifier of a simulated particle track within the current event.
///
/// Assigned by the transport stack; unique within one event only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub i32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TrackId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}
