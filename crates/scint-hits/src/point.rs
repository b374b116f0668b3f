//! One track-crossing record of a single crystal.

use scint_core::{CrystalAddress, TrackId, Vec3, VolumeId};

/// One track's crossing of one crystal within an event.
///
/// Appended to the per-event point collection when a track leaves the
/// active volume with nonzero accumulated energy loss; cleared at event
/// end. Entry kinematics come from the entering step, exit kinematics
/// from the leaving step (position possibly pulled back by the boundary
/// overshoot correction).
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// Track identifier within the event.
    pub track_id: TrackId,
    /// Detector volume the transport engine attributes the crossing to.
    pub detector_volume: VolumeId,
    /// Decoded crystal address.
    pub address: CrystalAddress,
    /// Entry position, cm.
    pub position_in: Vec3,
    /// Exit position, cm.
    pub position_out: Vec3,
    /// Entry momentum, GeV/c.
    pub momentum_in: Vec3,
    /// Exit momentum, GeV/c.
    pub momentum_out: Vec3,
    /// Entry time, ns.
    pub time: f64,
    /// Track length at entry, cm.
    pub length: f64,
    /// Accumulated (unsmeared) energy loss, GeV.
    pub energy_loss: f64,
}
