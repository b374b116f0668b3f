//! Per-track accumulation while a track is inside one crystal.

use scint_core::{Step, Vec3};

/// Conversion from the transport engine's track time (seconds) to the
/// nanoseconds stored on points and hits.
const SECONDS_TO_NS: f64 = 1.0e9;

/// Running state for one track's crossing of one crystal.
///
/// [`begin_crossing`](Self::begin_crossing) captures the entry
/// kinematics and zeroes the energy sum; [`deposit`](Self::deposit) is
/// called on every step, including the entering and leaving ones. The
/// aggregator resets the accumulator on every leave transition, so
/// state from one crossing can never leak into the next.
#[derive(Clone, Debug, Default)]
pub struct TrackAccumulator {
    energy_loss: f64,
    time_ns: f64,
    entry_length: f64,
    position_in: Vec3,
    momentum_in: Vec3,
}

impl TrackAccumulator {
    /// Capture entry state from the entering step.
    pub fn begin_crossing(&mut self, step: &Step) {
        self.energy_loss = 0.0;
        self.time_ns = step.time * SECONDS_TO_NS;
        self.entry_length = step.length;
        self.position_in = step.position;
        self.momentum_in = step.momentum;
    }

    /// Add one step's energy deposit to the running sum.
    pub fn deposit(&mut self, energy: f64) {
        self.energy_loss += energy;
    }

    /// Accumulated energy loss, GeV.
    pub fn energy_loss(&self) -> f64 {
        self.energy_loss
    }

    /// Entry time, nanoseconds.
    pub fn time_ns(&self) -> f64 {
        self.time_ns
    }

    /// Track length at entry, cm.
    pub fn entry_length(&self) -> f64 {
        self.entry_length
    }

    /// Entry position, cm.
    pub fn position_in(&self) -> Vec3 {
        self.position_in
    }

    /// Entry momentum, GeV/c.
    pub fn momentum_in(&self) -> Vec3 {
        self.momentum_in
    }

    /// Return to the pristine state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
