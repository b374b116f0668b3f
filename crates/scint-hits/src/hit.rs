//! The per-crystal, per-event aggregate hit.

use scint_core::CrystalAddress;
use std::fmt;

/// Aggregate detector response of one crystal over one event.
///
/// At most one exists per distinct crystal id per event. Energy is the
/// sum of the smeared energy losses of every merged point; time is the
/// earliest entry time among them.
#[derive(Clone, Debug, PartialEq)]
pub struct CrystalHit {
    /// Geometry category of the crystal (shape class).
    pub crystal_type: i32,
    /// Scheme-specific intermediate copy index.
    pub crystal_copy: i32,
    /// Dense unique crystal identifier.
    pub crystal_id: i32,
    /// Summed smeared energy, GeV.
    pub energy: f64,
    /// Earliest merged entry time, ns.
    pub time: f64,
}

impl CrystalHit {
    /// A fresh hit from the first point seen for this crystal.
    pub fn new(address: CrystalAddress, energy: f64, time: f64) -> Self {
        Self {
            crystal_type: address.crystal_type,
            crystal_copy: address.crystal_copy,
            crystal_id: address.crystal_id,
            energy,
            time,
        }
    }

    /// Merge another point for the same crystal: energy is summed and
    /// the recorded time replaced only when the incoming one is
    /// strictly earlier.
    pub fn absorb(&mut self, energy: f64, time: f64) {
        self.energy += energy;
        if time < self.time {
            self.time = time;
        }
    }
}

impl fmt::Display for CrystalHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "crystal {} (type {}, copy {}): {} keV at {} ns",
            self.crystal_id,
            self.crystal_type,
            self.crystal_copy,
            self.energy * 1e6,
            self.time
        )
    }
}
