//! Test utilities and mock types for Scint development.
//!
//! Provides mock implementations of core traits ([`VolumeRegistry`],
//! [`BoundaryProbe`]) and a [`StepBuilder`] for constructing step
//! records in tests without spelling out every field.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use scint_core::{
    BoundaryProbe, Step, TrackId, TrackStatus, Vec3, VolumeId, VolumePath, VolumeRegistry,
};

/// Mock implementation of [`VolumeRegistry`].
///
/// Backed by a `HashMap<String, VolumeId>` for flexible test setup.
/// Pre-populate volumes with [`set_volume`](MockVolumeRegistry::set_volume)
/// before passing to code under test; unknown names resolve to `None`.
pub struct MockVolumeRegistry {
    volumes: HashMap<String, VolumeId>,
}

impl MockVolumeRegistry {
    pub fn new() -> Self {
        Self {
            volumes: HashMap::new(),
        }
    }

    /// Register a volume name for testing.
    pub fn set_volume(&mut self, name: &str, id: VolumeId) {
        self.volumes.insert(name.to_owned(), id);
    }
}

impl Default for MockVolumeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeRegistry for MockVolumeRegistry {
    fn volume_id(&self, name: &str) -> Option<VolumeId> {
        self.volumes.get(name).copied()
    }
}

/// Mock implementation of [`BoundaryProbe`] returning a fixed safety
/// distance regardless of the queried point.
pub struct FixedBoundaryProbe {
    safety: Option<f64>,
}

impl FixedBoundaryProbe {
    /// A probe that reports the given safety distance everywhere.
    pub fn at(safety: f64) -> Self {
        Self {
            safety: Some(safety),
        }
    }

    /// A probe that cannot locate any point.
    pub fn unlocated() -> Self {
        Self { safety: None }
    }
}

impl BoundaryProbe for FixedBoundaryProbe {
    fn boundary_safety(&self, _point: Vec3, _direction: Vec3) -> Option<f64> {
        self.safety
    }
}

/// Builder for step records with sensible defaults.
///
/// Defaults: a single-level path named `crystalLog1`, no status flags
/// set, zero deposit, zero time and length, track 1, detector volume 1,
/// position at the origin, momentum along +z.
pub struct StepBuilder {
    step: Step,
}

impl StepBuilder {
    pub fn new() -> Self {
        Self {
            step: Step {
                path: VolumePath::new("crystalLog1"),
                status: TrackStatus::default(),
                energy_deposit: 0.0,
                time: 0.0,
                length: 0.0,
                track_id: TrackId(1),
                detector_volume: VolumeId(1),
                position: Vec3::ZERO,
                momentum: Vec3::new(0.0, 0.0, 1.0),
            },
        }
    }

    pub fn path(mut self, path: VolumePath) -> Self {
        self.step.path = path;
        self
    }

    pub fn entering(mut self) -> Self {
        self.step.status.entering = true;
        self
    }

    pub fn exiting(mut self) -> Self {
        self.step.status.exiting = true;
        self
    }

    pub fn stopped(mut self) -> Self {
        self.step.status.stopped = true;
        self
    }

    pub fn disappeared(mut self) -> Self {
        self.step.status.disappeared = true;
        self
    }

    /// Energy deposited over this step, GeV.
    pub fn energy(mut self, gev: f64) -> Self {
        self.step.energy_deposit = gev;
        self
    }

    /// Track time at this step, seconds.
    pub fn time(mut self, seconds: f64) -> Self {
        self.step.time = seconds;
        self
    }

    /// Track length at this step, cm.
    pub fn length(mut self, cm: f64) -> Self {
        self.step.length = cm;
        self
    }

    pub fn track(mut self, id: TrackId) -> Self {
        self.step.track_id = id;
        self
    }

    pub fn detector_volume(mut self, id: VolumeId) -> Self {
        self.step.detector_volume = id;
        self
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.step.position = position;
        self
    }

    pub fn momentum(mut self, momentum: Vec3) -> Self {
        self.step.momentum = momentum;
        self
    }

    pub fn build(self) -> Step {
        self.step
    }
}

impl Default for StepBuilder {
    fn default() -> Self {
        Self::new()
    }
}
