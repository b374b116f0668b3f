//! Per-step input delivered by the transport engine.
//!
//! One [`Step`] is produced for every simulation step a particle takes
//! inside a sensitive crystal volume. It carries the volume hierarchy
//! snapshot ([`VolumePath`]), the track-state predicates
//! ([`TrackStatus`]), and the step kinematics.

use crate::id::{TrackId, VolumeId};
use crate::vec3::Vec3;
use smallvec::SmallVec;

/// Track-state predicates for the current step.
///
/// Mirrors the transport engine's entering/exiting/stopped/disappeared
/// flags. More than one may be set on the same step (a track can enter
/// and stop within a single step).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackStatus {
    /// The track entered the sensitive volume on this step.
    pub entering: bool,
    /// The track crossed the volume boundary outward on this step.
    pub exiting: bool,
    /// The track ranged out (stopped) inside the volume.
    pub stopped: bool,
    /// The track disappeared (absorbed, decayed) inside the volume.
    pub disappeared: bool,
}

impl TrackStatus {
    /// True when the track leaves the active volume on this step, by any
    /// of the three exit conditions.
    pub fn is_leaving(&self) -> bool {
        self.exiting || self.stopped || self.disappeared
    }
}

/// One level of the volume hierarchy at the current step.
///
/// `volume` is `None` when the geometry has no node at this depth (the
/// transport engine reports no id there). `copy` is the raw copy number,
/// 0-based for replicated volumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeLevel {
    /// Logical volume id at this depth, if the level exists.
    pub volume: Option<VolumeId>,
    /// Copy number at this depth.
    pub copy: i32,
}

impl VolumeLevel {
    /// The placeholder for an absent hierarchy level.
    pub const UNSET: VolumeLevel = VolumeLevel {
        volume: None,
        copy: -1,
    };

    /// A present level with the given id and copy number.
    pub const fn new(volume: VolumeId, copy: i32) -> Self {
        Self {
            volume: Some(volume),
            copy,
        }
    }
}

/// The volume hierarchy snapshot for the current step.
///
/// Levels are ordered outward from the current (innermost) volume:
/// depth 0 is the volume the step occurred in, depth 1 the
/// crystal-offset level, depth 2 the alveolus, depth 3 the
/// super-alveolus (present only in layouts that have one). Up to four
/// levels are stored inline, matching the deepest hierarchy any
/// supported layout uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumePath {
    name: String,
    levels: SmallVec<[VolumeLevel; 4]>,
}

impl VolumePath {
    /// Start a path with the raw name of the current volume.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            levels: SmallVec::new(),
        }
    }

    /// Append the next-outward hierarchy level.
    pub fn with_level(mut self, volume: Option<VolumeId>, copy: i32) -> Self {
        self.levels.push(VolumeLevel { volume, copy });
        self
    }

    /// Raw name of the current (innermost) volume.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hierarchy level at `depth`, or [`VolumeLevel::UNSET`] when the
    /// path is shallower than that.
    pub fn level(&self, depth: usize) -> VolumeLevel {
        self.levels.get(depth).copied().unwrap_or(VolumeLevel::UNSET)
    }

    /// Depth 0: the volume the step occurred in.
    pub fn direct(&self) -> VolumeLevel {
        self.level(0)
    }

    /// Depth 1: the crystal-offset level.
    pub fn crystal(&self) -> VolumeLevel {
        self.level(1)
    }

    /// Depth 2: the alveolus level.
    pub fn alveolus(&self) -> VolumeLevel {
        self.level(2)
    }

    /// Depth 3: the super-alveolus level (layouts with a fourth level).
    pub fn super_alveolus(&self) -> VolumeLevel {
        self.level(3)
    }
}

/// Everything the transport engine reports for one step inside a
/// sensitive volume.
#[derive(Clone, Debug)]
pub struct Step {
    /// Volume hierarchy at this step.
    pub path: VolumePath,
    /// Track-state predicates.
    pub status: TrackStatus,
    /// Energy deposited on this step, GeV.
    pub energy_deposit: f64,
    /// Track time, seconds (converted to ns at entry capture).
    pub time: f64,
    /// Track length so far, cm.
    pub length: f64,
    /// Track identifier within the event.
    pub track_id: TrackId,
    /// Id of the detector volume the transport engine attributes the
    /// step to.
    pub detector_volume: VolumeId,
    /// Track position at query time, cm.
    pub position: Vec3,
    /// Track momentum at query time, GeV/c.
    pub momentum: Vec3,
}
