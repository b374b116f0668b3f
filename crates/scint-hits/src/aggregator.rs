//! The per-event hit aggregation state machine.

use crate::accumulator::TrackAccumulator;
use crate::hit::CrystalHit;
use crate::point::Point;
use crate::smearing::NonUniformity;
use indexmap::map::Entry;
use indexmap::IndexMap;
use scint_core::{BoundaryProbe, CrystalAddress, Step, Vec3};
use tracing::{debug, info};

/// Multiple of the boundary safety distance by which an exit position is
/// pulled back along the track direction, compensating transport
/// stepping overshoot at volume boundaries.
const OVERSHOOT_PULLBACK: f64 = 3.0;

/// What one call to [`HitAggregator::process_step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The track is still inside the crystal; energy was accumulated.
    Accumulating,
    /// The track left with exactly zero accumulated energy; no point or
    /// hit was emitted.
    Discarded,
    /// The track left; a point was appended and merged into a hit.
    PointEmitted,
}

/// Accumulates step-level detector response into per-event points and
/// per-crystal hits.
///
/// Owns the per-track [`TrackAccumulator`], the ordered per-event point
/// collection, and the hit index keyed by crystal id (insertion-ordered,
/// so readout order matches the order crystals were first hit). Both
/// collections are event-scoped: read them out after the last step of an
/// event, then call [`end_of_event`](Self::end_of_event) or
/// [`reset`](Self::reset).
#[derive(Clone, Debug)]
pub struct HitAggregator {
    accumulator: TrackAccumulator,
    smearing: NonUniformity,
    points: Vec<Point>,
    hits: IndexMap<i32, CrystalHit>,
}

impl HitAggregator {
    /// Create an aggregator using the given smearing model.
    pub fn new(smearing: NonUniformity) -> Self {
        Self {
            accumulator: TrackAccumulator::default(),
            smearing,
            points: Vec::new(),
            hits: IndexMap::new(),
        }
    }

    /// Feed one step with its decoded crystal address.
    ///
    /// The `probe` is consulted only on exiting steps, for the boundary
    /// overshoot correction of the exit position.
    pub fn process_step(
        &mut self,
        address: CrystalAddress,
        step: &Step,
        probe: &dyn BoundaryProbe,
    ) -> StepOutcome {
        if step.status.entering {
            self.accumulator.begin_crossing(step);
        }

        self.accumulator.deposit(step.energy_deposit);

        if !step.status.is_leaving() {
            return StepOutcome::Accumulating;
        }

        let energy_loss = self.accumulator.energy_loss();
        if energy_loss == 0.0 {
            // Zero-deposit crossing: nothing to record. The accumulator
            // is reset here too, unlike the historical code, so stale
            // entry state cannot leak into the next crossing.
            self.accumulator.reset();
            debug!(track = %step.track_id, "zero-energy crossing discarded");
            return StepOutcome::Discarded;
        }

        let position_out = if step.status.exiting {
            correct_exit_position(step.position, step.momentum, probe)
        } else {
            step.position
        };

        let time = self.accumulator.time_ns();
        self.points.push(Point {
            track_id: step.track_id,
            detector_volume: step.detector_volume,
            address,
            position_in: self.accumulator.position_in(),
            position_out,
            momentum_in: self.accumulator.momentum_in(),
            momentum_out: step.momentum,
            time,
            length: self.accumulator.entry_length(),
            energy_loss,
        });

        let detected = self.smearing.apply(energy_loss);
        match self.hits.entry(address.crystal_id) {
            Entry::Occupied(mut slot) => slot.get_mut().absorb(detected, time),
            Entry::Vacant(slot) => {
                slot.insert(CrystalHit::new(address, detected, time));
            }
        }

        self.accumulator.reset();
        StepOutcome::PointEmitted
    }

    /// Points recorded so far this event, in delivery order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Hits recorded so far this event, in first-seen crystal order.
    pub fn hits(&self) -> impl ExactSizeIterator<Item = &CrystalHit> {
        self.hits.values()
    }

    /// The hit for one crystal id, if any point hit it this event.
    pub fn hit_for(&self, crystal_id: i32) -> Option<&CrystalHit> {
        self.hits.get(&crystal_id)
    }

    /// Log the per-event summary, then clear all event state.
    pub fn end_of_event(&mut self) {
        info!(
            points = self.points.len(),
            hits = self.hits.len(),
            "event complete"
        );
        self.reset();
    }

    /// Clear all event state: points, hits, and the track accumulator.
    pub fn reset(&mut self) {
        self.points.clear();
        self.hits.clear();
        self.accumulator.reset();
    }
}

/// Pull an exit position back along the track direction by
/// [`OVERSHOOT_PULLBACK`] times the safety distance to the boundary in
/// the reverse direction. Momentum and time are left untouched. Falls
/// back to the raw position when the direction degenerates or the point
/// cannot be located.
fn correct_exit_position(position: Vec3, momentum: Vec3, probe: &dyn BoundaryProbe) -> Vec3 {
    let Some(direction) = momentum.normalized() else {
        return position;
    };
    match probe.boundary_safety(position, -direction) {
        Some(safety) => position - direction * (OVERSHOOT_PULLBACK * safety),
        None => position,
    }
}
