//! Per-event point and crystal-hit aggregation.
//!
//! The [`HitAggregator`] consumes one decoded address plus step record
//! per transport step, accumulates per-track energy loss while the track
//! stays inside a crystal, materializes a [`Point`] when the track
//! leaves, and folds same-crystal points into a single [`CrystalHit`]
//! per event (energy summed, earliest time kept).
//!
//! All randomness is confined to [`NonUniformity`], a seeded flat
//! light-collection smearing; with the default 0% it is bit-exact
//! identity, so replayed step sequences reproduce identical output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accumulator;
pub mod aggregator;
pub mod hit;
pub mod point;
pub mod smearing;

pub use accumulator::TrackAccumulator;
pub use aggregator::{HitAggregator, StepOutcome};
pub use hit::CrystalHit;
pub use point::Point;
pub use smearing::NonUniformity;
