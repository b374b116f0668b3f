//! The calorimeter detector front-end.

use scint_core::{BoundaryProbe, Step, VolumeRegistry};
use scint_geom::{AddressResolver, ResolveError, VolumeTables};
use scint_hits::{CrystalHit, HitAggregator, NonUniformity, Point, StepOutcome};
use tracing::info;

use crate::config::{CalorimeterConfig, ConfigError};

/// The active calorimeter: address resolution plus hit aggregation.
///
/// Built once per run from a [`CalorimeterConfig`] and the host
/// geometry's [`VolumeRegistry`]; the volume tables are resolved at
/// construction and never change. Feed every step through
/// [`process_step`](Self::process_step), read the event out through
/// [`points`](Self::points) and [`hits`](Self::hits), then close the
/// event with [`end_of_event`](Self::end_of_event).
pub struct Calorimeter {
    resolver: AddressResolver,
    aggregator: HitAggregator,
    verbosity: u8,
}

impl Calorimeter {
    /// Build a calorimeter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] the configuration violates.
    pub fn new(
        config: CalorimeterConfig,
        registry: &dyn VolumeRegistry,
    ) -> Result<Self, ConfigError> {
        let version = config.validate()?;
        let tables = VolumeTables::build(registry);
        let smearing = NonUniformity::new(config.non_uniformity, config.seed).map_err(|_| {
            ConfigError::InvalidNonUniformity {
                value: config.non_uniformity,
            }
        })?;
        info!(
            version = %version,
            non_uniformity = config.non_uniformity,
            "calorimeter initialized"
        );
        Ok(Self {
            resolver: AddressResolver::new(version, tables, config.validation),
            aggregator: HitAggregator::new(smearing),
            verbosity: config.verbosity,
        })
    }

    /// Feed one transport step.
    ///
    /// The crystal address is decoded from the step's volume hierarchy
    /// and the step folded into the per-event state. The `probe` is
    /// consulted only for exit-position correction on exiting steps.
    ///
    /// # Errors
    ///
    /// Under [`ValidationMode::Strict`](scint_geom::ValidationMode)
    /// decode faults surface here; under the default `Warn` mode this
    /// never fails.
    pub fn process_step(
        &mut self,
        step: &Step,
        probe: &dyn BoundaryProbe,
    ) -> Result<StepOutcome, ResolveError> {
        let address = self.resolver.resolve(&step.path)?;
        Ok(self.aggregator.process_step(address, step, probe))
    }

    /// Points recorded so far this event, in delivery order.
    pub fn points(&self) -> &[Point] {
        self.aggregator.points()
    }

    /// Hits recorded so far this event, in first-seen crystal order.
    pub fn hits(&self) -> impl ExactSizeIterator<Item = &CrystalHit> {
        self.aggregator.hits()
    }

    /// The hit for one crystal id, if any point hit it this event.
    pub fn hit_for(&self, crystal_id: i32) -> Option<&CrystalHit> {
        self.aggregator.hit_for(crystal_id)
    }

    /// Close the current event: log the summary per the configured
    /// verbosity, then clear all event state.
    pub fn end_of_event(&mut self) {
        if self.verbosity == 0 {
            self.aggregator.reset();
            return;
        }
        if self.verbosity > 1 {
            for hit in self.aggregator.hits() {
                info!("{hit}");
            }
        }
        self.aggregator.end_of_event();
    }

    /// Event-start hook for the transport driver. Clears any state a
    /// previous event left behind.
    pub fn begin_event(&mut self) {
        self.aggregator.reset();
    }

    /// Clear all event state without logging.
    pub fn reset(&mut self) {
        self.aggregator.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scint_core::{Vec3, VolumeId, VolumePath};
    use scint_geom::ValidationMode;
    use scint_test_utils::{FixedBoundaryProbe, MockVolumeRegistry, StepBuilder};

    fn registry() -> MockVolumeRegistry {
        let mut reg = MockVolumeRegistry::new();
        for i in 1..=30 {
            reg.set_volume(&format!("crystalLog{i}"), VolumeId(i));
        }
        for i in 1..=32 {
            reg.set_volume(&format!("Alveolus_{i}"), VolumeId(100 + i));
        }
        for i in 1..=3 {
            reg.set_volume(&format!("Alveolus_EC_{i}"), VolumeId(200 + i));
        }
        reg
    }

    fn barrel_path(alveolus_type: i32, alveolus_copy: i32, crystal_copy: i32) -> VolumePath {
        VolumePath::new("CrystalWithWrapping_1A")
            .with_level(Some(VolumeId(1000)), 0)
            .with_level(None, crystal_copy)
            .with_level(Some(VolumeId(100 + alveolus_type)), alveolus_copy)
    }

    fn calorimeter(config: CalorimeterConfig) -> Calorimeter {
        Calorimeter::new(config, &registry()).unwrap()
    }

    #[test]
    fn rejects_unknown_geometry_version() {
        let config = CalorimeterConfig {
            geometry_version: 9,
            ..CalorimeterConfig::default()
        };
        assert!(Calorimeter::new(config, &registry()).is_err());
    }

    #[test]
    fn two_crossings_of_one_crystal_merge() {
        let mut cal = calorimeter(CalorimeterConfig::default());
        let probe = FixedBoundaryProbe::unlocated();

        let first = StepBuilder::new()
            .path(barrel_path(1, 0, 1))
            .entering()
            .stopped()
            .energy(1.0e-5)
            .time(5e-9)
            .build();
        let second = StepBuilder::new()
            .path(barrel_path(1, 0, 1))
            .entering()
            .stopped()
            .energy(2.0e-5)
            .time(3e-9)
            .build();
        assert_eq!(
            cal.process_step(&first, &probe).unwrap(),
            StepOutcome::PointEmitted
        );
        assert_eq!(
            cal.process_step(&second, &probe).unwrap(),
            StepOutcome::PointEmitted
        );

        assert_eq!(cal.points().len(), 2);
        assert_eq!(cal.hits().len(), 1);
        let hit = cal.hit_for(1).unwrap();
        assert_eq!(hit.crystal_type, 1);
        assert_eq!(hit.crystal_copy, 1);
        assert!((hit.energy - 3.0e-5).abs() < 1e-18);
        assert_eq!(hit.time, 3.0);
    }

    #[test]
    fn strict_mode_surfaces_decode_faults() {
        let config = CalorimeterConfig {
            validation: ValidationMode::Strict,
            ..CalorimeterConfig::default()
        };
        let mut cal = calorimeter(config);
        let probe = FixedBoundaryProbe::unlocated();
        // Level 2 carries an id outside the alveolus table.
        let step = StepBuilder::new()
            .path(
                VolumePath::new("CrystalWithWrapping_1A")
                    .with_level(Some(VolumeId(1000)), 0)
                    .with_level(None, 1)
                    .with_level(Some(VolumeId(999)), 0),
            )
            .entering()
            .stopped()
            .energy(1.0e-5)
            .build();
        assert!(cal.process_step(&step, &probe).is_err());
        assert!(cal.points().is_empty());
    }

    #[test]
    fn warn_mode_records_out_of_range_addresses() {
        let mut cal = calorimeter(CalorimeterConfig::default());
        let probe = FixedBoundaryProbe::unlocated();
        let step = StepBuilder::new()
            .path(
                VolumePath::new("CrystalWithWrapping_1A")
                    .with_level(Some(VolumeId(1000)), 0)
                    .with_level(None, 1)
                    .with_level(Some(VolumeId(999)), 0),
            )
            .entering()
            .stopped()
            .energy(1.0e-5)
            .build();
        assert_eq!(
            cal.process_step(&step, &probe).unwrap(),
            StepOutcome::PointEmitted
        );
        // Unresolved alveolus: type -1, copy 0*4+1, id (-1-1)*160+1.
        assert_eq!(cal.points()[0].address.crystal_type, -1);
        assert_eq!(cal.points()[0].address.crystal_id, -319);
    }

    #[test]
    fn exit_correction_runs_through_the_probe() {
        let mut cal = calorimeter(CalorimeterConfig::default());
        let probe = FixedBoundaryProbe::at(0.2);
        let step = StepBuilder::new()
            .path(barrel_path(1, 0, 1))
            .entering()
            .exiting()
            .energy(1.0e-5)
            .position(Vec3::new(0.0, 0.0, 5.0))
            .momentum(Vec3::new(0.0, 0.0, 1.0))
            .build();
        cal.process_step(&step, &probe).unwrap();
        assert_eq!(cal.points()[0].position_out, Vec3::new(0.0, 0.0, 4.4));
    }

    #[test]
    fn end_of_event_clears_state() {
        let mut cal = calorimeter(CalorimeterConfig::default());
        let probe = FixedBoundaryProbe::unlocated();
        let step = StepBuilder::new()
            .path(barrel_path(1, 0, 1))
            .entering()
            .stopped()
            .energy(1.0e-5)
            .build();
        cal.process_step(&step, &probe).unwrap();
        cal.end_of_event();
        assert!(cal.points().is_empty());
        assert_eq!(cal.hits().len(), 0);
    }

    #[test]
    fn seeded_smearing_is_reproducible_across_instances() {
        let config = CalorimeterConfig {
            non_uniformity: 5.0,
            seed: 11,
            ..CalorimeterConfig::default()
        };
        let run = || {
            let mut cal = calorimeter(config.clone());
            let probe = FixedBoundaryProbe::unlocated();
            for time in [1e-9, 2e-9] {
                let step = StepBuilder::new()
                    .path(barrel_path(1, 0, 1))
                    .entering()
                    .stopped()
                    .energy(1.0e-5)
                    .time(time)
                    .build();
                cal.process_step(&step, &probe).unwrap();
            }
            cal.hit_for(1).unwrap().energy
        };
        assert_eq!(run(), run());
    }
}
