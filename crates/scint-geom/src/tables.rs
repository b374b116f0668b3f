//! Immutable volume-id lookup tables, built once at initialization.

use scint_core::{VolumeId, VolumeRegistry};
use tracing::debug;

/// The resolver's name→id caches.
///
/// Built exactly once per run by resolving the historically known volume
/// names against the constructed geometry. A layout only instantiates a
/// subset of these names; absent names occupy `None` slots and never
/// match a reverse lookup.
///
/// Reverse lookups return the 1-based type index of the matching slot.
#[derive(Clone, Debug)]
pub struct VolumeTables {
    crystals: Vec<Option<VolumeId>>,
    alveoli: Vec<Option<VolumeId>>,
    endcap_alveoli: Vec<Option<VolumeId>>,
}

impl VolumeTables {
    /// Number of crystal shapes in the legacy single-level layout.
    pub const CRYSTAL_SHAPES: usize = 30;
    /// Largest barrel alveolus count across all layouts (7.05).
    pub const BARREL_ALVEOLI: usize = 32;
    /// End-cap alveolus count (7.17).
    pub const ENDCAP_ALVEOLI: usize = 3;

    /// Resolve all known volume names against the geometry.
    pub fn build(registry: &dyn VolumeRegistry) -> Self {
        let resolve = |prefix: &str, count: usize| -> Vec<Option<VolumeId>> {
            (1..=count)
                .map(|i| {
                    let name = format!("{prefix}{i}");
                    let id = registry.volume_id(&name);
                    debug!(volume = %name, id = ?id, "volume binding");
                    id
                })
                .collect()
        };
        Self {
            crystals: resolve("crystalLog", Self::CRYSTAL_SHAPES),
            alveoli: resolve("Alveolus_", Self::BARREL_ALVEOLI),
            endcap_alveoli: resolve("Alveolus_EC_", Self::ENDCAP_ALVEOLI),
        }
    }

    /// 1-based crystal shape index for a crystal volume id.
    pub fn crystal_type(&self, id: VolumeId) -> Option<i32> {
        lookup(&self.crystals, id)
    }

    /// 1-based barrel alveolus type for an alveolus volume id.
    pub fn alveolus_type(&self, id: VolumeId) -> Option<i32> {
        lookup(&self.alveoli, id)
    }

    /// 1-based end-cap alveolus type for an alveolus volume id.
    pub fn endcap_alveolus_type(&self, id: VolumeId) -> Option<i32> {
        lookup(&self.endcap_alveoli, id)
    }
}

fn lookup(slots: &[Option<VolumeId>], id: VolumeId) -> Option<i32> {
    slots
        .iter()
        .position(|slot| *slot == Some(id))
        .map(|i| i as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapRegistry(HashMap<String, VolumeId>);

    impl VolumeRegistry for MapRegistry {
        fn volume_id(&self, name: &str) -> Option<VolumeId> {
            self.0.get(name).copied()
        }
    }

    fn barrel_only_registry() -> MapRegistry {
        let mut map = HashMap::new();
        // 20 barrel alveoli as in the 7.07 layout, ids 100..119.
        for i in 1..=20 {
            map.insert(format!("Alveolus_{i}"), VolumeId(99 + i));
        }
        MapRegistry(map)
    }

    #[test]
    fn reverse_lookup_is_one_based() {
        let tables = VolumeTables::build(&barrel_only_registry());
        assert_eq!(tables.alveolus_type(VolumeId(100)), Some(1));
        assert_eq!(tables.alveolus_type(VolumeId(119)), Some(20));
    }

    #[test]
    fn unknown_id_returns_none() {
        let tables = VolumeTables::build(&barrel_only_registry());
        assert_eq!(tables.alveolus_type(VolumeId(999)), None);
        assert_eq!(tables.crystal_type(VolumeId(100)), None);
        assert_eq!(tables.endcap_alveolus_type(VolumeId(100)), None);
    }

    #[test]
    fn absent_names_never_match() {
        // Registry with no volumes at all: every slot is None and no id
        // may match, whatever its value.
        let tables = VolumeTables::build(&MapRegistry(HashMap::new()));
        for id in [-1, 0, 1, 42] {
            assert_eq!(tables.crystal_type(VolumeId(id)), None);
            assert_eq!(tables.alveolus_type(VolumeId(id)), None);
            assert_eq!(tables.endcap_alveolus_type(VolumeId(id)), None);
        }
    }

    #[test]
    fn tables_cover_all_known_names() {
        let mut map = HashMap::new();
        for i in 1..=30 {
            map.insert(format!("crystalLog{i}"), VolumeId(i));
        }
        for i in 1..=32 {
            map.insert(format!("Alveolus_{i}"), VolumeId(100 + i));
        }
        for i in 1..=3 {
            map.insert(format!("Alveolus_EC_{i}"), VolumeId(200 + i));
        }
        let tables = VolumeTables::build(&MapRegistry(map));
        assert_eq!(tables.crystal_type(VolumeId(30)), Some(30));
        assert_eq!(tables.alveolus_type(VolumeId(132)), Some(32));
        assert_eq!(tables.endcap_alveolus_type(VolumeId(203)), Some(3));
    }
}
