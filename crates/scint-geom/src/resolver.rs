//! Crystal address resolution for every supported layout.

use crate::error::ResolveError;
use crate::tables::VolumeTables;
use crate::version::GeometryVersion;
use scint_core::{CrystalAddress, VolumeLevel, VolumePath};
use tracing::warn;

/// What to do when a decode fails validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Log the fault and return the (partial or out-of-range) address
    /// anyway. The historical behavior; the default.
    #[default]
    Warn,
    /// Return the fault as an error. For test environments.
    Strict,
}

/// Per-layout closed bounds on the decoded address components.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    crystal_type: (i32, i32),
    crystal_copy: (i32, i32),
    crystal_id: (i32, i32),
}

impl Bounds {
    fn contains(&self, a: &CrystalAddress) -> bool {
        let in_range = |v: i32, (lo, hi): (i32, i32)| v >= lo && v <= hi;
        in_range(a.crystal_type, self.crystal_type)
            && in_range(a.crystal_copy, self.crystal_copy)
            && in_range(a.crystal_id, self.crystal_id)
    }
}

const PROTOTYPE: Bounds = Bounds {
    crystal_type: (1, 30),
    crystal_copy: (1, 512),
    crystal_id: (1, 4608),
};
const BARREL_705: Bounds = Bounds {
    crystal_type: (1, 24),
    crystal_copy: (1, 160),
    crystal_id: (1, 3840),
};
const BARREL_707: Bounds = Bounds {
    crystal_type: (1, 20),
    crystal_copy: (1, 128),
    crystal_id: (1, 2560),
};
const BARREL_709: Bounds = Bounds {
    crystal_type: (1, 19),
    crystal_copy: (1, 128),
    crystal_id: (1, 2144),
};
const ENDCAP_717: Bounds = Bounds {
    crystal_type: (1, 23),
    crystal_copy: (1, 32),
    crystal_id: (3000, 3736),
};
const BARREL_811: Bounds = Bounds {
    crystal_type: (1, 16),
    crystal_copy: (1, 128),
    crystal_id: (1, 1952),
};

/// Sentinel for a volume id that matches no table slot, mirroring the
/// arithmetic the historical decoder runs when a lookup misses.
const NO_TYPE: i32 = -1;

/// Decodes the volume hierarchy of a step into a [`CrystalAddress`].
///
/// Configured once with a [`GeometryVersion`] and the immutable
/// [`VolumeTables`]; from then on [`resolve`](Self::resolve) is a pure
/// function of its inputs. Decodes that violate the layout's bounds are
/// handled per [`ValidationMode`].
#[derive(Clone, Debug)]
pub struct AddressResolver {
    version: GeometryVersion,
    tables: VolumeTables,
    validation: ValidationMode,
}

impl AddressResolver {
    /// Create a resolver for one layout over the given tables.
    pub fn new(version: GeometryVersion, tables: VolumeTables, validation: ValidationMode) -> Self {
        Self {
            version,
            tables,
            validation,
        }
    }

    /// The configured layout.
    pub fn version(&self) -> GeometryVersion {
        self.version
    }

    /// The configured validation mode.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Decode the step's volume hierarchy into a crystal address.
    ///
    /// In [`ValidationMode::Warn`] every fault is logged and the decoded
    /// address — possibly partial or out of range — is returned, so a
    /// malformed step never aborts the event. In `Strict` the first
    /// fault is returned as an error.
    pub fn resolve(&self, path: &VolumePath) -> Result<CrystalAddress, ResolveError> {
        let (address, bounds, fault) = self.decode(path);

        if let Some(fault) = fault {
            if self.validation == ValidationMode::Strict {
                return Err(fault);
            }
            warn!(version = self.version.raw(), "{fault}");
            return Ok(address);
        }

        if !bounds.contains(&address) {
            let fault = ResolveError::AddressOutOfRange {
                version: self.version,
                address,
            };
            if self.validation == ValidationMode::Strict {
                return Err(fault);
            }
            warn!(version = self.version.raw(), "{fault}");
        }

        Ok(address)
    }

    fn decode(&self, path: &VolumePath) -> (CrystalAddress, Bounds, Option<ResolveError>) {
        match self.version {
            GeometryVersion::Prototype => {
                let (a, fault) = self.decode_prototype(path);
                (a, PROTOTYPE, fault)
            }
            GeometryVersion::Barrel705 => (self.decode_barrel_quad(path, 160), BARREL_705, None),
            GeometryVersion::Barrel707 => (self.decode_barrel_quad(path, 128), BARREL_707, None),
            GeometryVersion::Barrel709 => (self.decode_barrel_mixed(path), BARREL_709, None),
            GeometryVersion::Endcap717 => {
                let (a, fault) = self.decode_endcap(path, true);
                (a, ENDCAP_717, fault)
            }
            GeometryVersion::Combined707 => {
                if self.barrel_type(path.alveolus()) != NO_TYPE {
                    (self.decode_barrel_quad(path, 128), BARREL_707, None)
                } else {
                    let (a, fault) = self.decode_endcap(path, false);
                    (a, ENDCAP_717, fault)
                }
            }
            GeometryVersion::Combined709 => {
                if self.barrel_type(path.alveolus()) != NO_TYPE {
                    (self.decode_barrel_mixed(path), BARREL_709, None)
                } else {
                    let (a, fault) = self.decode_endcap(path, false);
                    (a, ENDCAP_717, fault)
                }
            }
            GeometryVersion::Barrel811 => (self.decode_super_alveolus(path), BARREL_811, None),
        }
    }

    /// Barrel alveolus type of a hierarchy level, or [`NO_TYPE`].
    fn barrel_type(&self, level: VolumeLevel) -> i32 {
        level
            .volume
            .and_then(|id| self.tables.alveolus_type(id))
            .unwrap_or(NO_TYPE)
    }

    /// Legacy single-level layout: the crystal volume id itself selects
    /// the shape. Types 1..=6 are barrel shapes with 512 copies each,
    /// 7..=30 end-cap shapes with 64 copies each, packed after id 3072.
    fn decode_prototype(&self, path: &VolumePath) -> (CrystalAddress, Option<ResolveError>) {
        let direct = path.direct();
        let crystal_type = direct
            .volume
            .and_then(|id| self.tables.crystal_type(id))
            .unwrap_or(NO_TYPE);
        let crystal_copy = direct.copy + 1;

        if crystal_type < 7 {
            let id = (crystal_type - 1) * 512 + crystal_copy;
            (
                CrystalAddress::new(crystal_type, crystal_copy, id),
                None,
            )
        } else if crystal_type < 31 {
            let id = 3072 + (crystal_type - 7) * 64 + crystal_copy;
            (
                CrystalAddress::new(crystal_type, crystal_copy, id),
                None,
            )
        } else {
            (
                CrystalAddress::new(crystal_type, crystal_copy, 0),
                Some(ResolveError::ImpossibleCrystalType { crystal_type }),
            )
        }
    }

    /// Barrel layouts with four crystals per alveolus: the alveolus type
    /// is the crystal type and `factor` crystals fill each type.
    fn decode_barrel_quad(&self, path: &VolumePath, factor: i32) -> CrystalAddress {
        let crystal_type = self.barrel_type(path.alveolus());
        let crystal_copy = path.alveolus().copy * 4 + path.crystal().copy;
        let crystal_id = (crystal_type - 1) * factor + crystal_copy;
        CrystalAddress::new(crystal_type, crystal_copy, crystal_id)
    }

    /// Barrel 7.09: types up to 16 hold four crystals per alveolus;
    /// types 17..=19 hold one large crystal each. Any other type leaves
    /// the null address for the bounds check to flag.
    fn decode_barrel_mixed(&self, path: &VolumePath) -> CrystalAddress {
        let crystal_type = self.barrel_type(path.alveolus());
        if crystal_type < 17 {
            self.decode_barrel_quad(path, 128)
        } else if crystal_type < 20 {
            let crystal_copy = path.alveolus().copy + path.crystal().copy;
            let crystal_id = (crystal_type - 1) * 32 + crystal_copy;
            CrystalAddress::new(crystal_type, crystal_copy, crystal_id)
        } else {
            CrystalAddress::NULL
        }
    }

    /// End-cap 7.17: the crystal shape index is embedded in the raw
    /// volume name after its fixed 8-character prefix. `gate` enforces
    /// that the alveolus id belongs to the end-cap table (the standalone
    /// end-cap layout checks; the combined layouts fall through from the
    /// barrel table miss without re-checking).
    fn decode_endcap(&self, path: &VolumePath, gate: bool) -> (CrystalAddress, Option<ResolveError>) {
        let alveolus = path.alveolus();
        if gate {
            let known = alveolus
                .volume
                .and_then(|id| self.tables.endcap_alveolus_type(id))
                .is_some();
            if !known {
                return (
                    CrystalAddress::NULL,
                    Some(ResolveError::WrongAlveolusVolume {
                        volume: alveolus.volume,
                    }),
                );
            }
        }
        match parse_crystal_index(path.name()) {
            Some(crystal_type) => {
                let crystal_copy = alveolus.copy + 1;
                let crystal_id = 3000 + alveolus.copy * 23 + (crystal_type - 1);
                (
                    CrystalAddress::new(crystal_type, crystal_copy, crystal_id),
                    None,
                )
            }
            None => (
                CrystalAddress::NULL,
                Some(ResolveError::UnparseableVolumeName {
                    name: path.name().to_string(),
                }),
            ),
        }
    }

    /// Barrel 8.11: the type comes from the fourth (super-alveolus)
    /// level. Type 1 is a ring of single-crystal alveoli; types 2..=16
    /// hold four crystals each, packed after the first 32 ids.
    fn decode_super_alveolus(&self, path: &VolumePath) -> CrystalAddress {
        let crystal_type = self.barrel_type(path.super_alveolus());
        let sup = path.super_alveolus().copy;
        let cry = path.crystal().copy;
        if crystal_type == 1 {
            CrystalAddress::new(crystal_type, sup + 1, sup + 1)
        } else if crystal_type > 1 && crystal_type < 17 {
            let crystal_copy = sup * 4 + cry + 1;
            let crystal_id = 32 + (crystal_type - 2) * 128 + sup * 4 + cry + 1;
            CrystalAddress::new(crystal_type, crystal_copy, crystal_id)
        } else {
            CrystalAddress::NULL
        }
    }
}

/// Parse the crystal shape index embedded in an end-cap volume name,
/// after the fixed 8-character prefix (`Crystal_N`).
fn parse_crystal_index(name: &str) -> Option<i32> {
    let rest = name.get(8..)?.trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse().ok()
}
