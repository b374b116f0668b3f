//! The geometry-version selector.

use crate::error::GeomError;
use std::fmt;

/// One historical detector layout, fixed for the whole run.
///
/// The raw integer selectors are the values the configuration surface
/// has always accepted (0, 1, 2, 3, 4, 5, 6, 10); any other value is
/// rejected at configuration time by [`GeometryVersion::from_raw`].
/// Variant names follow the design revision each layout came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryVersion {
    /// Raw 0 — legacy single-level layout: 30 crystal shapes addressed
    /// directly by crystal volume id, barrel and end-cap in one scheme.
    Prototype,
    /// Raw 1 — barrel 7.05: 24 alveolus rings of 40 alveoli, 4 crystals
    /// each, 3840 crystals.
    Barrel705,
    /// Raw 2 — barrel 7.07: 20 alveolus rings of 32 alveoli, 4 crystals
    /// each, 2560 crystals.
    Barrel707,
    /// Raw 3 — barrel 7.09: 19 rings; the last three hold one large
    /// crystal per alveolus, 2144 crystals.
    Barrel709,
    /// Raw 4 — end-cap 7.17: 3 end-cap alveolus rings, 23 crystal
    /// shapes, ids offset to 3000..3736.
    Endcap717,
    /// Raw 5 — combined 7.07 barrel + 7.17 end-cap.
    Combined707,
    /// Raw 6 — combined 7.09 barrel + 7.17 end-cap.
    Combined709,
    /// Raw 10 — barrel 8.11: a fourth (super-alveolus) hierarchy level;
    /// first ring holds one crystal per alveolus, 1952 crystals.
    Barrel811,
}

impl GeometryVersion {
    /// All supported layouts, in raw-selector order.
    pub const ALL: [GeometryVersion; 8] = [
        Self::Prototype,
        Self::Barrel705,
        Self::Barrel707,
        Self::Barrel709,
        Self::Endcap717,
        Self::Combined707,
        Self::Combined709,
        Self::Barrel811,
    ];

    /// Map a raw configuration selector to a layout.
    ///
    /// Returns `Err(GeomError::UnknownVersion)` for any value outside
    /// {0, 1, 2, 3, 4, 5, 6, 10}.
    pub fn from_raw(raw: i32) -> Result<Self, GeomError> {
        match raw {
            0 => Ok(Self::Prototype),
            1 => Ok(Self::Barrel705),
            2 => Ok(Self::Barrel707),
            3 => Ok(Self::Barrel709),
            4 => Ok(Self::Endcap717),
            5 => Ok(Self::Combined707),
            6 => Ok(Self::Combined709),
            10 => Ok(Self::Barrel811),
            _ => Err(GeomError::UnknownVersion { raw }),
        }
    }

    /// The raw configuration selector for this layout.
    pub fn raw(&self) -> i32 {
        match self {
            Self::Prototype => 0,
            Self::Barrel705 => 1,
            Self::Barrel707 => 2,
            Self::Barrel709 => 3,
            Self::Endcap717 => 4,
            Self::Combined707 => 5,
            Self::Combined709 => 6,
            Self::Barrel811 => 10,
        }
    }

    /// True when the layout includes the end-cap addressing scheme.
    pub fn has_endcap(&self) -> bool {
        matches!(
            self,
            Self::Prototype | Self::Endcap717 | Self::Combined707 | Self::Combined709
        )
    }
}

impl fmt::Display for GeometryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Prototype => "legacy 5.0 layout",
            Self::Barrel705 => "barrel 7.05 layout",
            Self::Barrel707 => "barrel 7.07 layout",
            Self::Barrel709 => "barrel 7.09 layout",
            Self::Endcap717 => "end-cap 7.17 layout",
            Self::Combined707 => "combined 7.07+7.17 layout",
            Self::Combined709 => "combined 7.09+7.17 layout",
            Self::Barrel811 => "barrel 8.11 layout",
        };
        write!(f, "{name} (version {})", self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_all_historical_selectors() {
        for v in GeometryVersion::ALL {
            assert_eq!(GeometryVersion::from_raw(v.raw()), Ok(v));
        }
    }

    #[test]
    fn from_raw_rejects_everything_else() {
        for raw in [-1, 7, 8, 9, 11, 100, i32::MIN, i32::MAX] {
            assert_eq!(
                GeometryVersion::from_raw(raw),
                Err(GeomError::UnknownVersion { raw }),
            );
        }
    }

    #[test]
    fn endcap_layouts() {
        assert!(GeometryVersion::Endcap717.has_endcap());
        assert!(GeometryVersion::Combined707.has_endcap());
        assert!(GeometryVersion::Combined709.has_endcap());
        assert!(!GeometryVersion::Barrel705.has_endcap());
        assert!(!GeometryVersion::Barrel811.has_endcap());
    }
}
