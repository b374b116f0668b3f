//! The decoded crystal address.

use std::fmt;

/// Flat address of one physical crystal, decoded from the hierarchical
/// volume copy numbers by the resolver.
///
/// - `crystal_type` groups crystals of the same shape (1-based).
/// - `crystal_copy` is a scheme-specific intermediate index.
/// - `crystal_id` uniquely identifies one crystal within the layout's
///   documented closed range.
///
/// Fields are plain `i32` rather than newtypes: an invalid decode
/// legitimately produces out-of-range values that must survive untouched
/// to diagnostics (and, under lenient validation, to downstream output).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CrystalAddress {
    /// Geometry category of the crystal (shape class), 1-based.
    pub crystal_type: i32,
    /// Scheme-specific intermediate copy index, 1-based.
    pub crystal_copy: i32,
    /// Dense unique crystal identifier.
    pub crystal_id: i32,
}

impl CrystalAddress {
    /// The all-zero address a failed decode leaves behind.
    ///
    /// Never a valid crystal in any layout; every layout's id range
    /// starts at 1 or above.
    pub const NULL: CrystalAddress = CrystalAddress {
        crystal_type: 0,
        crystal_copy: 0,
        crystal_id: 0,
    };

    /// Construct from the three components.
    pub const fn new(crystal_type: i32, crystal_copy: i32, crystal_id: i32) -> Self {
        Self {
            crystal_type,
            crystal_copy,
            crystal_id,
        }
    }
}

impl fmt::Display for CrystalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type {} copy {} id {}",
            self.crystal_type, self.crystal_copy, self.crystal_id
        )
    }
}
