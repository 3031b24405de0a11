//! # Id
//!
//! Identifier for registered points.
//!
//! Format: 32 bits, unsigned, native byte order on disk.
//! - Assigned by the caller on insert, or sequentially by the generator
//! - Immutable once attached to a `RefPoint`
//! - Doubles as the registry key

/// Identifier of a reference point
///
/// `repr(transparent)` keeps the in-memory layout identical to `u32`,
/// which the binary codec relies on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct Id(u32);

impl Id {
    /// Width of an id in bytes
    pub const SIZE: usize = std::mem::size_of::<u32>();

    /// Create an Id from a raw value
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Native-endian bytes
    pub fn to_ne_bytes(self) -> [u8; Self::SIZE] {
        self.0.to_ne_bytes()
    }

    /// Rebuild from native-endian bytes
    pub fn from_ne_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self(u32::from_ne_bytes(bytes))
    }
}

impl From<u32> for Id {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Id> for u32 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl std::str::FromStr for Id {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
