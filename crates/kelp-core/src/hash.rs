//! Identifier hashing.
//!
//! Member tables store the hash of every name next to the name itself, so a
//! lookup compares one integer per entry and only falls back to a string
//! comparison on a hash hit.

/// Precomputed hash of an identifier.
///
/// Equal names always have equal hashes; the converse does not hold.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct NameHash(u32);

impl NameHash {
    /// Hash a name.
    #[inline]
    pub fn of(name: &str) -> Self {
        name_hash(name)
    }

    /// Raw value for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a hash from a raw value. Use only for deserialization.
    #[inline]
    pub fn from_raw(value: u32) -> Self {
        Self(value)
    }
}

/// Hash an identifier with the djb2 scheme (`h * 33 + byte`, seeded with 5381).
pub fn name_hash(name: &str) -> NameHash {
    let hash = name
        .bytes()
        .fold(5381u32, |h, b| h.wrapping_mul(33).wrapping_add(u32::from(b)));
    NameHash(hash)
}
