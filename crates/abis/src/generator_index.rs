//! Hash domain separators

/// Separates the hash domains of the rollup's commitments. The value is
/// passed as the `hash_index` of every compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum GeneratorIndex {
    VerificationKey = 11,
    GlobalVariables = 26,
    BlockHash = 28,
}

impl GeneratorIndex {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl From<GeneratorIndex> for u32 {
    fn from(index: GeneratorIndex) -> u32 {
        index.as_u32()
    }
}
