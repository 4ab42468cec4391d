//! Read-only view over advertisement bytes handed in by the caller

/// Immutable, bounds-checked view over a raw advertisement payload.
///
/// Every accessor returns `None` instead of panicking when the requested
/// position lies outside the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPayload<'a> {
    bytes: &'a [u8],
}

impl<'a> RawPayload<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `index`, if present.
    pub fn at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Big-endian unsigned 16-bit value stored at `offset..offset + 2`.
    pub fn u16_be(&self, offset: usize) -> Option<u16> {
        let high = self.at(offset)?;
        let low = self.at(offset.checked_add(1)?)?;
        Some(u16::from_be_bytes([high, low]))
    }
}

impl<'a> From<&'a [u8]> for RawPayload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for RawPayload<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::new(bytes)
    }
}
