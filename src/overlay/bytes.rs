/// Four independent bytes sharing storage with one `u32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FourBytes {
    bytes: [u8; 4],
}

impl FourBytes {
    /// `a` lands at offset 0, `d` at offset 3
    pub const fn from_bytes(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            bytes: [a, b, c, d],
        }
    }

    pub const fn from_u32(value: u32) -> Self {
        Self {
            bytes: value.to_ne_bytes(),
        }
    }

    pub const fn a(&self) -> u8 {
        self.bytes[0]
    }

    pub const fn b(&self) -> u8 {
        self.bytes[1]
    }

    pub const fn c(&self) -> u8 {
        self.bytes[2]
    }

    pub const fn d(&self) -> u8 {
        self.bytes[3]
    }

    pub const fn bytes(&self) -> [u8; 4] {
        self.bytes
    }

    /// Native-endian assembly of the four bytes
    pub const fn as_u32(&self) -> u32 {
        u32::from_ne_bytes(self.bytes)
    }

    /// Overwrite the byte at `index` (0..4). Out of range indices are ignored.
    pub fn set_byte(&mut self, index: usize, value: u8) {
        if let Some(slot) = self.bytes.get_mut(index) {
            *slot = value;
        }
    }

    pub fn set_u32(&mut self, value: u32) {
        self.bytes = value.to_ne_bytes();
    }
}

impl From<u32> for FourBytes {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<[u8; 4]> for FourBytes {
    fn from(bytes: [u8; 4]) -> Self {
        Self { bytes }
    }
}
