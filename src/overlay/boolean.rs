/// A `bool` and a `u8` sharing one byte
///
/// Any nonzero byte reads as `true`. Writing a `bool` stores `1` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoolByte {
    byte: u8,
}

impl BoolByte {
    pub const fn from_bool(value: bool) -> Self {
        Self { byte: value as u8 }
    }

    pub const fn from_u8(byte: u8) -> Self {
        Self { byte }
    }

    pub const fn as_bool(&self) -> bool {
        self.byte != 0
    }

    pub const fn as_u8(&self) -> u8 {
        self.byte
    }

    pub fn set_bool(&mut self, value: bool) {
        self.byte = value as u8;
    }

    pub fn set_u8(&mut self, byte: u8) {
        self.byte = byte;
    }
}
