//! Packed file header with two enum sub-fields
//!
//! Layout of the four header bytes, by offset:
//!
//! | offset | view |
//! |---|---|
//! | 0..2 | low 16 bits of the header (opaque) |
//! | 2 | [`Ownership`] |
//! | 3 | [`Attributes`] |
//!
//! On a little-endian target this matches
//! `(attributes << 24) | (ownership << 16) | low`.

use std::fmt;

use bitflags::bitflags;

use crate::error::OverlayError;

const OWNERSHIP_OFFSET: usize = 2;
const ATTRIBUTES_OFFSET: usize = 3;

/// Who owns a file. Closed set, values 0 to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Ownership {
    None = 0,
    User = 1,
    System = 2,
    Administrator = 3,
    Network = 4,
    Domain = 5,
    Creator = 6,
    Editor = 7,
}

impl Ownership {
    pub const ALL: [Ownership; 8] = [
        Ownership::None,
        Ownership::User,
        Ownership::System,
        Ownership::Administrator,
        Ownership::Network,
        Ownership::Domain,
        Ownership::Creator,
        Ownership::Editor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Ownership::None => "None",
            Ownership::User => "User",
            Ownership::System => "System",
            Ownership::Administrator => "Administrator",
            Ownership::Network => "Network",
            Ownership::Domain => "Domain",
            Ownership::Creator => "Creator",
            Ownership::Editor => "Editor",
        }
    }
}

impl TryFrom<u8> for Ownership {
    type Error = OverlayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ownership::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(OverlayError::UnknownOwnership(value))
    }
}

impl From<Ownership> for u8 {
    fn from(value: Ownership) -> Self {
        value as u8
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Independent file attribute bits. Every byte value is a valid set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Attributes: u8 {
        const READ_ONLY  = 1 << 0;
        const ARCHIVE    = 1 << 1;
        const COMPRESSED = 1 << 2;
        const HIDDEN     = 1 << 3;
        const SYSTEM     = 1 << 4;
        const ENCRYPTED  = 1 << 5;
        const INDEXED    = 1 << 6;
        const TEMPORARY  = 1 << 7;
    }
}

impl Attributes {
    pub const NONE: Self = Self::empty();

    const LABELS: [(Attributes, &'static str); 8] = [
        (Attributes::READ_ONLY, "ReadOnly"),
        (Attributes::ARCHIVE, "Archive"),
        (Attributes::COMPRESSED, "Compressed"),
        (Attributes::HIDDEN, "Hidden"),
        (Attributes::SYSTEM, "System"),
        (Attributes::ENCRYPTED, "Encrypted"),
        (Attributes::INDEXED, "Indexed"),
        (Attributes::TEMPORARY, "Temporary"),
    ];
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let labels: Vec<&str> = Self::LABELS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, label)| *label)
            .collect();
        f.write_str(&labels.join(", "))
    }
}

/// A `u32` header with ownership and attribute bytes carved out of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileHeader {
    bytes: [u8; 4],
}

impl FileHeader {
    pub const fn from_u32(header: u32) -> Self {
        Self {
            bytes: header.to_ne_bytes(),
        }
    }

    /// Compose `(attributes << 24) | (ownership << 16) | low` as a native `u32`
    pub fn from_parts(attributes: Attributes, ownership: Ownership, low: u16) -> Self {
        let header = (u32::from(attributes.bits()) << 24)
            | (u32::from(u8::from(ownership)) << 16)
            | u32::from(low);
        Self::from_u32(header)
    }

    pub const fn as_u32(&self) -> u32 {
        u32::from_ne_bytes(self.bytes)
    }

    /// Raw byte at offset 2
    pub const fn ownership_byte(&self) -> u8 {
        self.bytes[OWNERSHIP_OFFSET]
    }

    /// Raw byte at offset 3
    pub const fn attributes_byte(&self) -> u8 {
        self.bytes[ATTRIBUTES_OFFSET]
    }

    pub fn ownership(&self) -> Result<Ownership, OverlayError> {
        Ownership::try_from(self.ownership_byte())
    }

    pub fn attributes(&self) -> Attributes {
        Attributes::from_bits_retain(self.attributes_byte())
    }

    pub fn set_ownership(&mut self, ownership: Ownership) {
        self.bytes[OWNERSHIP_OFFSET] = ownership.into();
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.bytes[ATTRIBUTES_OFFSET] = attributes.bits();
    }

    pub fn set_u32(&mut self, header: u32) {
        self.bytes = header.to_ne_bytes();
    }
}
