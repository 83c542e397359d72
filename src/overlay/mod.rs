//! Fixed-size values viewed through several typed lenses
//!
//! Every type here owns a single byte array and nothing else. Each view is
//! read from, or written into, that array, so a write through one view is
//! visible through all the others.
//!
//! # Portability
//!
//! Multi-byte views use the platform's native byte order. On a
//! little-endian target `FourBytes::from_bytes(0x11, 0x22, 0x33, 0x44)`
//! reads as `0x4433_2211`; on a big-endian target it reads as
//! `0x1122_3344`. The same applies to the byte offsets used by
//! [`FileHeader`]. Nothing in this module normalizes the order.

mod boolean;
mod bytes;
mod float;
mod header;
mod sizes;

pub use boolean::BoolByte;
pub use bytes::FourBytes;
pub use float::{DoubleBits, FloatBits};
pub use header::{Attributes, FileHeader, Ownership};
pub use sizes::{primitive_sizes, PrimitiveSize};
