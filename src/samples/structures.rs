use std::f64::consts::E;

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use crate::{
    overlay::{
        primitive_sizes, Attributes, BoolByte, DoubleBits, FileHeader, FloatBits, FourBytes,
        Ownership,
    },
    report::SampleReport,
    rng::SampleRng,
    runner::{Sample, SampleContext},
};

/// Worked examples of values that share storage between typed views
pub struct StructureSample;

impl StructureSample {
    pub const NAME: &'static str = "structures";

    /// Low 16 bits stamped into every generated header
    const HEADER_LOW: u16 = 0x5678;

    pub fn new() -> Self {
        Self
    }

    fn compose_bytes(report: &mut SampleReport) {
        report.section("Compose bytes into int");

        let from_bytes = FourBytes::from_bytes(0x11, 0x22, 0x33, 0x44);
        report.line(format!(
            "We have four bytes (0x{:02X}, 0x{:02X}, 0x{:02X}, 0x{:02X}), we composed them into an integer (0x{:08X}).",
            from_bytes.a(),
            from_bytes.b(),
            from_bytes.c(),
            from_bytes.d(),
            from_bytes.as_u32()
        ));

        let from_int = FourBytes::from_u32(0xFFEE_DDAA);
        report.line(format!(
            "We have an integer (0x{:08X}) we divided into four bytes (0x{:02X}, 0x{:02X}, 0x{:02X}, 0x{:02X}).",
            from_int.as_u32(),
            from_int.a(),
            from_int.b(),
            from_int.c(),
            from_int.d()
        ));
    }

    fn float_bits(report: &mut SampleReport) {
        report.section("Convert float to uint");

        let mut value = FloatBits::from_f32(3.1415926);
        report.line(format!(
            "We have a float ({}) we can show as uint (in hex) = (0x{:08X}).",
            value.as_f32(),
            value.as_u32()
        ));

        // pi in IEEE-754 single precision, rounded down one ulp
        value.set_u32(0x4049_0FDA);
        report.line(format!(
            "We have an uint (in hex) = (0x{:08X}) we can show as float = ({}).",
            value.as_u32(),
            value.as_f32()
        ));
    }

    fn double_bits(report: &mut SampleReport) {
        report.section("Convert double to ulong");

        let mut value = DoubleBits::from_f64(E);
        report.line(format!(
            "We have a double ({}) we can show as ulong (in hex) = (0x{:016X}).",
            value.as_f64(),
            value.as_u64()
        ));

        // pi in IEEE-754 double precision
        value.set_u64(0x4009_21FB_5444_2D18);
        report.line(format!(
            "We have an ulong (in hex) = (0x{:016X}) we can show as double = ({}).",
            value.as_u64(),
            value.as_f64()
        ));
    }

    fn header(report: &mut SampleReport, rng: &mut SampleRng<'_>) -> Result<()> {
        report.section("Enum in struct");

        let attributes = Attributes::from_bits_retain(rng.gen_range(1..255));
        let ownership = Ownership::try_from(rng.gen_range(1..255u8) % 8)?;
        debug!(%attributes, %ownership, "generated header fields");

        let header = FileHeader::from_parts(attributes, ownership, Self::HEADER_LOW);
        let ownership_label = match header.ownership() {
            Ok(ownership) => ownership.to_string(),
            Err(_) => format!("0x{:02X}", header.ownership_byte()),
        };
        report.line(format!(
            "We have a FileHeader (in hex) = (0x{:08X}), we can extract Attributes = ({}) and ownership = ({}).",
            header.as_u32(),
            header.attributes(),
            ownership_label
        ));
        Ok(())
    }

    fn bool_bytes(report: &mut SampleReport) {
        report.section("Boolean and bytes");

        let mut value = BoolByte::from_bool(false);
        for flag in [false, true] {
            value.set_bool(flag);
            report.line(format!(
                "We have a Bool Property = {}, we can convert to byte = 0x{:02X}.",
                value.as_bool(),
                value.as_u8()
            ));
        }
    }

    fn sizes(report: &mut SampleReport) {
        report.section("Primitive types sizes");
        for size in primitive_sizes() {
            report.line(format!(
                "Size of '{}' = {} bytes ({} bits)",
                size.name,
                size.bytes,
                size.bits()
            ));
        }
    }
}

impl Default for StructureSample {
    fn default() -> Self {
        Self::new()
    }
}

impl Sample for StructureSample {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&mut self, _ctx: &SampleContext, rng: &mut SampleRng<'_>) -> Result<SampleReport> {
        let mut report = SampleReport::new("StructSampleExecute");
        Self::compose_bytes(&mut report);
        Self::float_bits(&mut report);
        Self::double_bits(&mut report);
        Self::header(&mut report, rng)?;
        Self::bool_bytes(&mut report);
        Self::sizes(&mut report);
        Ok(report)
    }
}
