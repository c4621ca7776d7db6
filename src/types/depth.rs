// Copyright (c) 2024 Mike Tsao

//! Integer sample formats and the quantization that maps [Sample]s into them.

use crate::{fixtures::FixtureError, types::Sample};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// The PCM sample widths a fixture can be written at.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumCount,
    EnumIter,
    Eq,
    Hash,
    IntoStaticStr,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub enum BitDepth {
    /// Unsigned 8-bit, centered at 128
    #[strum(to_string = "8-bit")]
    Eight,
    /// Signed 16-bit
    #[strum(to_string = "16-bit")]
    Sixteen,
    /// Signed 24-bit, packed into three bytes
    #[strum(to_string = "24-bit")]
    TwentyFour,
    /// Signed 32-bit
    #[strum(to_string = "32-bit")]
    ThirtyTwo,
}
impl BitDepth {
    /// Bits per sample.
    pub const fn bits(&self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
            BitDepth::ThirtyTwo => 32,
        }
    }

    /// Bytes per sample.
    pub const fn bytes_per_sample(&self) -> u16 {
        self.bits() / 8
    }

    /// The quantization rules for this width.
    pub const fn profile(&self) -> &'static QuantizationProfile {
        match self {
            BitDepth::Eight => &QuantizationProfile::U8,
            BitDepth::Sixteen => &QuantizationProfile::I16,
            BitDepth::TwentyFour => &QuantizationProfile::I24,
            BitDepth::ThirtyTwo => &QuantizationProfile::I32,
        }
    }
}
impl TryFrom<u16> for BitDepth {
    type Error = FixtureError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            24 => Ok(BitDepth::TwentyFour),
            32 => Ok(BitDepth::ThirtyTwo),
            _ => Err(FixtureError::UnsupportedBitDepth(value)),
        }
    }
}
impl From<BitDepth> for u16 {
    fn from(value: BitDepth) -> Self {
        value.bits()
    }
}

/// Describes how a [Sample] becomes a fixed-width integer.
///
/// The value is scaled, saturated to `clamp_min..=clamp_max`, shifted by
/// `offset`, and only then truncated toward zero. Unsigned formats carry a
/// nonzero offset so that silence lands mid-range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantizationProfile {
    /// Width of one encoded sample.
    pub bytes_per_sample: u16,
    /// Whether the encoded value is two's complement.
    pub signed: bool,
    /// Multiplier applied to the [Sample] value.
    pub scale: f64,
    /// Lowest scaled value before the offset.
    pub clamp_min: f64,
    /// Highest scaled value before the offset.
    pub clamp_max: f64,
    /// Added after clamping.
    pub offset: f64,
}
impl QuantizationProfile {
    /// Unsigned 8-bit.
    pub const U8: Self = Self {
        bytes_per_sample: 1,
        signed: false,
        scale: 128.0,
        clamp_min: -128.0,
        clamp_max: 127.0,
        offset: 128.0,
    };
    /// Signed 16-bit.
    pub const I16: Self = Self {
        bytes_per_sample: 2,
        signed: true,
        scale: 32_768.0,
        clamp_min: -32_768.0,
        clamp_max: 32_767.0,
        offset: 0.0,
    };
    /// Signed 24-bit.
    pub const I24: Self = Self {
        bytes_per_sample: 3,
        signed: true,
        scale: 8_388_608.0,
        clamp_min: -8_388_608.0,
        clamp_max: 8_388_607.0,
        offset: 0.0,
    };
    /// Signed 32-bit.
    pub const I32: Self = Self {
        bytes_per_sample: 4,
        signed: true,
        scale: 2_147_483_648.0,
        clamp_min: -2_147_483_648.0,
        clamp_max: 2_147_483_647.0,
        offset: 0.0,
    };

    /// Maps a sample to its encoded integer value. Out-of-range samples
    /// saturate rather than wrap.
    pub fn quantize(&self, sample: Sample) -> i32 {
        // `as` truncates toward zero for the in-range values produced here.
        ((sample.0 * self.scale).clamp(self.clamp_min, self.clamp_max) + self.offset) as i32
    }

    /// The smallest encoded value.
    pub fn min_encoded(&self) -> i64 {
        (self.clamp_min + self.offset) as i64
    }

    /// The largest encoded value.
    pub fn max_encoded(&self) -> i64 {
        (self.clamp_max + self.offset) as i64
    }

    /// Appends `value` as `bytes_per_sample` little-endian bytes.
    pub fn encode(&self, value: i32, out: &mut impl Write) -> io::Result<()> {
        match self.bytes_per_sample {
            1 => out.write_u8(value as u8),
            2 => out.write_i16::<LittleEndian>(value as i16),
            3 => out.write_i24::<LittleEndian>(value),
            _ => out.write_i32::<LittleEndian>(value),
        }
    }
}
