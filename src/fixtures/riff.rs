// Copyright (c) 2024 Mike Tsao

//! The canonical 44-byte RIFF/WAVE header: a 16-byte `fmt ` chunk tagged
//! `WAVE_FORMAT_PCM` at every sample width, followed by the `data` chunk
//! header. This is the layout most simple WAV writers produce, so fixtures
//! at 24 and 32 bits take the same decoder path as those at 8 and 16.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// Bytes before the first sample.
pub const PCM_HEADER_LEN: usize = 44;

/// The `fmt ` chunk's format tag for integer PCM.
pub const WAVE_FORMAT_PCM: u16 = 1;

const FMT_CHUNK_LEN: u32 = 16;

/// Writes the header for `data_len` bytes of interleaved samples laid out as
/// `spec` describes.
pub fn write_pcm_header(spec: &hound::WavSpec, data_len: u32, out: &mut impl Write) -> io::Result<()> {
    let block_align = spec.channels * spec.bits_per_sample.div_ceil(8);
    let byte_rate = spec
        .sample_rate
        .checked_mul(block_align as u32)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "byte rate overflows u32"))?;
    let riff_len = data_len
        .checked_add(PCM_HEADER_LEN as u32 - 8)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "RIFF length overflows u32"))?;

    out.write_all(b"RIFF")?;
    out.write_u32::<LittleEndian>(riff_len)?;
    out.write_all(b"WAVE")?;

    out.write_all(b"fmt ")?;
    out.write_u32::<LittleEndian>(FMT_CHUNK_LEN)?;
    out.write_u16::<LittleEndian>(WAVE_FORMAT_PCM)?;
    out.write_u16::<LittleEndian>(spec.channels)?;
    out.write_u32::<LittleEndian>(spec.sample_rate)?;
    out.write_u32::<LittleEndian>(byte_rate)?;
    out.write_u16::<LittleEndian>(block_align)?;
    out.write_u16::<LittleEndian>(spec.bits_per_sample)?;

    out.write_all(b"data")?;
    out.write_u32::<LittleEndian>(data_len)
}
