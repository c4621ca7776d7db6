// Copyright (c) 2024 Mike Tsao

use crate::types::BitDepth;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while producing a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The requested width has no [QuantizationProfile](crate::types::QuantizationProfile).
    #[error("unsupported bit depth {0}; expected 8, 16, 24, or 32")]
    UnsupportedBitDepth(u16),

    /// The in-memory WAV image couldn't be built, for example because the
    /// sample rate or data length doesn't fit the header's 32-bit fields.
    #[error("couldn't encode {bit_depth} WAV data")]
    Encoding {
        /// The fixture being encoded.
        bit_depth: BitDepth,
        /// What went wrong.
        #[source]
        source: std::io::Error,
    },

    /// The fixture couldn't be written to disk. Nothing was left at `path`.
    #[error("couldn't write {bit_depth} fixture to {}", path.display())]
    FileWriteFailure {
        /// The fixture being written.
        bit_depth: BitDepth,
        /// Where it was headed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
impl FixtureError {
    /// The bit depth that was being generated when this error happened.
    /// Unsupported depths report the raw value that was asked for.
    pub fn bits(&self) -> u16 {
        match self {
            FixtureError::UnsupportedBitDepth(bits) => *bits,
            FixtureError::Encoding { bit_depth, .. }
            | FixtureError::FileWriteFailure { bit_depth, .. } => bit_depth.bits(),
        }
    }
}
