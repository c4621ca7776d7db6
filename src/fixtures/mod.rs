// Copyright (c) 2024 Mike Tsao

//! Writing tone fixtures to disk.
//!
//! A fixture is a short WAV file holding a stereo tone: sine on the left,
//! cosine on the right. One file is written per [BitDepth](crate::types::BitDepth),
//! all from the same tone, so a decoder can be checked against known values
//! at every integer width.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{FixtureError, GenerationReport, ToneFixtureGenerator};
}

pub use {
    error::FixtureError,
    generator::{GenerationReport, ToneFixtureGenerator},
};

mod error;
mod generator;
pub mod riff;
