// Copyright (c) 2024 Mike Tsao

#![deny(missing_docs, unused_imports, unused_variables)]
#![allow(rustdoc::private_intra_doc_links)]

//! Tone fixtures are small WAV files for testing audio decoders.
//!
//! Each fixture holds the same 101-frame, 400Hz stereo tone at 8000Hz: the
//! left channel is a sine and the right channel is a cosine of the same
//! phase. One file is written per [BitDepth](types::BitDepth) (8, 16, 24,
//! and 32 bits), so a decoder's output can be compared against values that
//! are easy to compute independently.
//!
//! * *Easiest*: run the `tone-fixtures` binary, which writes
//! `400Hz-8bit.wav`, `400Hz-16bit.wav`, `400Hz-24bit.wav`, and
//! `400Hz-32bit.wav` into the current directory.
//! * *From code*: build a [ToneFixtureGenerator] from
//! [FixtureSettings](util::FixtureSettings) and call
//! [generate()](ToneFixtureGenerator::generate) or
//! [generate_all()](ToneFixtureGenerator::generate_all).
//! * *Without touching the disk*: use
//! [encode()](ToneFixtureGenerator::encode) for a complete WAV image, or
//! [pcm_body()](ToneFixtureGenerator::pcm_body) for just the sample data.

/// A collection of imports that are useful to users of this crate. `use
/// tone_fixtures::prelude::*;` for easier onboarding.
pub mod prelude {
    pub use super::{
        elements::prelude::*, fixtures::prelude::*, types::prelude::*, util::prelude::*,
    };
}

pub use fixtures::{FixtureError, ToneFixtureGenerator};

pub mod elements;
pub mod fixtures;
pub mod types;
pub mod util;
