// Copyright (c) 2024 Mike Tsao

//! Handles digital-audio time.

use core::num::TryFromIntError;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use synonym::Synonym;

/// Samples per second. Always a positive integer; cannot be zero.
#[derive(Synonym, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[synonym(skip(Default))]
#[serde(rename_all = "kebab-case")]
pub struct SampleRate(#[derivative(Default(value = "8000"))] pub usize);
#[allow(missing_docs)]
impl SampleRate {
    pub const DEFAULT_SAMPLE_RATE: usize = 8000;
    pub const DEFAULT: SampleRate = SampleRate::new(Self::DEFAULT_SAMPLE_RATE);

    pub const fn new(value: usize) -> Self {
        if value != 0 {
            Self(value)
        } else {
            Self(Self::DEFAULT_SAMPLE_RATE)
        }
    }
}
impl From<SampleRate> for f64 {
    fn from(value: SampleRate) -> Self {
        value.0 as f64
    }
}
impl TryFrom<SampleRate> for u32 {
    type Error = TryFromIntError;

    fn try_from(value: SampleRate) -> Result<Self, Self::Error> {
        u32::try_from(value.0)
    }
}
