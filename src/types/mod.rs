// Copyright (c) 2024 Mike Tsao

//! Common data types used throughout the system.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{
        BitDepth, FrequencyHz, QuantizationProfile, Sample, SampleRate, SampleType, StereoSample,
    };
}

pub use {
    depth::{BitDepth, QuantizationProfile},
    numbers::{FrequencyHz, Sample, SampleType, StereoSample},
    time::SampleRate,
};

mod depth;
mod numbers;
mod time;
