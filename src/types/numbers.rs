// Copyright (c) 2024 Mike Tsao

//! Numeric types used throughout the system.

use core::fmt;

/// The primitive Rust type of a single audio sample.
pub type SampleType = f64;

/// [Sample] represents a single-channel audio sample, nominally within
/// -1.0..=1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Sample(pub SampleType);
impl Sample {
    /// The [SampleType] value of silence.
    pub const SILENCE_VALUE: SampleType = 0.0;
    /// A [Sample] that is silent.
    pub const SILENCE: Sample = Sample(Self::SILENCE_VALUE);
    /// The maximum positive [SampleType] value.
    pub const MAX_VALUE: SampleType = 1.0;
    /// A [Sample] having the maximum positive value.
    pub const MAX: Sample = Sample(Self::MAX_VALUE);
    /// The maximum negative [SampleType] value.
    pub const MIN_VALUE: SampleType = -1.0;
    /// A [Sample] having the maximum negative value.
    pub const MIN: Sample = Sample(Self::MIN_VALUE);
}
impl From<f64> for Sample {
    fn from(value: f64) -> Self {
        Sample(value)
    }
}
impl From<f32> for Sample {
    fn from(value: f32) -> Self {
        Sample(value as SampleType)
    }
}

/// [StereoSample] is a two-channel sample, otherwise known as a frame. In a
/// tone fixture the left channel carries the sine and the right carries the
/// cosine.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct StereoSample(pub Sample, pub Sample);
impl StereoSample {
    /// Silence (0.0).
    pub const SILENCE: StereoSample = StereoSample(Sample::SILENCE, Sample::SILENCE);
    /// The loudest positive value (1.0).
    pub const MAX: StereoSample = StereoSample(Sample::MAX, Sample::MAX);
    /// The loudest negative value (-1.0).
    pub const MIN: StereoSample = StereoSample(Sample::MIN, Sample::MIN);

    /// Creates a new [StereoSample] from left and right [Sample]s.
    pub fn new(left: Sample, right: Sample) -> Self {
        Self(left, right)
    }

    /// The channels in interleaved (left, right) order.
    pub fn channels(&self) -> [Sample; 2] {
        [self.0, self.1]
    }
}
impl From<Sample> for StereoSample {
    fn from(value: Sample) -> Self {
        Self(value, value)
    }
}

/// Cycles per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct FrequencyHz(pub f64);
impl fmt::Display for FrequencyHz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:.0}Hz", self.0))
    }
}
impl From<f64> for FrequencyHz {
    fn from(value: f64) -> Self {
        Self(value)
    }
}
impl From<FrequencyHz> for f64 {
    fn from(value: FrequencyHz) -> Self {
        value.0
    }
}
