// Copyright (c) 2024 Mike Tsao

use crate::prelude::*;
use core::f64::consts::PI;
use derivative::Derivative;
use derive_builder::Builder;

/// A fixed-length stereo tone whose left channel is a sine and whose right
/// channel is a cosine of the same phase.
///
/// Each frame's phase is computed from its index rather than accumulated, so
/// rendering the same tone twice yields bit-identical samples.
#[derive(Clone, Builder, Debug, Derivative, PartialEq)]
#[derivative(Default)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct QuadratureTone {
    /// Hertz. Any positive number.
    #[derivative(Default(value = "FrequencyHz(400.0)"))]
    #[builder(setter(into))]
    frequency: FrequencyHz,

    /// Frames per second.
    #[derivative(Default(value = "SampleRate::DEFAULT"))]
    #[builder(setter(into))]
    sample_rate: SampleRate,

    /// How many frames the tone lasts. Frame indices run `0..frame_count`.
    #[derivative(Default(value = "101"))]
    frame_count: usize,
}
impl QuadratureToneBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(frequency) = self.frequency {
            if frequency.0.is_nan() || frequency.0 <= 0.0 {
                return Err(format!("frequency must be positive, got {}", frequency.0));
            }
        }
        if self.frame_count == Some(0) {
            return Err("frame count must be nonzero".to_string());
        }
        Ok(())
    }
}
impl QuadratureTone {
    #[allow(missing_docs)]
    pub fn frequency(&self) -> FrequencyHz {
        self.frequency
    }

    #[allow(missing_docs)]
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    #[allow(missing_docs)]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// The phase, in radians, of the frame at `index`.
    pub fn phase(&self, index: usize) -> f64 {
        index as f64 * 2.0 * PI * self.frequency.0 / f64::from(self.sample_rate)
    }

    /// The (sine, cosine) frame at `index`.
    pub fn frame(&self, index: usize) -> StereoSample {
        let phase = self.phase(index);
        StereoSample(Sample(phase.sin()), Sample(phase.cos()))
    }

    /// All frames, in order.
    pub fn frames(&self) -> impl Iterator<Item = StereoSample> + '_ {
        (0..self.frame_count).map(|i| self.frame(i))
    }
}
