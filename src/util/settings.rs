// Copyright (c) 2024 Mike Tsao

//! Configuration for fixture generation. Intended to be serialized.

use crate::types::BitDepth;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// What [generate_all()](crate::fixtures::ToneFixtureGenerator::generate_all)
/// does after one bit depth fails.
#[derive(
    Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abandon the run; later bit depths are not attempted.
    #[default]
    StopOnFirstFailure,
    /// Attempt every bit depth and report all failures at the end.
    ContinueOnFailure,
}

/// Which fixtures to write, and where.
#[derive(Clone, Debug, Derivative, PartialEq, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(rename_all = "kebab-case")]
pub struct FixtureSettings {
    /// Directory that receives the WAV files.
    #[derivative(Default(value = "PathBuf::from(\".\")"))]
    #[serde(default = "FixtureSettings::default_output_dir")]
    pub output_dir: PathBuf,

    /// Generated in this order.
    #[derivative(Default(value = "BitDepth::iter().collect()"))]
    #[serde(default = "FixtureSettings::default_bit_depths")]
    pub bit_depths: Vec<BitDepth>,

    /// See [FailurePolicy].
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}
impl FixtureSettings {
    fn default_output_dir() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_bit_depths() -> Vec<BitDepth> {
        BitDepth::iter().collect()
    }

    /// Settings that write every fixture into `output_dir`.
    pub fn new_with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }
}
