// Copyright (c) 2024 Mike Tsao

use super::{riff, FixtureError};
use crate::prelude::*;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tempfile::NamedTempFile;

/// Writes [QuadratureTone]s as stereo integer-PCM WAV files, one per
/// [BitDepth].
#[derive(Debug, Default)]
pub struct ToneFixtureGenerator {
    settings: FixtureSettings,
    tone: QuadratureTone,
}
impl ToneFixtureGenerator {
    /// The number of channels in every fixture.
    pub const CHANNELS: u16 = 2;

    /// A generator for the standard 400Hz fixture tone.
    pub fn new_with(settings: FixtureSettings) -> Self {
        Self {
            settings,
            tone: QuadratureTone::default(),
        }
    }

    /// A generator for an arbitrary tone.
    pub fn new_with_tone(settings: FixtureSettings, tone: QuadratureTone) -> Self {
        Self { settings, tone }
    }

    #[allow(missing_docs)]
    pub fn settings(&self) -> &FixtureSettings {
        &self.settings
    }

    #[allow(missing_docs)]
    pub fn tone(&self) -> &QuadratureTone {
        &self.tone
    }

    /// The file name for the fixture at `bit_depth`, such as
    /// `400Hz-16bit.wav`.
    pub fn file_name(&self, bit_depth: BitDepth) -> String {
        format!("{}-{}bit.wav", self.tone.frequency(), bit_depth.bits())
    }

    /// Where the fixture at `bit_depth` is written.
    pub fn path(&self, bit_depth: BitDepth) -> PathBuf {
        self.settings.output_dir.join(self.file_name(bit_depth))
    }

    /// The container parameters for `bit_depth`.
    pub fn wav_spec(&self, bit_depth: BitDepth) -> Result<hound::WavSpec, FixtureError> {
        let sample_rate = u32::try_from(self.tone.sample_rate())
            .map_err(|e| FixtureError::Encoding {
                bit_depth,
                source: io::Error::new(io::ErrorKind::InvalidInput, e),
            })?;
        Ok(hound::WavSpec {
            channels: Self::CHANNELS,
            sample_rate,
            bits_per_sample: bit_depth.bits(),
            sample_format: hound::SampleFormat::Int,
        })
    }

    /// The raw interleaved PCM data: each frame's sine then cosine, each
    /// quantized and encoded little-endian. This is exactly the payload of
    /// the WAV file's data chunk.
    pub fn pcm_body(&self, bit_depth: BitDepth) -> Result<Vec<u8>, FixtureError> {
        let encoding_error = |source: io::Error| FixtureError::Encoding { bit_depth, source };
        let profile = bit_depth.profile();
        let mut body = Vec::with_capacity(
            self.tone.frame_count()
                * Self::CHANNELS as usize
                * profile.bytes_per_sample as usize,
        );
        for frame in self.tone.frames() {
            for sample in frame.channels() {
                profile
                    .encode(profile.quantize(sample), &mut body)
                    .map_err(encoding_error)?;
            }
        }
        Ok(body)
    }

    /// Renders the complete WAV file for `bit_depth` into memory: the
    /// 44-byte PCM header followed by [pcm_body()](Self::pcm_body).
    pub fn encode(&self, bit_depth: BitDepth) -> Result<Vec<u8>, FixtureError> {
        let encoding_error = |source: io::Error| FixtureError::Encoding { bit_depth, source };
        let spec = self.wav_spec(bit_depth)?;
        let body = self.pcm_body(bit_depth)?;
        let data_len = u32::try_from(body.len())
            .map_err(|e| encoding_error(io::Error::new(io::ErrorKind::InvalidInput, e)))?;

        let mut image = Vec::with_capacity(riff::PCM_HEADER_LEN + body.len());
        riff::write_pcm_header(&spec, data_len, &mut image).map_err(encoding_error)?;
        image.extend_from_slice(&body);

        log::debug!("encoded {bit_depth} fixture: {} bytes", image.len());
        Ok(image)
    }

    /// Writes the fixture for `bits`, which must be 8, 16, 24, or 32.
    /// Unsupported values fail before anything touches the disk.
    pub fn generate(&self, bits: u16) -> Result<PathBuf, FixtureError> {
        self.generate_depth(BitDepth::try_from(bits)?)
    }

    /// Writes the fixture for `bit_depth`, replacing any existing file.
    ///
    /// The file appears only once it is complete. It's staged under a
    /// temporary name in the output directory and then renamed into place;
    /// if anything fails, the temporary file is removed and any previous
    /// fixture is left untouched.
    pub fn generate_depth(&self, bit_depth: BitDepth) -> Result<PathBuf, FixtureError> {
        let image = self.encode(bit_depth)?;
        let path = self.path(bit_depth);
        let write_error = |source: std::io::Error| FixtureError::FileWriteFailure {
            bit_depth,
            path: path.clone(),
            source,
        };

        let mut file = NamedTempFile::new_in(&self.settings.output_dir).map_err(write_error)?;
        file.write_all(&image).map_err(write_error)?;
        file.flush().map_err(write_error)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(write_error)?;
        }
        file.persist(&path).map_err(|e| write_error(e.error))?;

        log::info!("wrote {}", path.display());
        Ok(path)
    }

    /// Writes every configured fixture, in order, following the configured
    /// [FailurePolicy].
    pub fn generate_all(&self) -> GenerationReport {
        let mut report = GenerationReport::default();
        for &bit_depth in &self.settings.bit_depths {
            match self.generate_depth(bit_depth) {
                Ok(path) => report.generated.push((bit_depth, path)),
                Err(e) => {
                    report.failures.push(e);
                    match self.settings.failure_policy {
                        FailurePolicy::StopOnFirstFailure => break,
                        FailurePolicy::ContinueOnFailure => {
                            log::warn!("{bit_depth} fixture failed; continuing");
                        }
                    }
                }
            }
        }
        report
    }
}

/// The outcome of [ToneFixtureGenerator::generate_all()].
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Fixtures that were written, in the order they were written.
    pub generated: Vec<(BitDepth, PathBuf)>,
    /// Fixtures that weren't.
    pub failures: Vec<FixtureError>,
}
impl GenerationReport {
    /// Whether every attempted fixture was written.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Logs every failure once, with its underlying cause.
    pub fn log_failures(&self) {
        for e in &self.failures {
            match std::error::Error::source(e) {
                Some(source) => log::error!("{e}: {source}"),
                None => log::error!("{e}"),
            }
        }
    }

    /// A one-line account of how many attempted fixtures failed, or `None`
    /// if none did. The individual errors are not repeated.
    pub fn failure_summary(&self) -> Option<String> {
        if self.is_success() {
            return None;
        }
        Some(format!(
            "{} of {} attempted fixtures failed",
            self.failures.len(),
            self.failures.len() + self.generated.len()
        ))
    }

    /// The written paths, or the first failure.
    pub fn into_result(self) -> Result<Vec<PathBuf>, FixtureError> {
        if let Some(e) = self.failures.into_iter().next() {
            return Err(e);
        }
        Ok(self.generated.into_iter().map(|(_, path)| path).collect())
    }
}
