// Copyright (c) 2024 Mike Tsao

use more_asserts::assert_le;
use std::path::Path;
use strum::IntoEnumIterator;
use tempfile::TempDir;
use tone_fixtures::prelude::*;

fn generator_in(dir: &TempDir) -> ToneFixtureGenerator {
    ToneFixtureGenerator::new_with(FixtureSettings::new_with_output_dir(dir.path()))
}

fn read_samples(path: &Path) -> (hound::WavSpec, Vec<i32>) {
    let mut reader = hound::WavReader::open(path).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i32>().map(|s| s.unwrap()).collect();
    (spec, samples)
}

fn dir_entries(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

// Returns the declared data chunk length and the offset of its payload.
fn data_chunk(bytes: &[u8]) -> (usize, usize) {
    let mut pos = 12;
    while pos + 8 <= bytes.len() {
        let len = u32::from_le_bytes(bytes[pos + 4..pos + 8].try_into().unwrap()) as usize;
        if &bytes[pos..pos + 4] == b"data" {
            return (len, pos + 8);
        }
        pos += 8 + len + (len & 1);
    }
    panic!("no data chunk");
}

#[test]
fn generate_all_writes_four_fixtures() {
    let dir = TempDir::new().unwrap();
    let report = generator_in(&dir).generate_all();
    assert!(report.is_success());
    assert_eq!(
        report
            .generated
            .iter()
            .map(|(d, _)| *d)
            .collect::<Vec<_>>(),
        BitDepth::iter().collect::<Vec<_>>()
    );
    assert_eq!(
        dir_entries(&dir),
        vec![
            "400Hz-16bit.wav",
            "400Hz-24bit.wav",
            "400Hz-32bit.wav",
            "400Hz-8bit.wav"
        ]
    );
}

#[test]
fn file_sizes_match_frame_count() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);
    for bit_depth in BitDepth::iter() {
        let path = generator.generate_depth(bit_depth).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let (data_len, data_start) = data_chunk(&bytes);
        let expected = 101 * 2 * bit_depth.bytes_per_sample() as usize;
        assert_eq!(data_len, expected, "{bit_depth}");
        assert_eq!(bytes.len(), data_start + expected, "{bit_depth}");

        // Same plain PCM header at every width: 246, 448, 650, and 852 bytes.
        assert_eq!(data_start, 44, "{bit_depth}");
        assert_eq!(u16::from_le_bytes([bytes[20], bytes[21]]), 1, "{bit_depth}");
        assert_eq!(bytes.len(), 44 + 202 * bit_depth.bytes_per_sample() as usize);

        let (spec, samples) = read_samples(&path);
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, bit_depth.bits());
        assert_eq!(samples.len(), 202);
    }
}

#[test]
fn sixteen_bit_first_frame() {
    let dir = TempDir::new().unwrap();
    let path = generator_in(&dir).generate(16).unwrap();
    let (_, samples) = read_samples(&path);
    assert_eq!(samples[0], 0);
    assert_eq!(samples[1], 32767);

    // A quarter cycle later the sine peaks and the cosine crosses zero.
    assert_eq!(samples[10], 32767);
    assert_eq!(samples[11], 0);
}

#[test]
fn eight_bit_first_frame_raw_bytes() {
    let dir = TempDir::new().unwrap();
    let path = generator_in(&dir).generate(8).unwrap();
    let bytes = std::fs::read(path).unwrap();
    let (_, data_start) = data_chunk(&bytes);
    assert_eq!(bytes[data_start], 128);
    assert_eq!(bytes[data_start + 1], 255);
}

#[test]
fn decoded_values_stay_in_range() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);
    for bit_depth in BitDepth::iter() {
        let path = generator.generate_depth(bit_depth).unwrap();
        let (_, samples) = read_samples(&path);

        // hound decodes every width as signed, including 8-bit.
        let bits = bit_depth.bits() as u32;
        let max = ((1i64 << (bits - 1)) - 1) as i32;
        let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert_le!(peak as i64, max as i64 + 1, "{bit_depth}");
        assert_eq!(samples.iter().copied().max().unwrap(), max, "{bit_depth}");
    }
}

#[test]
fn generate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);
    for bit_depth in BitDepth::iter() {
        let path = generator.generate_depth(bit_depth).unwrap();
        let first = std::fs::read(&path).unwrap();
        generator.generate_depth(bit_depth).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first, "{bit_depth}");
        assert_eq!(first, generator.encode(bit_depth).unwrap());
    }
    assert_eq!(dir_entries(&dir).len(), 4);
}

#[test]
fn unsupported_bit_depth_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);
    for bits in [0, 4, 12, 33, 64] {
        assert!(matches!(
            generator.generate(bits),
            Err(FixtureError::UnsupportedBitDepth(b)) if b == bits
        ));
    }
    assert!(dir_entries(&dir).is_empty());
}

#[test]
fn existing_fixture_survives_unsupported_request() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir);
    std::fs::write(dir.path().join("400Hz-33bit.wav"), b"keep").unwrap();
    assert!(generator.generate(33).is_err());
    assert_eq!(
        std::fs::read(dir.path().join("400Hz-33bit.wav")).unwrap(),
        b"keep"
    );
}

#[test]
fn unwritable_directory_reports_write_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let generator = ToneFixtureGenerator::new_with(FixtureSettings::new_with_output_dir(&missing));
    match generator.generate(24) {
        Err(FixtureError::FileWriteFailure {
            bit_depth, path, ..
        }) => {
            assert_eq!(bit_depth, BitDepth::TwentyFour);
            assert_eq!(path, missing.join("400Hz-24bit.wav"));
        }
        other => panic!("expected a write failure, got {other:?}"),
    }
    assert!(!missing.exists());
}

// A directory squatting on a fixture's name makes that one depth fail.
fn blocked_generator(dir: &TempDir, policy: FailurePolicy) -> ToneFixtureGenerator {
    std::fs::create_dir(dir.path().join("400Hz-16bit.wav")).unwrap();
    ToneFixtureGenerator::new_with(FixtureSettings {
        failure_policy: policy,
        ..FixtureSettings::new_with_output_dir(dir.path())
    })
}

#[test]
fn stop_on_first_failure() {
    let dir = TempDir::new().unwrap();
    let report = blocked_generator(&dir, FailurePolicy::StopOnFirstFailure).generate_all();
    assert_eq!(report.generated.len(), 1);
    assert_eq!(report.generated[0].0, BitDepth::Eight);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].bits(), 16);
    assert_eq!(
        report.failure_summary().as_deref(),
        Some("1 of 2 attempted fixtures failed")
    );
    assert_eq!(
        dir_entries(&dir),
        vec!["400Hz-16bit.wav", "400Hz-8bit.wav"]
    );
    assert!(report.into_result().is_err());
}

#[test]
fn continue_on_failure() {
    let dir = TempDir::new().unwrap();
    let report = blocked_generator(&dir, FailurePolicy::ContinueOnFailure).generate_all();
    assert_eq!(
        report
            .generated
            .iter()
            .map(|(d, _)| *d)
            .collect::<Vec<_>>(),
        vec![BitDepth::Eight, BitDepth::TwentyFour, BitDepth::ThirtyTwo]
    );
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0],
        FixtureError::FileWriteFailure {
            bit_depth: BitDepth::Sixteen,
            ..
        }
    ));

    // No staging files are left behind.
    assert_eq!(
        dir_entries(&dir),
        vec![
            "400Hz-16bit.wav",
            "400Hz-24bit.wav",
            "400Hz-32bit.wav",
            "400Hz-8bit.wav"
        ]
    );
    assert!(dir.path().join("400Hz-16bit.wav").is_dir());
}

#[test]
fn custom_bit_depth_order() {
    let dir = TempDir::new().unwrap();
    let generator = ToneFixtureGenerator::new_with(FixtureSettings {
        bit_depths: vec![BitDepth::ThirtyTwo, BitDepth::Eight],
        ..FixtureSettings::new_with_output_dir(dir.path())
    });
    let paths = generator.generate_all().into_result().unwrap();
    assert_eq!(
        paths,
        vec![
            dir.path().join("400Hz-32bit.wav"),
            dir.path().join("400Hz-8bit.wav")
        ]
    );
}
