//! Integration tests for nether-module
//!
//! Tests the full pipeline: write a module file -> sniff -> stage -> install
//! -> sanitize, using small stand-in loaders.

use std::io::SeekFrom;

use nether_module::{
    BitDepth, FormatLoader, LoadConfig, LoadContext, LoadError, LoaderError, LoaderRegistry,
    ModuleFormat, ModuleSource, ModuleStore, Note, SampleFlags, SamplePayload, probe_path,
    read_bytes, read_u8, read_u16_le,
};
use tempfile::tempdir;

const ROWS: usize = 64;
const CELL_BYTES: usize = 5;
const PATTERN_BYTES: usize = ROWS * 32 * CELL_BYTES;

/// A toy 32-channel MOD variant
///
/// Layout: 20-byte name, channel count, pattern count, sample length (u16),
/// sample flags, then "M.K." at 1080, 64-row patterns from 1084 and finally
/// delta-encoded 8-bit sample data.
struct ToyModLoader;

impl FormatLoader for ToyModLoader {
    fn load(
        &self,
        source: &mut dyn ModuleSource,
        ctx: &mut LoadContext<'_>,
    ) -> Result<(), LoaderError> {
        let name = read_bytes(source, 20)?;
        let channels = read_u8(source)?;
        let num_patterns = read_u8(source)?;
        let sample_len = read_u16_le(source)?;
        let sample_flags = read_u8(source)?;

        let song = &mut ctx.staging.song;
        song.name = String::from_utf8_lossy(&name).into_owned();
        song.num_channels = i32::from(channels);
        song.song_length = u16::from(num_patterns);
        song.bpm = 125;
        song.speed = 6;
        for i in 0..num_patterns {
            song.orders[usize::from(i)] = i;
        }
        let pitch_mode = song.pitch_mode;

        source.seek(SeekFrom::Start(1084))?;
        for index in 0..usize::from(num_patterns) {
            let raw = read_bytes(source, PATTERN_BYTES)?;
            let pattern = ctx.staging.allocate_pattern(index, ROWS as u16)?;
            for (note, cell) in pattern.cells_mut().iter_mut().zip(raw.chunks_exact(CELL_BYTES)) {
                *note = Note {
                    note: cell[0],
                    instrument: cell[1],
                    volume: cell[2],
                    effect: cell[3],
                    effect_param: cell[4],
                };
            }
        }

        if sample_len > 0 {
            let bytes = read_bytes(source, usize::from(sample_len))?;
            let mut payload = SamplePayload::from_le_bytes(&bytes, BitDepth::Eight)
                .ok_or_else(|| LoaderError::Invalid("sample too large".into()))?;

            let ins = ctx.staging.allocate_instrument(1)?;
            let sample = &mut ins.samples[0];
            sample.flags = SampleFlags::from_bits(sample_flags);
            sample.length = i32::from(sample_len);
            payload.delta_decode(sample.channel_layout());
            sample.data = Some(payload);
            sample.tune(16726, pitch_mode, ctx.pitch);
        }

        Ok(())
    }
}

/// Stages more instruments than a song may hold
struct GreedyLoader;

impl FormatLoader for GreedyLoader {
    fn load(
        &self,
        _: &mut dyn ModuleSource,
        ctx: &mut LoadContext<'_>,
    ) -> Result<(), LoaderError> {
        for index in 1..=132 {
            ctx.staging.allocate_instrument(index)?;
        }
        Ok(())
    }
}

fn registry() -> LoaderRegistry {
    LoaderRegistry::new()
        .with(ModuleFormat::Mod, Box::new(ToyModLoader))
        .with(ModuleFormat::Xm, Box::new(GreedyLoader))
}

fn toy_mod(channels: u8, num_patterns: u8, sample_deltas: &[i8]) -> Vec<u8> {
    let mut data = vec![0u8; 1084];
    data[..9].copy_from_slice(b"Toy Song ");
    data[20] = channels;
    data[21] = num_patterns;
    data[22..24].copy_from_slice(&(sample_deltas.len() as u16).to_le_bytes());
    data[1080..1084].copy_from_slice(b"M.K.");

    for _ in 0..num_patterns {
        for row in 0..ROWS {
            for channel in 0..32u8 {
                data.extend_from_slice(&[1 + (row % 96) as u8, 1, 0x40, 0x0C, channel]);
            }
        }
    }
    data.extend(sample_deltas.iter().map(|&d| d as u8));
    data
}

fn xm_file() -> Vec<u8> {
    let mut data = b"Extended Module: ".to_vec();
    data.resize(336, 0);
    data
}

#[test]
fn test_load_toy_mod_from_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("toy.mod");
    std::fs::write(&path, toy_mod(4, 2, &[10, 5, -3, 0])).expect("Failed to write module");

    let mut store = ModuleStore::new();
    let format = store.load_path(&path, &registry()).expect("Load failed");
    assert_eq!(format, ModuleFormat::Mod);
    assert!(!store.load_failed());

    let module = store.module();
    assert_eq!(module.song.name, "Toy Song");
    assert_eq!(module.song.num_channels, 4);
    assert_eq!(module.song.order_list(), &[0, 1]);
    assert_eq!(module.num_patterns(), 2);
    assert_eq!(module.num_rows(0), 64);

    let sample = module.sample(1, 0).expect("Sample missing");
    let data = sample.data.as_ref().expect("Sample data missing");
    assert_eq!(data.as_i8(), Some(&[10i8, 15, 12, 12][..]));
    assert_eq!((sample.finetune, sample.relative_note), (0, 12));
}

#[test]
fn test_unused_channels_cleared_on_install() {
    let mut store = ModuleStore::new();
    store
        .load_from(std::io::Cursor::new(toy_mod(4, 1, &[])), &registry())
        .expect("Load failed");

    let pattern = store.module().pattern(0).expect("Pattern missing");
    for row in 0..256 {
        let cells = pattern.row(row);
        for (channel, note) in cells.iter().enumerate() {
            if row < ROWS && channel < 4 {
                assert_eq!(note.note, 1 + row as u8);
                assert_eq!(note.effect_param, channel as u8);
            } else {
                assert!(note.is_empty(), "row {} channel {} not cleared", row, channel);
            }
        }
    }
}

#[test]
fn test_odd_channel_count_rounded_up() {
    let mut store = ModuleStore::new();
    store
        .load_from(std::io::Cursor::new(toy_mod(5, 1, &[])), &registry())
        .expect("Load failed");
    assert_eq!(store.module().song.num_channels, 6);
    assert!(store.module().pattern(0).unwrap().row(0)[5].instrument == 1);
    assert!(store.module().pattern(0).unwrap().row(0)[6].is_empty());
}

#[test]
fn test_truncated_file_leaves_live_model_untouched() {
    let mut store = ModuleStore::new();
    store
        .load_from(std::io::Cursor::new(toy_mod(8, 2, &[1, 2, 3])), &registry())
        .expect("Load failed");
    let before = store.module().clone();

    let mut truncated = toy_mod(4, 3, &[7; 16]);
    truncated.truncate(1084 + PATTERN_BYTES * 2 + 100);
    let err = store
        .load_from(std::io::Cursor::new(truncated), &registry())
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Malformed {
            format: ModuleFormat::Mod,
            source: LoaderError::UnexpectedEof,
        }
    ));
    assert!(store.load_failed());
    assert_eq!(store.module(), &before);
}

#[test]
fn test_impulse_tracker_file_rejected() {
    let mut data = vec![0u8; 4096];
    data[..4].copy_from_slice(b"IMPM");

    let mut store = ModuleStore::new();
    let err = store
        .load_from(std::io::Cursor::new(data), &registry())
        .unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat));
    assert!(store.load_failed());
    assert_eq!(store.module().num_instruments(), 0);
}

#[test]
fn test_missing_file_reports_io_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = ModuleStore::new();
    let err = store
        .load_path(dir.path().join("nope.xm"), &registry())
        .unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
    assert!(store.load_failed());
}

#[test]
fn test_extra_instruments_discarded() {
    let mut store = ModuleStore::new();
    store
        .load_from(std::io::Cursor::new(xm_file()), &registry())
        .expect("Load failed");
    let module = store.module();
    assert_eq!(module.num_instruments(), 128);
    assert!(module.instrument(128).is_some());
    assert_eq!(module.instruments.len(), 129);
}

#[test]
fn test_decoding_is_deterministic() {
    let file = toy_mod(2, 1, &[100, 100, -50, 7, -128]);
    let mut first = ModuleStore::new();
    let mut second = ModuleStore::new();
    first
        .load_from(std::io::Cursor::new(file.clone()), &registry())
        .unwrap();
    second
        .load_from(std::io::Cursor::new(file), &registry())
        .unwrap();
    assert_eq!(first.module(), second.module());
}

#[test]
fn test_trim_names_disabled() {
    let config = LoadConfig {
        trim_names: false,
        ..LoadConfig::default()
    };
    let mut store = ModuleStore::with_config(config);
    store
        .load_from(std::io::Cursor::new(toy_mod(2, 1, &[])), &registry())
        .unwrap();
    assert_eq!(store.module().song.name.len(), 20);
    assert!(store.module().song.name.starts_with("Toy Song "));
}

#[test]
fn test_probe_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mod_path = dir.path().join("probe.mod");
    let junk_path = dir.path().join("junk.bin");
    std::fs::write(&mod_path, toy_mod(4, 1, &[])).unwrap();
    std::fs::write(&junk_path, [0xFFu8; 64]).unwrap();

    let config = LoadConfig::default();
    assert_eq!(probe_path(&mod_path, &config).unwrap(), Some(ModuleFormat::Mod));
    assert_eq!(probe_path(&junk_path, &config).unwrap(), None);

    let tiny = LoadConfig {
        max_file_size: 16,
        ..LoadConfig::default()
    };
    assert!(matches!(
        probe_path(&mod_path, &tiny),
        Err(LoadError::FileTooLarge { .. })
    ));
}

#[test]
fn test_unload_after_failure() {
    let mut store = ModuleStore::new();
    let _ = store.load_from(std::io::Cursor::new(vec![0u8; 8]), &registry());
    assert!(store.load_failed());
    store.unload();
    assert!(!store.load_failed());
}
