//! Nether-Module: tracker module ingestion core for Nethercore
//!
//! This crate takes legacy tracker module files (XM, MOD, S3M, STM, DIGI and
//! 15-sample STK) and turns them into a canonical in-memory song that the
//! replayer can consume. The per-format byte parsers plug in through the
//! [`FormatLoader`] trait; this crate owns everything around them.
//!
//! # Pipeline
//!
//! 1. [`detect_format`] sniffs the header bytes and picks a [`ModuleFormat`]
//! 2. The matching loader fills a fresh [`ModuleBuilder`] (the staging model)
//! 3. On success the builder is committed into the live [`Module`] owned by a
//!    [`ModuleStore`] and [`sanitize_module`] repairs out-of-range fields
//! 4. On failure the builder is rolled back and the live model is untouched
//!
//! # Key Features
//!
//! - **Bit-exact pitch math**: period tables and the sample tuning search
//!   reproduce the reference player, table bugs included
//! - **Typed sample payloads**: 8-bit and 16-bit PCM are decoded into
//!   separate containers with interpolation padding on both sides
//! - **All-or-nothing installs**: a malformed file never leaves a partially
//!   loaded song behind
//!
//! # Usage
//!
//! ```ignore
//! use nether_module::{LoaderRegistry, ModuleFormat, ModuleStore};
//!
//! let mut loaders = LoaderRegistry::new();
//! loaders.register(ModuleFormat::Xm, Box::new(MyXmLoader));
//!
//! let mut store = ModuleStore::new();
//! store.load_path("song.xm", &loaders)?;
//!
//! let song = &store.module().song;
//! println!("{}: {} channels, {} orders", song.name, song.num_channels, song.song_length);
//! ```

mod codec;
mod config;
mod error;
mod loader;
mod model;
mod pitch;
mod sanitize;
mod sniff;
mod staging;
mod store;

pub use codec::{
    BitDepth, ChannelLayout, PcmSample, SAMPLE_LEFT_PAD, SAMPLE_PAD_LENGTH, SamplePayload,
    delta_decode, sign_convert,
};
pub use config::LoadConfig;
pub use error::{LoadError, LoaderError, StagingError};
pub use loader::{
    FormatLoader, LoadContext, LoaderRegistry, ModuleSource, read_bytes, read_u8, read_u16_le,
    read_u32_le,
};
pub use model::{
    AutoVibrato, Envelope, EnvelopeFlags, EnvelopePoint, Instrument, LoopType, Module, Note,
    NoteData, Pattern, Sample, SampleFlags, Song, VolumeCommand,
};
pub use pitch::{
    AMIGA_NOTE_PERIODS, AMIGA_PERIODS, LINEAR_PERIODS, PERIOD_TABLE_LEN, PitchCalibrator,
    PitchMode, Tuning, note_from_amiga_period,
};
pub use sanitize::{
    fix_names, sanitize_instrument, sanitize_module, sanitize_patterns, sanitize_sample,
    sanitize_song,
};
pub use sniff::{HeaderSnapshot, ModuleFormat, detect_format};
pub use staging::ModuleBuilder;
pub use store::{ModuleStore, probe_path};

// =============================================================================
// Constants
// =============================================================================

/// Maximum number of channels in a song
pub const MAX_CHANNELS: usize = 32;

/// Number of pattern slots
pub const MAX_PATTERNS: usize = 256;

/// Maximum pattern length (rows); also the fixed row capacity of every pattern
pub const MAX_PATTERN_ROWS: usize = 256;

/// Row count used for pattern slots nobody set
pub const DEFAULT_PATTERN_ROWS: i16 = 64;

/// Capacity of the order list
pub const MAX_ORDERS: usize = 256;

/// Maximum number of installable instruments (1-based, slot 0 means "none")
pub const MAX_INSTRUMENTS: usize = 128;

/// Instrument slots available while staging. Slots past [`MAX_INSTRUMENTS`]
/// absorb files that claim too many instruments and are dropped on commit.
pub const STAGING_INSTRUMENT_SLOTS: usize = MAX_INSTRUMENTS + 4;

/// Sample slots per instrument
pub const MAX_SAMPLES_PER_INSTRUMENT: usize = 16;

/// Maximum sample length in sample frames
pub const MAX_SAMPLE_LEN: i32 = 0x3FFF_FFFF;

/// Points per envelope
pub const MAX_ENVELOPE_POINTS: usize = 12;

/// Minimum song tempo (BPM)
pub const MIN_BPM: u16 = 32;

/// Maximum song tempo (BPM)
pub const MAX_BPM: u16 = 255;

/// Maximum ticks per row
pub const MAX_SPEED: u16 = 31;

/// Maximum song name length in characters
pub const SONG_NAME_LEN: usize = 20;

/// Maximum instrument/sample name length in characters
pub const INSTRUMENT_NAME_LEN: usize = 22;

// =============================================================================
// Note Constants
// =============================================================================

/// Note value for "note off"
pub const NOTE_OFF: u8 = 97;

/// Minimum valid note (C-0)
pub const NOTE_MIN: u8 = 1;

/// Maximum valid note (B-7)
pub const NOTE_MAX: u8 = 96;

/// Note index of C-4, the note a sample plays at its base rate
pub const NOTE_C4: i32 = 4 * 12;

/// Playback rate of C-4 with finetune 0 and relative note 0
pub const C4_FREQ: i32 = 8363;

/// Highest valid effect opcode
pub const MAX_EFFECT: u8 = 35;

// =============================================================================
// Effect Constants
// =============================================================================

/// Effect opcodes as stored in [`Note::effect`]
pub mod effects {
    /// 0xy - Arpeggio
    pub const ARPEGGIO: u8 = 0x00;
    /// 1xx - Portamento up
    pub const PORTA_UP: u8 = 0x01;
    /// 2xx - Portamento down
    pub const PORTA_DOWN: u8 = 0x02;
    /// 3xx - Tone portamento
    pub const TONE_PORTA: u8 = 0x03;
    /// 4xy - Vibrato
    pub const VIBRATO: u8 = 0x04;
    /// 5xx - Tone portamento + volume slide
    pub const TONE_PORTA_VOL_SLIDE: u8 = 0x05;
    /// 6xx - Vibrato + volume slide
    pub const VIBRATO_VOL_SLIDE: u8 = 0x06;
    /// 7xy - Tremolo
    pub const TREMOLO: u8 = 0x07;
    /// 8xx - Set panning
    pub const SET_PANNING: u8 = 0x08;
    /// 9xx - Sample offset
    pub const SAMPLE_OFFSET: u8 = 0x09;
    /// Axy - Volume slide
    pub const VOLUME_SLIDE: u8 = 0x0A;
    /// Bxx - Position jump
    pub const POSITION_JUMP: u8 = 0x0B;
    /// Cxx - Set volume
    pub const SET_VOLUME: u8 = 0x0C;
    /// Dxx - Pattern break
    pub const PATTERN_BREAK: u8 = 0x0D;
    /// Exy - Extended effects
    pub const EXTENDED: u8 = 0x0E;
    /// Fxx - Set speed/tempo
    pub const SET_SPEED_TEMPO: u8 = 0x0F;
    /// Gxx - Set global volume
    pub const SET_GLOBAL_VOLUME: u8 = 0x10;
    /// Hxy - Global volume slide
    pub const GLOBAL_VOLUME_SLIDE: u8 = 0x11;
    /// Kxx - Key off
    pub const KEY_OFF: u8 = 0x14;
    /// Lxx - Set envelope position
    pub const SET_ENVELOPE_POS: u8 = 0x15;
    /// Pxy - Panning slide
    pub const PANNING_SLIDE: u8 = 0x19;
    /// Rxy - Multi retrig note
    pub const MULTI_RETRIG: u8 = 0x1B;
    /// Txy - Tremor
    pub const TREMOR: u8 = 0x1D;
    /// Xxy - Extra fine portamento
    pub const EXTRA_FINE_PORTA: u8 = 0x21;
}

// =============================================================================
// Tests
// =============================================================================
