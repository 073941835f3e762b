//! Instrument, envelope and auto-vibrato structures

use super::sample::Sample;
use crate::{MAX_ENVELOPE_POINTS, MAX_SAMPLES_PER_INSTRUMENT};

/// A single envelope point: (tick, value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvelopePoint {
    /// Tick position (0-32767)
    pub x: i16,
    /// Value (0-64 for volume, 0-63 for panning)
    pub y: i16,
}

/// Volume or panning envelope
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Envelope {
    pub points: [EnvelopePoint; MAX_ENVELOPE_POINTS],
    /// Number of used points (0-12)
    pub length: u8,
    /// Sustain point index (0-11)
    pub sustain: u8,
    /// Loop start point index (0-11)
    pub loop_start: u8,
    /// Loop end point index (0-11)
    pub loop_end: u8,
    pub flags: EnvelopeFlags,
}

impl Envelope {
    /// Check if envelope is enabled
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(EnvelopeFlags::ENABLED)
    }

    /// Check if envelope has a sustain point
    pub fn has_sustain(&self) -> bool {
        self.flags.contains(EnvelopeFlags::SUSTAIN)
    }

    /// Check if envelope loops
    pub fn has_loop(&self) -> bool {
        self.flags.contains(EnvelopeFlags::LOOP)
    }

    /// The used points
    pub fn active_points(&self) -> &[EnvelopePoint] {
        let len = (self.length as usize).min(MAX_ENVELOPE_POINTS);
        &self.points[..len]
    }
}

/// Envelope flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvelopeFlags(u8);

impl EnvelopeFlags {
    /// Envelope is enabled
    pub const ENABLED: Self = Self(0x01);
    /// Sustain point is enabled
    pub const SUSTAIN: Self = Self(0x02);
    /// Loop is enabled
    pub const LOOP: Self = Self(0x04);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for EnvelopeFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Instrument auto-vibrato
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoVibrato {
    /// Waveform (0=sine, 1=square, 2=ramp down, 3=ramp up)
    pub waveform: u8,
    pub sweep: u8,
    /// Depth (0-15)
    pub depth: u8,
    /// Rate (0-63)
    pub rate: u8,
}

/// An instrument with its 16 sample slots
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    /// Sample index (0-15) for each of the 96 notes
    pub note_to_sample: [u8; 96],
    pub volume_envelope: Envelope,
    pub panning_envelope: Envelope,
    pub auto_vibrato: AutoVibrato,
    pub fadeout: u16,
    /// Send notes to MIDI instead of the mixer
    pub midi_on: bool,
    pub mute: bool,
    /// MIDI channel (0-15)
    pub midi_channel: u8,
    /// MIDI program (0-127)
    pub midi_program: i16,
    /// MIDI pitch bend range in semitones (0-36)
    pub midi_bend: i16,
    /// Sample count announced by the file; only meaningful while loading
    pub num_samples: i16,
    pub samples: [Sample; MAX_SAMPLES_PER_INSTRUMENT],
}

impl Default for Instrument {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrument {
    /// A blank instrument whose samples default to volume 64, centered panning
    pub fn new() -> Self {
        let samples = std::array::from_fn(|_| Sample {
            volume: 64,
            panning: 128,
            ..Sample::default()
        });

        Self {
            note_to_sample: [0; 96],
            volume_envelope: Envelope::default(),
            panning_envelope: Envelope::default(),
            auto_vibrato: AutoVibrato::default(),
            fadeout: 0,
            midi_on: false,
            mute: false,
            midi_channel: 0,
            midi_program: 0,
            midi_bend: 0,
            num_samples: 0,
            samples,
        }
    }

    /// Turn off both envelopes, fadeout and auto-vibrato
    ///
    /// Used by loaders for formats that have no such features.
    pub fn set_no_envelope(&mut self) {
        self.volume_envelope.flags = EnvelopeFlags::empty();
        self.panning_envelope.flags = EnvelopeFlags::empty();
        self.fadeout = 0;
        self.auto_vibrato = AutoVibrato::default();
    }

    /// Sample slot used for `note` (1-96)
    pub fn sample_for_note(&self, note: u8) -> Option<&Sample> {
        let index = usize::from(note).checked_sub(1)?;
        let slot = *self.note_to_sample.get(index)?;
        self.samples.get(usize::from(slot))
    }

    /// Check if any sample slot holds PCM data
    pub fn has_sample_data(&self) -> bool {
        self.samples.iter().any(Sample::has_data)
    }
}
