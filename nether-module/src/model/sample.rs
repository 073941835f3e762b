//! Sample metadata and flags

use crate::codec::{BitDepth, ChannelLayout, SamplePayload};
use crate::error::StagingError;
use crate::pitch::{PitchCalibrator, PitchMode};

/// A sample slot: PCM payload plus loop and tuning metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    /// Sample name (max 22 chars)
    pub name: String,
    /// Sub-semitone tuning (-128..127)
    pub finetune: i8,
    /// Semitone offset from C-4 (-48..71)
    pub relative_note: i8,
    /// Default volume (0-64)
    pub volume: u8,
    /// Default panning (0-255, 128 = center)
    pub panning: u8,
    pub flags: SampleFlags,
    /// Length in sample frames (0..=0x3FFFFFFF)
    pub length: i32,
    /// Loop start in sample frames
    pub loop_start: i32,
    /// Loop length in sample frames
    pub loop_length: i32,
    /// Owned PCM data, if any
    pub data: Option<SamplePayload>,
}

impl Sample {
    /// Loop mode derived from the flags
    pub fn loop_type(&self) -> LoopType {
        if self.flags.contains(SampleFlags::LOOP_PINGPONG) {
            LoopType::PingPong
        } else if self.flags.contains(SampleFlags::LOOP_FORWARD) {
            LoopType::Forward
        } else {
            LoopType::None
        }
    }

    /// Check if sample is 16-bit
    pub fn is_16bit(&self) -> bool {
        self.flags.contains(SampleFlags::SAMPLE_16BIT)
    }

    /// Check if sample is stored as split stereo
    pub fn is_stereo(&self) -> bool {
        self.flags.contains(SampleFlags::STEREO)
    }

    /// Check if sample owns PCM data
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    pub fn bit_depth(&self) -> BitDepth {
        if self.is_16bit() {
            BitDepth::Sixteen
        } else {
            BitDepth::Eight
        }
    }

    pub fn channel_layout(&self) -> ChannelLayout {
        if self.is_stereo() {
            ChannelLayout::SplitStereo
        } else {
            ChannelLayout::Mono
        }
    }

    /// Allocate a zeroed payload of `length` frames at the sample's bit depth,
    /// replacing any previous payload
    pub fn allocate_data(&mut self, length: usize) -> Result<&mut SamplePayload, StagingError> {
        let payload =
            SamplePayload::try_allocate(length, self.bit_depth()).ok_or(StagingError::OutOfMemory)?;
        Ok(self.data.insert(payload))
    }

    /// Release the PCM payload
    pub fn free_data(&mut self) {
        self.data = None;
    }

    /// Set finetune and relative note so that C-4 plays at `hz`
    pub fn tune(&mut self, hz: i32, mode: PitchMode, calibrator: &PitchCalibrator) {
        let tuning = calibrator.tune_sample(hz, mode);
        self.finetune = tuning.finetune;
        self.relative_note = tuning.relative_note;
    }
}

/// Sample loop type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopType {
    /// No loop
    #[default]
    None,
    /// Forward loop
    Forward,
    /// Ping-pong (bidirectional) loop
    PingPong,
}

/// Sample flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleFlags(u8);

impl SampleFlags {
    /// Forward loop
    pub const LOOP_FORWARD: Self = Self(0x01);
    /// Ping-pong loop
    pub const LOOP_PINGPONG: Self = Self(0x02);
    /// 16-bit sample (vs 8-bit)
    pub const SAMPLE_16BIT: Self = Self(0x10);
    /// Split stereo sample (left half, then right half)
    pub const STEREO: Self = Self(0x20);

    /// Both loop bits
    pub const LOOP_MASK: Self = Self(0x03);

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

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for SampleFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
