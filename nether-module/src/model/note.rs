//! Pattern cell and its decoded view

use crate::effects;
use crate::NOTE_OFF;

/// A single pattern cell, stored exactly as loaders write it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Note {
    /// 0 = none, 1-96 = C-0..B-7, 97 = note off
    pub note: u8,
    /// 0 = none, 1-128 = instrument
    pub instrument: u8,
    /// Raw volume column byte
    pub volume: u8,
    /// Effect opcode (0-35)
    pub effect: u8,
    /// Effect operand
    pub effect_param: u8,
}

impl Note {
    /// True if all five fields are zero
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True for the key-off note
    pub fn is_note_off(&self) -> bool {
        self.note == NOTE_OFF
    }

    /// Split the volume column and effect operand into their parameters
    pub fn decode(&self) -> NoteData {
        let (x, y) = split_effect_param(self.effect, self.effect_param);
        NoteData {
            note: self.note,
            instrument: self.instrument,
            volume: VolumeCommand::from_raw(self.volume),
            effect: self.effect,
            x,
            y,
        }
    }
}

/// Volume column command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeCommand {
    /// Empty column
    None,
    /// 0x10-0x50: set volume 0-64
    SetVolume(u8),
    /// 0x6x: volume slide down
    SlideDown(u8),
    /// 0x7x: volume slide up
    SlideUp(u8),
    /// 0x8x: fine volume slide down
    FineSlideDown(u8),
    /// 0x9x: fine volume slide up
    FineSlideUp(u8),
    /// 0xAx: set vibrato speed
    VibratoSpeed(u8),
    /// 0xBx: vibrato with depth
    VibratoDepth(u8),
    /// 0xCx: set panning
    SetPanning(u8),
    /// 0xDx: panning slide left
    PanSlideLeft(u8),
    /// 0xEx: panning slide right
    PanSlideRight(u8),
    /// 0xFx: tone portamento
    TonePorta(u8),
    /// Any other byte, kept verbatim
    Unknown(u8),
}

impl VolumeCommand {
    /// Decode a raw volume column byte
    pub fn from_raw(raw: u8) -> Self {
        let param = raw & 0x0F;
        match raw {
            0 => Self::None,
            0x10..=0x50 => Self::SetVolume(raw - 0x10),
            0x60..=0x6F => Self::SlideDown(param),
            0x70..=0x7F => Self::SlideUp(param),
            0x80..=0x8F => Self::FineSlideDown(param),
            0x90..=0x9F => Self::FineSlideUp(param),
            0xA0..=0xAF => Self::VibratoSpeed(param),
            0xB0..=0xBF => Self::VibratoDepth(param),
            0xC0..=0xCF => Self::SetPanning(param),
            0xD0..=0xDF => Self::PanSlideLeft(param),
            0xE0..=0xEF => Self::PanSlideRight(param),
            0xF0..=0xFF => Self::TonePorta(param),
            _ => Self::Unknown(raw),
        }
    }
}

/// A pattern cell with its parameters split out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteData {
    pub note: u8,
    pub instrument: u8,
    pub volume: VolumeCommand,
    pub effect: u8,
    /// High nibble for nibble-style effects, the whole operand for
    /// single-value effects, 0 for anything else
    pub x: u8,
    /// Low nibble for nibble-style effects, 0 otherwise
    pub y: u8,
}

fn split_effect_param(effect: u8, param: u8) -> (u8, u8) {
    match effect {
        effects::EXTENDED
        | effects::ARPEGGIO
        | effects::VIBRATO
        | effects::TREMOLO
        | effects::VOLUME_SLIDE
        | effects::GLOBAL_VOLUME_SLIDE
        | effects::PANNING_SLIDE
        | effects::MULTI_RETRIG
        | effects::TREMOR
        | effects::EXTRA_FINE_PORTA => (param >> 4, param & 0x0F),
        effects::PORTA_UP
        | effects::PORTA_DOWN
        | effects::TONE_PORTA
        | effects::TONE_PORTA_VOL_SLIDE
        | effects::VIBRATO_VOL_SLIDE
        | effects::SET_PANNING
        | effects::SAMPLE_OFFSET
        | effects::POSITION_JUMP
        | effects::SET_VOLUME
        | effects::PATTERN_BREAK
        | effects::SET_SPEED_TEMPO
        | effects::SET_GLOBAL_VOLUME
        | effects::SET_ENVELOPE_POS => (param, 0),
        _ => (0, 0),
    }
}
