//! Period <-> frequency conversion and sample tuning
//!
//! Pitch in module formats is expressed as a "period", which is inversely
//! related to frequency. Two period scales exist: the linear one (each
//! finetune step is a fixed period delta) and the Amiga one (periods follow
//! the hardware clock divider). Both tables are indexed by
//! `note * 16 + finetune_step` and cover 10 octaves plus one spare octave row.

mod tables;

pub use tables::{AMIGA_NOTE_PERIODS, AMIGA_PERIODS, LINEAR_PERIODS, PERIOD_TABLE_LEN};

use serde::{Deserialize, Serialize};

use crate::{C4_FREQ, NOTE_C4, NOTE_MAX};

/// Entries in the linear-mode log table (4 octaves of 12 notes * 16 steps)
const LOG_TAB_LEN: usize = 4 * 12 * 16;

/// Period at which the linear log table wraps to the next octave
const LINEAR_PERIOD_BASE: i32 = 12 * 192 * 4;

/// Amiga clock constant: C-4 (period 1712) plays at 8363 Hz
const AMIGA_CLOCK: f64 = (C4_FREQ * 1712) as f64;

/// Highest table index `tune_sample` may pick. The very last row is skipped
/// because the Amiga table is corrupt there.
const TUNE_MAX_INDEX: usize = 10 * 12 * 16 - 2;

/// Which period table a song uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchMode {
    Linear,
    #[default]
    Amiga,
}

impl PitchMode {
    /// The period table for this mode
    pub fn period_table(self) -> &'static [u16; PERIOD_TABLE_LEN] {
        match self {
            Self::Linear => &LINEAR_PERIODS,
            Self::Amiga => &AMIGA_PERIODS,
        }
    }
}

/// Sample tuning relative to C-4 at 8363 Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tuning {
    /// -128..127 in steps of 8
    pub finetune: i8,
    /// -48..71
    pub relative_note: i8,
}

impl Tuning {
    /// Split a period table index into finetune and relative note
    fn from_index(index: usize) -> Self {
        let index = index as i32;
        Self {
            finetune: (((index & 31) - 16) << 3) as i8,
            relative_note: (((index & !31) >> 4) - NOTE_C4) as i8,
        }
    }
}

/// Period/frequency converter with precomputed linear-mode tables
#[derive(Debug, Clone)]
pub struct PitchCalibrator {
    /// `8363 * 256 * 2^(i / 768)`
    log_tab: Box<[f64; LOG_TAB_LEN]>,
    /// `2^-i`
    exp2_mul: [f64; 32],
}

impl Default for PitchCalibrator {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchCalibrator {
    pub fn new() -> Self {
        let mut log_tab = Box::new([0.0; LOG_TAB_LEN]);
        for (i, v) in log_tab.iter_mut().enumerate() {
            *v = (f64::from(C4_FREQ) * 256.0) * (i as f64 / LOG_TAB_LEN as f64).exp2();
        }

        let mut exp2_mul = [0.0; 32];
        for (i, v) in exp2_mul.iter_mut().enumerate() {
            *v = 1.0 / (i as f64).exp2();
        }

        Self { log_tab, exp2_mul }
    }

    /// Frequency of an Amiga-mode period (0 Hz for period 0)
    pub fn amiga_hz(&self, period: i32) -> f64 {
        let period = period & 0xFFFF;
        if period == 0 {
            return 0.0;
        }
        AMIGA_CLOCK / f64::from(period)
    }

    /// Frequency of a linear-mode period (0 Hz for period 0)
    pub fn linear_hz(&self, period: i32) -> f64 {
        let period = period & 0xFFFF;
        if period == 0 {
            return 0.0;
        }
        // The mask reproduces the reference player's 16-bit wraparound for
        // periods above the base.
        let inv_period = ((LINEAR_PERIOD_BASE - period) & 0xFFFF) as u32;
        let quotient = inv_period / LOG_TAB_LEN as u32;
        let remainder = (inv_period % LOG_TAB_LEN as u32) as usize;
        self.log_tab[remainder] * self.exp2_mul[(14u32.wrapping_sub(quotient) & 31) as usize]
    }

    pub fn period_to_hz(&self, period: i32, mode: PitchMode) -> f64 {
        match mode {
            PitchMode::Linear => self.linear_hz(period),
            PitchMode::Amiga => self.amiga_hz(period),
        }
    }

    /// Table period for `index` (`note * 16 + finetune_step`)
    pub fn note_period(&self, index: usize, mode: PitchMode) -> Option<u16> {
        mode.period_table().get(index).copied()
    }

    /// Find the finetune/relative note pair whose C-4 frequency is closest to `hz`
    ///
    /// Frequencies outside the table saturate to the lowest or highest
    /// setting; a non-positive frequency yields the neutral tuning. When two
    /// neighbouring table entries are equally close, the lower index (the
    /// lower frequency) wins.
    pub fn tune_sample(&self, hz: i32, mode: PitchMode) -> Tuning {
        if hz <= 0 {
            return Tuning::default();
        }

        let table = mode.period_table();
        let hz_at = |index: usize| self.period_to_hz(i32::from(table[index]), mode) as i32;

        if hz <= hz_at(0) {
            return Tuning {
                finetune: -128,
                relative_note: -48,
            };
        }
        if hz >= hz_at(TUNE_MAX_INDEX) {
            return Tuning {
                finetune: 127,
                relative_note: 71,
            };
        }

        // Exact hit on an untuned note (C-0..B-9)
        for note in 0..10 * 12 {
            if hz == hz_at(16 + (note << 4)) {
                return Tuning {
                    finetune: 0,
                    relative_note: (note as i32 - NOTE_C4) as i8,
                };
            }
        }

        let mut best = 0;
        for index in (0..=TUNE_MAX_INDEX).rev() {
            let curr = hz_at(index);
            if hz == curr {
                best = index;
                break;
            }
            if hz > curr {
                let next = hz_at(index + 1);
                best = if (curr - hz).abs() <= (next - hz).abs() {
                    index
                } else {
                    index + 1
                };
                break;
            }
        }

        Tuning::from_index(best)
    }
}

/// Note number (1-96) for a MOD pattern period, 0 for an empty period
///
/// Picks the first table note whose period is not above `period`; periods
/// below the table map to the highest note.
pub fn note_from_amiga_period(period: u16) -> u8 {
    if period == 0 {
        return 0;
    }
    AMIGA_NOTE_PERIODS
        .iter()
        .position(|&p| period >= p)
        .map(|k| k as u8 + 1)
        .unwrap_or(NOTE_MAX)
}
