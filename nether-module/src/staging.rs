//! Staging model: scratch storage a loader fills during one load attempt
//!
//! A [`ModuleBuilder`] is created per load, handed to the format loader and
//! then either committed into the live [`Module`] or rolled back. Nothing in
//! here touches the live model until [`ModuleBuilder::commit`].

use crate::error::StagingError;
use crate::model::{Instrument, Module, Pattern, Song};
use crate::pitch::PitchMode;
use crate::{DEFAULT_PATTERN_ROWS, MAX_INSTRUMENTS, MAX_PATTERNS, STAGING_INSTRUMENT_SLOTS};

/// Scratch song, pattern and instrument storage for a load in progress
///
/// Instrument slots are 1-based. Slots 129-132 exist so that files claiming
/// more than 128 instruments can be parsed to the end; they are dropped on
/// commit.
#[derive(Debug, Clone)]
pub struct ModuleBuilder {
    /// Staged song header, written directly by loaders
    pub song: Song,
    /// Rows per pattern slot; loaders may adjust these after allocation
    pub pattern_rows: [i16; MAX_PATTERNS],
    patterns: Vec<Option<Pattern>>,
    instruments: Vec<Option<Box<Instrument>>>,
    pitch_mode: PitchMode,
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleBuilder {
    /// Empty staging area for a song in the default pitch mode
    pub fn new() -> Self {
        Self::with_pitch_mode(PitchMode::default())
    }

    /// Empty staging area whose song starts out in `pitch_mode`
    pub fn with_pitch_mode(pitch_mode: PitchMode) -> Self {
        let mut builder = Self {
            song: Song::default(),
            pattern_rows: [DEFAULT_PATTERN_ROWS; MAX_PATTERNS],
            patterns: Vec::new(),
            instruments: Vec::new(),
            pitch_mode,
        };
        builder.begin_load();
        builder
    }

    /// Reset every slot: no patterns, no instruments, 64 rows per pattern
    pub fn begin_load(&mut self) {
        self.song = Song {
            pitch_mode: self.pitch_mode,
            ..Song::default()
        };
        self.song
            .instrument_names
            .resize(STAGING_INSTRUMENT_SLOTS + 1, String::new());
        self.pattern_rows = [DEFAULT_PATTERN_ROWS; MAX_PATTERNS];
        self.patterns.clear();
        self.patterns.resize_with(MAX_PATTERNS, || None);
        self.instruments.clear();
        self.instruments
            .resize_with(STAGING_INSTRUMENT_SLOTS + 1, || None);
    }

    /// Allocate a zeroed 256 x 32 pattern buffer at `index`
    ///
    /// `rows` is stored as a 16-bit signed count, so counts of 32768 and up
    /// wrap negative. Out-of-range counts are repaired by the sanitizer after
    /// commit, and a wrapped count falls back to 64 rows.
    pub fn allocate_pattern(
        &mut self,
        index: usize,
        rows: u16,
    ) -> Result<&mut Pattern, StagingError> {
        let slot = self
            .patterns
            .get_mut(index)
            .ok_or(StagingError::PatternOutOfRange(index))?;
        if slot.is_some() {
            tracing::debug!("Refusing to reallocate staged pattern {}", index);
            return Err(StagingError::PatternAlreadyAllocated(index));
        }

        let pattern = Pattern::try_new()?;
        self.pattern_rows[index] = rows as i16;
        Ok(slot.insert(pattern))
    }

    /// Allocate a blank instrument at 1-based `index` (1-132)
    ///
    /// All 16 sample slots start at volume 64 and centered panning.
    pub fn allocate_instrument(&mut self, index: usize) -> Result<&mut Instrument, StagingError> {
        if index == 0 {
            return Err(StagingError::InstrumentOutOfRange(index));
        }
        let slot = self
            .instruments
            .get_mut(index)
            .ok_or(StagingError::InstrumentOutOfRange(index))?;
        if slot.is_some() {
            tracing::debug!("Refusing to reallocate staged instrument {}", index);
            return Err(StagingError::InstrumentAlreadyAllocated(index));
        }

        Ok(slot.insert(Box::new(Instrument::new())))
    }

    pub fn pattern(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index).and_then(Option::as_ref)
    }

    pub fn pattern_mut(&mut self, index: usize) -> Option<&mut Pattern> {
        self.patterns.get_mut(index).and_then(Option::as_mut)
    }

    /// Staged instrument at 1-based `index`
    pub fn instrument(&self, index: usize) -> Option<&Instrument> {
        if index == 0 {
            return None;
        }
        self.instruments.get(index).and_then(|slot| slot.as_deref())
    }

    /// Mutable staged instrument at 1-based `index`
    pub fn instrument_mut(&mut self, index: usize) -> Option<&mut Instrument> {
        if index == 0 {
            return None;
        }
        self.instruments
            .get_mut(index)
            .and_then(|slot| slot.as_deref_mut())
    }

    /// True if pattern `index` is unallocated or has no data in its rows
    pub fn pattern_is_empty(&self, index: usize) -> bool {
        match self.pattern(index) {
            Some(pattern) => {
                let rows = self.pattern_rows[index].max(0) as usize;
                pattern.is_empty(rows)
            }
            None => true,
        }
    }

    /// Release an allocated pattern, e.g. one that turned out to be empty
    pub fn free_pattern(&mut self, index: usize) {
        if let Some(slot) = self.patterns.get_mut(index) {
            *slot = None;
        }
    }

    /// Number of allocated patterns
    pub fn num_patterns(&self) -> usize {
        self.patterns.iter().filter(|p| p.is_some()).count()
    }

    /// Number of allocated instruments, including the overflow slots
    pub fn num_instruments(&self) -> usize {
        self.instruments.iter().filter(|i| i.is_some()).count()
    }

    /// True if nothing has been allocated since the last reset
    pub fn is_clear(&self) -> bool {
        self.num_patterns() == 0 && self.num_instruments() == 0
    }

    /// Move everything staged into `live`, dropping what `live` held before
    ///
    /// Instruments staged in the overflow slots (129-132) are discarded along
    /// with their names. The returned model still needs sanitizing.
    pub fn commit(self, live: &mut Module) -> &mut Module {
        let Self {
            mut song,
            pattern_rows,
            patterns,
            mut instruments,
            ..
        } = self;

        let overflow = instruments
            .drain(MAX_INSTRUMENTS + 1..)
            .filter(Option::is_some)
            .count();
        if overflow > 0 {
            tracing::warn!(
                discarded = overflow,
                "Module has more than {} instruments, extra ones dropped",
                MAX_INSTRUMENTS
            );
        }
        instruments[0] = None;
        song.instrument_names.truncate(MAX_INSTRUMENTS + 1);

        live.song = song;
        live.pattern_rows = pattern_rows;
        live.patterns = patterns;
        live.instruments = instruments;

        tracing::debug!(
            patterns = live.num_patterns(),
            instruments = live.num_instruments(),
            "Committed staged module"
        );
        live
    }

    /// Free everything staged and return to the freshly-reset state
    ///
    /// Safe to call any number of times, including when nothing was staged.
    pub fn rollback(&mut self) {
        if !self.is_clear() {
            tracing::debug!(
                patterns = self.num_patterns(),
                instruments = self.num_instruments(),
                "Rolling back staged module"
            );
        }
        self.begin_load();
    }
}
