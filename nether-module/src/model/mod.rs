//! Canonical song representation shared by staging and the live store

mod instrument;
mod note;
mod sample;

pub use instrument::{AutoVibrato, Envelope, EnvelopeFlags, EnvelopePoint, Instrument};
pub use note::{Note, NoteData, VolumeCommand};
pub use sample::{LoopType, Sample, SampleFlags};

use crate::error::StagingError;
use crate::pitch::PitchMode;
use crate::{
    DEFAULT_PATTERN_ROWS, MAX_CHANNELS, MAX_INSTRUMENTS, MAX_ORDERS, MAX_PATTERN_ROWS,
    MAX_PATTERNS,
};

/// Song header: transport state, order list and names
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Song name (max 20 chars)
    pub name: String,
    /// Instrument names, 1-based (index 0 is unused)
    pub instrument_names: Vec<String>,
    /// Order list; only the first `song_length` entries are played
    pub orders: [u8; MAX_ORDERS],
    /// Number of used order list entries (1-256)
    pub song_length: u16,
    /// Order index the song restarts from
    pub song_loop_start: u16,
    /// Active channel count (even, 2-32 after sanitizing)
    pub num_channels: i32,
    /// Tempo in BPM (32-255)
    pub bpm: u16,
    /// Ticks per row (1-31)
    pub speed: u16,
    /// Speed the song starts with; mirrors `speed` after sanitizing
    pub initial_speed: u16,
    /// Global volume (0-64)
    pub global_volume: u16,
    /// Period table the song was written for
    pub pitch_mode: PitchMode,
}

impl Default for Song {
    fn default() -> Self {
        Self {
            name: String::new(),
            instrument_names: vec![String::new(); MAX_INSTRUMENTS + 1],
            orders: [0; MAX_ORDERS],
            song_length: 0,
            song_loop_start: 0,
            num_channels: 0,
            bpm: 0,
            speed: 0,
            initial_speed: 0,
            global_volume: 0,
            pitch_mode: PitchMode::default(),
        }
    }
}

impl Song {
    /// The played part of the order list
    pub fn order_list(&self) -> &[u8] {
        let len = (self.song_length as usize).min(MAX_ORDERS);
        &self.orders[..len]
    }
}

/// A pattern: a fixed 256 x 32 grid of notes
///
/// The number of rows in use lives next to the pattern slot
/// ([`Module::pattern_rows`]); cells past it are kept zeroed by loaders.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Box<[Note]>,
}

impl Pattern {
    /// Number of cells in every pattern buffer
    pub const CAPACITY: usize = MAX_PATTERN_ROWS * MAX_CHANNELS;

    /// Allocate an all-empty pattern
    pub fn new() -> Self {
        Self {
            cells: vec![Note::default(); Self::CAPACITY].into_boxed_slice(),
        }
    }

    /// Allocate an all-empty pattern, reporting allocation failure instead of aborting
    pub fn try_new() -> Result<Self, StagingError> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(Self::CAPACITY)
            .map_err(|_| StagingError::OutOfMemory)?;
        cells.resize(Self::CAPACITY, Note::default());
        Ok(Self {
            cells: cells.into_boxed_slice(),
        })
    }

    /// One row of 32 cells
    ///
    /// # Panics
    /// Panics if `row >= 256`.
    pub fn row(&self, row: usize) -> &[Note] {
        &self.cells[row * MAX_CHANNELS..(row + 1) * MAX_CHANNELS]
    }

    /// One row of 32 cells, mutable
    ///
    /// # Panics
    /// Panics if `row >= 256`.
    pub fn row_mut(&mut self, row: usize) -> &mut [Note] {
        &mut self.cells[row * MAX_CHANNELS..(row + 1) * MAX_CHANNELS]
    }

    /// Cell at (row, channel), or `None` outside the 256 x 32 grid
    pub fn get(&self, row: usize, channel: usize) -> Option<&Note> {
        if row >= MAX_PATTERN_ROWS || channel >= MAX_CHANNELS {
            return None;
        }
        self.cells.get(row * MAX_CHANNELS + channel)
    }

    /// Mutable cell at (row, channel), or `None` outside the 256 x 32 grid
    pub fn get_mut(&mut self, row: usize, channel: usize) -> Option<&mut Note> {
        if row >= MAX_PATTERN_ROWS || channel >= MAX_CHANNELS {
            return None;
        }
        self.cells.get_mut(row * MAX_CHANNELS + channel)
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Note] {
        &self.cells
    }

    /// All cells, row-major, mutable
    pub fn cells_mut(&mut self) -> &mut [Note] {
        &mut self.cells
    }

    /// True if every cell in the first `rows` rows is empty
    pub fn is_empty(&self, rows: usize) -> bool {
        let rows = rows.min(MAX_PATTERN_ROWS);
        self.cells[..rows * MAX_CHANNELS].iter().all(Note::is_empty)
    }

    /// Zero every cell at or past `channels` in the first `rows` rows
    pub fn clear_unused_channels(&mut self, rows: usize, channels: usize) {
        if channels >= MAX_CHANNELS {
            return;
        }
        for row in 0..rows.min(MAX_PATTERN_ROWS) {
            self.row_mut(row)[channels..].fill(Note::default());
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().filter(|n| !n.is_empty()).count();
        f.debug_struct("Pattern")
            .field("non_empty_cells", &used)
            .finish()
    }
}

/// A complete song: header, patterns and instruments
///
/// Instrument indices are 1-based: slot 0 always stays `None`, matching the
/// meaning of instrument 0 ("no instrument") in pattern data.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Song header
    pub song: Song,
    /// Pattern slots (256)
    pub patterns: Vec<Option<Pattern>>,
    /// Rows in use per pattern slot (256), including unallocated slots
    pub pattern_rows: [i16; MAX_PATTERNS],
    /// Instrument slots (129, index 0 unused)
    pub instruments: Vec<Option<Box<Instrument>>>,
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}

impl Module {
    /// An empty song with no patterns or instruments
    pub fn new() -> Self {
        Self {
            song: Song::default(),
            patterns: vec![None; MAX_PATTERNS],
            pattern_rows: [DEFAULT_PATTERN_ROWS; MAX_PATTERNS],
            instruments: vec![None; MAX_INSTRUMENTS + 1],
        }
    }

    /// Pattern at `index`, if allocated
    pub fn pattern(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index).and_then(Option::as_ref)
    }

    /// Rows in use for pattern `index` (0 outside the 256 slots)
    pub fn num_rows(&self, index: usize) -> usize {
        self.pattern_rows
            .get(index)
            .map(|&rows| rows.max(0) as usize)
            .unwrap_or(0)
    }

    /// Instrument at 1-based `index`; index 0 is always `None`
    pub fn instrument(&self, index: usize) -> Option<&Instrument> {
        if index == 0 {
            return None;
        }
        self.instruments.get(index).and_then(|slot| slot.as_deref())
    }

    /// Mutable instrument at 1-based `index`
    pub fn instrument_mut(&mut self, index: usize) -> Option<&mut Instrument> {
        if index == 0 {
            return None;
        }
        self.instruments
            .get_mut(index)
            .and_then(|slot| slot.as_deref_mut())
    }

    /// Sample `sample` (0-15) of 1-based instrument `instrument`
    pub fn sample(&self, instrument: usize, sample: usize) -> Option<&Sample> {
        self.instrument(instrument)
            .and_then(|ins| ins.samples.get(sample))
    }

    /// Number of allocated patterns
    pub fn num_patterns(&self) -> usize {
        self.patterns.iter().filter(|p| p.is_some()).count()
    }

    /// Number of allocated instruments
    pub fn num_instruments(&self) -> usize {
        self.instruments.iter().filter(|i| i.is_some()).count()
    }
}
