//! Per-format loader plumbing
//!
//! Format parsers live outside this crate. Each one implements
//! [`FormatLoader`] and is registered for the [`ModuleFormat`] it handles;
//! the store dispatches on the sniffed format and hands the loader a fresh
//! staging area through [`LoadContext`].

use std::io::{Read, Seek};

use crate::error::LoaderError;
use crate::pitch::PitchCalibrator;
use crate::sniff::ModuleFormat;
use crate::staging::ModuleBuilder;

/// A readable, seekable byte stream
pub trait ModuleSource: Read + Seek {}

impl<T: Read + Seek> ModuleSource for T {}

/// Everything a loader may touch while parsing
pub struct LoadContext<'a> {
    /// Staging area to populate; discarded if the loader fails
    pub staging: &'a mut ModuleBuilder,
    /// For retuning samples given in Hz
    pub pitch: &'a PitchCalibrator,
    /// Total length of the source in bytes
    pub file_len: u64,
}

/// Parses one module format into the staging model
///
/// The source is positioned at offset 0 on entry. Returning an error is
/// always safe: partial staging writes are rolled back by the caller.
pub trait FormatLoader {
    fn load(
        &self,
        source: &mut dyn ModuleSource,
        ctx: &mut LoadContext<'_>,
    ) -> Result<(), LoaderError>;
}

/// One optional loader per [`ModuleFormat`]
#[derive(Default)]
pub struct LoaderRegistry {
    loaders: [Option<Box<dyn FormatLoader + Send + Sync>>; 6],
}

impl LoaderRegistry {
    /// A registry with no loaders
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `loader` for `format`, replacing any previous one
    pub fn register(&mut self, format: ModuleFormat, loader: Box<dyn FormatLoader + Send + Sync>) {
        self.loaders[format.index()] = Some(loader);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(
        mut self,
        format: ModuleFormat,
        loader: Box<dyn FormatLoader + Send + Sync>,
    ) -> Self {
        self.register(format, loader);
        self
    }

    pub fn get(&self, format: ModuleFormat) -> Option<&(dyn FormatLoader + Send + Sync)> {
        self.loaders[format.index()].as_deref()
    }

    /// Formats that have a loader
    pub fn formats(&self) -> impl Iterator<Item = ModuleFormat> + '_ {
        ModuleFormat::ALL
            .into_iter()
            .filter(|format| self.loaders[format.index()].is_some())
    }
}

impl std::fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.formats()).finish()
    }
}

// =============================================================================
// Little-endian read helpers for loaders
// =============================================================================

pub fn read_u8(r: &mut dyn ModuleSource) -> Result<u8, LoaderError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub fn read_u16_le(r: &mut dyn ModuleSource) -> Result<u16, LoaderError> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

pub fn read_u32_le(r: &mut dyn ModuleSource) -> Result<u32, LoaderError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read exactly `len` bytes
pub fn read_bytes(r: &mut dyn ModuleSource, len: usize) -> Result<Vec<u8>, LoaderError> {
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    Ok(buf)
}
