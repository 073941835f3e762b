//! The live module and the load entry points

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::config::LoadConfig;
use crate::error::LoadError;
use crate::loader::{LoadContext, LoaderRegistry};
use crate::model::Module;
use crate::pitch::PitchCalibrator;
use crate::sanitize::{fix_names, sanitize_module};
use crate::sniff::{ModuleFormat, detect_format};
use crate::staging::ModuleBuilder;

/// Owner of the live module
///
/// The store is the only writer of the live model, and it only writes on a
/// successful load or an explicit unload. Callers that share the module with
/// a playback thread must hold readers off while a load runs.
#[derive(Debug)]
pub struct ModuleStore {
    module: Module,
    load_failed: bool,
    config: LoadConfig,
    calibrator: PitchCalibrator,
}

impl Default for ModuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleStore {
    /// An empty store with default configuration
    pub fn new() -> Self {
        Self::with_config(LoadConfig::default())
    }

    pub fn with_config(config: LoadConfig) -> Self {
        Self {
            module: Module::new(),
            load_failed: false,
            config,
            calibrator: PitchCalibrator::new(),
        }
    }

    /// The live module
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// True if the most recent load attempt failed
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    pub fn calibrator(&self) -> &PitchCalibrator {
        &self.calibrator
    }

    /// Load a module file, replacing the live module on success
    ///
    /// On failure the live module is left exactly as it was and
    /// [`load_failed`](Self::load_failed) reports `true`.
    pub fn load_path(
        &mut self,
        path: impl AsRef<Path>,
        loaders: &LoaderRegistry,
    ) -> Result<ModuleFormat, LoadError> {
        let path = path.as_ref();
        tracing::info!("Loading module: {}", path.display());

        let result = match File::open(path) {
            Ok(file) => self.load_from(BufReader::new(file), loaders),
            Err(e) => {
                self.load_failed = true;
                Err(e.into())
            }
        };

        if let Err(e) = &result {
            tracing::warn!("Failed to load {}: {}", path.display(), e);
        }
        result
    }

    /// Load a module from any seekable stream
    pub fn load_from<R: Read + Seek>(
        &mut self,
        reader: R,
        loaders: &LoaderRegistry,
    ) -> Result<ModuleFormat, LoadError> {
        let result = self.try_load(reader, loaders);
        self.load_failed = result.is_err();
        result
    }

    fn try_load<R: Read + Seek>(
        &mut self,
        mut reader: R,
        loaders: &LoaderRegistry,
    ) -> Result<ModuleFormat, LoadError> {
        let file_len = reader.seek(SeekFrom::End(0))?;
        if file_len > self.config.max_file_size {
            return Err(LoadError::FileTooLarge {
                size: file_len,
                limit: self.config.max_file_size,
            });
        }

        let format = detect_format(&mut reader)?.ok_or(LoadError::UnsupportedFormat)?;
        let loader = loaders.get(format).ok_or(LoadError::NoLoader(format))?;
        reader.seek(SeekFrom::Start(0))?;

        let mut staging = ModuleBuilder::with_pitch_mode(self.config.default_pitch_mode);
        let mut ctx = LoadContext {
            staging: &mut staging,
            pitch: &self.calibrator,
            file_len,
        };
        if let Err(source) = loader.load(&mut reader, &mut ctx) {
            staging.rollback();
            return Err(LoadError::Malformed { format, source });
        }

        let module = staging.commit(&mut self.module);
        sanitize_module(module);
        if self.config.trim_names {
            fix_names(module);
        }

        tracing::info!(
            "Loaded {} module \"{}\": {} channels, {} patterns, {} instruments",
            format,
            module.song.name,
            module.song.num_channels,
            module.num_patterns(),
            module.num_instruments()
        );
        Ok(format)
    }

    /// Drop the live module, leaving an empty one in its place
    pub fn unload(&mut self) {
        self.module = Module::new();
        self.load_failed = false;
    }
}

/// Sniff a file without loading it
pub fn probe_path(
    path: impl AsRef<Path>,
    config: &LoadConfig,
) -> Result<Option<ModuleFormat>, LoadError> {
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();
    if size > config.max_file_size {
        return Err(LoadError::FileTooLarge {
            size,
            limit: config.max_file_size,
        });
    }
    Ok(detect_format(&mut file)?)
}
