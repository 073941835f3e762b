//! module-probe - tracker module inspection tool
//!
//! Sniffs module files and exposes the period/frequency math used when
//! loading them.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use nether_module::{
    LoadConfig, NOTE_MAX, NOTE_OFF, PitchCalibrator, PitchMode, note_from_amiga_period, probe_path,
};

#[derive(Parser)]
#[command(name = "module-probe")]
#[command(about = "Tracker module inspection tool")]
#[command(version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the format of one or more files
    Detect {
        /// Files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Convert a period to a playback frequency
    Hz {
        /// Period value
        period: i32,

        /// Period table (default from config)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Compute finetune and relative note for a sample rate
    Tune {
        /// Sample rate in Hz
        #[arg(required_unless_present = "wav")]
        hz: Option<i32>,

        /// Read the sample rate from a WAV file instead
        #[arg(long, conflicts_with = "hz")]
        wav: Option<PathBuf>,

        /// Period table (default from config)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Look up the note for a MOD pattern period
    Note {
        /// Amiga period from a MOD pattern cell
        period: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Linear,
    Amiga,
}

impl From<ModeArg> for PitchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Linear => PitchMode::Linear,
            ModeArg::Amiga => PitchMode::Amiga,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let pitch_mode = |mode: Option<ModeArg>| {
        mode.map(PitchMode::from)
            .unwrap_or(config.load.default_pitch_mode)
    };

    match cli.command {
        Commands::Detect { files } => {
            let mut failures = 0;
            for file in &files {
                match describe_file(file, &config.load, config.output.show_size) {
                    Ok(line) => println!("{}", line),
                    Err(e) => {
                        tracing::warn!("{:?}: {:#}", file, e);
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                bail!("{} of {} files could not be read", failures, files.len());
            }
        }

        Commands::Hz { period, mode } => {
            let mode = pitch_mode(mode);
            let hz = PitchCalibrator::new().period_to_hz(period, mode);
            println!("{:?} period {} = {:.3} Hz", mode, period, hz);
        }

        Commands::Tune { hz, wav, mode } => {
            let mode = pitch_mode(mode);
            let hz = match (hz, wav) {
                (_, Some(wav)) => wav_sample_rate(&wav)?,
                (Some(hz), None) => hz,
                (None, None) => bail!("Either a rate or --wav is required"),
            };
            let tuning = PitchCalibrator::new().tune_sample(hz, mode);
            println!(
                "{} Hz ({:?}): finetune {}, relative note {}",
                hz, mode, tuning.finetune, tuning.relative_note
            );
        }

        Commands::Note { period } => {
            let note = note_from_amiga_period(period);
            println!("period {} = {}", period, note_name(note));
        }
    }

    Ok(())
}

/// One output line for `detect`
fn describe_file(path: &Path, load: &LoadConfig, show_size: bool) -> Result<String> {
    let format = probe_path(path, load).with_context(|| format!("Failed to probe {:?}", path))?;
    let format = format.map_or_else(|| "unsupported".to_string(), |f| f.to_string());

    if show_size {
        let size = std::fs::metadata(path)?.len();
        Ok(format!("{}: {} ({} bytes)", path.display(), format, size))
    } else {
        Ok(format!("{}: {}", path.display(), format))
    }
}

fn wav_sample_rate(path: &Path) -> Result<i32> {
    let reader =
        hound::WavReader::open(path).with_context(|| format!("Failed to load WAV: {:?}", path))?;
    let rate = reader.spec().sample_rate;
    i32::try_from(rate).with_context(|| format!("Sample rate out of range: {}", rate))
}

/// Tracker-style note name: "C-4", "F#2", "off" or "---"
fn note_name(note: u8) -> String {
    const NAMES: [&str; 12] = [
        "C-", "C#", "D-", "D#", "E-", "F-", "F#", "G-", "G#", "A-", "A#", "B-",
    ];
    match note {
        0 => "---".to_string(),
        NOTE_OFF => "off".to_string(),
        n if n <= NOTE_MAX => {
            let index = usize::from(n - 1);
            format!("{}{}", NAMES[index % 12], index / 12)
        }
        _ => "???".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_name() {
        assert_eq!(note_name(0), "---");
        assert_eq!(note_name(1), "C-0");
        assert_eq!(note_name(49), "C-4");
        assert_eq!(note_name(56), "G-4");
        assert_eq!(note_name(96), "B-7");
        assert_eq!(note_name(97), "off");
        assert_eq!(note_name(200), "???");
    }

    #[test]
    fn test_mode_arg_conversion() {
        assert_eq!(PitchMode::from(ModeArg::Linear), PitchMode::Linear);
        assert_eq!(PitchMode::from(ModeArg::Amiga), PitchMode::Amiga);
    }

    #[test]
    fn test_describe_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.bin");
        std::fs::write(&path, [0u8; 10]).unwrap();

        let line = describe_file(&path, &LoadConfig::default(), true).unwrap();
        assert!(line.ends_with(": unsupported (10 bytes)"));

        let line = describe_file(&path, &LoadConfig::default(), false).unwrap();
        assert!(line.ends_with(": unsupported"));

        assert!(describe_file(&dir.path().join("missing"), &LoadConfig::default(), true).is_err());
    }

    #[test]
    fn test_wav_sample_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0i16).unwrap();
        writer.finalize().unwrap();

        assert_eq!(wav_sample_rate(&path).unwrap(), 22050);
    }

    #[test]
    fn test_cli_parses() {
        let args = ["module-probe", "tune", "8363", "--mode", "linear"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Tune { hz, wav, mode } => {
                assert_eq!(hz, Some(8363));
                assert!(wav.is_none());
                assert_eq!(mode, Some(ModeArg::Linear));
            }
            _ => panic!("Expected tune command"),
        }

        assert!(Cli::try_parse_from(["module-probe", "tune"]).is_err());
        assert!(Cli::try_parse_from(["module-probe", "detect"]).is_err());
    }
}
