//! Post-install repair of out-of-range data
//!
//! Real-world files routinely carry mildly invalid fields that the reference
//! player tolerated. Nothing here fails: every value is clamped or reset into
//! range, and running the pass twice gives the same result as running it once.

use crate::model::{Envelope, Instrument, Module, Sample, SampleFlags, Song};
use crate::{
    DEFAULT_PATTERN_ROWS, INSTRUMENT_NAME_LEN, MAX_BPM, MAX_CHANNELS, MAX_EFFECT,
    MAX_ENVELOPE_POINTS, MAX_INSTRUMENTS, MAX_ORDERS, MAX_PATTERN_ROWS, MAX_SAMPLE_LEN,
    MAX_SAMPLES_PER_INSTRUMENT, MAX_SPEED, MIN_BPM, NOTE_OFF, SONG_NAME_LEN,
};

/// Clamp instrument-level fields (MIDI, auto-vibrato, note map, envelopes)
pub fn sanitize_instrument(ins: &mut Instrument) {
    ins.midi_program = ins.midi_program.clamp(0, 127);
    ins.midi_bend = ins.midi_bend.clamp(0, 36);
    ins.midi_channel = ins.midi_channel.min(15);

    let vib = &mut ins.auto_vibrato;
    vib.depth = vib.depth.min(0x0F);
    vib.rate = vib.rate.min(0x3F);
    if vib.waveform > 3 {
        vib.waveform = 0;
    }

    let last_sample = (MAX_SAMPLES_PER_INSTRUMENT - 1) as u8;
    for slot in &mut ins.note_to_sample {
        *slot = (*slot).min(last_sample);
    }

    sanitize_envelope(&mut ins.volume_envelope, 64);
    sanitize_envelope(&mut ins.panning_envelope, 63);
}

fn sanitize_envelope(env: &mut Envelope, max_y: u16) {
    let last_point = (MAX_ENVELOPE_POINTS - 1) as u8;
    env.length = env.length.min(MAX_ENVELOPE_POINTS as u8);
    env.sustain = env.sustain.min(last_point);
    env.loop_start = env.loop_start.min(last_point);
    env.loop_end = env.loop_end.min(last_point);

    // Negative values read as large unsigned ones and get clamped too
    for point in &mut env.points {
        if (point.x as u16) > 32767 {
            point.x = 32767;
        }
        if (point.y as u16) > max_y {
            point.y = max_y as i16;
        }
    }
}

/// Clamp sample metadata and disable loops that do not fit the sample
pub fn sanitize_sample(s: &mut Sample) {
    // Both loop bits set means ping-pong
    if s.flags.contains(SampleFlags::LOOP_MASK) {
        s.flags.remove(SampleFlags::LOOP_FORWARD);
    }

    s.volume = s.volume.min(64);
    s.relative_note = s.relative_note.clamp(-48, 71);
    s.length = s.length.clamp(0, MAX_SAMPLE_LEN);

    let loop_end = i64::from(s.loop_start) + i64::from(s.loop_length);
    if s.loop_start < 0 || s.loop_length <= 0 || loop_end > i64::from(s.length) {
        s.loop_start = 0;
        s.loop_length = 0;
        s.flags.remove(SampleFlags::LOOP_MASK);
    }
}

/// Clamp transport fields of the song header
pub fn sanitize_song(song: &mut Song) {
    let max_channels = MAX_CHANNELS as i32;
    if song.num_channels & 1 != 0 {
        song.num_channels = song.num_channels.saturating_add(1).min(max_channels);
    }
    song.num_channels = song.num_channels.clamp(2, max_channels);

    song.song_length = song.song_length.clamp(1, MAX_ORDERS as u16);
    song.bpm = song.bpm.clamp(MIN_BPM, MAX_BPM);
    song.speed = song.speed.clamp(1, MAX_SPEED);
    song.initial_speed = song.speed;

    if song.song_loop_start >= song.song_length {
        song.song_loop_start = 0;
    }

    song.global_volume = 64;
}

/// Fix row counts, drop out-of-range note fields and zero unused channels
///
/// Uses the module's channel count as-is, so call [`sanitize_song`] first.
pub fn sanitize_patterns(module: &mut Module) {
    for rows in &mut module.pattern_rows {
        if *rows <= 0 {
            *rows = DEFAULT_PATTERN_ROWS;
        }
        *rows = (*rows).min(MAX_PATTERN_ROWS as i16);
    }

    let channels = module.song.num_channels.clamp(0, MAX_CHANNELS as i32) as usize;
    for pattern in module.patterns.iter_mut().flatten() {
        for note in pattern.cells_mut() {
            if note.note > NOTE_OFF {
                note.note = 0;
            }
            if usize::from(note.instrument) > MAX_INSTRUMENTS {
                note.instrument = 0;
            }
            if note.effect > MAX_EFFECT {
                note.effect = 0;
                note.effect_param = 0;
            }
        }
        pattern.clear_unused_channels(MAX_PATTERN_ROWS, channels);
    }
}

/// Run every repair pass over a freshly installed module
pub fn sanitize_module(module: &mut Module) {
    for ins in module.instruments.iter_mut().skip(1).flatten() {
        sanitize_instrument(ins);
        for sample in &mut ins.samples {
            sanitize_sample(sample);
        }
    }
    sanitize_song(&mut module.song);
    sanitize_patterns(module);
}

/// Truncate names to their format limits and strip trailing padding
///
/// Trailing spaces and 0x1A (the DOS EOF marker) are removed, and a name ends
/// at its first NUL.
pub fn fix_names(module: &mut Module) {
    fix_name(&mut module.song.name, SONG_NAME_LEN);
    for name in module.song.instrument_names.iter_mut().skip(1) {
        fix_name(name, INSTRUMENT_NAME_LEN);
    }
    for ins in module.instruments.iter_mut().skip(1).flatten() {
        for sample in &mut ins.samples {
            fix_name(&mut sample.name, INSTRUMENT_NAME_LEN);
        }
    }
}

fn fix_name(name: &mut String, max_len: usize) {
    if let Some(nul) = name.find('\0') {
        name.truncate(nul);
    }
    if let Some((cut, _)) = name.char_indices().nth(max_len) {
        name.truncate(cut);
    }
    let kept = name.trim_end_matches([' ', '\u{1A}']).len();
    name.truncate(kept);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnvelopeFlags, EnvelopePoint, Note, Pattern};

    /// A module with something out of range in every sanitized field
    fn messy_module() -> Module {
        let mut module = Module::new();
        module.song.num_channels = 33;
        module.song.song_length = 0;
        module.song.song_loop_start = 5;
        module.song.bpm = 10;
        module.song.speed = 99;
        module.song.initial_speed = 3;
        module.song.global_volume = 12;
        module.song.name = "Funky Tune   \u{1A}".into();

        module.pattern_rows[0] = 0;
        module.pattern_rows[1] = -5;
        module.pattern_rows[2] = 300;

        let mut pattern = Pattern::new();
        for (i, note) in pattern.cells_mut().iter_mut().enumerate() {
            *note = Note {
                note: (i % 120) as u8,
                instrument: (i % 200) as u8,
                volume: 0x40,
                effect: (i % 40) as u8,
                effect_param: 0x77,
            };
        }
        module.patterns[0] = Some(pattern);

        let mut ins = Instrument::new();
        ins.midi_program = -4;
        ins.midi_bend = 99;
        ins.midi_channel = 200;
        ins.auto_vibrato.depth = 0x40;
        ins.auto_vibrato.rate = 0xFF;
        ins.auto_vibrato.waveform = 7;
        ins.note_to_sample = [40; 96];
        ins.volume_envelope.length = 30;
        ins.volume_envelope.sustain = 50;
        ins.volume_envelope.loop_start = 12;
        ins.volume_envelope.loop_end = 255;
        ins.volume_envelope.points[0] = EnvelopePoint { x: -1, y: 200 };
        ins.panning_envelope.points[3] = EnvelopePoint { x: 100, y: 64 };
        ins.panning_envelope.flags = EnvelopeFlags::ENABLED;

        let s = &mut ins.samples[0];
        s.flags = SampleFlags::LOOP_FORWARD | SampleFlags::LOOP_PINGPONG;
        s.volume = 100;
        s.relative_note = 100;
        s.length = 1000;
        s.loop_start = 900;
        s.loop_length = 200;

        let s = &mut ins.samples[1];
        s.length = -7;
        s.relative_note = -100;
        s.flags = SampleFlags::LOOP_FORWARD;
        s.loop_start = 0;
        s.loop_length = 4;

        let s = &mut ins.samples[2];
        s.flags = SampleFlags::LOOP_FORWARD | SampleFlags::LOOP_PINGPONG;
        s.length = 1000;
        s.loop_start = 100;
        s.loop_length = 200;

        module.instruments[1] = Some(Box::new(ins));
        module
    }

    // =========================================================================
    // Instrument and sample clamps
    // =========================================================================

    #[test]
    fn test_instrument_clamps() {
        let mut module = messy_module();
        sanitize_module(&mut module);
        let ins = module.instrument(1).unwrap();

        assert_eq!(ins.midi_program, 0);
        assert_eq!(ins.midi_bend, 36);
        assert_eq!(ins.midi_channel, 15);
        assert_eq!(ins.auto_vibrato.depth, 0x0F);
        assert_eq!(ins.auto_vibrato.rate, 0x3F);
        assert_eq!(ins.auto_vibrato.waveform, 0);
        assert!(ins.note_to_sample.iter().all(|&s| s == 15));

        let env = &ins.volume_envelope;
        assert_eq!(env.length, 12);
        assert_eq!(env.sustain, 11);
        assert_eq!(env.loop_start, 11);
        assert_eq!(env.loop_end, 11);
        assert_eq!(env.points[0], EnvelopePoint { x: 32767, y: 64 });

        assert_eq!(ins.panning_envelope.points[3], EnvelopePoint { x: 100, y: 63 });
    }

    #[test]
    fn test_sample_clamps() {
        let mut module = messy_module();
        sanitize_module(&mut module);
        let ins = module.instrument(1).unwrap();

        // Loop end past the sample: loop disabled, both bits cleared
        let s = &ins.samples[0];
        assert_eq!(s.volume, 64);
        assert_eq!(s.relative_note, 71);
        assert_eq!((s.loop_start, s.loop_length), (0, 0));
        assert!(!s.flags.contains(SampleFlags::LOOP_FORWARD));
        assert!(!s.flags.contains(SampleFlags::LOOP_PINGPONG));

        let s = &ins.samples[1];
        assert_eq!(s.length, 0);
        assert_eq!(s.relative_note, -48);
        assert_eq!(s.loop_length, 0);

        // Valid loop with both bits: ping-pong wins
        let s = &ins.samples[2];
        assert_eq!(s.flags, SampleFlags::LOOP_PINGPONG);
        assert_eq!((s.loop_start, s.loop_length), (100, 200));
    }

    #[test]
    fn test_sample_length_upper_bound() {
        let mut s = Sample {
            length: i32::MAX,
            loop_start: 0,
            loop_length: i32::MAX,
            flags: SampleFlags::LOOP_FORWARD,
            ..Default::default()
        };
        sanitize_sample(&mut s);
        assert_eq!(s.length, MAX_SAMPLE_LEN);
        assert_eq!(s.loop_length, 0);
        assert!(!s.flags.contains(SampleFlags::LOOP_FORWARD));
    }

    #[test]
    fn test_loop_overflow_does_not_wrap() {
        let mut s = Sample {
            length: 100,
            loop_start: i32::MAX,
            loop_length: i32::MAX,
            flags: SampleFlags::LOOP_FORWARD,
            ..Default::default()
        };
        sanitize_sample(&mut s);
        assert_eq!((s.loop_start, s.loop_length), (0, 0));
    }

    #[test]
    fn test_loop_invariant_holds() {
        let mut module = messy_module();
        sanitize_module(&mut module);
        for ins in module.instruments.iter().flatten() {
            for s in &ins.samples {
                let looped = s.flags.bits() & SampleFlags::LOOP_MASK.bits() != 0;
                assert!(!looped || s.loop_start + s.loop_length <= s.length);
                assert!(s.loop_start >= 0 && s.loop_length >= 0);
            }
        }
    }

    // =========================================================================
    // Song and pattern clamps
    // =========================================================================

    #[test]
    fn test_song_clamps() {
        let mut module = messy_module();
        sanitize_module(&mut module);
        let song = &module.song;

        assert_eq!(song.num_channels, 32);
        assert_eq!(song.song_length, 1);
        assert_eq!(song.song_loop_start, 0);
        assert_eq!(song.bpm, 32);
        assert_eq!(song.speed, 31);
        assert_eq!(song.initial_speed, 31);
        assert_eq!(song.global_volume, 64);
    }

    #[test]
    fn test_channel_rounding() {
        let mut song = Song::default();
        for (input, expected) in [(0, 2), (1, 2), (3, 4), (8, 8), (31, 32), (40, 32), (-3, 2)] {
            song.num_channels = input;
            sanitize_song(&mut song);
            assert_eq!(song.num_channels, expected, "input {}", input);
        }
    }

    #[test]
    fn test_pattern_rows_and_notes() {
        let mut module = messy_module();
        sanitize_module(&mut module);

        assert_eq!(module.pattern_rows[0], 64);
        assert_eq!(module.pattern_rows[1], 64);
        assert_eq!(module.pattern_rows[2], 256);
        assert_eq!(module.pattern_rows[3], 64);

        let pattern = module.pattern(0).unwrap();
        for note in pattern.cells() {
            assert!(note.note <= NOTE_OFF);
            assert!(usize::from(note.instrument) <= MAX_INSTRUMENTS);
            assert!(note.effect <= MAX_EFFECT);
            if note.effect == 0 && note.effect_param == 0 {
                continue;
            }
            assert_eq!(note.effect_param, 0x77);
        }
        // Cell 36 had effect 36: opcode and operand zeroed
        assert_eq!(pattern.cells()[36].effect, 0);
        assert_eq!(pattern.cells()[36].effect_param, 0);
        assert_eq!(pattern.cells()[35].effect, 35);
    }

    #[test]
    fn test_unused_channels_cleared() {
        let mut module = Module::new();
        module.song.num_channels = 4;
        let mut pattern = Pattern::new();
        for note in pattern.cells_mut() {
            note.note = 49;
            note.instrument = 1;
        }
        module.patterns[5] = Some(pattern);

        sanitize_module(&mut module);

        let pattern = module.pattern(5).unwrap();
        for row in 0..MAX_PATTERN_ROWS {
            let cells = pattern.row(row);
            assert!(cells[..4].iter().all(|n| n.note == 49 && n.instrument == 1));
            assert!(cells[4..].iter().all(Note::is_empty));
        }
    }

    // =========================================================================
    // Idempotence and names
    // =========================================================================

    #[test]
    fn test_sanitize_is_idempotent() {
        let mut once = messy_module();
        sanitize_module(&mut once);
        let mut twice = once.clone();
        sanitize_module(&mut twice);
        assert_eq!(once, twice);

        let mut empty = Module::new();
        sanitize_module(&mut empty);
        let snapshot = empty.clone();
        sanitize_module(&mut empty);
        assert_eq!(empty, snapshot);
    }

    #[test]
    fn test_fix_names() {
        let mut module = messy_module();
        module.song.instrument_names[1] = "A very long instrument name indeed".into();
        module.song.instrument_names[2] = "bass\0garbage".into();
        module.instrument_mut(1).unwrap().samples[0].name = "snare \u{1A} ".into();

        fix_names(&mut module);

        assert_eq!(module.song.name, "Funky Tune");
        assert_eq!(module.song.instrument_names[1], "A very long instrument");
        assert_eq!(module.song.instrument_names[2], "bass");
        assert_eq!(module.sample(1, 0).unwrap().name, "snare");
    }

    #[test]
    fn test_fix_name_keeps_inner_spaces() {
        let mut name = String::from("  lead  synth  ");
        fix_name(&mut name, SONG_NAME_LEN);
        assert_eq!(name, "  lead  synth");
    }
}
