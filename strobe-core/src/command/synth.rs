//! Synthesizer keyboard commands
//!
//! - `'s'` toggles between the sine and triangle tables
//! - `W 3 E 4 R T 6 Y 7 U 8 I` play one note of the octave
//! - `'Q'` plays the song
//!
//! Playback walks a [`Sequencer`], holding each step on a countdown
//! timer. Under [`HoldPolicy::Blocking`] the whole melody plays inside
//! `dispatch`; under [`HoldPolicy::Deferred`] `dispatch` starts it and
//! `poll` advances it whenever the timer elapses.

use strobe_hal::CountdownTimer;

use crate::config::{HoldPolicy, SynthConfig, SynthSettings, Tone};
use crate::synth::{Melody, NoteIndex, Sequencer, Timing};
use crate::traits::PeripheralDriver;

use super::{Dispatch, Dispatcher};

/// Decoded synthesizer command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SynthCommand {
    ToggleWaveform,
    PlayNote(NoteIndex),
    PlaySong,
}

impl SynthCommand {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b's' => Some(SynthCommand::ToggleWaveform),
            b'Q' => Some(SynthCommand::PlaySong),
            _ => NoteIndex::from_key(byte).map(SynthCommand::PlayNote),
        }
    }
}

/// Dispatcher owning the synthesizer selection and note timing
pub struct SynthDispatcher<T> {
    config: SynthConfig,
    timer: T,
    timing: Timing,
    policy: HoldPolicy,
    playing: Option<Sequencer>,
}

impl<T: CountdownTimer> SynthDispatcher<T> {
    pub fn new(initial: SynthConfig, timer: T, timing: Timing, policy: HoldPolicy) -> Self {
        Self {
            config: initial,
            timer,
            timing,
            policy,
            playing: None,
        }
    }

    /// Silent, on the configured waveform
    pub fn from_settings(settings: &SynthSettings, timer: T) -> Self {
        let initial = SynthConfig {
            waveform: settings.initial_waveform,
            tone: Tone::Off,
        };
        Self::new(initial, timer, settings.timing(), settings.hold_policy)
    }

    pub fn current(&self) -> SynthConfig {
        self.config
    }

    pub fn policy(&self) -> HoldPolicy {
        self.policy
    }

    /// Deferred playback still has steps pending
    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    fn apply<D>(&mut self, next: SynthConfig, driver: &mut D) -> Result<(), D::Error>
    where
        D: PeripheralDriver<Config = SynthConfig>,
    {
        driver.configure(next)?;
        self.config = next;
        Ok(())
    }

    fn set_tone<D>(&mut self, tone: Tone, driver: &mut D) -> Result<(), D::Error>
    where
        D: PeripheralDriver<Config = SynthConfig>,
    {
        let next = SynthConfig { tone, ..self.config };
        self.apply(next, driver)
    }

    fn play<D>(&mut self, melody: Melody, driver: &mut D) -> Result<(), D::Error>
    where
        D: PeripheralDriver<Config = SynthConfig>,
    {
        let mut sequence = Sequencer::new(melody, self.timing);
        self.playing = None;

        match self.policy {
            HoldPolicy::Blocking => {
                for step in sequence {
                    self.set_tone(step.tone, driver)?;
                    self.timer.hold(step.hold_ms);
                }
                self.set_tone(Tone::Off, driver)
            }
            HoldPolicy::Deferred => match sequence.next() {
                Some(step) => {
                    self.set_tone(step.tone, driver)?;
                    self.timer.start(step.hold_ms);
                    self.playing = Some(sequence);
                    Ok(())
                }
                None => self.set_tone(Tone::Off, driver),
            },
        }
    }
}

impl<D, T> Dispatcher<D> for SynthDispatcher<T>
where
    D: PeripheralDriver<Config = SynthConfig>,
    T: CountdownTimer,
{
    fn config(&self) -> SynthConfig {
        self.config
    }

    fn dispatch(&mut self, byte: u8, driver: &mut D) -> Result<Dispatch, D::Error> {
        let Some(command) = SynthCommand::from_byte(byte) else {
            return Ok(Dispatch::Ignored);
        };

        match command {
            SynthCommand::ToggleWaveform => {
                let next = SynthConfig {
                    waveform: self.config.waveform.toggled(),
                    ..self.config
                };
                self.apply(next, driver)?;
            }
            SynthCommand::PlayNote(note) => self.play(Melody::Note(note), driver)?,
            SynthCommand::PlaySong => self.play(Melody::Song, driver)?,
        }
        Ok(Dispatch::Applied)
    }

    fn poll(&mut self, driver: &mut D) -> Result<(), D::Error> {
        let Some(mut sequence) = self.playing.take() else {
            return Ok(());
        };
        if !self.timer.has_elapsed() {
            self.playing = Some(sequence);
            return Ok(());
        }

        match sequence.next() {
            Some(step) => {
                self.set_tone(step.tone, driver)?;
                self.timer.start(step.hold_ms);
                self.playing = Some(sequence);
                Ok(())
            }
            None => self.set_tone(Tone::Off, driver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Waveform;
    use crate::synth::SONG;
    use proptest::prelude::*;

    /// Countdown that elapses on the second check after each start
    struct MockTimer {
        starts: heapless::Vec<u32, 64>,
        armed: bool,
    }

    impl MockTimer {
        fn new() -> Self {
            Self {
                starts: heapless::Vec::new(),
                armed: false,
            }
        }
    }

    impl CountdownTimer for MockTimer {
        fn start(&mut self, duration_ms: u32) {
            self.starts.push(duration_ms).unwrap();
            self.armed = true;
        }

        fn has_elapsed(&mut self) -> bool {
            if self.armed {
                self.armed = false;
                false
            } else {
                true
            }
        }
    }

    struct MockSynth {
        configured: heapless::Vec<SynthConfig, 64>,
    }

    impl MockSynth {
        fn new() -> Self {
            Self {
                configured: heapless::Vec::new(),
            }
        }

        fn tones(&self) -> heapless::Vec<Tone, 64> {
            self.configured.iter().map(|c| c.tone).collect()
        }
    }

    impl PeripheralDriver for MockSynth {
        type Config = SynthConfig;
        type Sample = ();
        type Error = ();

        fn configure(&mut self, config: SynthConfig) -> Result<(), ()> {
            self.configured.push(config).map_err(|_| ())
        }

        fn start(&mut self) -> Result<(), ()> {
            Ok(())
        }

        fn read_latest(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    fn dispatcher(policy: HoldPolicy) -> SynthDispatcher<MockTimer> {
        SynthDispatcher::new(
            SynthConfig::default(),
            MockTimer::new(),
            Timing::default(),
            policy,
        )
    }

    fn note(index: u8) -> NoteIndex {
        NoteIndex::new(index).unwrap()
    }

    #[test]
    fn test_command_decoding() {
        assert_eq!(SynthCommand::from_byte(b's'), Some(SynthCommand::ToggleWaveform));
        assert_eq!(SynthCommand::from_byte(b'Q'), Some(SynthCommand::PlaySong));
        assert_eq!(SynthCommand::from_byte(b'W'), Some(SynthCommand::PlayNote(note(0))));
        assert_eq!(SynthCommand::from_byte(b'I'), Some(SynthCommand::PlayNote(note(11))));
        assert_eq!(SynthCommand::from_byte(b'S'), None);
        assert_eq!(SynthCommand::from_byte(b'w'), None);
    }

    #[test]
    fn test_toggle_changes_only_waveform() {
        let mut driver = MockSynth::new();
        let mut synth = dispatcher(HoldPolicy::Blocking);

        assert_eq!(synth.dispatch(b's', &mut driver), Ok(Dispatch::Applied));
        assert_eq!(synth.current().waveform, Waveform::Triangle);
        assert_eq!(synth.current().tone, Tone::Off);

        assert_eq!(synth.dispatch(b's', &mut driver), Ok(Dispatch::Applied));
        assert_eq!(synth.current().waveform, Waveform::Sine);
        assert_eq!(driver.configured.len(), 2);
        assert!(synth.timer.starts.is_empty());
    }

    #[test]
    fn test_blocking_note_sounds_then_silences() {
        let mut driver = MockSynth::new();
        let mut synth = dispatcher(HoldPolicy::Blocking);

        assert_eq!(synth.dispatch(b'E', &mut driver), Ok(Dispatch::Applied));
        assert_eq!(driver.tones().as_slice(), &[Tone::Note(note(2)), Tone::Off]);
        assert_eq!(synth.timer.starts.as_slice(), &[250]);
        assert_eq!(synth.current().tone, Tone::Off);
        assert_eq!(synth.current().waveform, Waveform::Sine);
    }

    #[test]
    fn test_blocking_song_plays_every_note() {
        let mut driver = MockSynth::new();
        let mut synth = dispatcher(HoldPolicy::Blocking);

        assert_eq!(synth.dispatch(b'Q', &mut driver), Ok(Dispatch::Applied));

        let tones = driver.tones();
        // 23 notes, 23 gaps, final silence
        assert_eq!(tones.len(), 47);
        for (i, expected) in SONG.iter().enumerate() {
            assert_eq!(tones[2 * i], Tone::Note(*expected));
            assert_eq!(tones[2 * i + 1], Tone::Off);
        }
        assert_eq!(synth.timer.starts.len(), 46);
        assert_eq!(synth.timer.starts[0], 500);
        assert_eq!(synth.timer.starts[1], 125);
        assert_eq!(synth.timer.starts[15], 250);
        assert!(!synth.is_playing());
    }

    #[test]
    fn test_deferred_note_advances_on_poll() {
        let mut driver = MockSynth::new();
        let mut synth = dispatcher(HoldPolicy::Deferred);

        assert_eq!(synth.dispatch(b'W', &mut driver), Ok(Dispatch::Applied));
        assert!(synth.is_playing());
        assert_eq!(synth.current().tone, Tone::Note(note(0)));

        // Timer still running
        synth.poll(&mut driver).unwrap();
        assert_eq!(synth.current().tone, Tone::Note(note(0)));

        synth.poll(&mut driver).unwrap();
        assert_eq!(synth.current().tone, Tone::Off);
        assert!(!synth.is_playing());

        // Nothing left to do
        synth.poll(&mut driver).unwrap();
        assert_eq!(driver.tones().as_slice(), &[Tone::Note(note(0)), Tone::Off]);
    }

    #[test]
    fn test_deferred_new_note_replaces_playback() {
        let mut driver = MockSynth::new();
        let mut synth = dispatcher(HoldPolicy::Deferred);

        synth.dispatch(b'Q', &mut driver).unwrap();
        synth.poll(&mut driver).unwrap();
        synth.poll(&mut driver).unwrap();
        assert_eq!(synth.current().tone, Tone::Off);

        synth.dispatch(b'I', &mut driver).unwrap();
        assert_eq!(synth.current().tone, Tone::Note(note(11)));
        synth.poll(&mut driver).unwrap();
        synth.poll(&mut driver).unwrap();
        assert!(!synth.is_playing());
        assert_eq!(synth.current().tone, Tone::Off);
    }

    #[test]
    fn test_deferred_toggle_keeps_playing() {
        let mut driver = MockSynth::new();
        let mut synth = dispatcher(HoldPolicy::Deferred);

        synth.dispatch(b'R', &mut driver).unwrap();
        synth.dispatch(b's', &mut driver).unwrap();
        assert!(synth.is_playing());
        assert_eq!(
            synth.current(),
            SynthConfig {
                waveform: Waveform::Triangle,
                tone: Tone::Note(note(4)),
            }
        );
    }

    #[test]
    fn test_from_settings_starts_silent() {
        let settings = SynthSettings {
            initial_waveform: Waveform::Triangle,
            hold_policy: HoldPolicy::Deferred,
            ..SynthSettings::default()
        };
        let synth = SynthDispatcher::from_settings(&settings, MockTimer::new());
        assert_eq!(synth.current().waveform, Waveform::Triangle);
        assert_eq!(synth.current().tone, Tone::Off);
        assert_eq!(synth.policy(), HoldPolicy::Deferred);
    }

    proptest! {
        #[test]
        fn prop_unrecognized_bytes_change_nothing(byte in any::<u8>().prop_filter("not a command", |b| SynthCommand::from_byte(*b).is_none())) {
            let mut driver = MockSynth::new();
            let mut synth = dispatcher(HoldPolicy::Blocking);
            let before = synth.current();
            prop_assert_eq!(synth.dispatch(byte, &mut driver), Ok(Dispatch::Ignored));
            prop_assert_eq!(synth.current(), before);
            prop_assert!(driver.configured.is_empty());
        }
    }
}
