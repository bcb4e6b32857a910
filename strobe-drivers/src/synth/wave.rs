//! Table-driven waveform synthesizer
//!
//! A [`WaveformStream`] repeats a 256-sample table into the DAC at the
//! rate set by the sample-clock period. Changing the tone only changes
//! that period; changing the waveform swaps the table, which is done on a
//! block boundary so a half-sent table never reaches the output.
//!
//! The synthesizer produces no samples: the pipeline never raises its
//! sample flag and `read_latest` yields `()`.

use strobe_core::config::SynthConfig;
use strobe_core::traits::PeripheralDriver;
use strobe_hal::WaveformStream;

/// Waveform synthesizer driver
pub struct WaveSynth<W> {
    stream: W,
    applied: Option<SynthConfig>,
}

impl<W: WaveformStream> WaveSynth<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            applied: None,
        }
    }

    /// Configuration currently on the output, once one has been applied
    pub fn applied(&self) -> Option<SynthConfig> {
        self.applied
    }

    fn wait_block_complete(&mut self) {
        while !self.stream.block_complete() {
            core::hint::spin_loop();
        }
    }
}

impl<W: WaveformStream> PeripheralDriver for WaveSynth<W> {
    type Config = SynthConfig;
    type Sample = ();
    type Error = W::Error;

    fn configure(&mut self, config: SynthConfig) -> Result<(), W::Error> {
        let previous = self.applied;

        if previous.map(|p| p.waveform) != Some(config.waveform) {
            self.wait_block_complete();
            self.stream.load_table(config.waveform.table())?;
        }

        if previous.map(|p| p.tone) != Some(config.tone) {
            self.stream.set_sample_period(config.tone.period())?;
        }

        self.applied = Some(config);
        Ok(())
    }

    /// Make sure a table is loaded; output stays silent until a note plays
    fn start(&mut self) -> Result<(), W::Error> {
        if self.applied.is_none() {
            self.configure(SynthConfig::default())?;
        }
        Ok(())
    }

    fn read_latest(&mut self) -> Result<(), W::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_core::config::{Tone, Waveform};
    use strobe_core::synth::{NoteIndex, SINE_TABLE, TRIANGLE_TABLE};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Load(u16),
        Period(u16),
    }

    /// Stream recording operations; the in-flight block completes after
    /// `busy_polls` checks
    struct MockStream {
        ops: heapless::Vec<Op, 16>,
        busy_polls: usize,
        polls: usize,
    }

    impl MockStream {
        fn new() -> Self {
            Self {
                ops: heapless::Vec::new(),
                busy_polls: 0,
                polls: 0,
            }
        }
    }

    impl WaveformStream for MockStream {
        type Error = ();

        /// Tables are told apart by their second sample
        fn load_table(&mut self, table: &'static [u16]) -> Result<(), ()> {
            assert_eq!(self.busy_polls, 0, "table loaded mid-block");
            self.ops.push(Op::Load(table[1])).map_err(|_| ())
        }

        fn set_sample_period(&mut self, period: u16) -> Result<(), ()> {
            self.ops.push(Op::Period(period)).map_err(|_| ())
        }

        fn block_complete(&mut self) -> bool {
            self.polls += 1;
            if self.busy_polls > 0 {
                self.busy_polls -= 1;
                false
            } else {
                true
            }
        }
    }

    fn sine() -> Op {
        Op::Load(SINE_TABLE[1])
    }

    fn triangle() -> Op {
        Op::Load(TRIANGLE_TABLE[1])
    }

    #[test]
    fn test_tables_distinguishable() {
        assert_ne!(sine(), triangle());
    }

    #[test]
    fn test_start_loads_sine_silent() {
        let mut synth = WaveSynth::new(MockStream::new());
        synth.start().unwrap();
        assert_eq!(synth.stream.ops.as_slice(), &[sine(), Op::Period(0)]);
        assert_eq!(synth.applied(), Some(SynthConfig::default()));
    }

    #[test]
    fn test_start_after_configure_is_noop() {
        let mut synth = WaveSynth::new(MockStream::new());
        synth
            .configure(SynthConfig {
                waveform: Waveform::Triangle,
                tone: Tone::Off,
            })
            .unwrap();
        synth.start().unwrap();
        assert_eq!(synth.stream.ops.as_slice(), &[triangle(), Op::Period(0)]);
    }

    #[test]
    fn test_waveform_switch_waits_for_block() {
        let mut synth = WaveSynth::new(MockStream::new());
        synth.start().unwrap();

        synth.stream.busy_polls = 3;
        synth.stream.polls = 0;
        synth
            .configure(SynthConfig {
                waveform: Waveform::Triangle,
                tone: Tone::Off,
            })
            .unwrap();

        assert_eq!(synth.stream.polls, 4);
        assert_eq!(synth.stream.ops.last(), Some(&triangle()));
    }

    #[test]
    fn test_tone_change_only_sets_period() {
        let mut synth = WaveSynth::new(MockStream::new());
        synth.start().unwrap();
        synth.stream.ops.clear();
        synth.stream.polls = 0;

        let note = NoteIndex::new(0).unwrap();
        synth
            .configure(SynthConfig {
                waveform: Waveform::Sine,
                tone: Tone::Note(note),
            })
            .unwrap();
        synth.configure(SynthConfig::default()).unwrap();

        assert_eq!(synth.stream.ops.as_slice(), &[Op::Period(0x77), Op::Period(0)]);
        assert_eq!(synth.stream.polls, 0);
    }

    #[test]
    fn test_read_latest_is_empty() {
        let mut synth = WaveSynth::new(MockStream::new());
        assert_eq!(synth.read_latest(), Ok(()));
    }
}
