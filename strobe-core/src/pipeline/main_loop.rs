//! Foreground consumer loop

use crate::command::{Dispatch, Dispatcher};
use crate::traits::{PeripheralDriver, SerialChannel};
use crate::wire::WireSample;

use super::Shared;

/// What happened to a command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandOutcome {
    pub byte: u8,
    pub dispatch: Dispatch,
}

/// Work done by one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Activity {
    /// Command handled this iteration, if one was pending
    pub command: Option<CommandOutcome>,
    /// Sample bytes transmitted
    pub sent: usize,
}

impl Activity {
    pub fn is_idle(&self) -> bool {
        self.command.is_none() && self.sent == 0
    }
}

/// Main loop error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopError<DE, SE> {
    /// Peripheral driver failed
    Driver(DE),
    /// Serial transmit failed
    Serial(SE),
}

/// Main loop tying a driver, its dispatcher and the serial port to the
/// shared interrupt state
pub struct MainLoop<'a, D, X, S> {
    shared: &'a Shared,
    driver: D,
    dispatcher: X,
    serial: S,
}

impl<'a, D, X, S> MainLoop<'a, D, X, S>
where
    D: PeripheralDriver,
    D::Sample: WireSample,
    X: Dispatcher<D>,
    S: SerialChannel,
{
    pub fn new(shared: &'a Shared, driver: D, dispatcher: X, serial: S) -> Self {
        Self {
            shared,
            driver,
            dispatcher,
            serial,
        }
    }

    /// Apply the dispatcher's initial configuration and arm the driver
    pub fn start(&mut self) -> Result<(), LoopError<D::Error, S::Error>> {
        self.driver
            .configure(self.dispatcher.config())
            .map_err(LoopError::Driver)?;
        self.driver.start().map_err(LoopError::Driver)
    }

    /// One pass: pending command, deferred dispatcher work, pending sample
    pub fn poll_once(&mut self) -> Result<Activity, LoopError<D::Error, S::Error>> {
        let mut activity = Activity::default();

        if let Some(byte) = self.shared.take_command() {
            let dispatch = self
                .dispatcher
                .dispatch(byte, &mut self.driver)
                .map_err(LoopError::Driver)?;
            activity.command = Some(CommandOutcome { byte, dispatch });
        }

        self.dispatcher
            .poll(&mut self.driver)
            .map_err(LoopError::Driver)?;

        let driver = &mut self.driver;
        if let Some(sample) = self.shared.take_sample(|| driver.read_latest()) {
            let sample = sample.map_err(LoopError::Driver)?;
            let bytes = sample.encode();
            self.serial
                .send_sequence(&bytes)
                .map_err(LoopError::Serial)?;
            activity.sent = bytes.len();
        }

        Ok(activity)
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn dispatcher(&self) -> &X {
        &self.dispatcher
    }

    pub fn serial(&self) -> &S {
        &self.serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{InputSelect, NoCommands, SynthDispatcher};
    use crate::config::{AdcInput, HoldPolicy, SynthConfig, Tone};
    use crate::synth::{NoteIndex, Timing};
    use crate::signal::SampleSlot;
    use crate::wire::{AccelBurst, AdcSample};
    use strobe_hal::{CountdownTimer, UartTx};

    /// Transmitter capturing every byte
    struct Capture {
        bytes: heapless::Vec<u8, 64>,
    }

    impl Capture {
        fn new() -> Self {
            Self {
                bytes: heapless::Vec::new(),
            }
        }
    }

    impl UartTx for Capture {
        type Error = ();

        fn write_byte(&mut self, byte: u8) -> Result<(), ()> {
            self.bytes.push(byte).map_err(|_| ())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    /// ADC whose result register is a shared slot
    struct MockAdc<'a> {
        result: &'a SampleSlot<i16>,
        input: Option<AdcInput>,
        configure_calls: usize,
        started: bool,
    }

    impl<'a> MockAdc<'a> {
        fn new(result: &'a SampleSlot<i16>) -> Self {
            Self {
                result,
                input: None,
                configure_calls: 0,
                started: false,
            }
        }
    }

    impl PeripheralDriver for MockAdc<'_> {
        type Config = AdcInput;
        type Sample = AdcSample;
        type Error = ();

        fn configure(&mut self, config: AdcInput) -> Result<(), ()> {
            self.input = Some(config);
            self.configure_calls += 1;
            Ok(())
        }

        fn start(&mut self) -> Result<(), ()> {
            self.started = true;
            Ok(())
        }

        fn read_latest(&mut self) -> Result<AdcSample, ()> {
            Ok(AdcSample(self.result.load()))
        }
    }

    struct MockImu {
        burst: [u8; 6],
        reads: usize,
    }

    impl PeripheralDriver for MockImu {
        type Config = ();
        type Sample = AccelBurst;
        type Error = ();

        fn configure(&mut self, _config: ()) -> Result<(), ()> {
            Ok(())
        }

        fn start(&mut self) -> Result<(), ()> {
            Ok(())
        }

        fn read_latest(&mut self) -> Result<AccelBurst, ()> {
            self.reads += 1;
            Ok(AccelBurst(self.burst))
        }
    }

    /// Simulated conversion-complete interrupt
    fn convert(shared: &Shared, result: &SampleSlot<i16>, value: i16) {
        result.store(value);
        shared.on_sample_ready();
    }

    #[test]
    fn test_start_applies_initial_config() {
        let shared = Shared::new();
        let result = SampleSlot::new(0);
        let mut main = MainLoop::new(
            &shared,
            MockAdc::new(&result),
            InputSelect::new(AdcInput::Header),
            Capture::new(),
        );
        main.start().unwrap();
        assert_eq!(main.driver().input, Some(AdcInput::Header));
        assert!(main.driver().started);
    }

    #[test]
    fn test_idle_without_events() {
        let shared = Shared::new();
        let result = SampleSlot::new(0x0123);
        let mut main = MainLoop::new(
            &shared,
            MockAdc::new(&result),
            InputSelect::new(AdcInput::LightSensor),
            Capture::new(),
        );
        main.start().unwrap();
        let activity = main.poll_once().unwrap();
        assert!(activity.is_idle());
        assert!(main.serial().bytes.is_empty());
    }

    #[test]
    fn test_light_sensor_sample() {
        let shared = Shared::new();
        let result = SampleSlot::new(0);
        let mut main = MainLoop::new(
            &shared,
            MockAdc::new(&result),
            InputSelect::new(AdcInput::Header),
            Capture::new(),
        );
        main.start().unwrap();

        shared.on_byte_received(b'C');
        convert(&shared, &result, 0x0ABC);

        let activity = main.poll_once().unwrap();
        assert_eq!(
            activity.command,
            Some(CommandOutcome {
                byte: b'C',
                dispatch: Dispatch::Applied,
            })
        );
        assert_eq!(activity.sent, 2);
        assert_eq!(main.driver().input, Some(AdcInput::LightSensor));
        assert_eq!(main.serial().bytes.as_slice(), &[0x0A, 0xBC]);
    }

    #[test]
    fn test_header_sample() {
        let shared = Shared::new();
        let result = SampleSlot::new(0);
        let mut main = MainLoop::new(
            &shared,
            MockAdc::new(&result),
            InputSelect::new(AdcInput::LightSensor),
            Capture::new(),
        );
        main.start().unwrap();

        shared.on_byte_received(b'J');
        main.poll_once().unwrap();
        convert(&shared, &result, 0x0FFF);
        main.poll_once().unwrap();

        assert_eq!(main.dispatcher().input(), AdcInput::Header);
        assert_eq!(main.serial().bytes.as_slice(), &[0x0F, 0xFF]);
    }

    #[test]
    fn test_negative_sample_is_sign_extended() {
        let shared = Shared::new();
        let result = SampleSlot::new(0);
        let mut main = MainLoop::new(
            &shared,
            MockAdc::new(&result),
            InputSelect::new(AdcInput::LightSensor),
            Capture::new(),
        );
        convert(&shared, &result, -2);
        main.poll_once().unwrap();
        assert_eq!(main.serial().bytes.as_slice(), &[0xFF, 0xFE]);
    }

    #[test]
    fn test_unknown_byte_no_output() {
        let shared = Shared::new();
        let result = SampleSlot::new(0x0555);
        let mut main = MainLoop::new(
            &shared,
            MockAdc::new(&result),
            InputSelect::new(AdcInput::LightSensor),
            Capture::new(),
        );
        main.start().unwrap();

        shared.on_byte_received(0x00);
        let activity = main.poll_once().unwrap();

        assert_eq!(
            activity.command,
            Some(CommandOutcome {
                byte: 0x00,
                dispatch: Dispatch::Ignored,
            })
        );
        assert_eq!(activity.sent, 0);
        assert_eq!(main.dispatcher().input(), AdcInput::LightSensor);
        // Only the configure from start()
        assert_eq!(main.driver().configure_calls, 1);
        assert!(main.serial().bytes.is_empty());
    }

    #[test]
    fn test_late_sample_replaces_unconsumed() {
        let shared = Shared::new();
        let result = SampleSlot::new(0);
        let mut main = MainLoop::new(
            &shared,
            MockAdc::new(&result),
            InputSelect::new(AdcInput::LightSensor),
            Capture::new(),
        );
        convert(&shared, &result, 0x0111);
        convert(&shared, &result, 0x0222);

        main.poll_once().unwrap();
        main.poll_once().unwrap();
        assert_eq!(main.serial().bytes.as_slice(), &[0x02, 0x22]);
    }

    #[test]
    fn test_imu_burst_passthrough() {
        let shared = Shared::new();
        let imu = MockImu {
            burst: [1, 2, 3, 4, 5, 6],
            reads: 0,
        };
        let mut main = MainLoop::new(&shared, imu, NoCommands::new(()), Capture::new());
        main.start().unwrap();

        shared.on_byte_received(b'C');
        shared.on_sample_ready();
        let activity = main.poll_once().unwrap();

        assert_eq!(activity.command.map(|c| c.dispatch), Some(Dispatch::Ignored));
        assert_eq!(activity.sent, 6);
        assert_eq!(main.serial().bytes.as_slice(), &[1, 2, 3, 4, 5, 6]);

        // Flag consumed; no second read
        main.poll_once().unwrap();
        assert_eq!(main.driver().reads, 1);
    }

    #[test]
    fn test_serial_error_propagates() {
        let shared = Shared::new();
        let imu = MockImu {
            burst: [0; 6],
            reads: 0,
        };
        let mut full = Capture::new();
        for _ in 0..64 {
            full.bytes.push(0).unwrap();
        }
        let mut main = MainLoop::new(&shared, imu, NoCommands::new(()), full);
        shared.on_sample_ready();
        assert_eq!(main.poll_once(), Err(LoopError::Serial(())));
    }

    /// ADC whose conversion interrupt is requested while the main loop
    /// copies the previous result out
    struct RacingAdc<'a> {
        result: &'a SampleSlot<i16>,
        irq: Option<std::sync::mpsc::Sender<()>>,
    }

    impl PeripheralDriver for RacingAdc<'_> {
        type Config = AdcInput;
        type Sample = AdcSample;
        type Error = ();

        fn configure(&mut self, _config: AdcInput) -> Result<(), ()> {
            Ok(())
        }

        fn start(&mut self) -> Result<(), ()> {
            Ok(())
        }

        fn read_latest(&mut self) -> Result<AdcSample, ()> {
            if let Some(irq) = self.irq.take() {
                irq.send(()).unwrap();
                // Give the interrupt every chance to land mid-read
                std::thread::sleep(std::time::Duration::from_millis(20));
            }
            Ok(AdcSample(self.result.load()))
        }
    }

    #[test]
    fn test_conversion_during_read_sent_once() {
        let shared = Shared::new();
        let result = SampleSlot::new(0);
        let (irq, pending) = std::sync::mpsc::channel();
        let adc = RacingAdc {
            result: &result,
            irq: Some(irq),
        };
        let mut main = MainLoop::new(
            &shared,
            adc,
            InputSelect::new(AdcInput::LightSensor),
            Capture::new(),
        );
        convert(&shared, &result, 0x0111);

        let (isr_shared, isr_result) = (&shared, &result);
        std::thread::scope(|s| {
            let isr = s.spawn(move || {
                pending.recv().unwrap();
                convert(isr_shared, isr_result, 0x0222);
            });
            main.poll_once().unwrap();
            isr.join().unwrap();
        });
        main.poll_once().unwrap();
        main.poll_once().unwrap();

        assert_eq!(main.serial().bytes.as_slice(), &[0x01, 0x11, 0x02, 0x22]);
    }

    /// Countdown whose first hold delivers command bytes, like the
    /// receive interrupt during a blocking note
    struct HoldTimer<'a> {
        shared: &'a Shared,
        during_hold: &'a [u8],
        holds: usize,
    }

    impl CountdownTimer for HoldTimer<'_> {
        fn start(&mut self, _duration_ms: u32) {
            if self.holds == 0 {
                for &byte in self.during_hold {
                    self.shared.on_byte_received(byte);
                }
            }
            self.holds += 1;
        }

        fn has_elapsed(&mut self) -> bool {
            true
        }
    }

    struct MockSynth {
        tones: heapless::Vec<Tone, 16>,
    }

    impl PeripheralDriver for MockSynth {
        type Config = SynthConfig;
        type Sample = ();
        type Error = ();

        fn configure(&mut self, config: SynthConfig) -> Result<(), ()> {
            self.tones.push(config.tone).map_err(|_| ())
        }

        fn start(&mut self) -> Result<(), ()> {
            Ok(())
        }

        fn read_latest(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_commands_during_blocking_hold_collapse() {
        let shared = Shared::new();
        let timer = HoldTimer {
            shared: &shared,
            during_hold: b"EW",
            holds: 0,
        };
        let dispatcher = SynthDispatcher::new(
            SynthConfig::default(),
            timer,
            Timing::default(),
            HoldPolicy::Blocking,
        );
        let synth = MockSynth {
            tones: heapless::Vec::new(),
        };
        let mut main = MainLoop::new(&shared, synth, dispatcher, Capture::new());
        main.start().unwrap();

        shared.on_byte_received(b'R');
        let first = main.poll_once().unwrap();
        assert_eq!(first.command.map(|c| c.byte), Some(b'R'));

        // 'E' arrived during the hold and was overwritten by 'W'
        let second = main.poll_once().unwrap();
        assert_eq!(
            second.command,
            Some(CommandOutcome {
                byte: b'W',
                dispatch: Dispatch::Applied,
            })
        );
        assert!(main.poll_once().unwrap().is_idle());

        let note = |i| Tone::Note(NoteIndex::new(i).unwrap());
        assert_eq!(
            main.driver().tones.as_slice(),
            &[Tone::Off, note(4), Tone::Off, note(0), Tone::Off]
        );
        assert!(main.serial().bytes.is_empty());
    }
}
