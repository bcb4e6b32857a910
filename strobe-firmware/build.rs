//! Build script for strobe-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates demo.toml at compile time
//! - Generates the `DEMO` configuration constant from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use strobe_core::config::{ConfigError, DemoConfig};

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, check and deserialize demo.toml
fn load_config() -> DemoConfig {
    // Re-run if demo.toml changes
    println!("cargo:rerun-if-changed=demo.toml");

    let config_path = Path::new("demo.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: demo.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a demo.toml settings file.                ║\n\
            ║  Please create one in the strobe-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read demo.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let value: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in demo.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    validate_sections(&value);

    let config: DemoConfig = match value.try_into() {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid value in demo.toml                               ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in demo.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(describe(e))
        );
    }

    println!("cargo:warning=demo.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Known sections and their keys
const SECTIONS: &[(&str, &[&str])] = &[
    ("serial", &["baudrate"]),
    (
        "adc",
        &[
            "sample_period_ms",
            "initial_input",
            "light_sensor_pos",
            "light_sensor_neg",
            "header_pos",
            "header_neg",
        ],
    ),
    ("imu", &["spi_frequency_hz"]),
    (
        "synth",
        &[
            "note_hold_ms",
            "song_note_ms",
            "song_gap_ms",
            "song_long_gap_ms",
            "hold_policy",
            "initial_waveform",
            "baudrate",
        ],
    ),
];

/// Reject unknown sections and keys (catches typos that would silently
/// fall back to defaults)
fn validate_sections(config: &toml::Value) {
    let table = match config {
        toml::Value::Table(t) => t,
        _ => return,
    };

    let mut errors = Vec::new();

    for (name, section) in table {
        let Some((_, keys)) = SECTIONS.iter().find(|(known, _)| known == name) else {
            errors.push(format!("Unknown section [{}]", name));
            continue;
        };
        let section = match section {
            toml::Value::Table(t) => t,
            _ => {
                errors.push(format!("[{}] must be a table", name));
                continue;
            }
        };
        for key in section.keys() {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
            }
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Unknown settings in demo.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::ZeroBaudrate => "[serial] and [synth] baudrate must be non-zero",
        ConfigError::ZeroSamplePeriod => "[adc] sample_period_ms must be non-zero",
        ConfigError::MuxPinOutOfRange => "[adc] mux pins must be 0-15",
        ConfigError::DegenerateInputPair => "[adc] positive and negative pins must differ",
        ConfigError::SpiFrequencyOutOfRange => "[imu] spi_frequency_hz must be 1-10000000",
        ConfigError::ZeroDuration => "[synth] durations must be non-zero",
    }
}

/// Write `demo_config.rs` into OUT_DIR
fn generate_config(config: &DemoConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let adc = &config.adc;
    let synth = &config.synth;

    let source = format!(
        "/// Settings from demo.toml\n\
         pub const DEMO: DemoConfig = DemoConfig {{\n    \
             serial: SerialSettings {{ baudrate: {baudrate} }},\n    \
             adc: AdcSettings {{\n        \
                 sample_period_ms: {sample_period_ms},\n        \
                 initial_input: AdcInput::{initial_input:?},\n        \
                 light_sensor_pos: {ls_pos},\n        \
                 light_sensor_neg: {ls_neg},\n        \
                 header_pos: {hd_pos},\n        \
                 header_neg: {hd_neg},\n    \
             }},\n    \
             imu: ImuSettings {{ spi_frequency_hz: {spi} }},\n    \
             synth: SynthSettings {{\n        \
                 note_hold_ms: {note_hold},\n        \
                 song_note_ms: {song_note},\n        \
                 song_gap_ms: {song_gap},\n        \
                 song_long_gap_ms: {song_long_gap},\n        \
                 hold_policy: HoldPolicy::{policy:?},\n        \
                 initial_waveform: Waveform::{waveform:?},\n        \
                 baudrate: {synth_baudrate},\n    \
             }},\n\
         }};\n",
        baudrate = config.serial.baudrate,
        sample_period_ms = adc.sample_period_ms,
        initial_input = adc.initial_input,
        ls_pos = adc.light_sensor_pos,
        ls_neg = adc.light_sensor_neg,
        hd_pos = adc.header_pos,
        hd_neg = adc.header_neg,
        spi = config.imu.spi_frequency_hz,
        note_hold = synth.note_hold_ms,
        song_note = synth.song_note_ms,
        song_gap = synth.song_gap_ms,
        song_long_gap = synth.song_long_gap_ms,
        policy = synth.hold_policy,
        waveform = synth.initial_waveform,
        synth_baudrate = synth.baudrate,
    );

    fs::write(out_dir.join("demo_config.rs"), source).unwrap();
}
