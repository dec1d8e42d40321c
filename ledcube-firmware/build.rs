//! Build script for ledcube-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates cube.toml at compile time
//! - Generates the config constants included by `src/config.rs`

use std::collections::HashSet;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// RP2040 GPIO count
const GPIO_COUNT: u64 = 30;

/// Pins the Pico board wires to its own functions
const RESERVED_PINS: [u64; 3] = [23, 24, 29];

/// Maximum port width (one line per pattern bit)
const MAX_PORT_LINES: usize = 8;

/// Validated configuration values
struct CubeConfig {
    pins: Vec<String>,
    reset: u8,
    zero: u8,
    one: u8,
    reset_hold_ns: u32,
    bit_hold_ns: u32,
    repeat: u8,
    fill: u8,
}

fn main() {
    setup_linker();
    let config = validate_config();
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

/// Validate cube.toml configuration at compile time
fn validate_config() -> CubeConfig {
    // Re-run if cube.toml changes
    println!("cargo:rerun-if-changed=cube.toml");

    let config_path = Path::new("cube.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: cube.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a cube.toml configuration file.           ║\n\
            ║  Please create one in the ledcube-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read cube.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in cube.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let pins = validate_port(&config, &mut errors);
    let reset = read_u8(&config, "pulse", "reset", 0b00, &mut errors);
    let zero = read_u8(&config, "pulse", "zero", 0b01, &mut errors);
    let one = read_u8(&config, "pulse", "one", 0b11, &mut errors);
    let reset_hold_ns = read_u32(&config, "pulse", "reset_hold_ns", &mut errors);
    let bit_hold_ns = read_u32(&config, "pulse", "bit_hold_ns", &mut errors);
    let repeat = read_u8(&config, "scan", "repeat", 8, &mut errors);
    let fill = read_fill(&config, &mut errors);

    if zero == one {
        errors.push(format!(
            "[pulse] zero and one are both {:#010b} - bits would be indistinguishable",
            zero
        ));
    }

    if repeat == 0 {
        println!("cargo:warning=[scan] repeat = 0: refresh will write nothing");
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in cube.toml                       ║\n\
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

    println!("cargo:warning=cube.toml validated successfully");

    CubeConfig {
        pins,
        reset,
        zero,
        one,
        reset_hold_ns,
        bit_hold_ns,
        repeat,
        fill,
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate the [port] pin list
fn validate_port(config: &toml::Value, errors: &mut Vec<String>) -> Vec<String> {
    let pins = match config.get("port").and_then(|p| p.get("pins")) {
        Some(toml::Value::Array(pins)) => pins,
        Some(_) => {
            errors.push("[port] pins must be an array of pin strings".to_string());
            return Vec::new();
        }
        None => {
            errors.push("Missing [port] pins - at least one port line is required".to_string());
            return Vec::new();
        }
    };

    if pins.is_empty() {
        errors.push("[port] pins is empty - at least one port line is required".to_string());
    }
    if pins.len() > MAX_PORT_LINES {
        errors.push(format!(
            "[port] pins has {} entries, max {}",
            pins.len(),
            MAX_PORT_LINES
        ));
    }

    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for pin in pins {
        let Some(s) = pin.as_str() else {
            errors.push(format!("[port] pin {} is not a string", pin));
            continue;
        };

        match parse_pin(s) {
            Some(num) if RESERVED_PINS.contains(&num) => {
                errors.push(format!("[port] pin '{}' is reserved by the board", s));
            }
            Some(num) => {
                if !seen.insert(num) {
                    errors.push(format!("[port] pin gpio{} used more than once", num));
                }
            }
            None => {
                errors.push(format!(
                    "[port] invalid pin '{}' (expected gpio0-gpio{})",
                    s,
                    GPIO_COUNT - 1
                ));
            }
        }

        result.push(s.trim().to_string());
    }

    result
}

/// Parse "gpioN" / "!gpioN" into the pin number
fn parse_pin(s: &str) -> Option<u64> {
    let s = s.trim();
    let s = s.strip_prefix('!').unwrap_or(s);
    let num: u64 = s.strip_prefix("gpio")?.parse().ok()?;
    if num >= GPIO_COUNT {
        return None;
    }
    Some(num)
}

/// Read an 8-bit field, falling back to `default` when absent
fn read_u8(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: u8,
    errors: &mut Vec<String>,
) -> u8 {
    match config.get(section).and_then(|s| s.get(key)) {
        None => default,
        Some(toml::Value::Integer(v)) => match u8::try_from(*v) {
            Ok(v) => v,
            Err(_) => {
                errors.push(format!("[{}] {} = {} is out of range (0-255)", section, key, v));
                default
            }
        },
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

/// Read a nanosecond field, defaulting to 0
fn read_u32(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> u32 {
    match config.get(section).and_then(|s| s.get(key)) {
        None => 0,
        Some(toml::Value::Integer(v)) => match u32::try_from(*v) {
            Ok(v) => v,
            Err(_) => {
                errors.push(format!("[{}] {} = {} is out of range", section, key, v));
                0
            }
        },
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
    }
}

/// Read the initial fill value
///
/// Values wider than 8 bits are truncated like any other cell write.
fn read_fill(config: &toml::Value, errors: &mut Vec<String>) -> u8 {
    match config.get("display").and_then(|d| d.get("fill")) {
        None => 0,
        Some(toml::Value::Integer(v)) if *v < 0 => {
            errors.push(format!("[display] fill = {} must not be negative", v));
            0
        }
        Some(toml::Value::Integer(v)) => {
            let truncated = (*v & 0xFF) as u8;
            if *v > 0xFF {
                println!(
                    "cargo:warning=[display] fill = {:#x} truncated to {:#04x}",
                    v, truncated
                );
            }
            truncated
        }
        Some(_) => {
            errors.push("[display] fill must be an integer".to_string());
            0
        }
    }
}

/// Write the validated config as Rust constants
fn generate_config(config: &CubeConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("cube_config.rs")).unwrap();

    let pins = config
        .pins
        .iter()
        .map(|p| format!("{:?}", p))
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(f, "/// Port lines in bit order").unwrap();
    writeln!(f, "pub const PORT_PINS: &[&str] = &[{}];", pins).unwrap();
    writeln!(f, "/// Pattern written before every bit").unwrap();
    writeln!(f, "pub const PULSE_RESET: u8 = {:#010b};", config.reset).unwrap();
    writeln!(f, "/// Pattern for a 0 bit").unwrap();
    writeln!(f, "pub const PULSE_ZERO: u8 = {:#010b};", config.zero).unwrap();
    writeln!(f, "/// Pattern for a 1 bit").unwrap();
    writeln!(f, "pub const PULSE_ONE: u8 = {:#010b};", config.one).unwrap();
    writeln!(f, "/// Hold after the reset write (ns)").unwrap();
    writeln!(f, "pub const RESET_HOLD_NS: u32 = {};", config.reset_hold_ns).unwrap();
    writeln!(f, "/// Hold after the bit write (ns)").unwrap();
    writeln!(f, "pub const BIT_HOLD_NS: u32 = {};", config.bit_hold_ns).unwrap();
    writeln!(f, "/// Passes per column").unwrap();
    writeln!(f, "pub const SCAN_REPEAT: u8 = {};", config.repeat).unwrap();
    writeln!(f, "/// Initial framebuffer value").unwrap();
    writeln!(f, "pub const INITIAL_FILL: u8 = {:#04x};", config.fill).unwrap();
}
