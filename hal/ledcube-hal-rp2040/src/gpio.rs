//! GPIO pin strings
//!
//! Port lines are named in the firmware config the same way everywhere:
//! `gpioN`, optionally prefixed with `!` for an active-low line.

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Parse a pin string from config
///
/// Supports formats:
/// - "gpio11" -> (11, false)
/// - "!gpio12" -> (12, true) (inverted/active-low)
pub fn parse_pin_string(s: &str) -> Option<(u8, bool)> {
    let s = s.trim();

    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let num_str = s.strip_prefix("gpio")?;
    let pin: u8 = num_str.parse().ok()?;

    if pin >= GPIO_COUNT as u8 {
        return None;
    }

    Some((pin, inverted))
}

/// Level a port line should take for `pattern`
///
/// `bit` is the line's position in the port register.
pub const fn line_level(pattern: u8, bit: usize, inverted: bool) -> bool {
    let high = (pattern >> bit) & 1 == 1;
    high != inverted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin_string() {
        assert_eq!(parse_pin_string("gpio11"), Some((11, false)));
        assert_eq!(parse_pin_string("!gpio12"), Some((12, true)));
        assert_eq!(parse_pin_string(" gpio0 "), Some((0, false)));
        assert_eq!(parse_pin_string("gpio29"), Some((29, false)));

        // Invalid
        assert_eq!(parse_pin_string("gpio30"), None);
        assert_eq!(parse_pin_string("pin11"), None);
        assert_eq!(parse_pin_string("gpio"), None);
        assert_eq!(parse_pin_string(""), None);
    }

    #[test]
    fn test_line_level() {
        // SS on bit 0, SCLK on bit 1
        assert!(line_level(0b11, 0, false));
        assert!(line_level(0b11, 1, false));
        assert!(line_level(0b01, 0, false));
        assert!(!line_level(0b01, 1, false));
        assert!(!line_level(0b00, 0, false));

        // Active-low lines flip
        assert!(line_level(0b00, 0, true));
        assert!(!line_level(0b01, 0, true));
    }
}
