//! Output port abstraction
//!
//! The driver talks to the shift-register chain through one parallel
//! output register. Every write replaces the whole register value.

/// Writable parallel output port
///
/// Writes are fire-and-forget: there is no return value and no way for the
/// downstream hardware to acknowledge or reject a pattern.
///
/// # Preconditions
///
/// The pins backing the port must already be configured as outputs. Setting
/// pin direction belongs to the board setup code, not to this trait.
pub trait HardwarePort {
    /// Drive the port to `pattern`
    fn write(&mut self, pattern: u8);
}

impl<T: HardwarePort + ?Sized> HardwarePort for &mut T {
    fn write(&mut self, pattern: u8) {
        T::write(self, pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock port that remembers the last pattern
    struct MockPort {
        last: Option<u8>,
        writes: usize,
    }

    impl HardwarePort for MockPort {
        fn write(&mut self, pattern: u8) {
            self.last = Some(pattern);
            self.writes += 1;
        }
    }

    fn drive<P: HardwarePort>(mut port: P, pattern: u8) {
        port.write(pattern);
    }

    #[test]
    fn test_write_through_mut_ref() {
        let mut port = MockPort {
            last: None,
            writes: 0,
        };

        drive(&mut port, 0b11);
        drive(&mut port, 0b01);

        assert_eq!(port.last, Some(0b01));
        assert_eq!(port.writes, 2);
    }
}
