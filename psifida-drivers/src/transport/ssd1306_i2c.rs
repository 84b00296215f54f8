//! SSD1306 command/data channel over I2C
//!
//! The controller multiplexes commands and display RAM on one bus
//! address: every write starts with a control byte, 0x00 for a command
//! sequence or 0x40 for display data, followed by the payload.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use psifida_core::traits::{DisplayError, DisplayTransport};

/// Conventional SSD1306 I2C address (0x3C, sometimes 0x3D)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte announcing a command sequence
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte announcing display data
const CONTROL_DATA: u8 = 0x40;

/// Largest payload sent in one bus write (a full display page)
const MAX_CHUNK: usize = 128;

/// Transient bus errors are retried this many times before giving up
const MAX_ATTEMPTS: u8 = 3;

/// SSD1306 transport over a blocking I2C bus
pub struct Ssd1306I2c<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ssd1306I2c<I2C> {
    /// Create a transport at the conventional address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a transport at a specific bus address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Write `payload` in control-byte-framed chunks
    fn write_framed(&mut self, control: u8, payload: &[u8]) -> Result<(), DisplayError> {
        for chunk in payload.chunks(MAX_CHUNK) {
            let mut frame = [0u8; MAX_CHUNK + 1];
            frame[0] = control;
            frame[1..1 + chunk.len()].copy_from_slice(chunk);
            self.write_bounded(&frame[..1 + chunk.len()])?;
        }
        Ok(())
    }

    /// One bus write with the bounded retry policy
    ///
    /// Address-level NACK and bus faults are definitive and reported
    /// directly; everything else (arbitration loss, overrun,
    /// unspecified) is treated as transient and retried, surfacing as
    /// `Timeout` once the attempt budget is spent.
    fn write_bounded(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        for _ in 0..MAX_ATTEMPTS {
            match self.i2c.write(self.address, bytes) {
                Ok(()) => return Ok(()),
                Err(err) => match err.kind() {
                    ErrorKind::NoAcknowledge(_) => return Err(DisplayError::Nack),
                    ErrorKind::Bus => return Err(DisplayError::Bus),
                    _ => continue,
                },
            }
        }
        Err(DisplayError::Timeout)
    }
}

impl<I2C: I2c> DisplayTransport for Ssd1306I2c<I2C> {
    fn write_commands(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        self.write_framed(CONTROL_COMMAND, commands)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.write_framed(CONTROL_DATA, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, Operation, SevenBitAddress};

    #[derive(Debug)]
    struct MockError(ErrorKind);

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Bus stand-in: records write frames, optionally failing first
    struct MockI2c {
        frames: heapless::Vec<heapless::Vec<u8, 160>, 8>,
        last_address: u8,
        attempts: usize,
        fail_next: usize,
        error_kind: ErrorKind,
    }

    impl MockI2c {
        fn new() -> Self {
            Self {
                frames: heapless::Vec::new(),
                last_address: 0,
                attempts: 0,
                fail_next: 0,
                error_kind: ErrorKind::Other,
            }
        }
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c<SevenBitAddress> for MockI2c {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            self.attempts += 1;
            self.last_address = address;
            if self.fail_next > 0 {
                self.fail_next -= 1;
                return Err(MockError(self.error_kind));
            }
            let mut frame = heapless::Vec::new();
            for op in operations {
                if let Operation::Write(bytes) = op {
                    frame.extend_from_slice(bytes).unwrap();
                }
            }
            self.frames.push(frame).unwrap();
            Ok(())
        }
    }

    #[test]
    fn test_commands_framed_with_control_byte() {
        let mut transport = Ssd1306I2c::new(MockI2c::new());
        transport.write_commands(&[0xAE, 0xA6]).unwrap();

        let bus = transport.release();
        assert_eq!(bus.last_address, DEFAULT_ADDRESS);
        assert_eq!(&bus.frames[0][..], &[0x00, 0xAE, 0xA6]);
    }

    #[test]
    fn test_data_framed_with_control_byte() {
        let mut transport = Ssd1306I2c::new(MockI2c::new());
        transport.write_data(&[0x55; 4]).unwrap();

        let bus = transport.release();
        assert_eq!(&bus.frames[0][..], &[0x40, 0x55, 0x55, 0x55, 0x55]);
    }

    #[test]
    fn test_full_page_fits_one_frame() {
        let mut transport = Ssd1306I2c::new(MockI2c::new());
        transport.write_data(&[0xFF; 128]).unwrap();

        let bus = transport.release();
        assert_eq!(bus.frames.len(), 1);
        assert_eq!(bus.frames[0].len(), 129);
    }

    #[test]
    fn test_oversized_payload_is_chunked() {
        let mut transport = Ssd1306I2c::new(MockI2c::new());
        transport.write_data(&[0xFF; 130]).unwrap();

        let bus = transport.release();
        assert_eq!(bus.frames.len(), 2);
        assert_eq!(bus.frames[0].len(), 129);
        assert_eq!(&bus.frames[1][..], &[0x40, 0xFF, 0xFF]);
    }

    #[test]
    fn test_nack_is_definitive() {
        let mut bus = MockI2c::new();
        bus.fail_next = usize::MAX;
        bus.error_kind = ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address);
        let mut transport = Ssd1306I2c::new(bus);

        assert_eq!(transport.write_commands(&[0xAE]), Err(DisplayError::Nack));
        assert_eq!(transport.release().attempts, 1, "a NACK must not be retried");
    }

    #[test]
    fn test_transient_error_is_retried() {
        let mut bus = MockI2c::new();
        bus.fail_next = 2; // fails twice, then recovers
        let mut transport = Ssd1306I2c::new(bus);

        assert_eq!(transport.write_commands(&[0xAE]), Ok(()));
        assert_eq!(transport.release().attempts, 3);
    }

    #[test]
    fn test_retry_budget_surfaces_timeout() {
        let mut bus = MockI2c::new();
        bus.fail_next = usize::MAX;
        let mut transport = Ssd1306I2c::new(bus);

        assert_eq!(transport.write_data(&[0x00]), Err(DisplayError::Timeout));
        assert_eq!(transport.release().attempts, MAX_ATTEMPTS as usize);
    }

    #[test]
    fn test_custom_address() {
        let mut transport = Ssd1306I2c::with_address(MockI2c::new(), 0x3D);
        transport.write_commands(&[0xAF]).unwrap();
        assert_eq!(transport.release().last_address, 0x3D);
    }
}
