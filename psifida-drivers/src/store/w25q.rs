//! W25Q-series SPI NOR flash as a glyph store
//!
//! The double-byte glyph table is programmed once into external flash;
//! at runtime the driver only ever issues the classic Read Data command
//! (0x03 + 24-bit big-endian address) and clocks the glyph bytes out.

use embedded_hal::spi::{Error as _, ErrorKind, Operation, SpiDevice};
use psifida_core::traits::{DisplayError, GlyphStore};

/// Read Data command
const CMD_READ_DATA: u8 = 0x03;

/// Transient bus errors are retried this many times before giving up
const MAX_ATTEMPTS: u8 = 3;

/// Glyph store over a blocking SPI device
///
/// `SPI` manages chip select per transaction, so the store can share the
/// bus with other devices between reads.
pub struct W25qGlyphStore<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> W25qGlyphStore<SPI> {
    /// Create a store over an SPI device
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give the bus back
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> GlyphStore for W25qGlyphStore<SPI> {
    /// Read `buffer.len()` bytes starting at `address`
    ///
    /// Wiring faults (mode, frame format, chip select) are definitive;
    /// overruns and unspecified errors are retried, surfacing as
    /// `Timeout` once the attempt budget is spent.
    fn read(&mut self, address: u32, buffer: &mut [u8]) -> Result<(), DisplayError> {
        let command = [
            CMD_READ_DATA,
            (address >> 16) as u8,
            (address >> 8) as u8,
            address as u8,
        ];

        for _ in 0..MAX_ATTEMPTS {
            let result = self
                .spi
                .transaction(&mut [Operation::Write(&command), Operation::Read(buffer)]);
            match result {
                Ok(()) => return Ok(()),
                Err(err) => match err.kind() {
                    ErrorKind::ModeFault
                    | ErrorKind::FrameFormat
                    | ErrorKind::ChipSelectFault => return Err(DisplayError::Bus),
                    _ => continue,
                },
            }
        }
        Err(DisplayError::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::spi::ErrorType;

    #[derive(Debug)]
    struct MockError(ErrorKind);

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// SPI stand-in: records the command frame and fills reads with a
    /// marker byte
    struct MockSpi {
        command: heapless::Vec<u8, 8>,
        attempts: usize,
        fail_next: usize,
        error_kind: ErrorKind,
    }

    impl MockSpi {
        fn new() -> Self {
            Self {
                command: heapless::Vec::new(),
                attempts: 0,
                fail_next: 0,
                error_kind: ErrorKind::Other,
            }
        }
    }

    impl ErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            self.attempts += 1;
            if self.fail_next > 0 {
                self.fail_next -= 1;
                return Err(MockError(self.error_kind));
            }
            self.command.clear();
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        self.command.extend_from_slice(bytes).unwrap();
                    }
                    Operation::Read(buffer) => buffer.fill(0xA5),
                    _ => {}
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_read_sends_command_and_address() {
        let mut store = W25qGlyphStore::new(MockSpi::new());
        let mut glyph = [0u8; 32];
        store.read(0x01_23_45, &mut glyph).unwrap();

        let spi = store.release();
        assert_eq!(&spi.command[..], &[CMD_READ_DATA, 0x01, 0x23, 0x45]);
        assert!(glyph.iter().all(|&b| b == 0xA5));
    }

    #[test]
    fn test_address_high_byte_is_dropped() {
        // W25Q addresses are 24-bit; anything above is truncated
        let mut store = W25qGlyphStore::new(MockSpi::new());
        let mut glyph = [0u8; 4];
        store.read(0xFF_01_00_02, &mut glyph).unwrap();

        let spi = store.release();
        assert_eq!(&spi.command[..], &[CMD_READ_DATA, 0x01, 0x00, 0x02]);
    }

    #[test]
    fn test_wiring_fault_is_definitive() {
        let mut spi = MockSpi::new();
        spi.fail_next = usize::MAX;
        spi.error_kind = ErrorKind::ChipSelectFault;
        let mut store = W25qGlyphStore::new(spi);

        let mut glyph = [0u8; 4];
        assert_eq!(store.read(0, &mut glyph), Err(DisplayError::Bus));
        assert_eq!(store.release().attempts, 1);
    }

    #[test]
    fn test_overrun_is_retried() {
        let mut spi = MockSpi::new();
        spi.fail_next = 1;
        spi.error_kind = ErrorKind::Overrun;
        let mut store = W25qGlyphStore::new(spi);

        let mut glyph = [0u8; 4];
        assert_eq!(store.read(0, &mut glyph), Ok(()));
        assert_eq!(store.release().attempts, 2);
    }

    #[test]
    fn test_retry_budget_surfaces_timeout() {
        let mut spi = MockSpi::new();
        spi.fail_next = usize::MAX;
        let mut store = W25qGlyphStore::new(spi);

        let mut glyph = [0u8; 4];
        assert_eq!(store.read(0, &mut glyph), Err(DisplayError::Timeout));
        assert_eq!(store.release().attempts, MAX_ATTEMPTS as usize);
    }
}
