//! Bus transport seam.
//!
//! The driver core never talks to a HAL directly; it goes through
//! [`Transport`], a blocking two-wire primitive that reports how many
//! bytes actually moved. That count is what lets the register access
//! layer distinguish a short transfer from a platform failure.
//!
//! [`I2cTransport`] bridges the trait to any [`embedded_hal::i2c::I2c`]
//! peripheral, so on real hardware the driver plugs straight into the
//! HAL of the target board.

use embedded_hal::i2c;

/// Blocking transfer primitive addressed by 7-bit device address.
///
/// `Ok(n)` is the number of bytes transferred; an implementation that
/// cannot report counts should return the full length on success.
/// `Err` carries the platform error unchanged.
pub trait Transport {
    type Error;

    /// Writes `bytes` to the device in one bus transaction.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<usize, Self::Error>;

    /// Reads `buffer.len()` bytes from the device in one bus transaction.
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}

/// [`Transport`] adapter for `embedded-hal` I2C peripherals.
#[derive(Debug)]
pub struct I2cTransport<I2C> {
    bus: I2C,
}

impl<I2C> I2cTransport<I2C> {
    pub fn new(bus: I2C) -> Self {
        Self { bus }
    }

    /// Releases the wrapped bus peripheral.
    pub fn free(self) -> I2C {
        self.bus
    }
}

impl<I2C> Transport for I2cTransport<I2C>
where
    I2C: i2c::I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.bus.write(address, bytes)?;
        Ok(bytes.len())
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        self.bus.read(address, buffer)?;
        Ok(buffer.len())
    }
}
