use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::command::Register;

/// Bus clock the session is meant to run at.
///
/// `embedded-hal` leaves the clock to the controller, so this is what the
/// caller should have configured the bus with. The BMP085 supports up to
/// fast mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusSpeed {
    Standard,
    Fast,
}

impl BusSpeed {
    pub fn frequency_hz(&self) -> u32 {
        match self {
            BusSpeed::Standard => 100_000,
            BusSpeed::Fast => 400_000,
        }
    }
}

/// Byte channel to one slave address.
pub struct Transport<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
    speed: BusSpeed,
}

impl<I2C> Transport<I2C>
where
    I2C: I2c,
{
    pub fn open(i2c: I2C, address: SevenBitAddress, speed: BusSpeed) -> Self {
        Self {
            i2c,
            address,
            speed,
        }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    pub fn speed(&self) -> BusSpeed {
        self.speed
    }

    pub(crate) fn rebind(&mut self, address: SevenBitAddress, speed: BusSpeed) {
        self.address = address;
        self.speed = speed;
    }

    pub fn write(&mut self, bytes: &[u8]) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, bytes)
    }

    /// Register select followed by a read, with a repeated start in between
    /// so the sensor's register pointer can't be moved by another master.
    pub fn write_read(&mut self, bytes: &[u8], buf: &mut [u8]) -> Result<(), I2C::Error> {
        self.i2c.write_read(self.address, bytes, buf)
    }

    pub fn write_register(&mut self, register: Register, value: u8) -> Result<(), I2C::Error> {
        self.write(&[register.addr(), value])
    }

    pub fn read_u8(&mut self, register: Register) -> Result<u8, I2C::Error> {
        let mut buf = [0; 1];
        self.write_read(&[register.addr()], &mut buf)?;
        Ok(buf[0])
    }

    /// MSB first on the wire.
    pub fn read_u16(&mut self, register: Register) -> Result<u16, I2C::Error> {
        let mut buf = [0; 2];
        self.write_read(&[register.addr()], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    pub fn read_i16(&mut self, register: Register) -> Result<i16, I2C::Error> {
        let mut buf = [0; 2];
        self.write_read(&[register.addr()], &mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}
