use embedded_hal::i2c::SevenBitAddress;

use crate::calibration::Mode;
use crate::transport::BusSpeed;

/// Factory I2C address of the BMP085.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x77;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: SevenBitAddress,
    pub mode: Mode,
    pub speed: BusSpeed,
}

impl Config {
    pub fn with_address(mut self, address: SevenBitAddress) -> Self {
        self.address = address;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_speed(mut self, speed: BusSpeed) -> Self {
        self.speed = speed;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            mode: Mode::UltraHighRes,
            speed: BusSpeed::Fast,
        }
    }
}
