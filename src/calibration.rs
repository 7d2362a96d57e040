use embedded_hal::i2c::I2c;

use crate::command::Register;
use crate::transport::Transport;

/// Operating mode: pressure oversampling, from lowest power to highest resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    UltraLowPower,
    Standard,
    HighRes,
    #[default]
    UltraHighRes,
}

impl Mode {
    /// Oversampling setting `oss`.
    pub fn value(&self) -> u8 {
        match *self {
            Mode::UltraLowPower => 0,
            Mode::Standard => 1,
            Mode::HighRes => 2,
            Mode::UltraHighRes => 3,
        }
    }

    /// Pressure conversion time in MILLISECONDS.
    pub fn delay(&self) -> u32 {
        // 4.5 / 7.5 / 13.5 / 25.5 ms max, rounded up
        match *self {
            Mode::UltraLowPower => 5,
            Mode::Standard => 8,
            Mode::HighRes => 14,
            Mode::UltraHighRes => 26,
        }
    }

    /// Right shift applied to the assembled 24 bit pressure sample.
    pub fn pressure_shift(&self) -> u8 {
        8 - self.value()
    }
}

/// Temperature conversion time in milliseconds, for every mode.
pub const TEMPERATURE_DELAY_MS: u32 = 5;

/// Factory calibration data read from the EEPROM at 0xAA..=0xBF
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

impl Calibration {
    /// One two-byte transaction per coefficient.
    pub fn read<I2C: I2c>(transport: &mut Transport<I2C>) -> Result<Calibration, I2C::Error> {
        Ok(Calibration {
            ac1: transport.read_i16(Register::CalAc1)?,
            ac2: transport.read_i16(Register::CalAc2)?,
            ac3: transport.read_i16(Register::CalAc3)?,
            ac4: transport.read_u16(Register::CalAc4)?,
            ac5: transport.read_u16(Register::CalAc5)?,
            ac6: transport.read_u16(Register::CalAc6)?,
            b1: transport.read_i16(Register::CalB1)?,
            b2: transport.read_i16(Register::CalB2)?,
            mb: transport.read_i16(Register::CalMb)?,
            mc: transport.read_i16(Register::CalMc)?,
            md: transport.read_i16(Register::CalMd)?,
        })
    }

    /// Temperature term shared by the temperature and pressure formulas.
    ///
    /// `None` when `x1 + md` is zero.
    pub fn compute_b5(&self, ut: i32) -> Option<i32> {
        let x1 = (ut - self.ac6 as i32).wrapping_mul(self.ac5 as i32) >> 15;
        let divisor = x1 + self.md as i32;
        if divisor == 0 {
            return None;
        }
        let x2 = ((self.mc as i32) << 11) / divisor;
        Some(x1 + x2)
    }

    /// Temperature in 0.1 °C.
    pub fn temperature(&self, b5: i32) -> i32 {
        (b5 + 8) >> 4
    }

    /// Pressure in Pa.
    ///
    /// Widths follow the datasheet exactly: everything is `i32` except
    /// `b4` and `b7`, which are `u32`. `None` when `b4` is zero.
    pub fn pressure(&self, b5: i32, up: i32, mode: Mode) -> Option<i32> {
        let oss = mode.value();

        let b6 = b5 - 4000;
        let b6_sq = b6.wrapping_mul(b6) >> 12;
        let mut x1 = (self.b2 as i32).wrapping_mul(b6_sq) >> 11;
        let mut x2 = (self.ac2 as i32).wrapping_mul(b6) >> 11;
        let mut x3 = x1 + x2;
        let b3 = ((((self.ac1 as i32) * 4 + x3) << oss) + 2) >> 2;

        x1 = (self.ac3 as i32).wrapping_mul(b6) >> 13;
        x2 = (self.b1 as i32).wrapping_mul(b6_sq) >> 16;
        x3 = ((x1 + x2) + 2) >> 2;
        let b4: u32 = (self.ac4 as u32).wrapping_mul((x3 + 32768) as u32) >> 15;
        let b7: u32 = (up.wrapping_sub(b3) as u32).wrapping_mul(50000u32 >> oss);
        if b4 == 0 {
            return None;
        }

        // divide late while b7 << 1 still fits
        let p = if b7 < 0x8000_0000 {
            ((b7 << 1) / b4) as i32
        } else {
            ((b7 / b4) << 1) as i32
        };

        x1 = (p >> 8).wrapping_mul(p >> 8);
        x1 = x1.wrapping_mul(3038) >> 16;
        x2 = (-7357i32).wrapping_mul(p) >> 16;
        Some(p + ((x1 + x2 + 3791) >> 4))
    }
}
