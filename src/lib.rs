#![cfg_attr(not(test), no_std)]
//! Driver for the Bosch BMP085 barometric pressure and temperature sensor.
//!
//! The sensor is read over I2C at fast-mode speed (400 kHz). After
//! [`Bmp085::connect`] has verified the chip id and cached the factory
//! calibration, every reading triggers a fresh conversion, waits for it to
//! settle and runs the datasheet's fixed-point compensation.

mod fmt;

mod calibration;
mod command;
mod config;
mod error;
mod transport;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

pub use calibration::{Calibration, Mode, TEMPERATURE_DELAY_MS};
pub use command::{Command, Register, CHIP_ID};
pub use config::{Config, DEFAULT_ADDRESS};
pub use error::Error;
pub use transport::{BusSpeed, Transport};

/// Temperature and pressure compensated from the same conversion pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Degrees Celsius
    pub temperature: f32,
    /// Pascal
    pub pressure: f32,
}

pub struct Bmp085<I2C, D> {
    transport: Transport<I2C>,
    delay: D,
    config: Config,
    calibration: Option<Calibration>, // Some once connected
}

impl<I2C, D> Bmp085<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new instance at the default address in ultra high resolution mode.
    /// The bus must be clocked at no more than 400 kHz.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::default())
    }

    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        Self {
            transport: Transport::open(i2c, config.address, config.speed),
            delay,
            config,
            calibration: None,
        }
    }

    /// Verify the chip id and read the eleven calibration coefficients.
    ///
    /// Calling this again while connected repeats the whole sequence against
    /// the live device. On any failure the driver is left unconnected.
    pub fn connect(&mut self) -> Result<(), Error<I2C::Error>> {
        self.calibration = None;
        self.transport.rebind(self.config.address, self.config.speed);

        let id = self
            .transport
            .read_u8(Register::ChipId)
            .map_err(Error::on_open)?;
        if id != CHIP_ID {
            warn!("bmp085: unexpected chip id {}", id);
            return Err(Error::UnexpectedDevice(id));
        }
        debug!("bmp085: chip id {}", id);

        let calibration = Calibration::read(&mut self.transport)?;
        debug!("bmp085: calibration {:?}", calibration);
        self.calibration = Some(calibration);
        Ok(())
    }

    /// Drop the cached calibration. Measurements fail until the next `connect()`.
    pub fn disconnect(&mut self) {
        if self.calibration.take().is_some() {
            debug!("bmp085: disconnected");
        }
    }

    /// Give back the bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.transport.release(), self.delay)
    }

    pub fn is_connected(&self) -> bool {
        self.calibration.is_some()
    }

    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn address(&self) -> SevenBitAddress {
        self.config.address
    }

    pub fn bus_speed(&self) -> BusSpeed {
        self.transport.speed()
    }

    /// Reconfiguring ends the session; call `connect()` again afterwards.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        self.transport.rebind(config.address, config.speed);
        self.disconnect();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.set_config(self.config.with_mode(mode));
    }

    pub fn set_address(&mut self, address: SevenBitAddress) {
        self.set_config(self.config.with_address(address));
    }

    fn connected(&self) -> Result<Calibration, Error<I2C::Error>> {
        self.calibration.ok_or(Error::NotConnected)
    }

    fn send(&mut self, command: Command) -> Result<(), I2C::Error> {
        self.transport
            .write_register(command.register(), command.value())
    }

    /// Chip version register, informational only.
    pub fn chip_version(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.connected()?;
        Ok(self.transport.read_u8(Register::Version)?)
    }

    /// Issue a soft reset. The device restarts as after power-on, so the
    /// session ends and `connect()` has to run again.
    pub fn soft_reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.connected()?;
        self.calibration = None;
        self.send(Command::SoftReset)?;
        Ok(())
    }

    /// Uncompensated temperature (UT). The conversion time is 5 ms in every mode.
    pub fn read_raw_temperature(&mut self) -> Result<i32, Error<I2C::Error>> {
        self.connected()?;
        self.send(Command::ReadTemperature)?;
        self.delay.delay_ms(TEMPERATURE_DELAY_MS);
        let ut = self.transport.read_u16(Register::TempData)? as i32;
        trace!("bmp085: ut {}", ut);
        Ok(ut)
    }

    /// Uncompensated pressure (UP), 16 to 19 bits wide depending on the mode.
    pub fn read_raw_pressure(&mut self) -> Result<i32, Error<I2C::Error>> {
        self.connected()?;
        let mode = self.config.mode;
        self.send(Command::ReadPressure(mode))?;
        self.delay.delay_ms(mode.delay());

        let msb = self.transport.read_u16(Register::PressureData)? as i32;
        let xlsb = self.transport.read_u8(Register::PressureDataXlsb)? as i32;
        let up = ((msb << 8) | xlsb) >> mode.pressure_shift();
        trace!("bmp085: up {}", up);
        Ok(up)
    }

    /// Temperature in degrees Celsius, 0.1 °C resolution.
    pub fn get_temperature(&mut self) -> Result<f32, Error<I2C::Error>> {
        let calibration = self.connected()?;
        let ut = self.read_raw_temperature()?;
        let b5 = calibration.compute_b5(ut).ok_or(Error::DivisionByZero)?;
        Ok(calibration.temperature(b5) as f32 / 10.0)
    }

    /// Pressure in Pa. Pressure compensation needs the current temperature,
    /// so this runs a temperature conversion first.
    pub fn get_pressure(&mut self) -> Result<f32, Error<I2C::Error>> {
        Ok(self.measure()?.pressure)
    }

    /// One temperature and one pressure conversion, both compensated.
    pub fn measure(&mut self) -> Result<Measurement, Error<I2C::Error>> {
        let calibration = self.connected()?;
        let ut = self.read_raw_temperature()?;
        let up = self.read_raw_pressure()?;

        let b5 = calibration.compute_b5(ut).ok_or(Error::DivisionByZero)?;
        let pressure = calibration
            .pressure(b5, up, self.config.mode)
            .ok_or(Error::DivisionByZero)?;

        Ok(Measurement {
            temperature: calibration.temperature(b5) as f32 / 10.0,
            pressure: pressure as f32,
        })
    }

    /// Altitude in meters relative to the given sea level pressure (Pa).
    pub fn get_altitude(&mut self, sea_level_pressure: f32) -> Result<f32, Error<I2C::Error>> {
        let pressure = self.get_pressure()?;
        Ok(44330.0 * (1.0 - libm::powf(pressure / sea_level_pressure, 0.1903)))
    }

    /// Sea level pressure in Pa, given the current altitude in meters.
    pub fn get_sealevel_pressure(&mut self, altitude: f32) -> Result<u32, Error<I2C::Error>> {
        let pressure = self.get_pressure()?;
        Ok((pressure / libm::powf(1.0 - altitude / 44330.0, 5.255)) as u32)
    }
}
