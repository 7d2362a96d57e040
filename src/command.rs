use crate::calibration::Mode;

/// Value of the chip id register on a genuine BMP085.
pub const CHIP_ID: u8 = 0x55;

/// Register map
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    CalAc1,
    CalAc2,
    CalAc3,
    CalAc4,
    CalAc5,
    CalAc6,
    CalB1,
    CalB2,
    CalMb,
    CalMc,
    CalMd,
    ChipId,
    Version,
    SoftReset,
    Control,
    /// Temperature result, 16 bit.
    TempData,
    /// Pressure result MSB/LSB. Shares its address with `TempData`.
    PressureData,
    /// Pressure result XLSB, only meaningful for oversampled modes.
    PressureDataXlsb,
}

impl Register {
    pub fn addr(&self) -> u8 {
        match self {
            Register::CalAc1 => 0xAA,
            Register::CalAc2 => 0xAC,
            Register::CalAc3 => 0xAE,
            Register::CalAc4 => 0xB0,
            Register::CalAc5 => 0xB2,
            Register::CalAc6 => 0xB4,
            Register::CalB1 => 0xB6,
            Register::CalB2 => 0xB8,
            Register::CalMb => 0xBA,
            Register::CalMc => 0xBC,
            Register::CalMd => 0xBE,
            Register::ChipId => 0xD0,
            Register::Version => 0xD1,
            Register::SoftReset => 0xE0,
            Register::Control => 0xF4,
            Register::TempData | Register::PressureData => 0xF6,
            Register::PressureDataXlsb => 0xF8,
        }
    }
}

/// Values written to `Control` (measurements) or `SoftReset`.
pub enum Command {
    ReadTemperature,
    ReadPressure(Mode),
    SoftReset,
}

impl Command {
    pub fn value(&self) -> u8 {
        match self {
            Command::ReadTemperature => 0x2E,
            // oss lives in bits 6..7 of the control byte
            Command::ReadPressure(mode) => 0x34 | (mode.value() << 6),
            Command::SoftReset => 0xB6,
        }
    }

    /// Register the command is written to.
    pub fn register(&self) -> Register {
        match self {
            Command::ReadTemperature | Command::ReadPressure(_) => Register::Control,
            Command::SoftReset => Register::SoftReset,
        }
    }
}
