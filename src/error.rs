use core::fmt;

use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The device did not acknowledge its address when the session was opened.
    DeviceUnavailable(E),
    /// The chip id register held something other than `0x55`.
    UnexpectedDevice(u8),
    /// A measurement was requested before `connect()` succeeded.
    NotConnected,
    /// A bus transaction failed.
    Transport(E),
    /// Calibration data produced a zero divisor in the compensation chain.
    DivisionByZero,
}

impl<E: i2c::Error> Error<E> {
    /// Classifies a failure of the first transaction in a session.
    pub(crate) fn on_open(e: E) -> Self {
        match e.kind() {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
            | ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown) => {
                Error::DeviceUnavailable(e)
            }
            _ => Error::Transport(e),
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Error<E> {
        Error::Transport(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DeviceUnavailable(e) => write!(f, "device unavailable: {:?}", e),
            Error::UnexpectedDevice(id) => write!(f, "wrong chip id {:#04x}", id),
            Error::NotConnected => f.write_str("not connected"),
            Error::Transport(e) => write!(f, "bus transaction failed: {:?}", e),
            Error::DivisionByZero => f.write_str("division by zero in compensation"),
        }
    }
}
