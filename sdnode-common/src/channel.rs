//! Types for representing converter input channels
//!

/// A newtype on u8 to enforce a valid sigma-delta converter channel number
///
/// The converter multiplexes a small number of differential inputs; channel numbers outside
/// `0..=3` do not select anything on the target device and are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(u8);

impl Channel {
    /// The highest channel number selectable on the converter
    pub const MAX: u8 = 3;

    /// The channel wired to the known reference voltage
    ///
    /// Measuring this channel during calibration yields the full-scale reading used for the
    /// gain computation.
    pub const REFERENCE: Channel = Channel(0);

    /// Try to create a new Channel
    ///
    /// It will fail if value is invalid (i.e. > [`Channel::MAX`])
    pub const fn new(value: u8) -> Result<Self, InvalidChannelError> {
        if value <= Self::MAX {
            Ok(Channel(value))
        } else {
            Err(InvalidChannelError(value))
        }
    }

    /// Get the raw channel number as a u8
    pub fn raw(&self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Channel> for u8 {
    fn from(value: Channel) -> Self {
        value.raw()
    }
}

/// Error for converting a u8 to a Channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidChannelError(pub u8);

impl core::fmt::Display for InvalidChannelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid converter channel {}", self.0)
    }
}
impl core::error::Error for InvalidChannelError {}

impl TryFrom<u8> for Channel {
    type Error = InvalidChannelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
