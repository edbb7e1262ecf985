//! Types describing remappable peripheral pin assignments
//!

/// Logical peripheral functions which can be routed to a remappable pin
///
/// The SPI clock is a single logical function even though the hardware requires both the
/// clock-output and clock-input register writes on the same pin in master mode; the concrete
/// [`PinRouter`](crate::traits::PinRouter) implementation performs both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinFunction {
    /// SPI serial data input (from the radio transceiver)
    SpiDataIn,
    /// SPI serial data output (to the radio transceiver)
    SpiDataOut,
    /// SPI master clock, routed both out and back into the clock sampler
    SpiClock,
}

impl core::fmt::Display for PinFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PinFunction::SpiDataIn => write!(f, "SpiDataIn"),
            PinFunction::SpiDataOut => write!(f, "SpiDataOut"),
            PinFunction::SpiClock => write!(f, "SpiClock"),
        }
    }
}

/// One peripheral-to-pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mapping {
    /// The remappable pin number (RPn)
    pub pin: u8,
    /// The peripheral function assigned to the pin
    pub function: PinFunction,
}

impl Mapping {
    /// Create a new Mapping
    pub const fn new(pin: u8, function: PinFunction) -> Self {
        Self { pin, function }
    }
}
