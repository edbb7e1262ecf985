//! Common traits
//!
//! These are the narrow register-level ports the acquisition core depends on. Each method is an
//! atomic, immediate register operation with no queuing, implemented concretely per target
//! platform. Host tests provide simulated implementations.

use crate::channel::Channel;
use crate::pins::Mapping;

/// Register-level access to the sigma-delta converter
///
/// The converter registers are a single-owner resource: no other code path may touch them while
/// a settle loop is in progress. There is no lock; the discipline is exclusive foreground access.
pub trait AdcPort {
    /// Enable the converter
    fn enable(&mut self);

    /// Enter or leave the internal offset-measurement mode
    ///
    /// While enabled, the converter measures its own DC bias instead of the selected input.
    fn set_offset_calibration(&mut self, enabled: bool);

    /// Select the input channel for subsequent conversions
    fn set_channel(&mut self, channel: Channel);

    /// Clear the conversion-complete flag
    fn clear_ready_flag(&mut self);

    /// Read the conversion-complete flag
    fn ready_flag(&mut self) -> bool;

    /// Read the latched conversion result register
    ///
    /// Must be called promptly after [`AdcPort::ready_flag`] asserts, before the next
    /// conversion overwrites the latch.
    fn read_conversion(&mut self) -> i16;
}

/// Register-level access to the SPI shift register wired to the radio transceiver
pub trait SpiPort {
    /// Write a byte to the transmit buffer, starting a transfer
    fn write_data(&mut self, byte: u8);

    /// Returns true while the transmit buffer has not yet been taken by the shift register
    fn tx_busy(&mut self) -> bool;

    /// Returns true when a received byte is waiting in the receive buffer
    fn rx_ready(&mut self) -> bool;

    /// Read the received byte, releasing the receive buffer
    fn read_data(&mut self) -> u8;
}

/// Target-side application of peripheral pin mappings
///
/// The mapping registers are protected by lock bits; [`PinRouter::unlock`] and
/// [`PinRouter::lock`] bracket every routing pass.
pub trait PinRouter {
    /// Unlock the pin mapping registers
    fn unlock(&mut self);

    /// Apply one peripheral-to-pin assignment
    fn apply(&mut self, mapping: Mapping);

    /// Re-lock the pin mapping registers
    fn lock(&mut self);
}

/// Register-level access to the op-amp front end
pub trait OpAmpPort {
    /// Apply a full amplifier configuration
    fn configure(&mut self, config: OpAmpConfig);

    /// Retarget the inverting and non-inverting input channels
    fn select_inputs(&mut self, negative: u8, positive: u8);
}

/// Configuration for one op-amp channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OpAmpConfig {
    /// Continue operation while the CPU is in idle mode
    pub run_in_idle: bool,
    /// Continue operation while the CPU is in sleep mode
    pub run_in_sleep: bool,
    /// High power / high speed operation
    pub high_speed: bool,
    /// Send the amplifier output to a pin
    pub output_to_pin: bool,
    /// Inverting input channel selection
    pub negative_input: u8,
    /// Non-inverting input channel selection
    pub positive_input: u8,
}
