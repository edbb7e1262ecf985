//! Implements the op-amp analog front end

use sdnode_common::traits::{OpAmpConfig, OpAmpPort};

/// Production amplifier configuration: high speed, output routed to the converter input pin,
/// both inputs initially on channel 2
const INIT_CONFIG: OpAmpConfig = OpAmpConfig {
    run_in_idle: true,
    run_in_sleep: false,
    high_speed: true,
    output_to_pin: true,
    negative_input: 2,
    positive_input: 2,
};

/// The op-amp channel multiplexer in front of the converter
///
/// Stateless beyond the hardware registers; selecting inputs is two register writes.
#[derive(Debug)]
pub struct OpAmp<P> {
    port: P,
}

impl<P: OpAmpPort> OpAmp<P> {
    /// Create a new OpAmp over an amplifier port
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Apply the production configuration and enable the amplifier
    pub fn init(&mut self) {
        self.port.configure(INIT_CONFIG);
    }

    /// Retarget the inverting and non-inverting input channels
    pub fn select(&mut self, negative: u8, positive: u8) {
        self.port.select_inputs(negative, positive);
    }

    /// Consume the front end and return the underlying port
    pub fn release(self) -> P {
        self.port
    }
}
