//! Implements the blocking byte link to the radio transceiver

use core::convert::Infallible;

use sdnode_common::traits::SpiPort;

/// Byte clocked out when the link is read without data to send
const IDLE_BYTE: u8 = 0x00;

/// A full-duplex byte link over the SPI shift register
///
/// Every transfer exchanges one byte in each direction. The link blocks until both the
/// transmit-buffer-empty and receive-buffer-full conditions are observed, the same busy-wait
/// idiom as the converter settle loop. Higher layers may also drive the link through the
/// [`embedded_io::Read`] and [`embedded_io::Write`] traits.
#[derive(Debug)]
pub struct SpiLink<P> {
    port: P,
}

impl<P: SpiPort> SpiLink<P> {
    /// Create a new SpiLink over a shift-register port
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Exchange one byte with the transceiver
    ///
    /// Writes `tx`, waits for the shift register to take it, waits for the received byte, and
    /// returns it. Blocks indefinitely if the SPI clock is not running.
    pub fn exchange(&mut self, tx: u8) -> u8 {
        self.port.write_data(tx);
        while self.port.tx_busy() {}
        while !self.port.rx_ready() {}
        self.port.read_data()
    }

    /// Consume the link and return the underlying port
    pub fn release(self) -> P {
        self.port
    }
}

impl<P: SpiPort> embedded_io::ErrorType for SpiLink<P> {
    type Error = Infallible;
}

impl<P: SpiPort> embedded_io::Write for SpiLink<P> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            // Received bytes are dropped on the write path
            self.exchange(byte);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        // exchange() only returns once the shift register is drained
        Ok(())
    }
}

impl<P: SpiPort> embedded_io::Read for SpiLink<P> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        for byte in buf.iter_mut() {
            *byte = self.exchange(IDLE_BYTE);
        }
        Ok(buf.len())
    }
}
