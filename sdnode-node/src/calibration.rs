//! Implements the converter calibration engine
//!
//! Calibration drives the converter through warm-up, offset capture, and gain computation, each
//! stage gated on conversion-complete flags. The result is a [`CalibrationSession`] holding the
//! `(offset, gain)` correction pair applied to all subsequent channel samples.

use defmt_or_log::{debug, info};
use sdnode_common::{constants::SETTLE_DISCARD_COUNT, fixed, traits::AdcPort, Channel};
use snafu::Snafu;

use crate::settle::settle_and_read;

/// Stages of the calibration sequence
///
/// A run proceeds strictly forward; there is no transition back to [`Idle`](Self::Idle) other
/// than starting a fresh run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationStage {
    /// No calibration in progress
    Idle,
    /// Converter enabled in offset-measurement mode, flushing the filter after power-on
    Warmup,
    /// Internal DC bias captured as the offset
    OffsetCapture,
    /// Reference channel selected and settling
    ReferenceAcquire,
    /// Computing the Q15 gain ratio from the reference reading
    GainCompute,
    /// A valid `(offset, gain)` pair has been produced
    Calibrated,
}

impl core::fmt::Display for CalibrationStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalibrationStage::Idle => write!(f, "Idle"),
            CalibrationStage::Warmup => write!(f, "Warmup"),
            CalibrationStage::OffsetCapture => write!(f, "OffsetCapture"),
            CalibrationStage::ReferenceAcquire => write!(f, "ReferenceAcquire"),
            CalibrationStage::GainCompute => write!(f, "GainCompute"),
            CalibrationStage::Calibrated => write!(f, "Calibrated"),
        }
    }
}

/// An error for a failed calibration run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Snafu)]
pub enum CalibrationError {
    /// The offset-corrected reference reading was zero
    ///
    /// The gain ratio divides by the corrected reference, so a zero reading is fatal to the
    /// session. There is no automatic retry; the caller decides whether to run calibration again.
    DivideByZero,
}

/// A correction pair produced by a successful calibration run
///
/// A session value existing implies calibration completed; there is no partially-calibrated
/// state. Sessions are not persisted and are superseded by re-running calibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationSession {
    offset: i32,
    gain: i32,
}

impl CalibrationSession {
    /// The raw converter reading captured in offset-measurement mode
    ///
    /// Subtracted from every subsequent raw reading.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The Q15 gain ratio of expected to measured full scale
    pub fn gain(&self) -> i32 {
        self.gain
    }
}

/// Run a full calibration pass on the converter
///
/// Enables the converter, captures the internal offset, measures the reference channel, and
/// computes the gain. Blocks for two settle periods (2 x
/// [`SETTLE_DISCARD_COUNT`](sdnode_common::constants::SETTLE_DISCARD_COUNT) conversions) while
/// the decimation filter flushes.
pub fn run_calibration<P: AdcPort>(port: &mut P) -> Result<CalibrationSession, CalibrationError> {
    CalibrationEngine::new(port).run()
}

struct CalibrationEngine<'a, P: AdcPort> {
    port: &'a mut P,
    stage: CalibrationStage,
}

impl<'a, P: AdcPort> CalibrationEngine<'a, P> {
    fn new(port: &'a mut P) -> Self {
        Self {
            port,
            stage: CalibrationStage::Idle,
        }
    }

    fn advance(&mut self, next: CalibrationStage) {
        debug!("Calibration stage {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }

    fn run(mut self) -> Result<CalibrationSession, CalibrationError> {
        self.advance(CalibrationStage::Warmup);
        // Measure the converter's own DC bias instead of an input
        self.port.set_offset_calibration(true);
        self.port.enable();
        // The filter is flushing from power-on; only the value latched after the full
        // discard loop is trusted
        let warmup_reading = settle_and_read(self.port, SETTLE_DISCARD_COUNT);

        self.advance(CalibrationStage::OffsetCapture);
        let offset = warmup_reading as i32;
        self.port.set_offset_calibration(false);

        self.advance(CalibrationStage::ReferenceAcquire);
        self.port.set_channel(Channel::REFERENCE);
        let measured_max = settle_and_read(self.port, SETTLE_DISCARD_COUNT) as i32;

        self.advance(CalibrationStage::GainCompute);
        let gain =
            fixed::gain_from_reference(measured_max - offset).ok_or(DivideByZeroSnafu.build())?;

        self.advance(CalibrationStage::Calibrated);
        info!("Converter calibrated: offset={} gain={}", offset, gain);
        Ok(CalibrationSession { offset, gain })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!("Warmup", format!("{}", CalibrationStage::Warmup));
        assert_eq!("Calibrated", format!("{}", CalibrationStage::Calibrated));
    }
}
