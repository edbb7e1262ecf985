//! Implements the top-level sensor node object

use sdnode_common::{traits::AdcPort, Channel};
use snafu::Snafu;

use crate::calibration::{run_calibration, CalibrationError, CalibrationSession};
use crate::sampler;

/// An error reading a channel through a [`SensorNode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Snafu)]
pub enum SampleError {
    /// A channel read was requested before a successful calibration run
    ///
    /// This is a programmer error in the call sequence; the node fails fast rather than
    /// returning a misleading uncorrected value.
    NotCalibrated,
}

/// The main object representing a sensor node's acquisition side
///
/// Owns the converter port and the current calibration session. The expected call sequence is
/// [`SensorNode::calibrate`] once at startup (or whenever reference conditions may have
/// drifted), then [`SensorNode::read_channel`] per sample. All calls block on conversion-complete
/// flags; there is no scheduler and no cancellation.
#[derive(Debug)]
pub struct SensorNode<P> {
    port: P,
    session: Option<CalibrationSession>,
}

impl<P: AdcPort> SensorNode<P> {
    /// Create a new SensorNode over a converter port
    ///
    /// The node starts uncalibrated; reads fail until [`SensorNode::calibrate`] succeeds.
    pub fn new(port: P) -> Self {
        Self {
            port,
            session: None,
        }
    }

    /// Run the calibration engine and store the resulting session
    ///
    /// On failure the previous session (if any) is kept, since the converter state it describes
    /// has not changed.
    pub fn calibrate(&mut self) -> Result<CalibrationSession, CalibrationError> {
        let session = run_calibration(&mut self.port)?;
        self.session = Some(session);
        Ok(session)
    }

    /// Read one calibrated sample from a channel
    ///
    /// Fails with [`SampleError::NotCalibrated`] if no calibration run has succeeded yet.
    pub fn read_channel(&mut self, channel: Channel) -> Result<i16, SampleError> {
        let session = self.session.as_ref().ok_or(NotCalibratedSnafu.build())?;
        Ok(sampler::read_channel(&mut self.port, session, channel))
    }

    /// Get the current calibration session, if one exists
    pub fn session(&self) -> Option<&CalibrationSession> {
        self.session.as_ref()
    }

    /// Return true once a calibration run has succeeded
    pub fn is_calibrated(&self) -> bool {
        self.session.is_some()
    }

    /// Consume the node and return the underlying port
    pub fn release(self) -> P {
        self.port
    }
}
