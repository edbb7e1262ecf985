//! Implements the calibrated channel sampler

use sdnode_common::{constants::SETTLE_DISCARD_COUNT, fixed, traits::AdcPort, Channel};

use crate::calibration::CalibrationSession;
use crate::settle::settle_and_read;

/// Read one calibrated sample from a converter channel
///
/// Selects the channel, discards [`SETTLE_DISCARD_COUNT`](sdnode_common::constants::SETTLE_DISCARD_COUNT)
/// conversions so the decimation filter reflects only the new input, then applies the session's
/// offset/gain correction to the fresh reading.
///
/// The result is a best-effort linear-corrected estimate. Out-of-range products are truncated at
/// the native 16-bit width rather than reported as errors. Given identical raw conversions and
/// the same session, the result is identical on every call.
pub fn read_channel<P: AdcPort>(
    port: &mut P,
    session: &CalibrationSession,
    channel: Channel,
) -> i16 {
    port.set_channel(channel);
    // The filter must re-flush on every channel switch, same as during calibration
    let raw = settle_and_read(port, SETTLE_DISCARD_COUNT);
    fixed::correct(raw, session.offset(), session.gain())
}
