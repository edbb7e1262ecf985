//! Constants governing converter settling
//!
//!

/// Number of conversions discarded after any converter mode or channel change
///
/// The converter's internal low-pass SINC filter carries state across a channel or mode switch,
/// so the first several results after a change still reflect the previous input. Every settle
/// loop discards this many conversions before trusting a reading.
pub const SETTLE_DISCARD_COUNT: usize = 8;

/// Minimum number of discards required for the decimation filter to fully flush
pub const MIN_SETTLE_DISCARD: usize = 5;

const _: () = assert!(
    SETTLE_DISCARD_COUNT >= MIN_SETTLE_DISCARD,
    "settle discard count must allow the SINC filter to flush"
);
