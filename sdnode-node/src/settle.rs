//! Implements the settle-and-read primitive shared by calibration and sampling

use sdnode_common::traits::AdcPort;

/// Discard `discard_count` conversions, then return the next fresh raw reading
///
/// After any change to the converter mode or channel selection, the internal SINC decimation
/// filter still holds pre-change data. This clears the conversion-complete flag and blocks until
/// it re-asserts, `discard_count` times; the conversion latched by the final assertion is read
/// immediately and returned.
///
/// # Blocking
///
/// Busy-waits on the hardware flag with no timeout. If the converter is disabled or its clock is
/// stopped, this never returns; callers must enable the converter first.
pub fn settle_and_read<P: AdcPort>(port: &mut P, discard_count: usize) -> i16 {
    for _ in 0..discard_count {
        port.clear_ready_flag();
        while !port.ready_flag() {}
    }
    port.read_conversion()
}

#[cfg(test)]
mod test {
    use super::*;
    use sdnode_common::constants::SETTLE_DISCARD_COUNT;
    use sdnode_common::Channel;

    /// Scripted port which asserts ready after a fixed number of polls per conversion
    struct ScriptedPort {
        polls_per_conversion: usize,
        polls_since_clear: usize,
        flag: bool,
        clears: usize,
        asserts_observed: usize,
        conversions: Vec<i16>,
    }

    impl ScriptedPort {
        fn new(polls_per_conversion: usize, conversions: Vec<i16>) -> Self {
            Self {
                polls_per_conversion,
                polls_since_clear: 0,
                flag: false,
                clears: 0,
                asserts_observed: 0,
                conversions,
            }
        }
    }

    impl AdcPort for ScriptedPort {
        fn enable(&mut self) {}
        fn set_offset_calibration(&mut self, _enabled: bool) {}
        fn set_channel(&mut self, _channel: Channel) {}

        fn clear_ready_flag(&mut self) {
            self.flag = false;
            self.polls_since_clear = 0;
            self.clears += 1;
        }

        fn ready_flag(&mut self) -> bool {
            if !self.flag {
                self.polls_since_clear += 1;
                if self.polls_since_clear >= self.polls_per_conversion {
                    self.flag = true;
                    self.asserts_observed += 1;
                }
            }
            self.flag
        }

        fn read_conversion(&mut self) -> i16 {
            self.conversions[self.asserts_observed - 1]
        }
    }

    #[test]
    fn test_discards_exactly_n_conversions() {
        let mut port = ScriptedPort::new(1, (0..10).map(|v| v * 100).collect());
        let value = settle_and_read(&mut port, SETTLE_DISCARD_COUNT);

        // Flag cleared once per discarded conversion, and the 8th latched value is returned
        assert_eq!(SETTLE_DISCARD_COUNT, port.clears);
        assert_eq!(SETTLE_DISCARD_COUNT, port.asserts_observed);
        assert_eq!(700, value);
    }

    #[test]
    fn test_waits_out_slow_conversions() {
        // Each conversion takes 5 polls to complete; the loop must wait, not skip
        let mut port = ScriptedPort::new(5, vec![11; 8]);
        let value = settle_and_read(&mut port, 8);
        assert_eq!(8, port.asserts_observed);
        assert_eq!(11, value);
    }
}
