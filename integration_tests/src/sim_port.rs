//! Simulated hardware ports for host-side testing
//!
//! Each simulator records every register operation in order, so tests can assert not just
//! results but the exact hardware access sequence. Conversion values are scripted; a scripted
//! flag asserts on the first poll, so settle loops run bounded instead of spinning.

use std::collections::VecDeque;

use sdnode_common::traits::{AdcPort, OpAmpConfig, OpAmpPort, PinRouter, SpiPort};
use sdnode_common::{Channel, Mapping};

/// One recorded converter register operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcOp {
    Enable,
    OffsetCalibration(bool),
    SetChannel(u8),
    ClearFlag,
    PollFlag,
    ReadConversion,
}

/// A simulated sigma-delta converter port with scripted conversion values
///
/// Each clear-flag/poll cycle latches the next scripted value, modelling one hardware
/// conversion period. Running the script dry panics, since it means the code under test waited
/// for more conversions than the test provided.
#[derive(Debug, Default)]
pub struct SimAdcPort {
    script: VecDeque<i16>,
    latched: i16,
    ops: Vec<AdcOp>,
}

impl SimAdcPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw conversion values to the script
    pub fn push_conversions(&mut self, values: &[i16]) {
        self.script.extend(values);
    }

    /// Script one settle period: seven stale conversions followed by `fresh`
    pub fn script_settled(&mut self, fresh: i16) {
        self.push_conversions(&[0; 7]);
        self.push_conversions(&[fresh]);
    }

    /// Script a full calibration pass: one settle period latching `offset` in offset mode,
    /// then one latching `reference` on the reference channel
    pub fn script_calibration(&mut self, offset: i16, reference: i16) {
        self.script_settled(offset);
        self.script_settled(reference);
    }

    /// Get the recorded operation log
    pub fn ops(&self) -> &[AdcOp] {
        &self.ops
    }

    /// Clear the recorded operation log
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Count occurrences of one operation in the log
    pub fn count_ops(&self, op: AdcOp) -> usize {
        self.ops.iter().filter(|o| **o == op).count()
    }
}

impl AdcPort for SimAdcPort {
    fn enable(&mut self) {
        self.ops.push(AdcOp::Enable);
    }

    fn set_offset_calibration(&mut self, enabled: bool) {
        self.ops.push(AdcOp::OffsetCalibration(enabled));
    }

    fn set_channel(&mut self, channel: Channel) {
        self.ops.push(AdcOp::SetChannel(channel.raw()));
    }

    fn clear_ready_flag(&mut self) {
        self.ops.push(AdcOp::ClearFlag);
        self.latched = self
            .script
            .pop_front()
            .expect("conversion script exhausted");
    }

    fn ready_flag(&mut self) -> bool {
        self.ops.push(AdcOp::PollFlag);
        true
    }

    fn read_conversion(&mut self) -> i16 {
        self.ops.push(AdcOp::ReadConversion);
        self.latched
    }
}

/// One recorded SPI register operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiOp {
    Write(u8),
    PollTxBusy,
    PollRxReady,
    Read,
}

/// A simulated SPI shift-register port
///
/// `busy_polls`/`wait_polls` control how many status polls each transfer consumes before the
/// flags settle, so tests can verify the link actually waits.
#[derive(Debug, Default)]
pub struct SimSpiPort {
    rx_script: VecDeque<u8>,
    pub busy_polls: usize,
    pub wait_polls: usize,
    busy_remaining: usize,
    wait_remaining: usize,
    written: Vec<u8>,
    ops: Vec<SpiOp>,
}

impl SimSpiPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script bytes to be returned by subsequent reads
    pub fn push_rx(&mut self, bytes: &[u8]) {
        self.rx_script.extend(bytes);
    }

    /// Get all bytes written to the transmit buffer
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Get the recorded operation log
    pub fn ops(&self) -> &[SpiOp] {
        &self.ops
    }
}

impl SpiPort for SimSpiPort {
    fn write_data(&mut self, byte: u8) {
        self.ops.push(SpiOp::Write(byte));
        self.written.push(byte);
        self.busy_remaining = self.busy_polls;
        self.wait_remaining = self.wait_polls;
    }

    fn tx_busy(&mut self) -> bool {
        self.ops.push(SpiOp::PollTxBusy);
        if self.busy_remaining > 0 {
            self.busy_remaining -= 1;
            true
        } else {
            false
        }
    }

    fn rx_ready(&mut self) -> bool {
        self.ops.push(SpiOp::PollRxReady);
        if self.wait_remaining > 0 {
            self.wait_remaining -= 1;
            false
        } else {
            true
        }
    }

    fn read_data(&mut self) -> u8 {
        self.ops.push(SpiOp::Read);
        self.rx_script.pop_front().unwrap_or(0)
    }
}

/// One recorded pin-router operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterOp {
    Unlock,
    Map(Mapping),
    Lock,
}

/// A simulated pin router recording the unlock/map/lock sequence
#[derive(Debug, Default)]
pub struct SimRouter {
    ops: Vec<RouterOp>,
}

impl SimRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[RouterOp] {
        &self.ops
    }
}

impl PinRouter for SimRouter {
    fn unlock(&mut self) {
        self.ops.push(RouterOp::Unlock);
    }

    fn apply(&mut self, mapping: Mapping) {
        self.ops.push(RouterOp::Map(mapping));
    }

    fn lock(&mut self) {
        self.ops.push(RouterOp::Lock);
    }
}

/// One recorded op-amp operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpAmpOp {
    Configure(OpAmpConfig),
    SelectInputs(u8, u8),
}

/// A simulated op-amp port
#[derive(Debug, Default)]
pub struct SimOpAmpPort {
    ops: Vec<OpAmpOp>,
}

impl SimOpAmpPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[OpAmpOp] {
        &self.ops
    }
}

impl OpAmpPort for SimOpAmpPort {
    fn configure(&mut self, config: OpAmpConfig) {
        self.ops.push(OpAmpOp::Configure(config));
    }

    fn select_inputs(&mut self, negative: u8, positive: u8) {
        self.ops.push(OpAmpOp::SelectInputs(negative, positive));
    }
}
