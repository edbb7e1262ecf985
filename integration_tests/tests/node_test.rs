use assertables::{assert_err, assert_ok};
use integration_tests::prelude::*;

#[test]
fn test_read_before_calibration_fails() {
    let port = SimAdcPort::new();
    let mut node = SensorNode::new(port);
    let channel = Channel::new(1).unwrap();

    assert!(!node.is_calibrated());
    // Must fail fast, never return a numeric value
    assert_eq!(Err(SampleError::NotCalibrated), node.read_channel(channel));
}

#[test]
fn test_calibrate_then_read() {
    let mut port = SimAdcPort::new();
    port.script_calibration(100, 16484);
    port.script_settled(1124);

    let mut node = SensorNode::new(port);
    assert_ok!(node.calibrate());
    assert!(node.is_calibrated());
    assert_eq!(Some(100), node.session().map(|s| s.offset()));

    let channel = Channel::new(1).unwrap();
    assert_eq!(Ok(2047), node.read_channel(channel));
}

#[test]
fn test_failed_calibration_leaves_node_uncalibrated() {
    let mut port = SimAdcPort::new();
    port.script_calibration(7, 7);

    let mut node = SensorNode::new(port);
    assert_err!(node.calibrate());
    assert!(!node.is_calibrated());

    let channel = Channel::new(0).unwrap();
    assert_eq!(Err(SampleError::NotCalibrated), node.read_channel(channel));
}

#[test]
fn test_recalibration_supersedes_session() {
    let mut port = SimAdcPort::new();
    port.script_calibration(100, 16484);
    port.script_calibration(50, 16434);

    let mut node = SensorNode::new(port);
    let first = node.calibrate().unwrap();
    let second = node.calibrate().unwrap();

    assert_eq!(100, first.offset());
    assert_eq!(50, second.offset());
    // Both runs measured the same corrected reference
    assert_eq!(first.gain(), second.gain());
    assert_eq!(Some(&second), node.session());
}

#[test]
fn test_front_end_init_and_select() {
    let mut front_end = OpAmp::new(SimOpAmpPort::new());
    front_end.init();
    front_end.select(1, 0);

    let amp = front_end.release();
    assert_eq!(2, amp.ops().len());
    assert!(matches!(amp.ops()[0], OpAmpOp::Configure(_)));
    assert_eq!(OpAmpOp::SelectInputs(1, 0), amp.ops()[1]);
}
