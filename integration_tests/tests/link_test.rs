use embedded_io::{Read, Write};
use integration_tests::prelude::*;

#[test]
fn test_exchange_round_trip() {
    let mut port = SimSpiPort::new();
    port.push_rx(&[0xA5]);

    let mut link = SpiLink::new(port);
    let rx = link.exchange(0x3C);

    assert_eq!(0xA5, rx);
    assert_eq!(&[0x3Cu8], link.release().written());
}

#[test]
fn test_exchange_waits_for_both_flags() {
    let mut port = SimSpiPort::new();
    port.busy_polls = 3;
    port.wait_polls = 2;
    port.push_rx(&[0x55]);

    let mut link = SpiLink::new(port);
    assert_eq!(0x55, link.exchange(0xAA));

    // Write first, then poll out the transmit flag, then the receive flag, then read
    let port = link.release();
    let expected = [
        SpiOp::Write(0xAA),
        SpiOp::PollTxBusy,
        SpiOp::PollTxBusy,
        SpiOp::PollTxBusy,
        SpiOp::PollTxBusy,
        SpiOp::PollRxReady,
        SpiOp::PollRxReady,
        SpiOp::PollRxReady,
        SpiOp::Read,
    ];
    assert_eq!(&expected, port.ops());
}

#[test]
fn test_embedded_io_write() {
    let mut link = SpiLink::new(SimSpiPort::new());

    let written = link.write(&[1, 2, 3]).unwrap();
    link.flush().unwrap();

    assert_eq!(3, written);
    assert_eq!(&[1u8, 2, 3], link.release().written());
}

#[test]
fn test_embedded_io_read_clocks_idle_bytes() {
    let mut port = SimSpiPort::new();
    port.push_rx(&[0x10, 0x20]);

    let mut link = SpiLink::new(port);
    let mut buf = [0u8; 2];
    let read = link.read(&mut buf).unwrap();

    assert_eq!(2, read);
    assert_eq!([0x10, 0x20], buf);
    // Reads drive the clock by exchanging idle bytes
    assert_eq!(&[0x00u8, 0x00], link.release().written());
}
