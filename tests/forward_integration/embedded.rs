//! `embedded_can::Frame` entry points

use embedded_can::{ExtendedId, Frame, Id};
use mdps_forward::{Bridging, CanFrame, ChecksumMode, raw_address};

use super::{LKAS11, MDPS12, MockCanFrame, new_hooks};

#[test]
fn test_rx_can_drives_topology() {
    let mut hooks = new_hooks();

    hooks.rx_can(2, &MockCanFrame::new_standard(LKAS11 as u16, &[0u8; 8]));
    assert_eq!(hooks.state().bridging(), Bridging::On);

    hooks.rx_can(0, &MockCanFrame::new_standard(LKAS11 as u16, &[0u8; 8]));
    assert_eq!(hooks.state().bridging(), Bridging::Off);
}

#[test]
fn test_tx_can_rewrites_checksum() {
    let mut hooks = new_hooks();
    let sample = [0x12, 0x34, 0x00, 0x55, 0x56, 0x78, 0x9A, 0xBC];

    assert!(hooks.tx_can(0, &MockCanFrame::new_standard(MDPS12 as u16, &sample)).is_none());

    hooks.rx_can(2, &MockCanFrame::new_standard(LKAS11 as u16, &[0u8; 8]));
    hooks.rx_can(0, &MockCanFrame::new_standard(MDPS12 as u16, &sample));
    assert_eq!(hooks.state().checksum_mode(), ChecksumMode::Crc8);

    let out: MockCanFrame = hooks
        .tx_can(0, &MockCanFrame::new_standard(MDPS12 as u16, &sample))
        .unwrap();
    assert_eq!(raw_address(out.id()), MDPS12);
    assert_eq!(out.data(), &[0x12, 0x34, 0x00, 0x0B, 0x56, 0x78, 0x9A, 0xBC]);
}

#[test]
fn test_extended_id_round_trip() {
    let id = ExtendedId::new(0x18DA_F110).unwrap();
    let mock = MockCanFrame::new(Id::Extended(id), &[1, 2, 3]).unwrap();

    let frame = CanFrame::from_frame(1, &mock).unwrap();
    assert_eq!(frame.address(), 0x18DA_F110);

    let back: MockCanFrame = frame.to_frame().unwrap();
    assert!(back.is_extended());
    assert_eq!(back.data(), &[1, 2, 3]);
}
