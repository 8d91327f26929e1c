//! MDPS12 calibration and rewrite over full counter cycles

use mdps_forward::signal::{column_torque, output_torque};
use mdps_forward::checksum::{crc8, sum8};
use mdps_forward::{ChecksumMode, SafetyHooks};

use super::{LKAS11, MDPS12, frame, new_hooks};

const SAMPLE: [u8; 8] = [0xA5, 0x52, 0x11, 0x77, 0x00, 0x00, 0x3C, 0x99];

fn with_sum8(mut data: [u8; 8]) -> [u8; 8] {
    data[3] = 0;
    data[3] = sum8(&data);
    data
}

fn checksum_of(data: &[u8], mode: ChecksumMode) -> u8 {
    let mut zeroed = [0u8; 8];
    zeroed.copy_from_slice(data);
    zeroed[3] = 0;
    match mode {
        ChecksumMode::Sum8 => sum8(&zeroed),
        _ => crc8(&zeroed),
    }
}

#[test]
fn test_calibration_is_one_shot() {
    let mut hooks = new_hooks();

    hooks.rx(&frame(0, MDPS12, &with_sum8(SAMPLE)));
    assert_eq!(hooks.state().checksum_mode(), ChecksumMode::Sum8);

    for _ in 0..10 {
        hooks.rx(&frame(0, MDPS12, &SAMPLE));
    }
    assert_eq!(hooks.state().checksum_mode(), ChecksumMode::Sum8);
}

#[test]
fn test_full_cycle_with_crc() {
    let mut hooks = new_hooks();
    hooks.rx(&frame(2, LKAS11, &[0u8; 8]));
    hooks.rx(&frame(0, MDPS12, &SAMPLE));
    assert_eq!(hooks.state().checksum_mode(), ChecksumMode::Crc8);

    let mut last = 0i32;
    for cycle in 0u16..345 {
        let mut out = frame(0, MDPS12, &SAMPLE);
        assert!(hooks.tx(&mut out));
        let data = out.payload().unwrap();

        match cycle {
            0..=330 => {
                assert_eq!(column_torque(data), column_torque(&SAMPLE));
                assert_eq!(output_torque(data), output_torque(&SAMPLE));
            }
            331 => {
                last = column_torque(&SAMPLE) as i32 - 164;
                assert_eq!(column_torque(data) as i32, last);
                assert_eq!(output_torque(data), 2058);
            }
            _ => {
                last += 34;
                assert_eq!(column_torque(data) as i32, last);
                assert_eq!(output_torque(data), 2058);
            }
        }
        assert_eq!(data[3], checksum_of(data, ChecksumMode::Crc8));
        assert_eq!(hooks.state().rewrite_counter(), (cycle + 1) % 345);
    }

    assert_eq!(hooks.state().rewrite_counter(), 0);
    assert_eq!(hooks.state().last_torque_value(), last);
}

#[test]
fn test_sum8_vehicle_keeps_valid_checksums() {
    let mut hooks = new_hooks();
    hooks.rx(&frame(2, LKAS11, &[0u8; 8]));
    hooks.rx(&frame(2, MDPS12, &with_sum8(SAMPLE)));

    for _ in 0..400 {
        let mut out = frame(2, MDPS12, &SAMPLE);
        assert!(hooks.tx(&mut out));
        assert_eq!(out.data()[3], checksum_of(out.data(), ChecksumMode::Sum8));
    }
}

#[test]
fn test_no_rewrite_before_calibration() {
    let mut hooks = new_hooks();
    hooks.rx(&frame(2, LKAS11, &[0u8; 8]));

    let mut out = frame(0, MDPS12, &SAMPLE);
    assert!(hooks.tx(&mut out));
    assert_eq!(out.data(), &SAMPLE);
    assert_eq!(hooks.state().rewrite_counter(), 0);
}

#[test]
fn test_short_sensor_frame_passes_through() {
    let mut hooks = new_hooks();
    hooks.rx(&frame(2, LKAS11, &[0u8; 8]));
    hooks.rx(&frame(0, MDPS12, &SAMPLE));

    let mut out = frame(0, MDPS12, &SAMPLE[..6]);
    assert!(hooks.tx(&mut out));
    assert_eq!(out.data(), &SAMPLE[..6]);
    assert_eq!(hooks.state().rewrite_counter(), 0);
}
