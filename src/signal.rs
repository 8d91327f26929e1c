//! Bit-packed torque fields of the MDPS12 payload.
//!
//! | Signal         | Bits | Layout                                      |
//! |----------------|------|---------------------------------------------|
//! | Column torque  | 11   | byte 0 (low 8 bits), byte 1 bits 0-2 (high) |
//! | Output torque  | 12   | byte 6 bits 4-7 (low 4 bits), byte 7 (high) |
//!
//! Setters truncate to the field width and leave every neighbouring bit
//! untouched.

/// Mask of the column torque field.
pub const COLUMN_TORQUE_MAX: u16 = 0x07FF;

/// Mask of the output torque field.
pub const OUTPUT_TORQUE_MAX: u16 = 0x0FFF;

/// Read the column torque.
#[inline]
pub const fn column_torque(data: &[u8; 8]) -> u16 {
    data[0] as u16 | ((data[1] & 0x07) as u16) << 8
}

/// Write the column torque.
///
/// Negative or oversized values wrap into the 11-bit field.
#[inline]
pub fn set_column_torque(data: &mut [u8; 8], value: i32) {
    let raw = (value as u32 & COLUMN_TORQUE_MAX as u32) as u16;
    data[0] = (raw & 0xFF) as u8;
    data[1] = (data[1] & 0xF8) | (raw >> 8) as u8;
}

/// Read the output torque.
#[inline]
pub const fn output_torque(data: &[u8; 8]) -> u16 {
    (data[6] >> 4) as u16 | (data[7] as u16) << 4
}

/// Write the output torque.
#[inline]
pub fn set_output_torque(data: &mut [u8; 8], value: u16) {
    let raw = value & OUTPUT_TORQUE_MAX;
    data[6] = (data[6] & 0x0F) | ((raw & 0x0F) as u8) << 4;
    data[7] = (raw >> 4) as u8;
}
