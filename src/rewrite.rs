//! MDPS12 checksum calibration and torque rewrite.
//!
//! While bridging, every outbound MDPS12 frame gets a fresh checksum. Once
//! the cycle counter passes the baseline, the column torque is offset on the
//! first rewritten cycle and then ramped by a fixed step, and the output
//! torque is pinned to a constant.
//!
//! ```text
//! counter:  0 ........ 330 | 331        | 332 ... 344  | 0 ...
//!           pass through   | col - 164  | last + 34    | wrap
//! ```

use log::{info, warn};

use crate::checksum::ChecksumMode;
use crate::config::ForwardConfig;
use crate::frame::CanFrame;
use crate::signal;
use crate::state::ForwardState;

/// Resolve the checksum mode from the first inbound sensor frame.
///
/// Runs once; later frames never change the resolved mode.
pub fn calibrate(config: &ForwardConfig, state: &mut ForwardState, frame: &CanFrame) {
    if state.checksum_mode.is_resolved() || frame.address() != config.sensor_address {
        return;
    }
    let Some(data) = frame.payload() else {
        return;
    };

    state.checksum_mode = ChecksumMode::detect(data, config.checksum_offset);
    info!("sensor checksum resolved: {:?}", state.checksum_mode);
}

/// Rewrite an outbound sensor frame in place.
///
/// Frames of other addresses, short frames, and frames sent while the
/// checksum mode is still unresolved are left untouched. Torque arithmetic
/// wraps; the packed field keeps the low 11 bits.
pub fn rewrite(config: &ForwardConfig, state: &mut ForwardState, frame: &mut CanFrame) {
    if frame.address() != config.sensor_address {
        return;
    }
    let mode = state.checksum_mode;
    if !mode.is_resolved() {
        if !state.unresolved_reported {
            warn!("sensor frames passed through until the checksum mode is resolved");
            state.unresolved_reported = true;
        }
        return;
    }
    let Some(payload) = frame.payload_mut() else {
        return;
    };

    let ramp = &config.ramp;
    let mut work = *payload;

    if state.rewrite_counter > ramp.baseline_cycles {
        let column = if state.rewrite_counter == ramp.first_rewrite_cycle() {
            (signal::column_torque(&work) as i32).wrapping_sub(ramp.first_cycle_offset)
        } else {
            state.last_torque_value.wrapping_add(ramp.ramp_step)
        };
        signal::set_column_torque(&mut work, column);
        signal::set_output_torque(&mut work, ramp.output_torque);
        state.last_torque_value = column;
    }

    work[config.checksum_offset] = 0;
    if let Some(checksum) = mode.compute(&work) {
        work[config.checksum_offset] = checksum;
    }
    *payload = work;

    state.rewrite_counter = (state.rewrite_counter + 1) % ramp.cycle_period;
}
