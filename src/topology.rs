//! Camera topology inference and bridging enablement.
//!
//! The gateway is wired between the vehicle bus and the factory camera
//! harness. Which side the camera is on, and whether it is plugged in at all,
//! is learned from where the LKAS command address shows up:
//!
//! - seen on the primary bus: the camera is present and drives the car
//!   itself, so the gateway must stay out of the way;
//! - seen first on another bus: that bus is the camera bus;
//! - seen on the camera bus with no camera confirmed: the harness switch is
//!   bridging, so the gateway takes over relaying.
//!
//! Camera presence always wins. Once it is confirmed, bridging stays off for
//! the rest of the process lifetime.

use log::{debug, info};

use crate::capability::SafetyCapabilities;
use crate::config::ForwardConfig;
use crate::frame::CanFrame;
use crate::state::{Bridging, ForwardState};

/// Update topology and bridging state from one inbound frame.
///
/// Rules apply in order; a disablement in the same call overrides an
/// enablement.
pub fn observe<C: SafetyCapabilities>(
    config: &ForwardConfig,
    state: &mut ForwardState,
    frame: &CanFrame,
    caps: &mut C,
) {
    let is_command = frame.address() == config.command_address;
    let bus = frame.bus();

    if is_command {
        if bus == config.primary_bus {
            if !state.topology.camera_present {
                info!("camera detected on primary bus {bus}");
            }
            state.topology.camera_present = true;
        } else {
            match state.topology.camera_bus {
                None => {
                    debug!("camera bus found: {bus}");
                    state.topology.camera_bus = Some(bus);
                }
                Some(known) if known != bus => {
                    debug!("command address also seen on bus {bus}, keeping camera bus {known}");
                }
                Some(_) => {}
            }
        }

        if state.topology.camera_bus == Some(bus) && !state.topology.camera_present {
            state.switch_inferred = true;
        }
    }

    if !state.bridging.is_on() && !state.topology.camera_present && state.switch_inferred {
        caps.enable_all();
        state.bridging = Bridging::On;
        info!("bridging enabled");
    }

    if state.bridging.is_on() && state.topology.camera_present {
        state.bridging = Bridging::Off;
        caps.disable_all();
        info!("bridging disabled: camera present");
    }
}
