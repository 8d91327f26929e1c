//! Cross-bus forwarding decision.

use crate::config::ForwardConfig;
use crate::state::ForwardState;

/// Destination bus for a frame received on `source_bus`.
///
/// Returns `None` ("do not forward") unless bridging is on. While bridging,
/// the primary bus and the camera bus forward to each other and every other
/// bus is dropped.
pub fn route(config: &ForwardConfig, state: &ForwardState, source_bus: u8) -> Option<u8> {
    if !state.bridging().is_on() {
        return None;
    }
    let camera_bus = state.camera_bus()?;

    if source_bus == config.primary_bus {
        Some(camera_bus)
    } else if source_bus == camera_bus {
        Some(config.primary_bus)
    } else {
        None
    }
}
