//! The forwarding filter as a safety hook table.
//!
//! The transport calls into a [`SafetyHooks`] implementation for every frame:
//!
//! ```text
//! rx(frame) ──> topology + checksum calibration
//!                 │
//! tx(frame) ──> MDPS12 rewrite ──> fwd(bus, frame) ──> destination bus
//! ```
//!
//! All hooks run to completion on the transport's execution context. They
//! never allocate or block and do a fixed amount of work per frame.
//!
//! # Example
//!
//! ```
//! use mdps_forward::{Bridging, CanFrame, ForwardConfig, ForwardHooks, SafetyCapabilities, SafetyHooks};
//!
//! struct Permissions;
//!
//! impl SafetyCapabilities for Permissions {
//!     fn enable_all(&mut self) {}
//!     fn disable_all(&mut self) {}
//!     fn set_controls_allowed(&mut self, _allowed: bool) {}
//! }
//!
//! let mut hooks = ForwardHooks::new(ForwardConfig::default(), Permissions).unwrap();
//! hooks.init(0);
//!
//! // The LKAS command shows up on bus 2 only: the gateway starts bridging.
//! hooks.rx(&CanFrame::new(2, 832, &[0u8; 8]).unwrap());
//! assert_eq!(hooks.state().bridging(), Bridging::On);
//!
//! let mut frame = CanFrame::new(0, 0x100, &[0u8; 8]).unwrap();
//! assert!(hooks.tx(&mut frame));
//! assert_eq!(hooks.fwd(0, &frame), Some(2));
//! ```

use crate::capability::SafetyCapabilities;
use crate::config::ForwardConfig;
use crate::error::Result;
use crate::frame::CanFrame;
use crate::state::{ForwardState, Topology};
use crate::{rewrite, router, topology};

/// Callback table invoked by the CAN transport.
pub trait SafetyHooks {
    /// (Re-)initialize the hooks. `param` is the mode parameter passed by the
    /// host and may be ignored.
    fn init(&mut self, param: i16);

    /// Observe a received frame.
    fn rx(&mut self, frame: &CanFrame);

    /// Inspect, and possibly rewrite, a frame about to be transmitted.
    ///
    /// Returns `false` to suppress the frame.
    fn tx(&mut self, frame: &mut CanFrame) -> bool;

    /// Inspect a LIN message about to be transmitted.
    fn tx_lin(&mut self, bus: u8, data: &[u8]) -> bool;

    /// Ignition state derived from a received frame, or `None` to defer to
    /// the transport's default ignition detection.
    fn ignition(&mut self, frame: &CanFrame) -> Option<bool>;

    /// Destination bus for a frame received on `bus`, or `None` to drop it.
    fn fwd(&mut self, bus: u8, frame: &CanFrame) -> Option<u8>;
}

/// Camera-aware bus bridge with MDPS12 rewrite.
#[derive(Debug)]
pub struct ForwardHooks<C: SafetyCapabilities> {
    config: ForwardConfig,
    state: ForwardState,
    caps: C,
}

impl<C: SafetyCapabilities> ForwardHooks<C> {
    /// Create hooks with a validated configuration.
    pub fn new(config: ForwardConfig, caps: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: ForwardState::new(),
            caps,
        })
    }

    pub fn config(&self) -> &ForwardConfig {
        &self.config
    }

    /// Current shared state.
    pub fn state(&self) -> &ForwardState {
        &self.state
    }

    /// Camera topology for diagnostics.
    pub fn topology(&self) -> Topology {
        self.state.topology()
    }

    /// Overwrite the camera topology, e.g. from a diagnostics request.
    ///
    /// Bridging is re-evaluated on the next received frame.
    pub fn set_topology(&mut self, topology: Topology) {
        self.state.topology = topology;
    }

    pub fn capabilities(&self) -> &C {
        &self.caps
    }

    pub fn capabilities_mut(&mut self) -> &mut C {
        &mut self.caps
    }

    /// Tear down the hooks and hand back the capabilities.
    pub fn into_capabilities(self) -> C {
        self.caps
    }
}

impl<C: SafetyCapabilities> SafetyHooks for ForwardHooks<C> {
    /// Clears the actuation flag. Topology and calibration survive a re-init.
    fn init(&mut self, _param: i16) {
        self.caps.set_controls_allowed(false);
    }

    fn rx(&mut self, frame: &CanFrame) {
        topology::observe(&self.config, &mut self.state, frame, &mut self.caps);
        rewrite::calibrate(&self.config, &mut self.state, frame);
    }

    fn tx(&mut self, frame: &mut CanFrame) -> bool {
        if !self.state.bridging().is_on() {
            return false;
        }
        rewrite::rewrite(&self.config, &mut self.state, frame);
        true
    }

    fn tx_lin(&mut self, _bus: u8, _data: &[u8]) -> bool {
        false
    }

    fn ignition(&mut self, _frame: &CanFrame) -> Option<bool> {
        None
    }

    fn fwd(&mut self, bus: u8, _frame: &CanFrame) -> Option<u8> {
        router::route(&self.config, &self.state, bus)
    }
}

// ============================================================================
// embedded_can integration (requires `can` feature)
// ============================================================================

#[cfg(feature = "can")]
impl<C: SafetyCapabilities> ForwardHooks<C> {
    /// Observe an `embedded_can` frame received on `bus`.
    ///
    /// Frames that cannot be represented as classic CAN are ignored.
    pub fn rx_can<F: embedded_can::Frame>(&mut self, bus: u8, frame: &F) {
        if let Ok(frame) = CanFrame::from_frame(bus, frame) {
            self.rx(&frame);
        }
    }

    /// Run the transmit hook on an `embedded_can` frame leaving on `bus`.
    ///
    /// Returns the frame to send, possibly rewritten, or `None` when it is
    /// suppressed.
    pub fn tx_can<F: embedded_can::Frame>(&mut self, bus: u8, frame: &F) -> Option<F> {
        let mut frame = CanFrame::from_frame(bus, frame).ok()?;
        if !self.tx(&mut frame) {
            return None;
        }
        frame.to_frame()
    }
}
