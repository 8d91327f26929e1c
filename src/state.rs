//! Shared gateway state.
//!
//! One [`ForwardState`] lives for the whole process and is threaded through
//! every hook. Topology fields are sticky: once the camera has been seen on
//! the primary bus, or its bus has been found, that knowledge is never
//! dropped, not even by [`SafetyHooks::init`](crate::SafetyHooks::init).

use crate::checksum::ChecksumMode;

/// Whether the gateway is relaying frames between the two buses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bridging {
    /// No decision has been made yet.
    #[default]
    Unknown,
    /// Bridging was switched off because the camera is present.
    Off,
    /// Frames are relayed and MDPS12 is rewritten.
    On,
}

impl Bridging {
    #[inline]
    pub const fn is_on(&self) -> bool {
        matches!(self, Bridging::On)
    }
}

/// Camera topology as exposed to diagnostics.
///
/// Values only settle after a few seconds of live traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Topology {
    /// The command address was seen on the primary bus
    pub camera_present: bool,
    /// Bus on which the command address was first seen off the primary bus
    pub camera_bus: Option<u8>,
}

/// Mutable state shared by all hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardState {
    pub(crate) bridging: Bridging,
    pub(crate) topology: Topology,
    pub(crate) switch_inferred: bool,
    pub(crate) checksum_mode: ChecksumMode,
    pub(crate) rewrite_counter: u16,
    pub(crate) last_torque_value: i32,
    pub(crate) unresolved_reported: bool,
}

impl ForwardState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn bridging(&self) -> Bridging {
        self.bridging
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn camera_present(&self) -> bool {
        self.topology.camera_present
    }

    #[inline]
    pub fn camera_bus(&self) -> Option<u8> {
        self.topology.camera_bus
    }

    /// The command address was seen echoing on the camera bus before any
    /// primary-bus sighting, which means the harness switch bridges the buses.
    #[inline]
    pub fn switch_inferred(&self) -> bool {
        self.switch_inferred
    }

    #[inline]
    pub fn checksum_mode(&self) -> ChecksumMode {
        self.checksum_mode
    }

    /// Position in the MDPS12 rewrite cycle.
    #[inline]
    pub fn rewrite_counter(&self) -> u16 {
        self.rewrite_counter
    }

    /// Column torque written on the previous rewritten cycle.
    #[inline]
    pub fn last_torque_value(&self) -> i32 {
        self.last_torque_value
    }
}
