//! Forwarding integration test module
//!
//! End-to-end tests driving [`ForwardHooks`] the way a CAN transport would:
//! - `topology`: camera detection, bridging transitions and routing
//! - `rewrite_cycle`: MDPS12 calibration and rewrite over full cycles
//! - `embedded`: the `embedded_can::Frame` entry points

mod embedded;
mod rewrite_cycle;

// Shared test utilities
use embedded_can::{Frame, Id, StandardId};
use mdps_forward::{CanFrame, ForwardConfig, ForwardHooks, SafetyCapabilities};

pub const LKAS11: u32 = 832;
pub const MDPS12: u32 = 593;

/// A simple CAN frame implementation for testing
#[derive(Debug, Clone)]
pub struct MockCanFrame {
    id: Id,
    data: [u8; 8],
    dlc: usize,
}

impl MockCanFrame {
    pub fn new_standard(id: u16, data: &[u8]) -> Self {
        let mut frame_data = [0u8; 8];
        let len = data.len().min(8);
        frame_data[..len].copy_from_slice(&data[..len]);
        Self {
            id: Id::Standard(StandardId::new(id).unwrap()),
            data: frame_data,
            dlc: len,
        }
    }
}

impl Frame for MockCanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > 8 {
            return None;
        }
        let mut frame_data = [0u8; 8];
        frame_data[..data.len()].copy_from_slice(data);
        Some(Self {
            id: id.into(),
            data: frame_data,
            dlc: data.len(),
        })
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > 8 {
            return None;
        }
        Some(Self {
            id: id.into(),
            data: [0u8; 8],
            dlc,
        })
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        self.dlc
    }

    fn data(&self) -> &[u8] {
        &self.data[..self.dlc]
    }
}

/// Records every call made into the global safety layer
#[derive(Debug, Default)]
pub struct RecordingSafety {
    pub controls_allowed: bool,
    pub all_enabled: bool,
    pub enable_calls: u32,
    pub disable_calls: u32,
}

impl SafetyCapabilities for RecordingSafety {
    fn enable_all(&mut self) {
        self.all_enabled = true;
        self.enable_calls += 1;
    }

    fn disable_all(&mut self) {
        self.all_enabled = false;
        self.disable_calls += 1;
    }

    fn set_controls_allowed(&mut self, allowed: bool) {
        self.controls_allowed = allowed;
    }
}

pub fn new_hooks() -> ForwardHooks<RecordingSafety> {
    ForwardHooks::new(ForwardConfig::default(), RecordingSafety::default()).unwrap()
}

pub fn frame(bus: u8, address: u32, data: &[u8]) -> CanFrame {
    CanFrame::new(bus, address, data).unwrap()
}

/// Deterministic xorshift generator for randomized frame sequences
pub struct XorShift(u32);

impl XorShift {
    pub fn new(seed: u32) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}
