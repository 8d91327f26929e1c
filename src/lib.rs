#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

//! # mdps-forward
//!
//! A transparent in-line CAN filter for a gateway sitting between the factory
//! camera/ADAS bus and the vehicle bus of Hyundai/Kia cars.
//!
//! The filter needs no configuration to decide what to do. From traffic alone
//! it:
//!
//! - **Finds the camera**: infers which bus carries the factory front camera
//!   and whether the camera is plugged in at all
//! - **Decides to bridge**: relays frames between the two buses only when no
//!   camera drives the primary bus
//! - **Rewrites MDPS12**: while bridging, patches the steering-torque-sensor
//!   report and recomputes its checksum with the scheme the vehicle uses
//!
//! All hooks are `no_std`, allocation-free and do bounded work per frame, so
//! they can run directly in a CAN interrupt or receive loop.
//!
//! ## Quick Start
//!
//! ```
//! use mdps_forward::{CanFrame, ForwardConfig, ForwardHooks, SafetyCapabilities, SafetyHooks};
//!
//! #[derive(Default)]
//! struct Permissions {
//!     all_enabled: bool,
//! }
//!
//! impl SafetyCapabilities for Permissions {
//!     fn enable_all(&mut self) {
//!         self.all_enabled = true;
//!     }
//!     fn disable_all(&mut self) {
//!         self.all_enabled = false;
//!     }
//!     fn set_controls_allowed(&mut self, _allowed: bool) {}
//! }
//!
//! let mut hooks = ForwardHooks::new(ForwardConfig::default(), Permissions::default()).unwrap();
//! hooks.init(0);
//!
//! // Camera command seen on bus 2 only: bridge bus 0 <-> bus 2.
//! hooks.rx(&CanFrame::new(2, 832, &[0u8; 8]).unwrap());
//! assert!(hooks.capabilities().all_enabled);
//! assert_eq!(hooks.fwd(2, &CanFrame::new(2, 0x200, &[]).unwrap()), Some(0));
//!
//! // Camera command seen on bus 0: the camera is present, stop bridging.
//! hooks.rx(&CanFrame::new(0, 832, &[0u8; 8]).unwrap());
//! assert!(!hooks.capabilities().all_enabled);
//! assert_eq!(hooks.fwd(2, &CanFrame::new(2, 0x200, &[]).unwrap()), None);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`hooks`] | The [`SafetyHooks`] table and [`ForwardHooks`] |
//! | [`topology`] | Camera detection and bridging enablement |
//! | [`rewrite`] | MDPS12 checksum calibration and torque rewrite |
//! | [`router`] | Cross-bus forwarding decision |
//! | [`checksum`] | Byte-sum and masked CRC-8 |
//! | [`signal`] | Bit-packed MDPS12 torque fields |
//! | [`config`] | [`ForwardConfig`] and calibration constants |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! ## Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `std` (default) | `std::error::Error`, JSON config loading |
//! | `serde` | (De)serializable [`ForwardConfig`] |
//! | `can` (default) | [`embedded_can::Frame`] conversions |

pub mod checksum;
pub mod config;
pub mod error;
pub mod hooks;
pub mod rewrite;
pub mod router;
pub mod signal;
pub mod topology;

mod capability;
mod frame;
mod state;

// Re-export commonly used types at the crate root
pub use capability::SafetyCapabilities;
pub use checksum::ChecksumMode;
pub use config::{ForwardConfig, RampCalibration};
pub use error::{ConfigFault, Error, Result};
#[cfg(feature = "can")]
pub use frame::raw_address;
pub use frame::{CanFrame, MAX_DATA_LEN};
pub use hooks::{ForwardHooks, SafetyHooks};
pub use state::{Bridging, ForwardState, Topology};
