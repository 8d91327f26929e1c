//! Gateway configuration.
//!
//! All values default to the calibration of the Hyundai/Kia MDPS bus the
//! filter was built for. They are vehicle-specific and must be validated on
//! the target car, not re-derived: nothing in this crate explains *why* a
//! ramp step is 34 or the forced output torque is 2058.
//!
//! With the `serde` feature the config can be deserialized; every field is
//! optional and falls back to its default.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigFault, Result};

/// Bus index of the primary (vehicle) bus.
pub const PRIMARY_BUS: u8 = 0;

/// LKAS11: the steering-assist command sent by the factory camera.
pub const LKAS_COMMAND_ADDRESS: u32 = 832;

/// MDPS12: the periodic steering-torque-sensor report.
pub const MDPS_SENSOR_ADDRESS: u32 = 593;

/// Byte offset of the MDPS12 checksum.
pub const CHECKSUM_OFFSET: usize = 3;

/// Cycles that pass through before the torque rewrite starts.
pub const BASELINE_CYCLES: u16 = 330;

/// Length of one rewrite cycle; the counter wraps at this value.
pub const CYCLE_PERIOD: u16 = 345;

/// Offset subtracted from the column torque on the first rewritten cycle.
pub const FIRST_CYCLE_OFFSET: i32 = 164;

/// Column torque increment applied on every later rewritten cycle.
pub const RAMP_STEP: i32 = 34;

/// Output torque forced while rewriting.
pub const FORCED_OUTPUT_TORQUE: u16 = 2058;

/// Calibration of the MDPS12 torque rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RampCalibration {
    /// Counter values up to and including this pass through unmodified
    pub baseline_cycles: u16,
    /// Counter modulus
    pub cycle_period: u16,
    /// Subtracted from the measured column torque on the first rewrite
    pub first_cycle_offset: i32,
    /// Added to the previous column torque on each later rewrite
    pub ramp_step: i32,
    /// Output torque written on every rewrite
    pub output_torque: u16,
}

impl Default for RampCalibration {
    fn default() -> Self {
        Self {
            baseline_cycles: BASELINE_CYCLES,
            cycle_period: CYCLE_PERIOD,
            first_cycle_offset: FIRST_CYCLE_OFFSET,
            ramp_step: RAMP_STEP,
            output_torque: FORCED_OUTPUT_TORQUE,
        }
    }
}

impl RampCalibration {
    /// Counter value of the first rewritten cycle.
    ///
    /// Saturates at `u16::MAX`, which [`ForwardConfig::validate`] rejects.
    #[inline]
    pub const fn first_rewrite_cycle(&self) -> u16 {
        self.baseline_cycles.saturating_add(1)
    }
}

/// Static configuration of the forwarding filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForwardConfig {
    /// Bus the gateway treats as the vehicle side
    pub primary_bus: u8,
    /// Address whose presence reveals the camera
    pub command_address: u32,
    /// Address of the steering-sensor message to rewrite
    pub sensor_address: u32,
    /// Offset of the checksum byte in the sensor message
    pub checksum_offset: usize,
    /// Torque rewrite calibration
    pub ramp: RampCalibration,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            primary_bus: PRIMARY_BUS,
            command_address: LKAS_COMMAND_ADDRESS,
            sensor_address: MDPS_SENSOR_ADDRESS,
            checksum_offset: CHECKSUM_OFFSET,
            ramp: RampCalibration::default(),
        }
    }
}

impl ForwardConfig {
    /// Check the configuration for values the hooks cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.command_address == self.sensor_address {
            return Err(ConfigFault::AddressCollision.into());
        }
        if self.checksum_offset >= 8 {
            return Err(ConfigFault::ChecksumOffset.into());
        }
        if self.ramp.cycle_period <= self.ramp.first_rewrite_cycle() {
            return Err(ConfigFault::CyclePeriod.into());
        }
        if self.ramp.output_torque > crate::signal::OUTPUT_TORQUE_MAX {
            return Err(ConfigFault::OutputTorque.into());
        }
        Ok(())
    }

    /// Parse a JSON document and validate the result.
    ///
    /// Fields missing from the document keep their defaults.
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
