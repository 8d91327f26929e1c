//! Classic CAN frame as seen by the gateway hooks.
//!
//! A [`CanFrame`] pairs the payload with the index of the bus it arrived on
//! (or is about to leave on). With the `can` feature it converts to and from
//! any [`embedded_can::Frame`] implementation.

use crate::error::{Error, Result};

/// Maximum classic CAN payload length in bytes.
pub const MAX_DATA_LEN: usize = 8;

/// A classic CAN frame tagged with its bus index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanFrame {
    bus: u8,
    address: u32,
    data: [u8; MAX_DATA_LEN],
    len: u8,
}

impl CanFrame {
    /// Create a frame from raw parts.
    ///
    /// Returns [`Error::PayloadTooLong`] when `data` exceeds 8 bytes.
    pub fn new(bus: u8, address: u32, data: &[u8]) -> Result<Self> {
        if data.len() > MAX_DATA_LEN {
            return Err(Error::PayloadTooLong {
                actual: data.len(),
                max: MAX_DATA_LEN,
            });
        }
        let mut frame_data = [0u8; MAX_DATA_LEN];
        frame_data[..data.len()].copy_from_slice(data);
        Ok(Self {
            bus,
            address,
            data: frame_data,
            len: data.len() as u8,
        })
    }

    /// Bus index the frame belongs to.
    #[inline]
    pub const fn bus(&self) -> u8 {
        self.bus
    }

    /// Raw 11-bit or 29-bit identifier.
    #[inline]
    pub const fn address(&self) -> u32 {
        self.address
    }

    /// Number of payload bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the frame carries a full 8-byte payload.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len as usize == MAX_DATA_LEN
    }

    /// Payload bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// The full 8-byte payload, or `None` for shorter frames.
    #[inline]
    pub fn payload(&self) -> Option<&[u8; MAX_DATA_LEN]> {
        self.is_full().then_some(&self.data)
    }

    /// Mutable 8-byte payload, or `None` for shorter frames.
    #[inline]
    pub fn payload_mut(&mut self) -> Option<&mut [u8; MAX_DATA_LEN]> {
        if self.is_full() {
            Some(&mut self.data)
        } else {
            None
        }
    }
}

// ============================================================================
// embedded_can integration (requires `can` feature)
// ============================================================================

/// Flatten an [`embedded_can::Id`] into its raw numeric value.
#[cfg(feature = "can")]
#[inline]
pub fn raw_address(id: embedded_can::Id) -> u32 {
    match id {
        embedded_can::Id::Standard(id) => id.as_raw() as u32,
        embedded_can::Id::Extended(id) => id.as_raw(),
    }
}

#[cfg(feature = "can")]
impl CanFrame {
    /// Capture an `embedded_can` frame received on `bus`.
    ///
    /// Remote frames carry no data and are captured with an empty payload.
    pub fn from_frame<F: embedded_can::Frame>(bus: u8, frame: &F) -> Result<Self> {
        let data = if frame.is_remote_frame() {
            &[][..]
        } else {
            frame.data()
        };
        Self::new(bus, raw_address(frame.id()), data)
    }

    /// Build an `embedded_can` data frame with this frame's address and payload.
    ///
    /// Addresses above the 11-bit range become extended identifiers. Returns
    /// `None` when the address does not fit in 29 bits.
    pub fn to_frame<F: embedded_can::Frame>(&self) -> Option<F> {
        let id: embedded_can::Id = match u16::try_from(self.address)
            .ok()
            .and_then(embedded_can::StandardId::new)
        {
            Some(id) => id.into(),
            None => embedded_can::ExtendedId::new(self.address)?.into(),
        };
        F::new(id, self.data())
    }
}
