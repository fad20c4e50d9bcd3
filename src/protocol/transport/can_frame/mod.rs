//! In-memory representation of a received OpenLCB CAN frame.
use core::fmt;

use embedded_can::{Frame, Id};

use crate::error::CanFrameError;
use crate::protocol::transport::can_id::{CanId, MAX_EXTENDED_ID};

/// Payload length carrying a full 48-bit node id.
pub const NODE_ID_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw CAN frame as handed over by the driver. Plain data, copied by value
/// into and out of the frame queue.
pub struct CanFrame {
    /// Full 29-bit CAN identifier stored inside a `u32`.
    pub id: CanId,
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub dlc: u8,
    /// Payload buffer. Only the first `dlc` bytes are meaningful.
    pub payload: [u8; 8],
}

impl CanFrame {
    /// All-zero frame, used to initialise queue storage.
    pub const EMPTY: CanFrame = CanFrame {
        id: CanId(0),
        dlc: 0,
        payload: [0; 8],
    };

    /// Build a frame from a raw identifier and up to eight data bytes.
    pub fn new(id: u32, data: &[u8]) -> Result<Self, CanFrameError> {
        if id > MAX_EXTENDED_ID {
            return Err(CanFrameError::IdOutOfRange { id });
        }
        if data.len() > 8 {
            return Err(CanFrameError::InvalidDlc { len: data.len() });
        }

        let mut payload = [0u8; 8];
        payload[..data.len()].copy_from_slice(data);

        Ok(Self {
            id: CanId(id),
            dlc: data.len() as u8,
            payload,
        })
    }

    /// Build a frame from a driver buffer. `dlc` is clamped to 8.
    pub const fn from_parts(id: CanId, dlc: u8, payload: [u8; 8]) -> Self {
        Self {
            id,
            dlc: if dlc > 8 { 8 } else { dlc },
            payload,
        }
    }

    /// Meaningful payload bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.payload[..(self.dlc as usize).min(8)]
    }

    /// 48-bit node id carried by a six-byte payload, byte 0 most significant.
    pub fn node_id(&self) -> Option<u64> {
        if self.dlc as usize != NODE_ID_LEN {
            return None;
        }
        Some(
            self.payload[..NODE_ID_LEN]
                .iter()
                .fold(0u64, |acc, byte| (acc << 8) | *byte as u64),
        )
    }

    /// Convert any `embedded-can` frame. Only extended data frames are accepted.
    pub fn from_frame<F: Frame>(frame: &F) -> Result<Self, CanFrameError> {
        if frame.is_remote_frame() {
            return Err(CanFrameError::RemoteFrame);
        }
        match frame.id() {
            Id::Extended(id) => Self::new(id.as_raw(), frame.data()),
            Id::Standard(_) => Err(CanFrameError::StandardIdUnsupported),
        }
    }
}

impl fmt::Display for CanFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id=0x{:x} dlc={} data=", self.id, self.dlc)?;
        for byte in &self.payload {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
