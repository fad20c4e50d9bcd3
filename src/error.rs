//! Error definitions shared across library modules.
//! Only construction helpers can fail: the receive path (queue, decoder,
//! monitor) is total and reports drops or unknown fields as values.
use thiserror_no_std::Error;

//==================================================================================CAN_FRAME
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur while building a [`CanFrame`](crate::protocol::transport::can_frame::CanFrame).
pub enum CanFrameError {
    /// Identifier does not fit in 29 bits.
    #[error("Extended identifier out of range (0..=0x1FFFFFFF): {id:#x}")]
    IdOutOfRange { id: u32 },
    /// Classic CAN carries at most eight payload bytes.
    #[error("Invalid data length code: {len}")]
    InvalidDlc { len: usize },
    /// OpenLCB only runs on extended (29-bit) identifiers.
    #[error("Standard 11-bit identifiers are not supported")]
    StandardIdUnsupported,
    /// Remote frames carry no payload and are not part of OpenLCB traffic.
    #[error("Remote frames are not supported")]
    RemoteFrame,
}

//==================================================================================CAN_ID
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur while building a 29-bit OpenLCB identifier.
pub enum CanIdBuildError {
    /// A field value does not fit in its bit range.
    #[error("Field {field} overflow: {value} > {max}")]
    FieldOverflow {
        field: &'static str,
        value: u32,
        max: u32,
    },
    /// MTI sub-fields only exist in the Global & Addressed MTI format (1).
    #[error("MTI fields require the Global & Addressed MTI frame format")]
    MtiFieldsRequireGlobalFormat,
}

//==================================================================================BITFIELD
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while inserting a value into an identifier bit range.
pub enum BitFieldError {
    /// Value is wider than the field.
    #[error("Value {value} does not fit in {width} bits")]
    ValueTooWide { value: u32, width: u8 },
}
