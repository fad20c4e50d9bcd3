//! Creation and extraction of the 29-bit CAN identifiers used by
//! OpenLCB/LCC on CAN.
//!
//! # Bit layout
//!
//! ```text
//! Bit  28      : reserved (always 1 on the wire, not interpreted)
//! Bit  27      : frame type (1 = OpenLCB message, 0 = CAN control frame)
//!
//! OpenLCB message (bit 27 = 1)
//! Bits 26-24   : frame format
//! Bits 23-12   : CAN MTI (format 1) or destination alias (formats 2-5, 7)
//!   Bits 23-22 : gross priority
//!   Bits 21-17 : type within priority
//!   Bit  16    : simple protocol
//!   Bit  15    : address present
//!   Bit  14    : event present
//!   Bits 13-12 : message modifier
//! Bits 11-0    : source alias
//!
//! CAN control frame (bit 27 = 0)
//! Bits 26-12   : content (bits 26-24 carry the frame sequence number)
//! Bits 11-0    : source alias
//! ```
use crate::error::CanIdBuildError;
use crate::infra::bits::BitField;

/// Field descriptors for the identifier layout.
pub mod fields {
    use crate::infra::bits::BitField;

    pub const FRAME_TYPE: BitField = BitField::new("frame_type", 27, 1);
    pub const FRAME_FORMAT: BitField = BitField::new("frame_format", 24, 3);
    pub const CAN_MTI: BitField = BitField::new("can_mti", 12, 12);
    pub const GROSS_PRIORITY: BitField = BitField::new("gross_priority", 22, 2);
    pub const TYPE_WITHIN_PRIORITY: BitField = BitField::new("type_within_priority", 17, 5);
    pub const SIMPLE_PROTOCOL: BitField = BitField::new("simple_protocol", 16, 1);
    pub const ADDRESS_PRESENT: BitField = BitField::new("address_present", 15, 1);
    pub const EVENT_PRESENT: BitField = BitField::new("event_present", 14, 1);
    pub const MESSAGE_MODIFIER: BitField = BitField::new("message_modifier", 12, 2);
    pub const CONTROL_CONTENT: BitField = BitField::new("content", 12, 15);
    pub const SOURCE_ALIAS: BitField = BitField::new("source_alias", 0, 12);
}

/// Largest valid extended identifier.
pub const MAX_EXTENDED_ID: u32 = 0x1FFF_FFFF;

/// Frame format value carrying the Global & Addressed MTI sub-fields.
pub const GLOBAL_MTI_FORMAT: u8 = 1;

//==================================================================================CAN_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Encapsulates an extended CAN identifier (29 bits) and exposes accessors
/// for every OpenLCB field. Accessors never fail: they mask and shift.
pub struct CanId(pub u32);

impl CanId {
    /// Raw identifier value.
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    // Builder entry points
    /// Start building an OpenLCB message identifier with the given frame format.
    pub fn openlcb(frame_format: u8) -> CanIdBuilder {
        CanIdBuilder::new(FrameType::OpenLcb {
            frame_format: frame_format as u32,
        })
    }

    /// Start building a CAN control frame identifier carrying `content`.
    pub fn control(content: u32) -> CanIdBuilder {
        CanIdBuilder::new(FrameType::Control { content })
    }

    /// Bit 27: `true` for OpenLCB messages, `false` for CAN control frames.
    #[inline]
    pub const fn is_openlcb(&self) -> bool {
        fields::FRAME_TYPE.flag(self.0)
    }

    /// Frame format (bits 26-24, value 0-7).
    #[inline]
    pub const fn frame_format(&self) -> u8 {
        fields::FRAME_FORMAT.extract(self.0) as u8
    }

    /// Twelve-bit CAN MTI (bits 23-12).
    #[inline]
    pub const fn can_mti(&self) -> u16 {
        fields::CAN_MTI.extract(self.0) as u16
    }

    /// Gross message priority (bits 23-22).
    #[inline]
    pub const fn gross_priority(&self) -> u8 {
        fields::GROSS_PRIORITY.extract(self.0) as u8
    }

    /// Minor priority determination (bits 21-17).
    #[inline]
    pub const fn type_within_priority(&self) -> u8 {
        fields::TYPE_WITHIN_PRIORITY.extract(self.0) as u8
    }

    /// Set when the message should be handled by simple nodes (bit 16).
    #[inline]
    pub const fn simple_protocol(&self) -> bool {
        fields::SIMPLE_PROTOCOL.flag(self.0)
    }

    /// Set when the message has a destination address field (bit 15).
    #[inline]
    pub const fn address_present(&self) -> bool {
        fields::ADDRESS_PRESENT.flag(self.0)
    }

    /// Set when the message has an event field (bit 14).
    #[inline]
    pub const fn event_present(&self) -> bool {
        fields::EVENT_PRESENT.flag(self.0)
    }

    /// Message-specific extra information (bits 13-12).
    #[inline]
    pub const fn message_modifier(&self) -> u8 {
        fields::MESSAGE_MODIFIER.extract(self.0) as u8
    }

    /// Fifteen-bit control frame content (bits 26-12).
    #[inline]
    pub const fn control_content(&self) -> u16 {
        fields::CONTROL_CONTENT.extract(self.0) as u16
    }

    /// Frame sequence number of a control frame (top three content bits).
    #[inline]
    pub const fn frame_sequence(&self) -> u8 {
        (self.control_content() >> 12) as u8
    }

    /// Twelve-bit source node alias (bits 11-0).
    #[inline]
    pub const fn source_alias(&self) -> u16 {
        fields::SOURCE_ALIAS.extract(self.0) as u16
    }
}

impl From<u32> for CanId {
    fn from(raw: u32) -> Self {
        CanId(raw)
    }
}

impl core::fmt::LowerHex for CanId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(&self.0, f)
    }
}

//==================================================================================CAN_ID_BUILDER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameType {
    OpenLcb { frame_format: u32 },
    Control { content: u32 },
}

#[derive(Debug, Default, Clone, Copy)]
struct MtiFields {
    gross_priority: u32,
    type_within_priority: u32,
    simple_protocol: bool,
    address_present: bool,
    event_present: bool,
    message_modifier: u32,
}

#[derive(Debug)]
/// Fluent builder for OpenLCB identifiers. Field values are range-checked
/// in [`build`](CanIdBuilder::build), not in the setters.
pub struct CanIdBuilder {
    frame_type: FrameType,
    mti: Option<MtiFields>,
    source_alias: u32,
}

impl CanIdBuilder {
    fn new(frame_type: FrameType) -> Self {
        Self {
            frame_type,
            mti: None,
            source_alias: 0,
        }
    }

    fn mti_mut(&mut self) -> &mut MtiFields {
        self.mti.get_or_insert_with(MtiFields::default)
    }

    /// Sets the twelve-bit source alias.
    pub fn source_alias(mut self, alias: u16) -> Self {
        self.source_alias = alias as u32;
        self
    }

    /// Sets the gross priority (2 bits).
    pub fn gross_priority(mut self, priority: u8) -> Self {
        self.mti_mut().gross_priority = priority as u32;
        self
    }

    /// Sets the type within priority (5 bits).
    pub fn type_within_priority(mut self, kind: u8) -> Self {
        self.mti_mut().type_within_priority = kind as u32;
        self
    }

    /// Sets the simple protocol flag.
    pub fn simple_protocol(mut self, set: bool) -> Self {
        self.mti_mut().simple_protocol = set;
        self
    }

    /// Sets the address present flag.
    pub fn address_present(mut self, set: bool) -> Self {
        self.mti_mut().address_present = set;
        self
    }

    /// Sets the event present flag.
    pub fn event_present(mut self, set: bool) -> Self {
        self.mti_mut().event_present = set;
        self
    }

    /// Sets the message modifier (2 bits).
    pub fn message_modifier(mut self, modifier: u8) -> Self {
        self.mti_mut().message_modifier = modifier as u32;
        self
    }

    /// Builds the identifier. Bit 28 is set, as every OpenLCB node transmits it.
    ///
    /// Returns [`CanIdBuildError::FieldOverflow`] when a value does not fit its
    /// bit range and [`CanIdBuildError::MtiFieldsRequireGlobalFormat`] when MTI
    /// sub-fields are given for a control frame or a non-MTI frame format.
    pub fn build(self) -> Result<CanId, CanIdBuildError> {
        let mut raw = 1u32 << 28;
        raw = put(&fields::SOURCE_ALIAS, raw, self.source_alias)?;

        match self.frame_type {
            FrameType::Control { content } => {
                if self.mti.is_some() {
                    return Err(CanIdBuildError::MtiFieldsRequireGlobalFormat);
                }
                raw = put(&fields::CONTROL_CONTENT, raw, content)?;
            }
            FrameType::OpenLcb { frame_format } => {
                raw = put(&fields::FRAME_TYPE, raw, 1)?;
                raw = put(&fields::FRAME_FORMAT, raw, frame_format)?;
                if let Some(mti) = self.mti {
                    if frame_format != GLOBAL_MTI_FORMAT as u32 {
                        return Err(CanIdBuildError::MtiFieldsRequireGlobalFormat);
                    }
                    raw = put(&fields::GROSS_PRIORITY, raw, mti.gross_priority)?;
                    raw = put(
                        &fields::TYPE_WITHIN_PRIORITY,
                        raw,
                        mti.type_within_priority,
                    )?;
                    raw = put(&fields::SIMPLE_PROTOCOL, raw, mti.simple_protocol as u32)?;
                    raw = put(&fields::ADDRESS_PRESENT, raw, mti.address_present as u32)?;
                    raw = put(&fields::EVENT_PRESENT, raw, mti.event_present as u32)?;
                    raw = put(&fields::MESSAGE_MODIFIER, raw, mti.message_modifier)?;
                }
            }
        }

        Ok(CanId(raw))
    }
}

fn put(field: &BitField, raw: u32, value: u32) -> Result<u32, CanIdBuildError> {
    field
        .insert(raw, value)
        .map_err(|_| CanIdBuildError::FieldOverflow {
            field: field.name,
            value,
            max: field.max(),
        })
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
