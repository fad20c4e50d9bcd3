//! OpenLCB/LCC frame classification.
//!
//! [`classify`] is a pure, total function: every 29-bit identifier maps to a
//! [`DecodedFrame`]. Unknown field values surface as reserved or
//! undeciphered variants instead of errors.
//!
//! ```
//! use korri_lcc::protocol::openlcb::{classify, control::ControlKind, DecodedFrame};
//! use korri_lcc::protocol::transport::{can_frame::CanFrame, can_id::CanId};
//!
//! let id = CanId::control(0x0701).source_alias(0x123).build().unwrap();
//! let frame = CanFrame::new(id.raw(), &[]).unwrap();
//!
//! match classify(&frame) {
//!     DecodedFrame::Control(control) => {
//!         assert_eq!(control.kind, ControlKind::AliasMapDefinition);
//!         assert_eq!(control.source_alias, 0x123);
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
use core::fmt;

use crate::protocol::transport::can_frame::CanFrame;

pub mod control;
pub mod mti;

use control::ControlKind;
use mti::{MtiFields, MtiMessage};

//==================================================================================FRAME_FORMAT
/// OpenLCB frame format (identifier bits 26-24).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FrameFormat {
    Reserved0 = 0,
    GlobalAddressedMti = 1,
    DatagramComplete = 2,
    DatagramFirst = 3,
    DatagramMiddle = 4,
    DatagramFinal = 5,
    Reserved6 = 6,
    StreamData = 7,
}

impl FrameFormat {
    /// Decode the three format bits. Higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => FrameFormat::Reserved0,
            1 => FrameFormat::GlobalAddressedMti,
            2 => FrameFormat::DatagramComplete,
            3 => FrameFormat::DatagramFirst,
            4 => FrameFormat::DatagramMiddle,
            5 => FrameFormat::DatagramFinal,
            6 => FrameFormat::Reserved6,
            _ => FrameFormat::StreamData,
        }
    }

    /// Numeric format code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// `true` for the two reserved codes.
    pub const fn is_reserved(self) -> bool {
        matches!(self, FrameFormat::Reserved0 | FrameFormat::Reserved6)
    }

    /// `true` for the four datagram codes.
    pub const fn is_datagram(self) -> bool {
        matches!(
            self,
            FrameFormat::DatagramComplete
                | FrameFormat::DatagramFirst
                | FrameFormat::DatagramMiddle
                | FrameFormat::DatagramFinal
        )
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FrameFormat::Reserved0 | FrameFormat::Reserved6 => "RESERVED",
            FrameFormat::GlobalAddressedMti => "Global & Addressed MTI",
            FrameFormat::DatagramComplete => "Datagram complete in frame",
            FrameFormat::DatagramFirst => "Datagram first frame",
            FrameFormat::DatagramMiddle => "Datagram middle frame",
            FrameFormat::DatagramFinal => "Datagram final frame",
            FrameFormat::StreamData => "Stream Data",
        })
    }
}

//==================================================================================DECODED_FRAME
/// Classification of one received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodedFrame {
    /// Bit 27 clear.
    Control(ControlFrame),
    /// Bit 27 set.
    OpenLcb(OpenLcbFrame),
}

/// CAN control frame fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlFrame {
    /// Raw 15-bit content (bits 26-12).
    pub content: u16,
    /// Meaning of `content`.
    pub kind: ControlKind,
    /// `content >> 12`, the Check ID frame number.
    pub frame_seq_num: u8,
    /// `content & 0xFFF`, the node id slice carried by Check ID frames.
    pub checked_node_id: u16,
    /// Source node alias (bits 11-0).
    pub source_alias: u16,
}

/// OpenLCB message fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OpenLcbFrame {
    pub format: FrameFormat,
    /// Bits 23-12 (MTI for format 1, destination alias otherwise).
    pub can_mti: u16,
    /// Source node alias (bits 11-0).
    pub source_alias: u16,
    /// Present only for [`FrameFormat::GlobalAddressedMti`].
    pub global: Option<GlobalMessage>,
}

/// Decoded Global & Addressed MTI message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlobalMessage {
    pub fields: MtiFields,
    /// 48-bit node id when the payload is exactly six bytes.
    pub node_id: Option<u64>,
    pub message: MtiMessage,
}

impl DecodedFrame {
    /// Source alias, present in both frame families.
    pub fn source_alias(&self) -> u16 {
        match self {
            DecodedFrame::Control(control) => control.source_alias,
            DecodedFrame::OpenLcb(openlcb) => openlcb.source_alias,
        }
    }

    /// `true` for OpenLCB messages.
    pub fn is_openlcb(&self) -> bool {
        matches!(self, DecodedFrame::OpenLcb(_))
    }
}

//==================================================================================CLASSIFY
/// Classify a received frame. Pure and total.
pub fn classify(frame: &CanFrame) -> DecodedFrame {
    let id = frame.id;

    if !id.is_openlcb() {
        let content = id.control_content();
        return DecodedFrame::Control(ControlFrame {
            content,
            kind: control::lookup(content),
            frame_seq_num: id.frame_sequence(),
            checked_node_id: content & 0x0FFF,
            source_alias: id.source_alias(),
        });
    }

    let format = FrameFormat::from_bits(id.frame_format());
    let global = match format {
        FrameFormat::GlobalAddressedMti => {
            let fields = MtiFields::from_id(id);
            Some(GlobalMessage {
                fields,
                node_id: frame.node_id(),
                message: mti::lookup(&fields),
            })
        }
        _ => None,
    };

    DecodedFrame::OpenLcb(OpenLcbFrame {
        format,
        can_mti: id.can_mti(),
        source_alias: id.source_alias(),
        global,
    })
}

//==================================================================================DISPLAY
impl fmt::Display for ControlFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frame Type = CAN Control Frame")?;
        writeln!(f, "\tContent = 0x{:04X}", self.content)?;
        writeln!(f, "\t\t{}", self.kind)?;
        writeln!(f, "\t\t\tFrame sequence number = {}", self.frame_seq_num)?;
        writeln!(f, "\t\t\tNode ID being checked = 0x{:03X}", self.checked_node_id)?;
        write!(f, "\t\t\tSource NID Alias = 0x{:03X}", self.source_alias)
    }
}

impl fmt::Display for OpenLcbFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frame Type = OpenLCB Message")?;
        write!(
            f,
            "\tFrame Format = {} and CAN MTI = 0x{:04X}\n\t{}",
            self.format.code(),
            self.can_mti,
            self.format
        )?;

        let Some(global) = &self.global else {
            return Ok(());
        };
        let mti = &global.fields;
        write!(
            f,
            "\n\t\tCAN MTI Gross message priority = {}",
            mti.gross_priority
        )?;
        write!(
            f,
            "\n\t\tCAN MTI Minor priority determination = {}",
            mti.type_within_priority
        )?;
        write!(
            f,
            "\n\t\tCAN MTI 1=should be handled by simple nodes = {}",
            mti.simple_protocol as u8
        )?;
        write!(
            f,
            "\n\t\tCAN MTI 1=has a destination address-field = {}",
            mti.address_present as u8
        )?;
        write!(
            f,
            "\n\t\tCAN MTI 1=This message has an event-field = {}",
            mti.event_present as u8
        )?;
        write!(
            f,
            "\n\t\tCAN MTI Message-specific extra information = {}",
            mti.message_modifier
        )?;

        match (global.message, global.node_id) {
            (MtiMessage::Unclassified, _) => Ok(()),
            (MtiMessage::InitializationComplete, Some(node_id)) => write!(
                f,
                "\n\t\t\t{} message from 0x{:03X}, node 0x{:012X}",
                global.message, self.source_alias, node_id
            ),
            (MtiMessage::InitializationComplete, None) => write!(
                f,
                "\n\t\t\t{} message from 0x{:03X}",
                global.message, self.source_alias
            ),
            (message, _) => write!(f, "\n\t\t\t{}", message),
        }
    }
}

impl fmt::Display for DecodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedFrame::Control(control) => fmt::Display::fmt(control, f),
            DecodedFrame::OpenLcb(openlcb) => fmt::Display::fmt(openlcb, f),
        }
    }
}
