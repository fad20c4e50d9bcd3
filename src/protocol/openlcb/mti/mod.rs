//! Global & Addressed MTI sub-fields and the table of recognised messages.
use core::fmt;

use crate::protocol::transport::can_id::CanId;

/// MTI sub-fields of a frame format 1 identifier (bits 23-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MtiFields {
    /// Gross message priority (2 bits).
    pub gross_priority: u8,
    /// Minor priority determination (5 bits).
    pub type_within_priority: u8,
    /// Should be handled by simple nodes.
    pub simple_protocol: bool,
    /// Message carries a destination address field.
    pub address_present: bool,
    /// Message carries an event field.
    pub event_present: bool,
    /// Message-specific extra information (2 bits).
    pub message_modifier: u8,
}

impl MtiFields {
    /// Split the MTI bits of `id` into their sub-fields.
    pub const fn from_id(id: CanId) -> Self {
        Self {
            gross_priority: id.gross_priority(),
            type_within_priority: id.type_within_priority(),
            simple_protocol: id.simple_protocol(),
            address_present: id.address_present(),
            event_present: id.event_present(),
            message_modifier: id.message_modifier(),
        }
    }
}

/// Third field of a Consumer Identified message, carried by the modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerState {
    Valid,
    Invalid,
    Unknown,
}

/// Message recognised from the MTI sub-fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MtiMessage {
    /// Node finished its start-up sequence (priority 0, type 0x08).
    InitializationComplete,
    /// Consumer Identified (priority 1, type 0x06, modifier 0/1/3).
    ConsumerIdentified(ConsumerState),
    /// Known priority/type pair with a modifier that has no meaning (the
    /// reserved Consumer Identified modifier 2). No classification is made.
    Unclassified,
    /// Any other priority/type combination.
    Undeciphered,
}

struct MtiEntry {
    gross_priority: u8,
    type_within_priority: u8,
    /// `None` matches every modifier.
    modifier: Option<u8>,
    message: MtiMessage,
}

const MTI_TABLE: &[MtiEntry] = &[
    MtiEntry {
        gross_priority: 0,
        type_within_priority: 0x08,
        modifier: None,
        message: MtiMessage::InitializationComplete,
    },
    MtiEntry {
        gross_priority: 1,
        type_within_priority: 0x06,
        modifier: Some(0),
        message: MtiMessage::ConsumerIdentified(ConsumerState::Valid),
    },
    MtiEntry {
        gross_priority: 1,
        type_within_priority: 0x06,
        modifier: Some(1),
        message: MtiMessage::ConsumerIdentified(ConsumerState::Invalid),
    },
    MtiEntry {
        gross_priority: 1,
        type_within_priority: 0x06,
        modifier: Some(3),
        message: MtiMessage::ConsumerIdentified(ConsumerState::Unknown),
    },
];

/// Look up the message for a set of MTI sub-fields. Total: unmatched
/// combinations map to [`MtiMessage::Unclassified`] or
/// [`MtiMessage::Undeciphered`].
pub fn lookup(fields: &MtiFields) -> MtiMessage {
    let mut known_pair = false;
    for entry in MTI_TABLE {
        if entry.gross_priority != fields.gross_priority
            || entry.type_within_priority != fields.type_within_priority
        {
            continue;
        }
        known_pair = true;
        match entry.modifier {
            Some(modifier) if modifier != fields.message_modifier => {}
            _ => return entry.message,
        }
    }

    if known_pair {
        MtiMessage::Unclassified
    } else {
        MtiMessage::Undeciphered
    }
}

impl fmt::Display for ConsumerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConsumerState::Valid => "Valid",
            ConsumerState::Invalid => "Invalid",
            ConsumerState::Unknown => "Unknown",
        })
    }
}

impl fmt::Display for MtiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MtiMessage::InitializationComplete => f.write_str("Initialization Complete"),
            MtiMessage::ConsumerIdentified(state) => write!(f, "Consumer Identified - {}", state),
            MtiMessage::Unclassified => f.write_str("Unclassified"),
            MtiMessage::Undeciphered => f.write_str("Undeciphered message"),
        }
    }
}
