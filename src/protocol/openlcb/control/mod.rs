//! CAN control frames (bit 27 clear): alias allocation and error reports.
use core::fmt;

/// Content values above this one are Check ID frames.
pub const CHECK_ID_THRESHOLD: u16 = 0x1000;

/// Meaning of a control frame's 15-bit content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlKind {
    /// Reserve ID (RID), 0x0700.
    ReserveId,
    /// Alias Map Definition (AMD), 0x0701.
    AliasMapDefinition,
    /// Alias Mapping Enquiry (AME), 0x0702.
    AliasMappingEnquiry,
    /// Alias Map Reset (AMR), 0x0703.
    AliasMapReset,
    /// Error Information Report 0 to 3, 0x0710-0x0713.
    ErrorInformationReport(u8),
    /// Check ID (CID), content above 0x1000.
    CheckId,
    /// Anything else: should never be sent.
    Reserved,
}

const CONTROL_TABLE: [(u16, ControlKind); 8] = [
    (0x0700, ControlKind::ReserveId),
    (0x0701, ControlKind::AliasMapDefinition),
    (0x0702, ControlKind::AliasMappingEnquiry),
    (0x0703, ControlKind::AliasMapReset),
    (0x0710, ControlKind::ErrorInformationReport(0)),
    (0x0711, ControlKind::ErrorInformationReport(1)),
    (0x0712, ControlKind::ErrorInformationReport(2)),
    (0x0713, ControlKind::ErrorInformationReport(3)),
];

/// Classify a content value. Total over all inputs.
pub fn lookup(content: u16) -> ControlKind {
    CONTROL_TABLE
        .iter()
        .find(|(value, _)| *value == content)
        .map(|(_, kind)| *kind)
        .unwrap_or(if content > CHECK_ID_THRESHOLD {
            ControlKind::CheckId
        } else {
            ControlKind::Reserved
        })
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::ReserveId => f.write_str("Reserve ID Frame"),
            ControlKind::AliasMapDefinition => f.write_str("Alias Map Definition Frame"),
            ControlKind::AliasMappingEnquiry => f.write_str("Alias Mapping Enquiry (AME) Frame"),
            ControlKind::AliasMapReset => f.write_str("Alias Map Reset (AMR) Frame"),
            ControlKind::ErrorInformationReport(n) => write!(f, "Error Information Report {}", n),
            ControlKind::CheckId => f.write_str("Check ID Frame"),
            ControlKind::Reserved => f.write_str("Reserved Frame Type - should not have been sent"),
        }
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
