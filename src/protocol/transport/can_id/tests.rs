//! Unit tests for the `CanId` accessors and builder.
use super::*;

//==================================================================================CAN_ID
#[test]
/// Bit 27 selects the frame family.
fn test_frame_type() {
    assert!(CanId(0x0800_0000).is_openlcb());
    assert!(CanId(0x1950_0ABC).is_openlcb());
    assert!(!CanId(0x0000_0102).is_openlcb());
    assert!(!CanId(0x1070_0123).is_openlcb());
}

#[test]
/// Extracts every MTI sub-field from a Global & Addressed identifier.
fn test_mti_fields() {
    // 0x19100ABC: format 1, MTI 0x100 (priority 0, type 0x08), alias 0xABC
    let can_id = CanId(0x1910_0ABC);
    assert_eq!(can_id.frame_format(), 1);
    assert_eq!(can_id.can_mti(), 0x100);
    assert_eq!(can_id.gross_priority(), 0);
    assert_eq!(can_id.type_within_priority(), 0x08);
    assert!(!can_id.simple_protocol());
    assert!(!can_id.address_present());
    assert!(!can_id.event_present());
    assert_eq!(can_id.message_modifier(), 0);
    assert_eq!(can_id.source_alias(), 0xABC);

    // 0x194C7123: MTI 0x4C7 = Consumer Identified Unknown
    let can_id = CanId(0x194C_7123);
    assert_eq!(can_id.gross_priority(), 1);
    assert_eq!(can_id.type_within_priority(), 0x06);
    assert!(!can_id.simple_protocol());
    assert!(can_id.event_present());
    assert_eq!(can_id.message_modifier(), 3);
}

#[test]
/// Control frame content, sequence number, and alias.
fn test_control_fields() {
    let can_id = CanId(0x1070_1ABC);
    assert_eq!(can_id.control_content(), 0x0701);
    assert_eq!(can_id.frame_sequence(), 0);
    assert_eq!(can_id.source_alias(), 0xABC);

    // Check ID frame 7: content 0x7123
    let can_id = CanId(0x1712_3456);
    assert_eq!(can_id.control_content(), 0x7123);
    assert_eq!(can_id.frame_sequence(), 7);
}

//==================================================================================CAN_ID_BUILDER
#[test]
/// Control identifiers place content in bits 26-12.
fn test_builder_control() {
    let can_id = CanId::control(0x0701)
        .source_alias(0x123)
        .build()
        .expect("control id must build");
    assert_eq!(can_id, CanId(0x1070_1123));
    assert!(!can_id.is_openlcb());
    assert_eq!(can_id.control_content(), 0x0701);
}

#[test]
/// MTI sub-fields round-trip through the builder.
fn test_builder_global_mti() {
    let can_id = CanId::openlcb(GLOBAL_MTI_FORMAT)
        .gross_priority(1)
        .type_within_priority(0x06)
        .event_present(true)
        .message_modifier(3)
        .source_alias(0x123)
        .build()
        .expect("MTI id must build");
    assert_eq!(can_id, CanId(0x194C_7123));
    assert_eq!(can_id.can_mti(), 0x4C7);
}

#[test]
/// Values wider than their field are rejected.
fn test_builder_overflow() {
    let err = CanId::openlcb(8).build().unwrap_err();
    assert_eq!(
        err,
        CanIdBuildError::FieldOverflow {
            field: "frame_format",
            value: 8,
            max: 7
        }
    );

    let err = CanId::control(0x8000).build().unwrap_err();
    assert!(matches!(
        err,
        CanIdBuildError::FieldOverflow {
            field: "content",
            ..
        }
    ));

    let err = CanId::openlcb(1).source_alias(0x1000).build().unwrap_err();
    assert!(matches!(
        err,
        CanIdBuildError::FieldOverflow {
            field: "source_alias",
            ..
        }
    ));
}

#[test]
/// MTI sub-fields only belong to frame format 1.
fn test_builder_mti_on_wrong_format() {
    assert_eq!(
        CanId::openlcb(2).gross_priority(1).build(),
        Err(CanIdBuildError::MtiFieldsRequireGlobalFormat)
    );
    assert_eq!(
        CanId::control(0x0700).message_modifier(1).build(),
        Err(CanIdBuildError::MtiFieldsRequireGlobalFormat)
    );
}
