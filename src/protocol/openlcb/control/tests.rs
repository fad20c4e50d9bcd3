//! Control content table and its defaults.
use super::*;

#[test]
/// Named contents map to their frame kinds.
fn test_named_contents() {
    assert_eq!(lookup(0x0700), ControlKind::ReserveId);
    assert_eq!(lookup(0x0701), ControlKind::AliasMapDefinition);
    assert_eq!(lookup(0x0702), ControlKind::AliasMappingEnquiry);
    assert_eq!(lookup(0x0703), ControlKind::AliasMapReset);
    for n in 0..4u8 {
        assert_eq!(
            lookup(0x0710 + n as u16),
            ControlKind::ErrorInformationReport(n)
        );
    }
}

#[test]
/// Contents strictly above 0x1000 are Check ID frames.
fn test_check_id_threshold() {
    assert_eq!(lookup(0x1000), ControlKind::Reserved);
    assert_eq!(lookup(0x1001), ControlKind::CheckId);
    assert_eq!(lookup(0x7FFF), ControlKind::CheckId);
}

#[test]
/// Gaps in the table fall back to reserved.
fn test_reserved() {
    assert_eq!(lookup(0x0000), ControlKind::Reserved);
    assert_eq!(lookup(0x0704), ControlKind::Reserved);
    assert_eq!(lookup(0x070F), ControlKind::Reserved);
    assert_eq!(lookup(0x0714), ControlKind::Reserved);
}
