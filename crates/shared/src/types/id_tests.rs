use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_creation() {
    let id = BookingId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = AgencyId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
    assert_eq!(AgencyId::from(uuid), id);
}

#[test]
fn test_typed_id_display() {
    let uuid = Uuid::new_v4();
    let id = TourPackageId::from_uuid(uuid);
    assert_eq!(format!("{id}"), uuid.to_string());
}

#[test]
fn test_typed_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = TourDateId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(UserId::from_str("invalid").is_err());
}

#[test]
fn test_new_ids_are_time_ordered() {
    let first = BookingId::new();
    let second = BookingId::new();
    assert!(first < second);
}

#[test]
fn test_typed_id_serializes_transparently() {
    let uuid = Uuid::new_v4();
    let json = serde_json::to_string(&UserId::from_uuid(uuid)).unwrap();
    assert_eq!(json, format!("\"{uuid}\""));
}
