//! Unit tests for JWT and capability handling.

use super::*;
use crate::auth::AgencyAccess;
use crate::error::AppError;
use rstest::rstest;

fn create_test_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expires_secs: 900,
    })
}

#[test]
fn test_generate_and_validate_token() {
    let service = create_test_service();
    let user_id = UserId::new();

    let token = service.generate_access_token(user_id, Role::Agency).unwrap();
    assert!(!token.is_empty());

    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.user_id(), user_id);
    assert_eq!(claims.role, Role::Agency);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_invalid_token() {
    let service = create_test_service();
    let result = service.validate_token("invalid.token.here");
    assert!(matches!(result, Err(JwtError::DecodingError(_))));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let other = JwtService::new(JwtConfig {
        secret: "another-secret".to_string(),
        access_token_expires_secs: 900,
    });
    let token = other.generate_access_token(UserId::new(), Role::Agency).unwrap();

    assert!(create_test_service().validate_token(&token).is_err());
}

#[test]
fn test_expired_token() {
    let service = JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expires_secs: -600,
    });
    let token = service.generate_access_token(UserId::new(), Role::Customer).unwrap();

    assert!(matches!(service.validate_token(&token), Err(JwtError::Expired)));
}

#[test]
fn test_access_token_expires_in_seconds() {
    assert_eq!(create_test_service().access_token_expires_in(), 900);
}

#[test]
fn test_agency_access_granted_for_agency_role() {
    let user_id = UserId::new();
    let claims = Claims::new(user_id, Role::Agency, Duration::hours(1));

    let access = AgencyAccess::grant(&claims).unwrap();
    assert_eq!(access.owner(), user_id);
}

#[rstest]
#[case(Role::Customer)]
#[case(Role::Admin)]
fn test_agency_access_denied_for_other_roles(#[case] role: Role) {
    let claims = Claims::new(UserId::new(), role, Duration::hours(1));

    assert!(matches!(
        AgencyAccess::grant(&claims),
        Err(AppError::Forbidden(_))
    ));
}

#[rstest]
#[case(30)]
#[case(90)]
#[case(3600)]
fn test_token_lifetime_is_not_rounded_to_minutes(#[case] secs: i64) {
    let service = JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expires_secs: secs,
    });
    let token = service.generate_access_token(UserId::new(), Role::Agency).unwrap();
    let claims = service.validate_token(&token).unwrap();

    assert_eq!(service.access_token_expires_in(), secs);
    assert_eq!(claims.exp - claims.iat, secs);
}

#[rstest]
#[case(Role::Agency, "\"agency\"")]
#[case(Role::Customer, "\"customer\"")]
#[case(Role::Admin, "\"admin\"")]
fn test_role_serializes_like_display(#[case] role: Role, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&role).unwrap(), json);
    assert_eq!(format!("\"{role}\""), json);
}
