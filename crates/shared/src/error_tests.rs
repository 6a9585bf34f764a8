use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::Unauthorized("test".into()), 401, "unauthorized")]
#[case(AppError::Forbidden("test".into()), 403, "forbidden")]
#[case(AppError::NotFound("test".into()), 404, "not_found")]
#[case(AppError::Database("test".into()), 500, "internal_error")]
#[case(AppError::Internal("test".into()), 500, "internal_error")]
fn test_app_error_status_and_code(
    #[case] error: AppError,
    #[case] status: u16,
    #[case] code: &str,
) {
    assert_eq!(error.status_code(), status);
    assert_eq!(error.error_code(), code);
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        AppError::NotFound("msg".into()).to_string(),
        "Not found: msg"
    );
    assert_eq!(
        AppError::Database("msg".into()).to_string(),
        "Database error: msg"
    );
    assert_eq!(
        AppError::Forbidden("msg".into()).to_string(),
        "Access denied: msg"
    );
}

#[test]
fn test_public_message_hides_server_details() {
    let err = AppError::Database("connection refused on 10.0.0.4".into());
    assert!(err.is_server_error());
    assert_eq!(err.public_message(), "An error occurred");

    let err = AppError::NotFound("Agency profile not found".into());
    assert!(!err.is_server_error());
    assert_eq!(err.public_message(), "Agency profile not found");
}
