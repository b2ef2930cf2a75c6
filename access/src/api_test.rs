use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::json;

use super::*;

// =============================================================================
// Credentials::validate
// =============================================================================

#[test]
fn validate_trims_identifier_and_keeps_password() {
    let creds = Credentials::new("  hr@company.com ", " password123").validate().expect("valid");
    assert_eq!(creds.identifier, "hr@company.com");
    assert_eq!(creds.password, " password123");
}

#[test]
fn validate_requires_identifier() {
    let err = Credentials::new("   ", "password123").validate().expect_err("invalid");
    assert_eq!(err.field, CredentialsField::Identifier);
    assert_eq!(err.message(), "Email, username, or mobile number is required");
}

#[test]
fn validate_rejects_single_char_identifier() {
    let err = Credentials::new("a", "password123").validate().expect_err("invalid");
    assert_eq!(err.message(), "Identifier must be at least 2 characters");
}

#[test]
fn validate_requires_password() {
    let err = Credentials::new("emp01", "").validate().expect_err("invalid");
    assert_eq!(err.field, CredentialsField::Password);
    assert_eq!(err.message(), "Password is required");
}

#[test]
fn validate_rejects_short_password() {
    let err = Credentials::new("emp01", "12345").validate().expect_err("invalid");
    assert_eq!(err.message(), "Password must be at least 6 characters");
}

#[test]
fn validate_reports_identifier_before_password() {
    let err = Credentials::new("", "").validate().expect_err("invalid");
    assert_eq!(err.field, CredentialsField::Identifier);
}

#[test]
fn debug_output_redacts_password() {
    let out = format!("{:?}", Credentials::new("u", "secret-pass"));
    assert!(!out.contains("secret-pass"));
    assert!(out.contains("<redacted>"));
}

#[test]
fn credentials_serialize_as_identifier_and_password() {
    let value = serde_json::to_value(Credentials::new("u", "p")).expect("serialize");
    assert_eq!(value, json!({"identifier": "u", "password": "p"}));
}

// =============================================================================
// LoginResponse
// =============================================================================

#[test]
fn login_response_parses_success_payload() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "success": true,
        "token": "abc",
        "refreshToken": "r1",
        "user": {"role": "HR", "organizationId": "org-1"}
    }))
    .expect("parse");
    let (user, token, refresh) = resp.into_parts().expect("usable");
    assert_eq!(token, "abc");
    assert_eq!(refresh.as_deref(), Some("r1"));
    assert_eq!(user.organization_id.as_deref(), Some("org-1"));
}

#[test]
fn login_response_without_user_is_unusable() {
    let resp: LoginResponse = serde_json::from_value(json!({"success": true, "token": "abc"})).expect("parse");
    assert!(resp.into_parts().is_none());
}

#[test]
fn login_response_with_empty_token_is_unusable() {
    let resp = LoginResponse {
        token: Some(String::new()),
        user: Some(UserProfile::new("HR", None)),
        ..LoginResponse::default()
    };
    assert!(resp.into_parts().is_none());
}

#[test]
fn login_response_tolerates_error_payload() {
    let resp: LoginResponse =
        serde_json::from_value(json!({"success": false, "message": "Invalid password"})).expect("parse");
    assert_eq!(resp.message.as_deref(), Some("Invalid password"));
    assert!(resp.into_parts().is_none());
}

// =============================================================================
// request_login
// =============================================================================

/// Records what the service was sent and answers with an error payload.
#[derive(Default)]
struct RecordingApi {
    sent: RefCell<Vec<Credentials>>,
}

impl AuthApi for RecordingApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        self.sent.borrow_mut().push(credentials.clone());
        Ok(LoginResponse { success: Some(false), ..LoginResponse::default() })
    }

    async fn logout(&self, _token: Option<&str>) {}
}

#[test]
fn request_login_sends_normalized_credentials() {
    let api = RecordingApi::default();
    let resp = block_on(request_login(&api, &Credentials::new("  hr@company.com ", "password123"))).expect("sent");
    assert_eq!(resp.success, Some(false));
    let sent = api.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].identifier, "hr@company.com");
    assert_eq!(sent[0].password, "password123");
}

#[test]
fn request_login_stops_at_validation() {
    let api = RecordingApi::default();
    let err = block_on(request_login(&api, &Credentials::new("hr@company.com", "123"))).expect_err("invalid");
    assert!(matches!(err, AuthError::Invalid(ref e) if e.field == CredentialsField::Password));
    assert!(api.sent.borrow().is_empty());
}
