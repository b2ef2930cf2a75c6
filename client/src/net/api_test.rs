use super::*;
use access::UserProfile;

fn usable_body() -> LoginResponse {
    LoginResponse {
        success: Some(true),
        token: Some("abc".to_owned()),
        user: Some(UserProfile::new("HR", Some("org-1".to_owned()))),
        ..LoginResponse::default()
    }
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn success_status_passes_body_through() {
    assert_eq!(classify_login_response(200, Some(usable_body())), Ok(usable_body()));
}

#[test]
fn success_status_without_body_is_invalid_format() {
    assert_eq!(classify_login_response(200, None), Err(AuthError::InvalidResponseFormat));
}

#[test]
fn client_error_carries_server_message() {
    let body = LoginResponse { message: Some("Invalid password".to_owned()), ..LoginResponse::default() };
    assert_eq!(
        classify_login_response(401, Some(body)),
        Err(AuthError::Rejected { status: 401, message: "Invalid password".to_owned() })
    );
}

#[test]
fn client_error_without_body_has_empty_message() {
    let err = classify_login_response(404, None).expect_err("rejected");
    assert_eq!(err, AuthError::Rejected { status: 404, message: String::new() });
    assert_eq!(err.user_message(), "Invalid credentials.");
}

#[test]
fn server_error_is_transport_class() {
    let err = classify_login_response(503, Some(usable_body())).expect_err("transport");
    assert!(err.is_transport());
    assert_eq!(err, AuthError::Transport("server responded with 503".to_owned()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_login_fails_with_transport_error() {
    let api = HttpAuthApi::new(ClientConfig::default());
    let result = futures::executor::block_on(api.login(&Credentials::new("hr@company.com", "password123")));
    assert!(result.expect_err("no browser").is_transport());
}
