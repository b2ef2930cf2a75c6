use super::*;

#[test]
fn prepare_trims_identifier() {
    let creds = prepare("  hr@company.com  ", "password123").expect("valid");
    assert_eq!(creds.identifier, "hr@company.com");
    assert_eq!(creds.password, "password123");
}

#[test]
fn prepare_rejects_short_password() {
    let err = prepare("hr@company.com", "pw").expect_err("invalid");
    assert_eq!(err.field, CredentialsField::Password);
}

#[test]
fn field_message_only_for_matching_field() {
    let err = prepare("", "password123").expect_err("invalid");
    assert_eq!(
        field_message(Some(&err), CredentialsField::Identifier),
        Some("Email, username, or mobile number is required")
    );
    assert_eq!(field_message(Some(&err), CredentialsField::Password), None);
    assert_eq!(field_message(None, CredentialsField::Identifier), None);
}
