use super::*;

fn valid() -> Result<RegisterRequest, &'static str> {
    validate_registration("Alice", "alice@example.com", "Secret123", "Secret123", "", "")
}

#[test]
fn validate_registration_accepts_minimal_input() {
    let payload = valid().unwrap();
    assert_eq!(payload.name, "Alice");
    assert_eq!(payload.email, "alice@example.com");
    assert_eq!(payload.phone, None);
    assert_eq!(payload.national_id, None);
}

#[test]
fn validate_registration_requires_name_and_email() {
    assert_eq!(
        validate_registration("  ", "alice@example.com", "Secret123", "Secret123", "", ""),
        Err("Enter your name.")
    );
    assert_eq!(
        validate_registration("Alice", "not-an-email", "Secret123", "Secret123", "", ""),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_registration_enforces_password_rules() {
    assert_eq!(
        validate_registration("Alice", "alice@example.com", "short", "short", "", ""),
        Err("Password must be at least 6 characters.")
    );
    assert_eq!(
        validate_registration("Alice", "alice@example.com", "Secret123", "Different", "", ""),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_registration_normalizes_phone_digits() {
    let payload = validate_registration(
        "Alice",
        "alice@example.com",
        "Secret123",
        "Secret123",
        "+55 (11) 99999-0000",
        "",
    )
    .unwrap();
    assert_eq!(payload.phone.as_deref(), Some("5511999990000"));
}

#[test]
fn validate_registration_rejects_bad_phone_length() {
    assert_eq!(
        validate_registration("Alice", "alice@example.com", "Secret123", "Secret123", "123", ""),
        Err("Enter a valid phone number.")
    );
}

#[test]
fn validate_registration_normalizes_national_id() {
    let payload = validate_registration(
        "Alice",
        "alice@example.com",
        "Secret123",
        "Secret123",
        "",
        "123.456.789-01",
    )
    .unwrap();
    assert_eq!(payload.national_id.as_deref(), Some("12345678901"));
}

#[test]
fn validate_registration_rejects_wrong_national_id_length() {
    assert_eq!(
        validate_registration("Alice", "alice@example.com", "Secret123", "Secret123", "", "1234"),
        Err("Enter a valid national ID.")
    );
}

#[test]
fn normalize_digits_strips_formatting() {
    assert_eq!(normalize_digits("(11) 98765-4321"), "11987654321");
    assert_eq!(normalize_digits("abc"), "");
}
