use super::*;

#[test]
fn validate_setup_password_accepts_matching_pair() {
    assert_eq!(validate_setup_password("Secret123", "Secret123"), Ok("Secret123".to_owned()));
}

#[test]
fn validate_setup_password_enforces_minimum_length() {
    assert_eq!(validate_setup_password("short", "short"), Err("Password must be at least 6 characters."));
}

#[test]
fn validate_setup_password_requires_confirmation_match() {
    assert_eq!(validate_setup_password("Secret123", "Other123"), Err("Passwords do not match."));
}

#[test]
fn parse_user_id_accepts_numeric_param() {
    assert_eq!(parse_user_id(Some("12".to_owned())), Some(12));
    assert_eq!(parse_user_id(Some("twelve".to_owned())), None);
    assert_eq!(parse_user_id(None), None);
}
