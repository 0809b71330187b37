use super::*;

#[test]
fn validate_registration_input_trims_name_and_email() {
    let form = validate_registration_input(" Ayu ", " a@b.com ", "secret1", "secret1").unwrap();
    assert_eq!(form.name, "Ayu");
    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password, "secret1");
}

#[test]
fn validate_registration_input_requires_name() {
    assert_eq!(validate_registration_input("  ", "a@b.com", "secret1", "secret1"), Err("Enter your name."));
}

#[test]
fn validate_registration_input_requires_email() {
    assert_eq!(
        validate_registration_input("Ayu", "ayu", "secret1", "secret1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_registration_input_password_too_short() {
    assert_eq!(
        validate_registration_input("Ayu", "a@b.com", "abc", "abc"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn validate_registration_input_password_mismatch() {
    assert_eq!(
        validate_registration_input("Ayu", "a@b.com", "secret1", "secret2"),
        Err("Passwords do not match.")
    );
}
