use super::*;

// =============================================================
// ContactField
// =============================================================

#[test]
fn field_names_match_form_inputs() {
    assert_eq!(ContactField::Name.as_str(), "name");
    assert_eq!(ContactField::Message.as_str(), "message");
    assert_eq!(ContactField::Message.to_string(), "message");
}

#[test]
fn field_parses_from_input_name() {
    assert_eq!("name".parse::<ContactField>(), Ok(ContactField::Name));
    assert_eq!("message".parse::<ContactField>(), Ok(ContactField::Message));
}

#[test]
fn field_parse_rejects_unknown_names() {
    let err = "email".parse::<ContactField>().unwrap_err();
    assert_eq!(err, UnknownField("email".to_owned()));
    assert_eq!(err.to_string(), "unknown contact field: email");
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn default_draft_is_empty() {
    let draft = ContactDraft::default();
    assert!(draft.name.is_empty());
    assert!(draft.message.is_empty());
}

#[test]
fn setting_name_leaves_message_untouched() {
    let mut draft = ContactDraft::new("Ana", "Necesito cámaras");
    draft.set(ContactField::Name, "Luis");
    assert_eq!(draft.name, "Luis");
    assert_eq!(draft.message, "Necesito cámaras");
}

#[test]
fn setting_message_leaves_name_untouched() {
    let mut draft = ContactDraft::new("Ana", "hola");
    draft.set(ContactField::Message, "");
    assert_eq!(draft.name, "Ana");
    assert_eq!(draft.get(ContactField::Message), "");
}

#[test]
fn set_does_not_trim_or_validate() {
    let mut draft = ContactDraft::default();
    draft.set(ContactField::Name, "   ");
    assert_eq!(draft.get(ContactField::Name), "   ");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_filled_fields() {
    assert_eq!(ContactDraft::new("Ana", "hola").validate(), Ok(()));
}

#[test]
fn validate_accepts_padded_fields() {
    assert_eq!(ContactDraft::new("  Ana ", "\nhola\t").validate(), Ok(()));
}

#[test]
fn validate_rejects_empty_name() {
    let err = ContactDraft::new("", "hola").validate().unwrap_err();
    assert_eq!(err.field(), ContactField::Name);
}

#[test]
fn validate_rejects_whitespace_only_message() {
    let err = ContactDraft::new("Ana", " \n\t ").validate().unwrap_err();
    assert_eq!(err, ValidationError::EmptyField(ContactField::Message));
}

#[test]
fn validate_reports_name_first_when_both_blank() {
    let err = ContactDraft::default().validate().unwrap_err();
    assert_eq!(err.field(), ContactField::Name);
}

#[test]
fn validation_error_displays_user_notice() {
    let err = ValidationError::EmptyField(ContactField::Message);
    assert_eq!(err.to_string(), VALIDATION_NOTICE);
}

#[test]
fn byte_order_mark_alone_counts_as_blank() {
    let err = ContactDraft::new("\u{FEFF}", "hola").validate().unwrap_err();
    assert_eq!(err.field(), ContactField::Name);
}

#[test]
fn next_line_character_is_not_trimmed() {
    assert_eq!(ContactDraft::new("Ana", "\u{0085}").validate(), Ok(()));
}

#[test]
fn unicode_spaces_and_line_separators_are_blank() {
    assert!(is_blank("\u{00A0}\u{2003}\u{3000}\u{2028}\u{2029}\u{000B}"));
    assert!(is_blank(""));
    assert!(!is_blank(" a "));
}
