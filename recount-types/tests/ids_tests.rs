use recount_types::{Error, RecordId};

#[test]
fn accepts_plain_ids() {
    for id in ["42", "inv-2024-0001", "a", "5f1c_9e", "QTE_77"] {
        assert!(RecordId::parse(id).is_ok(), "{id} should be valid");
    }
}

#[test]
fn rejects_empty() {
    assert!(matches!(
        RecordId::parse(""),
        Err(Error::InvalidRecordId(_))
    ));
}

#[test]
fn rejects_overlong() {
    let id = "x".repeat(65);
    assert!(matches!(
        RecordId::parse(&id),
        Err(Error::InvalidRecordId(_))
    ));
}

#[test]
fn rejects_path_traversal_characters() {
    for id in ["../etc", "a b", "id?x=1", "x/y", "ñ"] {
        assert!(RecordId::parse(id).is_err(), "{id} should be rejected");
    }
}

#[test]
fn error_names_the_offending_character() {
    let err = RecordId::parse("inv/7").unwrap_err();
    assert!(err.to_string().contains('/'), "got: {err}");
}

#[test]
fn display_and_from_str_round_trip() {
    let id: RecordId = "inv-91".parse().unwrap();
    assert_eq!(id.to_string(), "inv-91");
    assert_eq!(id.as_str(), "inv-91");
}
