use pretty_assertions::assert_eq;
use recount_types::{ListEnvelope, RawListPayload};
use serde_json::json;

#[test]
fn bare_array_classifies_as_bare() {
    let raw = json!([1, 2, 3]);
    let payload: RawListPayload<i32> = RawListPayload::from_value(raw);
    assert_eq!(payload, RawListPayload::Bare(vec![1, 2, 3]));
}

#[test]
fn envelope_classifies_as_envelope() {
    let raw = json!({"data": [5, 6], "total": 40, "limit": 2, "offset": 10});
    let payload: RawListPayload<i32> = RawListPayload::from_value(raw);
    assert_eq!(
        payload,
        RawListPayload::Envelope(ListEnvelope {
            data: vec![5, 6],
            total: Some(40),
            limit: Some(2),
            offset: Some(10),
        })
    );
}

#[test]
fn envelope_metadata_is_optional() {
    let raw = json!({"data": ["a", "b"]});
    let payload: RawListPayload<String> = RawListPayload::from_value(raw);
    let (records, total, limit, offset) = payload.into_parts();
    assert_eq!(records, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(total, None);
    assert_eq!(limit, None);
    assert_eq!(offset, None);
}

#[test]
fn object_without_data_array_degrades_to_empty() {
    let raw = json!({"data": "not an array"});
    let payload: RawListPayload<i32> = RawListPayload::from_value(raw);
    assert_eq!(payload, RawListPayload::Bare(vec![]));
}

#[test]
fn scalar_payload_degrades_to_empty() {
    for raw in [json!(42), json!("oops"), json!(null), json!(true)] {
        let payload: RawListPayload<i32> = RawListPayload::from_value(raw);
        assert_eq!(payload, RawListPayload::Bare(vec![]));
    }
}

#[test]
fn undeserializable_records_degrade_to_empty() {
    // Array of objects where i32 records were expected.
    let raw = json!([{"x": 1}]);
    let payload: RawListPayload<i32> = RawListPayload::from_value(raw);
    assert_eq!(payload, RawListPayload::Bare(vec![]));
}

#[test]
fn classify_flags_malformed_payloads() {
    for raw in [
        json!(42),
        json!("oops"),
        json!(null),
        json!(true),
        json!({"data": "not an array"}),
        json!([{"x": 1}]), // records that are not i32
    ] {
        assert_eq!(RawListPayload::<i32>::classify(raw), None);
    }
}

#[test]
fn classify_accepts_both_list_shapes() {
    let bare = RawListPayload::<i32>::classify(json!([1, 2]));
    assert_eq!(bare, Some(RawListPayload::Bare(vec![1, 2])));

    let env = RawListPayload::<i32>::classify(json!({"data": [3], "total": 9}));
    assert_eq!(
        env,
        Some(RawListPayload::Envelope(ListEnvelope {
            data: vec![3],
            total: Some(9),
            limit: None,
            offset: None,
        }))
    );
}

#[test]
fn from_value_collapses_malformed_to_empty_bare() {
    let payload: RawListPayload<i32> = RawListPayload::from_value(json!({"data": 1}));
    assert_eq!(payload, RawListPayload::Bare(vec![]));
}

#[test]
fn classification_is_idempotent() {
    let raw = json!({"data": [1, 2], "total": 9});
    let first: RawListPayload<i32> = RawListPayload::from_value(raw.clone());
    let second: RawListPayload<i32> = RawListPayload::from_value(raw);
    assert_eq!(first, second);
}

#[test]
fn has_envelope_tracks_shape() {
    let bare: RawListPayload<i32> = RawListPayload::from_value(json!([1]));
    let env: RawListPayload<i32> = RawListPayload::from_value(json!({"data": [1]}));
    assert!(!bare.has_envelope());
    assert!(env.has_envelope());
}
