use super::*;

// =============================================================================
// raw text
// =============================================================================

#[test]
fn plain_text_passes_through() {
    assert_eq!(normalize_reply("plain reply"), "plain reply");
}

#[test]
fn empty_body_is_empty_content() {
    assert_eq!(normalize_reply(""), "");
}

#[test]
fn truncated_json_is_raw_text() {
    assert_eq!(normalize_reply(r#"{"output":"hi"#), r#"{"output":"hi"#);
}

#[test]
fn json_null_keeps_raw_text() {
    assert_eq!(normalize_reply("null"), "null");
}

// =============================================================================
// JSON strings and keyed objects
// =============================================================================

#[test]
fn json_string_is_unwrapped() {
    assert_eq!(normalize_reply(r#""hello""#), "hello");
}

#[test]
fn output_key_is_used() {
    assert_eq!(normalize_reply(r#"{"output":"hi there"}"#), "hi there");
}

#[test]
fn each_reply_key_is_recognized() {
    for key in REPLY_KEYS {
        let body = format!(r#"{{"{key}":"from {key}"}}"#);
        assert_eq!(normalize_reply(&body), format!("from {key}"), "key {key}");
    }
}

#[test]
fn data_wins_over_later_keys() {
    let body = r#"{"response":"r","result":"x","output":"o","data":"d"}"#;
    assert_eq!(normalize_reply(body), "d");
}

#[test]
fn empty_value_falls_through_to_next_key() {
    let body = r#"{"data":"","output":null,"result":"answer"}"#;
    assert_eq!(normalize_reply(body), "answer");
}

#[test]
fn zero_and_false_are_not_answers() {
    let body = r#"{"data":0,"output":false,"response":"ok"}"#;
    assert_eq!(normalize_reply(body), "ok");
}

#[test]
fn non_string_key_value_is_serialized() {
    let body = r#"{"output":{"text":"nested","score":2}}"#;
    assert_eq!(normalize_reply(body), r#"{"text":"nested","score":2}"#);
}

#[test]
fn numeric_key_value_is_serialized() {
    assert_eq!(normalize_reply(r#"{"result":42}"#), "42");
}

// =============================================================================
// fallback serialization
// =============================================================================

#[test]
fn unrecognized_object_is_serialized() {
    assert_eq!(normalize_reply(r#"{"foo":"bar"}"#), r#"{"foo":"bar"}"#);
}

#[test]
fn serialization_is_compact_and_keeps_key_order() {
    let body = "{ \"zeta\": 1,\n  \"alpha\": [true, null] }";
    assert_eq!(normalize_reply(body), r#"{"zeta":1,"alpha":[true,null]}"#);
}

#[test]
fn object_with_only_empty_reply_keys_is_serialized() {
    assert_eq!(normalize_reply(r#"{"output":""}"#), r#"{"output":""}"#);
}

#[test]
fn array_is_serialized() {
    assert_eq!(normalize_reply(r#"[{"output":"a"}]"#), r#"[{"output":"a"}]"#);
}

#[test]
fn number_and_bool_bodies_are_serialized() {
    assert_eq!(normalize_reply("7"), "7");
    assert_eq!(normalize_reply("true"), "true");
}
