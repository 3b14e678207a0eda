use super::*;

// =============================================================
// SentimentType serde
// =============================================================

#[test]
fn sentiment_type_uses_upper_case_labels() {
    assert_eq!(serde_json::to_string(&SentimentType::Positive).unwrap(), "\"POSITIVE\"");
    assert_eq!(serde_json::to_string(&SentimentType::Negative).unwrap(), "\"NEGATIVE\"");
    assert_eq!(serde_json::to_string(&SentimentType::Neutral).unwrap(), "\"NEUTRAL\"");
}

#[test]
fn sentiment_type_rejects_unknown_label() {
    let parsed = serde_json::from_str::<SentimentType>("\"MIXED\"");
    assert!(parsed.is_err());
}

#[test]
fn sentiment_type_label_matches_wire_value() {
    for kind in [SentimentType::Positive, SentimentType::Negative, SentimentType::Neutral] {
        let wire = serde_json::to_string(&kind).unwrap();
        assert_eq!(wire.trim_matches('"'), kind.label());
    }
}

// =============================================================
// FeedbackRecord serde
// =============================================================

#[test]
fn feedback_record_decodes_full_backend_payload() {
    let json = r#"{
        "id": 7,
        "content": "The app is great, but login is slow.",
        "sentimentScore": 0.35,
        "createdAt": "2025-08-30T12:01:02.123456",
        "sentimentType": "POSITIVE",
        "modelResponse": "Thanks! We're looking into login speed."
    }"#;
    let record: FeedbackRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, Some(7));
    assert_eq!(record.content, "The app is great, but login is slow.");
    assert!((record.sentiment_score - 0.35).abs() < f64::EPSILON);
    assert_eq!(record.sentiment_type, SentimentType::Positive);
    assert_eq!(record.model_response.as_deref(), Some("Thanks! We're looking into login speed."));
    assert_eq!(record.created_at.as_deref(), Some("2025-08-30T12:01:02.123456"));
}

#[test]
fn feedback_record_accepts_missing_and_null_optionals() {
    let json = r#"{
        "content": "meh",
        "sentimentScore": 0,
        "sentimentType": "NEUTRAL",
        "modelResponse": null
    }"#;
    let record: FeedbackRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, None);
    assert_eq!(record.model_response, None);
    assert_eq!(record.created_at, None);
    assert_eq!(record.sentiment_type, SentimentType::Neutral);
}

#[test]
fn feedback_record_serializes_camel_case_keys() {
    let record = FeedbackRecord {
        id: Some(1),
        content: "ok".to_owned(),
        sentiment_score: -0.5,
        sentiment_type: SentimentType::Negative,
        model_response: None,
        created_at: None,
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["sentimentScore"], serde_json::json!(-0.5));
    assert_eq!(value["sentimentType"], serde_json::json!("NEGATIVE"));
    assert!(value.get("sentiment_score").is_none());
}

#[test]
fn feedback_list_decodes_from_array() {
    let json = r#"[
        {"id": 2, "content": "b", "sentimentScore": -1.0, "sentimentType": "NEGATIVE"},
        {"id": 1, "content": "a", "sentimentScore": 1.0, "sentimentType": "POSITIVE"}
    ]"#;
    let records: Vec<FeedbackRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, Some(2));
    assert_eq!(records[1].sentiment_type, SentimentType::Positive);
}

// =============================================================
// FeedbackRecord helpers
// =============================================================

fn record_with(id: Option<i64>, reply: Option<&str>) -> FeedbackRecord {
    FeedbackRecord {
        id,
        content: "text".to_owned(),
        sentiment_score: 0.0,
        sentiment_type: SentimentType::Neutral,
        model_response: reply.map(str::to_owned),
        created_at: None,
    }
}

#[test]
fn sort_key_treats_missing_id_as_zero() {
    assert_eq!(record_with(None, None).sort_key(), 0);
    assert_eq!(record_with(Some(42), None).sort_key(), 42);
}

#[test]
fn suggested_reply_hides_empty_text() {
    assert_eq!(record_with(None, None).suggested_reply(), None);
    assert_eq!(record_with(None, Some("")).suggested_reply(), None);
    assert_eq!(record_with(None, Some("Thanks!")).suggested_reply(), Some("Thanks!"));
}
