use chrono::{TimeZone, Utc};
use recom_engine_be::models::recommendation::DEFAULT_ITEMS;
use recom_engine_be::models::review::format_score;
use recom_engine_be::models::{Recommendation, Review, ReviewSubmission, TimestampInput};
use recom_engine_be::validation::validate_review;

fn review(user_id: &str, product_id: &str, score: f64, millis: i64) -> Review {
    Review {
        user_id: user_id.to_string(),
        product_id: product_id.to_string(),
        score,
        timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
    }
}

#[test]
fn test_wire_format_is_exact() {
    assert_eq!(review("3", "5", 3.5, 10).to_wire(), "3,5,3.5,10");
}

#[test]
fn test_wire_format_uses_epoch_millis() {
    let encoded = review("alice", "widget9", 4.0, 1_500_000_000_123).to_wire();
    assert_eq!(encoded, "alice,widget9,4.0,1500000000123");
}

#[test]
fn test_score_renders_one_fraction_digit() {
    assert_eq!(format_score(3.0), "3.0");
    assert_eq!(format_score(3.5), "3.5");
    assert_eq!(format_score(5.0), "5.0");
    assert_eq!(format_score(0.0), "0.0");

    // Tenths, ties rounded away from zero
    assert_eq!(format_score(3.45), "3.5");
    assert_eq!(format_score(3.44), "3.4");
    assert_eq!(format_score(4.99), "5.0");
}

#[test]
fn test_review_serializes_camel_case_with_instant_string() {
    let json = serde_json::to_value(review("3", "5", 3.5, 10)).unwrap();

    assert_eq!(json["userId"], "3");
    assert_eq!(json["productId"], "5");
    assert_eq!(json["score"], 3.5);
    assert!(
        json["timestamp"]
            .as_str()
            .unwrap()
            .starts_with("1970-01-01T00:00:00.010")
    );
}

#[test]
fn test_validated_submission_encodes_end_to_end() {
    let submission = ReviewSubmission {
        product_id: Some("5".to_string()),
        score: Some(3.5),
        timestamp: Some(TimestampInput::Millis(10)),
    };

    let review = validate_review("3", &submission).unwrap();
    assert_eq!(review.to_wire(), "3,5,3.5,10");
}

#[test]
fn test_default_recommendations_are_deterministic() {
    let first = Recommendation::fallback("42");
    let second = Recommendation::fallback("42");

    assert_eq!(first.user_id, "42");
    assert!(!first.items.is_empty());
    assert_eq!(first.items, second.items);
    assert_eq!(first.items, DEFAULT_ITEMS.map(String::from).to_vec());
}

#[test]
fn test_recommendation_serializes_camel_case() {
    let json = serde_json::to_value(Recommendation::fallback("42")).unwrap();

    assert_eq!(json["userId"], "42");
    assert!(json["items"].is_array());
}
