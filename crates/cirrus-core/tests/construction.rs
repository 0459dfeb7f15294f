use cirrus_attributes::{AttributeValue, SpecVersion, Timestamp, ValidationError};
use cirrus_core::{CanonicalValue, CloudEvent, Data, EventBuilder, EventFactory};
use serde_json::json;
use uuid::Uuid;

fn fixed_factory() -> EventFactory {
    EventFactory::new()
        .with_id_source(|| "b96267e2-87be-4f7a-b87c-82f64360d954".to_string())
        .with_clock(|| Timestamp::parse("2022-07-16T12:03:20.519216+04:00").unwrap())
}

#[test]
fn defaults_are_populated() {
    let event = CloudEvent::builder()
        .event_type("com.example.string")
        .source("https://example.com/event-producer")
        .build()
        .unwrap();

    assert_eq!(event.event_type(), "com.example.string");
    assert_eq!(event.source().to_string(), "https://example.com/event-producer");

    assert!(Uuid::parse_str(event.id()).is_ok());
    assert_eq!(event.specversion(), SpecVersion::V10);
    assert!(event.time().is_some());
    assert!(event.data().is_none());
    assert!(event.subject().is_none());
    assert!(event.datacontenttype().is_none());
    assert!(event.dataschema().is_none());
    assert!(event.extensions().is_empty());
}

#[test]
fn all_values_can_be_submitted() {
    let event = CloudEvent::builder()
        .event_type("dummy.type")
        .source("dummy:source")
        .id("id-can-be-anything")
        .specversion(SpecVersion::V03)
        .time("2022-07-16T12:03:20.519216+04:00")
        .subject("some-subject")
        .datacontenttype("application/octet-stream")
        .dataschema("http://some-dataschema.url")
        .data(json!({"data-key": "val"}))
        .build()
        .unwrap();

    assert_eq!(event.event_type(), "dummy.type");
    assert_eq!(event.source().to_string(), "dummy:source");
    assert_eq!(event.id(), "id-can-be-anything");
    assert_eq!(event.specversion(), SpecVersion::V03);
    assert_eq!(
        event.time().unwrap().to_canonical(),
        "2022-07-16T12:03:20.519216+04:00"
    );
    assert_eq!(event.subject(), Some("some-subject"));
    assert_eq!(
        event.datacontenttype().unwrap().as_str(),
        "application/octet-stream"
    );
    assert_eq!(event.dataschema().unwrap().to_string(), "http://some-dataschema.url");
    assert_eq!(event.data(), Some(&Data::Json(json!({"data-key": "val"}))));
}

#[test]
fn parsed_timestamps_can_be_submitted_directly() {
    let ts = Timestamp::parse("2020-07-16T12:03:20.519216+04:00").unwrap();
    let event = CloudEvent::builder()
        .event_type("dummy.type")
        .source("dummy:source")
        .time(ts)
        .build()
        .unwrap();

    assert_eq!(event.time(), Some(&ts));
}

#[test]
fn injected_id_source_and_clock_make_construction_deterministic() {
    let builder = || {
        EventBuilder::with_factory(fixed_factory())
            .event_type("com.example.string")
            .source("https://example.com/event-producer")
            .build()
            .unwrap()
    };

    let first = builder();
    let second = builder();
    assert_eq!(first, second);
    assert_eq!(first.id(), "b96267e2-87be-4f7a-b87c-82f64360d954");
    assert_eq!(
        first.time().unwrap().to_canonical(),
        "2022-07-16T12:03:20.519216+04:00"
    );
}

#[test]
fn missing_mandatory_attributes_are_aggregated() {
    let err = CloudEvent::builder().build().unwrap_err();

    let attributes: Vec<&str> = err
        .violations()
        .iter()
        .map(|v| v.attribute.as_str())
        .collect();
    assert_eq!(attributes, vec!["source", "type"]);
    assert!(err
        .violations()
        .iter()
        .all(|v| v.error == ValidationError::Missing));
}

#[test]
fn explicit_null_on_mandatory_attributes_fails() {
    for attribute in ["id", "source", "type", "specversion"] {
        let err = CloudEvent::builder()
            .event_type("com.example.string")
            .source("https://example.com/event-producer")
            .attribute(attribute, CanonicalValue::Null)
            .build()
            .unwrap_err();

        assert!(
            err.violations()
                .iter()
                .any(|v| v.attribute == attribute && v.error == ValidationError::Null),
            "{attribute} must reject explicit null"
        );
    }
}

#[test]
fn explicit_null_time_yields_no_timestamp() {
    let event = CloudEvent::builder()
        .event_type("com.example.string")
        .source("https://example.com/event-producer")
        .attribute("time", CanonicalValue::Null)
        .build()
        .unwrap();

    assert!(event.time().is_none());
}

#[test]
fn extension_attributes_are_validated_and_preserved() {
    let event = CloudEvent::builder()
        .event_type("com.example.string")
        .source("https://example.com/event-producer")
        .attribute("comexampleextension1", "value")
        .attribute("comexampleothervalue", 5i64)
        .attribute("comexampleflag", true)
        .build()
        .unwrap();

    assert_eq!(
        event.extension("comexampleextension1").unwrap().to_canonical_text(),
        "value"
    );
    assert!(matches!(
        event.extension("comexampleothervalue"),
        Some(AttributeValue::Integer(i)) if i.get() == 5
    ));
    assert_eq!(event.extension("comexampleflag"), Some(&AttributeValue::Boolean(true)));
}

#[test]
fn invalid_extension_values_fail_construction() {
    let base = || {
        CloudEvent::builder()
            .event_type("com.example.string")
            .source("https://example.com/event-producer")
    };

    let err = base()
        .attribute("overflow", 2_147_483_649i64)
        .build()
        .unwrap_err();
    assert!(matches!(
        err.violations()[0].error,
        ValidationError::OutOfBounds { .. }
    ));

    let err = base()
        .attribute("ratio", CanonicalValue::Float(0.5))
        .build()
        .unwrap_err();
    assert!(matches!(
        err.violations()[0].error,
        ValidationError::UnsupportedType { found: "float", .. }
    ));

    let err = base()
        .attribute("nested", json!({"a": 1}))
        .build()
        .unwrap_err();
    assert!(matches!(
        err.violations()[0].error,
        ValidationError::UnsupportedType {
            found: "structured",
            ..
        }
    ));

    let err = base().attribute("bad", "with\u{0001}control").build().unwrap_err();
    assert!(matches!(
        err.violations()[0].error,
        ValidationError::ExcludedCodePoint { .. }
    ));
}

#[test]
fn data_base64_is_not_a_constructible_attribute() {
    let err = CloudEvent::builder()
        .event_type("com.example.string")
        .source("https://example.com/event-producer")
        .attribute("data_base64", "dGVzdA==")
        .build()
        .unwrap_err();

    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].attribute, "data_base64");
    assert_eq!(err.violations()[0].error, ValidationError::Reserved);
}

#[test]
fn byte_data_is_accepted_natively() {
    let event = CloudEvent::builder()
        .event_type("com.example.string")
        .source("https://example.com/event-producer")
        .data(b"test".to_vec())
        .build()
        .unwrap();

    assert_eq!(event.data(), Some(&Data::Binary(b"test".to_vec())));
}

#[test]
fn equality_covers_extensions_and_payload() {
    let build = |ext: i64| {
        EventBuilder::with_factory(fixed_factory())
            .event_type("com.example.string")
            .source("https://example.com/event-producer")
            .attribute("counter", ext)
            .build()
            .unwrap()
    };

    assert_eq!(build(1), build(1));
    assert_ne!(build(1), build(2));

    let mut altered = build(1);
    altered.set_data(Some(Data::Json(json!("payload"))));
    assert_ne!(altered, build(1));
}

#[test]
fn set_data_replaces_only_the_payload() {
    let mut event = EventBuilder::with_factory(fixed_factory())
        .event_type("com.example.string")
        .source("https://example.com/event-producer")
        .data("before")
        .build()
        .unwrap();

    event.set_data(Some(Data::Binary(b"after".to_vec())));
    assert_eq!(event.data(), Some(&Data::Binary(b"after".to_vec())));
    assert_eq!(event.id(), "b96267e2-87be-4f7a-b87c-82f64360d954");
}
