use approvex_core::Document;
use serde_json::{json, Value};

/// Build a document with the given ID and body
#[allow(dead_code)]
pub fn doc(id: &str, body: Value) -> Document {
    Document::new(id, body)
}

/// Document IDs in batch order
#[allow(dead_code)]
pub fn ids(batch: &[Document]) -> Vec<&str> {
    batch.iter().map(|d| d.id.as_str()).collect()
}

/// Transaction event in intake shape
///
/// Every default dynamic field is present with a stable value; use
/// [`transaction_event_for_run`] when run-specific noise matters.
#[allow(dead_code)]
pub fn transaction_event(id: &str, trace_id: &str, name: &str) -> Document {
    transaction_event_for_run(id, trace_id, name, 0)
}

/// Same logical transaction with run-specific values in every default
/// dynamic field, so two runs differ exactly where masking applies
#[allow(dead_code)]
pub fn transaction_event_for_run(id: &str, trace_id: &str, name: &str, run: u32) -> Document {
    Document::new(
        id,
        json!({
            "@timestamp": "2025-03-18T09:15:00.000Z",
            "ecs": {"version": format!("1.12.{}", run)},
            "event": {
                "ingested": format!("2025-03-18T09:15:03.{:03}Z", run),
                "outcome": "success"
            },
            "observer": {
                "ephemeral_id": format!("eph-{}-{}", id, run),
                "hostname": format!("apm-server-{:02}", run),
                "id": format!("obs-{}-{}", id, run),
                "version": format!("8.12.{}", run)
            },
            "processor": {"event": "transaction", "name": "transaction"},
            "service": {"environment": "production", "name": "frontend"},
            "trace": {"id": trace_id},
            "transaction": {
                "duration": {"us": 32592},
                "id": id,
                "name": name,
                "result": "HTTP 2xx",
                "type": "request"
            }
        }),
    )
}

/// Span event in intake shape
#[allow(dead_code)]
pub fn span_event(id: &str, trace_id: &str, resource: &str) -> Document {
    Document::new(
        id,
        json!({
            "@timestamp": "2025-03-18T09:15:00.050Z",
            "processor": {"event": "span", "name": "transaction"},
            "service": {"environment": "production", "name": "frontend"},
            "span": {
                "destination": {"service": {"resource": resource}},
                "duration": {"us": 1214},
                "id": id,
                "name": format!("SELECT FROM {}", resource),
                "type": "db"
            },
            "trace": {"id": trace_id}
        }),
    )
}

/// Error event in intake shape
#[allow(dead_code)]
pub fn error_event(id: &str, trace_id: &str, message: &str) -> Document {
    Document::new(
        id,
        json!({
            "@timestamp": "2025-03-18T09:15:00.100Z",
            "error": {
                "exception": [{"message": message, "type": "ConnectionError"}],
                "id": id
            },
            "processor": {"event": "error", "name": "error"},
            "service": {"environment": "production", "name": "frontend"},
            "trace": {"id": trace_id}
        }),
    )
}
