//! Loading of already-fetched provider payloads.
//!
//! The fetch layer writes provider responses to disk; this module turns them
//! into [`RawEvent`] lists. Payloads come in a few shapes:
//! - `{ "events": [...] }` (league seasons, fixture lookups)
//! - `{ "results": [...] }` (team history)
//! - a bare array
//!
//! A missing or broken payload is not fatal for history inputs: it becomes
//! an empty list so the analysis still renders, just with lower confidence.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::RawEvent;

/// Errors that can occur while loading payloads.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No event array in payload: {0}")]
    NoEvents(String),
}

/// The event array carried by a payload, if it carries one.
fn event_array(payload: &Value) -> Option<&Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => ["events", "results"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

/// Raw events in a payload, or `None` when it has no event array.
///
/// Elements that are not records are skipped.
pub fn events_from_payload(payload: &Value) -> Option<Vec<RawEvent>> {
    let items = event_array(payload)?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match serde_json::from_value::<RawEvent>(item.clone()) {
            Ok(raw) => out.push(raw),
            Err(e) => debug!("Skipping payload element {}: {}", i, e),
        }
    }
    Some(out)
}

/// Events of the first payload that carries an array.
///
/// Mirrors trying a primary query shape before a secondary one: an empty
/// array from the primary is an answer, a missing array is not.
pub fn first_available_events(payloads: &[Value]) -> Vec<RawEvent> {
    payloads
        .iter()
        .find_map(events_from_payload)
        .unwrap_or_default()
}

/// Read and parse a JSON payload file.
pub fn read_payload(path: &Path) -> Result<Value, IngestError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load events from a payload file, degrading to an empty list.
pub fn load_events_or_empty(path: &Path) -> Vec<RawEvent> {
    match read_payload(path) {
        Ok(payload) => events_from_payload(&payload).unwrap_or_else(|| {
            warn!("No event array in {}, using empty list", path.display());
            Vec::new()
        }),
        Err(e) => {
            warn!("Failed to load {}: {}, using empty list", path.display(), e);
            Vec::new()
        }
    }
}

/// Load one season from a primary payload file and optional fallbacks.
///
/// Unreadable files are treated like payloads without an array, so the next
/// candidate is tried.
pub fn load_season_events(paths: &[&Path]) -> Vec<RawEvent> {
    let payloads: Vec<Value> = paths
        .iter()
        .filter_map(|path| match read_payload(path) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Failed to load season payload {}: {}", path.display(), e);
                None
            }
        })
        .collect();
    first_available_events(&payloads)
}

/// Load the fixture under analysis: the first record of the payload.
pub fn load_fixture(path: &Path) -> Result<RawEvent, IngestError> {
    let payload = read_payload(path)?;
    let first = event_array(&payload)
        .and_then(|items| items.first())
        .ok_or_else(|| IngestError::NoEvents(path.display().to_string()))?;
    Ok(serde_json::from_value(first.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_json(dir: &Path, name: &str, value: &Value) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", value).unwrap();
        path
    }

    #[test]
    fn test_events_from_payload_shapes() {
        let events = json!({"events": [{"idEvent": "1"}, {"idEvent": "2"}]});
        assert_eq!(events_from_payload(&events).unwrap().len(), 2);

        let results = json!({"results": [{"idEvent": "1"}]});
        assert_eq!(events_from_payload(&results).unwrap().len(), 1);

        let bare = json!([{"idEvent": "1"}]);
        assert_eq!(events_from_payload(&bare).unwrap().len(), 1);
    }

    #[test]
    fn test_events_key_preferred_over_results() {
        let payload = json!({
            "events": [{"idEvent": "e"}],
            "results": [{"idEvent": "r1"}, {"idEvent": "r2"}]
        });
        let events = events_from_payload(&payload).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id_event, Some(json!("e")));
    }

    #[test]
    fn test_null_events_falls_through_to_results() {
        let payload = json!({"events": null, "results": [{"idEvent": "r"}]});
        assert_eq!(events_from_payload(&payload).unwrap().len(), 1);
    }

    #[test]
    fn test_events_from_payload_without_array() {
        assert!(events_from_payload(&json!({"events": null})).is_none());
        assert!(events_from_payload(&json!({"teams": []})).is_none());
        assert!(events_from_payload(&json!("nope")).is_none());
    }

    #[test]
    fn test_events_from_payload_skips_non_records() {
        let payload = json!({
            "events": [{"idEvent": "1"}, 42, "x", {"idEvent": "2"}]
        });
        assert_eq!(events_from_payload(&payload).unwrap().len(), 2);
    }

    #[test]
    fn test_first_available_events() {
        let primary = json!({"events": null});
        let secondary = json!({"events": [{"idEvent": "1"}]});
        assert_eq!(first_available_events(&[primary, secondary]).len(), 1);

        let empty_primary = json!({"events": []});
        let secondary = json!({"events": [{"idEvent": "1"}]});
        assert!(first_available_events(&[empty_primary, secondary]).is_empty());

        assert!(first_available_events(&[]).is_empty());
    }

    #[test]
    fn test_load_events_or_empty() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_json(dir.path(), "good.json", &json!({"results": [{"idEvent": "1"}]}));
        assert_eq!(load_events_or_empty(&good).len(), 1);

        let no_array = write_json(dir.path(), "none.json", &json!({"results": null}));
        assert!(load_events_or_empty(&no_array).is_empty());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(load_events_or_empty(&broken).is_empty());

        assert!(load_events_or_empty(&dir.path().join("missing.json")).is_empty());
    }

    #[test]
    fn test_load_season_events_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let primary = write_json(dir.path(), "s.json", &json!({"events": null}));
        let secondary = write_json(
            dir.path(),
            "season.json",
            &json!({"events": [{"idEvent": "9"}]}),
        );
        let missing = dir.path().join("missing.json");

        let candidates = [missing.as_path(), primary.as_path(), secondary.as_path()];
        let events = load_season_events(&candidates);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id_event, Some(json!("9")));
    }

    #[test]
    fn test_load_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(
            dir.path(),
            "event.json",
            &json!({
                "events": [{
                    "idEvent": "2052411",
                    "strEvent": "Arsenal vs Chelsea"
                }]
            }),
        );
        let fixture = load_fixture(&path).unwrap();
        assert_eq!(fixture.id_event, Some(json!("2052411")));

        let empty = write_json(dir.path(), "empty.json", &json!({"events": null}));
        assert!(matches!(load_fixture(&empty), Err(IngestError::NoEvents(_))));

        assert!(matches!(
            load_fixture(&dir.path().join("missing.json")),
            Err(IngestError::Io(_))
        ));
    }
}
