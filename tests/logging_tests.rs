use converter_skill::platform::envelope::RequestEnvelope;
use converter_skill::{Request, Skill};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logged<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8_lossy(&captured.0.lock().unwrap()).into_owned();
    (out, text)
}

fn envelope(value: serde_json::Value) -> RequestEnvelope {
    serde_json::from_value(value).expect("valid envelope")
}

#[test]
fn test_unsupported_envelope_is_logged_both_ways() {
    let skill = Skill::default();
    let request = envelope(json!({
        "request": { "type": "Connections.Response", "locale": "en-US" }
    }));

    let (response, logs) = logged(|| skill.handle_envelope(&request));

    assert!(response.response.reprompt.is_some());
    assert_eq!(logs.matches("Incoming request").count(), 1, "{}", logs);
    assert!(logs.contains("Connections.Response"), "{}", logs);
    assert_eq!(logs.matches("Outgoing response").count(), 1, "{}", logs);
    assert!(logs.contains("Error handled: unsupported request"), "{}", logs);
}

#[test]
fn test_envelope_round_trip_logs_once() {
    let skill = Skill::default();
    let request = envelope(json!({
        "request": { "type": "LaunchRequest", "locale": "en-US" }
    }));

    let (_, logs) = logged(|| skill.handle_envelope(&request));

    assert_eq!(logs.matches("Incoming request").count(), 1, "{}", logs);
    assert_eq!(logs.matches("Outgoing response").count(), 1, "{}", logs);
    assert!(logs.contains("Welcome to converter"), "{}", logs);
}

#[test]
fn test_malformed_json_is_logged_both_ways() {
    let skill = Skill::default();

    let (_, logs) = logged(|| skill.handle_json("{not json"));

    assert_eq!(logs.matches("Incoming request").count(), 1, "{}", logs);
    assert_eq!(logs.matches("Outgoing response").count(), 1, "{}", logs);
    assert!(logs.contains("malformed request envelope"), "{}", logs);
}

#[test]
fn test_kernel_request_is_logged_both_ways() {
    let skill = Skill::default();

    let (_, logs) = logged(|| skill.handle(&Request::intent("XYZ"), Some("en-US")));

    assert_eq!(logs.matches("Incoming request").count(), 1, "{}", logs);
    assert_eq!(logs.matches("Outgoing response").count(), 1, "{}", logs);
    assert!(logs.contains("You just triggered XYZ."), "{}", logs);
}
