use gloo_net::http::Request;
use serde_json::Value;

use super::payload::SubmissionPayload;

/// Apps-Script style relays only accept plain-text bodies and answer from
/// an opaque origin.
fn is_plain_text_relay(endpoint: &str) -> bool {
    endpoint.contains("script.google.com")
}

/// Single-attempt delivery of the application payload. With no endpoint
/// configured the submission is treated as handled locally. Errors carry
/// a diagnostic string for the console; the page shows its own recovery
/// message.
pub async fn deliver(endpoint: &str, payload: &SubmissionPayload) -> Result<(), String> {
    if endpoint.is_empty() {
        return Ok(());
    }
    let body =
        serde_json::to_string(payload).map_err(|e| format!("Could not encode application: {e}"))?;

    if is_plain_text_relay(endpoint) {
        let response = Request::post(endpoint)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;
        // Anything that is not explicit JSON with a falsy `ok` counts as
        // success; the relay often replies opaque/non-JSON.
        if let Ok(text) = response.text().await {
            if let Ok(value) = serde_json::from_str::<Value>(&text) {
                let ok = value.get("ok").and_then(Value::as_bool).unwrap_or(false);
                if !ok {
                    return Err("Relay reported failure".to_string());
                }
            }
        }
        return Ok(());
    }

    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;
    if !response.ok() {
        return Err(format!("Submission failed ({})", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_detection_matches_apps_script_hosts() {
        assert!(is_plain_text_relay(
            "https://script.google.com/macros/s/XYZ/exec"
        ));
        assert!(!is_plain_text_relay("https://api.example.com/casting"));
        assert!(!is_plain_text_relay(""));
    }
}
