//! Integration tests for the recognition client.
//!
//! A `tiny_http` loopback server stands in for the hosted endpoint so the
//! full request/response cycle is exercised: body shape, status handling,
//! and every error path the wire can produce.

use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use recognize::{RecognizeClient, RecognizeConfig, RecognizeError, RecognizeOptions};
use tiny_http::{Header, Response, Server};

/// One-shot stub endpoint. Serves a single canned response and hands the
/// captured request body back through a channel.
struct StubServer {
    url: String,
    requests: mpsc::Receiver<String>,
}

fn spawn_stub(status: u16, body: &'static str) -> StubServer {
    let server = Server::http("127.0.0.1:0").expect("failed to bind stub server");
    let port = server.server_addr().to_ip().expect("stub server has an IP address").port();
    let url = format!("http://127.0.0.1:{}/recognize", port);
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(5)) {
            let mut captured = String::new();
            let _ = request.as_reader().read_to_string(&mut captured);
            let _ = tx.send(captured);

            let content_type = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .expect("static header is valid");
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(content_type);
            let _ = request.respond(response);
        }
    });

    StubServer { url, requests: rx }
}

fn client_for(stub: &StubServer) -> RecognizeClient {
    let config = RecognizeConfig {
        endpoint: stub.url.clone(),
        timeout_secs: 5,
        ..Default::default()
    };
    RecognizeClient::with_config(&config).expect("client construction succeeds")
}

fn captured_json(stub: &StubServer) -> serde_json::Value {
    let body = stub
        .requests
        .recv_timeout(Duration::from_secs(5))
        .expect("stub received a request");
    serde_json::from_str(&body).expect("request body is JSON")
}

#[tokio::test]
async fn recognize_bytes_returns_text_and_sends_documented_defaults() {
    let stub = spawn_stub(200, r#"{"text": "E = mc^2"}"#);
    let client = client_for(&stub);

    let result = client
        .recognize_bytes(b"fake png bytes", &RecognizeOptions::default())
        .await
        .unwrap();

    assert_eq!(result.text, "E = mc^2");
    assert_eq!(result.rendered_html, "");

    let request = captured_json(&stub);
    assert_eq!(request["image"], BASE64.encode(b"fake png bytes"));
    assert_eq!(request["ocr_type"], "format");
    assert_eq!(request["ocr_box"], "");
    assert_eq!(request["ocr_color"], "");
    assert_eq!(request["render"], false);
}

#[tokio::test]
async fn render_flag_populates_rendered_html() {
    let stub = spawn_stub(200, r#"{"text": "x^2", "rendered_html": "<p>x^2</p>"}"#);
    let client = client_for(&stub);

    let options = RecognizeOptions {
        render: true,
        ..Default::default()
    };
    let result = client.recognize_bytes(b"fake png bytes", &options).await.unwrap();

    assert_eq!(result.text, "x^2");
    assert_eq!(result.rendered_html, "<p>x^2</p>");

    let request = captured_json(&stub);
    assert_eq!(request["render"], true);
}

#[tokio::test]
async fn rendered_html_is_suppressed_when_render_not_requested() {
    // Service may return a rendering anyway; the client only surfaces it on request.
    let stub = spawn_stub(200, r#"{"text": "x^2", "rendered_html": "<p>x^2</p>"}"#);
    let client = client_for(&stub);

    let result = client
        .recognize_bytes(b"fake png bytes", &RecognizeOptions::default())
        .await
        .unwrap();

    assert_eq!(result.text, "x^2");
    assert_eq!(result.rendered_html, "");
}

#[tokio::test]
async fn empty_object_response_resolves_to_empty_outputs() {
    let stub = spawn_stub(200, "{}");
    let client = client_for(&stub);

    let result = client
        .recognize_bytes(b"fake png bytes", &RecognizeOptions::default())
        .await
        .unwrap();

    assert_eq!(result.text, "");
    assert_eq!(result.rendered_html, "");
}

#[tokio::test]
async fn malformed_response_body_is_a_response_format_error() {
    let stub = spawn_stub(200, "not json");
    let client = client_for(&stub);

    let result = client
        .recognize_bytes(b"fake png bytes", &RecognizeOptions::default())
        .await;

    assert!(matches!(
        result.unwrap_err(),
        RecognizeError::ResponseFormat { .. }
    ));
}

#[tokio::test]
async fn non_success_status_is_a_remote_error() {
    let stub = spawn_stub(500, r#"{"error": "model crashed"}"#);
    let client = client_for(&stub);

    let result = client
        .recognize_bytes(b"fake png bytes", &RecognizeOptions::default())
        .await;

    match result.unwrap_err() {
        RecognizeError::Remote { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("model crashed"));
        }
        other => panic!("expected Remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind and immediately drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = RecognizeConfig {
        endpoint: format!("http://127.0.0.1:{}/recognize", port),
        timeout_secs: 5,
        ..Default::default()
    };
    let client = RecognizeClient::with_config(&config).unwrap();

    let result = client
        .recognize_bytes(b"fake png bytes", &RecognizeOptions::default())
        .await;

    assert!(matches!(result.unwrap_err(), RecognizeError::Transport { .. }));
}

#[tokio::test]
async fn missing_file_fails_before_any_request_is_issued() {
    let stub = spawn_stub(200, r#"{"text": "never sent"}"#);
    let client = client_for(&stub);

    let result = client
        .recognize_file("/nonexistent/equation.png", &RecognizeOptions::default())
        .await;

    assert!(matches!(result.unwrap_err(), RecognizeError::Io(_)));
    assert!(
        stub.requests.recv_timeout(Duration::from_millis(200)).is_err(),
        "no network request may be issued for an unreadable file"
    );
}

#[tokio::test]
async fn recognize_file_encodes_exact_file_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("equation.png");
    let bytes: Vec<u8> = (0u8..=255).collect();
    std::fs::write(&path, &bytes).unwrap();

    let stub = spawn_stub(200, r#"{"text": "\\frac{a}{b}"}"#);
    let client = client_for(&stub);

    let result = client
        .recognize_file(&path, &RecognizeOptions::default())
        .await
        .unwrap();
    assert_eq!(result.text, "\\frac{a}{b}");

    let request = captured_json(&stub);
    let encoded = request["image"].as_str().unwrap();
    assert_eq!(BASE64.decode(encoded).unwrap(), bytes);
}

#[test]
fn sync_wrappers_block_on_the_same_exchange() {
    let stub = spawn_stub(200, r#"{"text": "42"}"#);
    let client = client_for(&stub);

    let result = client
        .recognize_bytes_sync(b"fake png bytes", &RecognizeOptions::default())
        .unwrap();

    assert_eq!(result.text, "42");
}

#[tokio::test]
async fn config_file_defaults_flow_through_to_the_request() {
    let stub = spawn_stub(200, r#"{"text": "ok", "rendered_html": "<p>ok</p>"}"#);

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("recognize.toml");
    std::fs::write(
        &config_path,
        format!(
            "endpoint = \"{}\"\ntimeout_secs = 5\n\n[options]\nocr_type = \"ocr\"\nrender = true\n",
            stub.url
        ),
    )
    .unwrap();

    let config = RecognizeConfig::from_toml_file(&config_path).unwrap();
    let client = RecognizeClient::with_config(&config).unwrap();

    let result = client
        .recognize_bytes(b"fake png bytes", &config.options)
        .await
        .unwrap();
    assert_eq!(result.text, "ok");
    assert_eq!(result.rendered_html, "<p>ok</p>");

    let request = captured_json(&stub);
    assert_eq!(request["ocr_type"], "ocr");
    assert_eq!(request["render"], true);
}
