//! Contract tests for the `vidgrade` binary: exit codes and output shape.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary with provider credentials cleared and no `.env` in reach.
fn vidgrade(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("vidgrade").unwrap();
    cmd.current_dir(dir)
        .env_remove("OPENAI_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("VIDGRADE_OPENAI_BASE_URL")
        .env_remove("VIDGRADE_GEMINI_BASE_URL")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn video_id_prints_id() {
    let tmp = tempdir().unwrap();
    vidgrade(tmp.path())
        .args(["video-id", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"])
        .assert()
        .success()
        .stdout("dQw4w9WgXcQ\n");
}

#[test]
fn video_id_rejects_unknown_url() {
    let tmp = tempdir().unwrap();
    vidgrade(tmp.path())
        .args(["video-id", "https://example.com/video"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a recognized video URL"));
}

#[test]
fn analyze_rejects_invalid_url_before_analysis() {
    let tmp = tempdir().unwrap();
    vidgrade(tmp.path())
        .args(["analyze", "--url", "https://example.com/video", "--subject", "Physics"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn analyze_without_credentials_prints_fallback() {
    let tmp = tempdir().unwrap();
    let output = vidgrade(tmp.path())
        .args(["analyze", "--url", "https://youtu.be/dQw4w9WgXcQ", "--subject", "Physics"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let v: Value = serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    assert_eq!(v["source"], "fallback");
    assert_eq!(v["overallGrade"], "8/10");
    assert_eq!(v["rubric"].as_array().unwrap().len(), 4);
    assert_eq!(v["rubric"][0]["criteria"], "Clarity");
}

#[test]
fn analyze_text_format() {
    let tmp = tempdir().unwrap();
    vidgrade(tmp.path())
        .args([
            "analyze",
            "--url",
            "https://youtu.be/dQw4w9WgXcQ",
            "--subject",
            "Physics",
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source:   fallback"))
        .stdout(predicate::str::contains("Overall:  8/10"));
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_with_openai_credential_uses_live_reply() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "content": "Here you go: {\"rubric\":[{\"criteria\":\"Clarity\",\"score\":9,\"maxScore\":10}],\"overallGrade\":\"9/10\",\"feedback\":\"Great.\"} Thanks!" } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let tmp = tempdir().unwrap();
        vidgrade(tmp.path())
            .env("OPENAI_API_KEY", "sk-cli")
            .env("VIDGRADE_OPENAI_BASE_URL", uri)
            .args(["analyze", "--url", "https://youtu.be/dQw4w9WgXcQ", "--subject", "Physics"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let v: Value = serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    assert_eq!(v["source"], "live");
    assert_eq!(v["provider"], "openai");
    assert_eq!(v["overallGrade"], "9/10");
}
