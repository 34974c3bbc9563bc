//! End-to-end tests for the `wd` binary against a mocked WebDriver server.

use serde_json::{Value, json};
use tokio::process::Command;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SESSION: &str = "4f2e9b";

async fn run_wd(server: &str, args: &[&str]) -> (bool, Value, String) {
	run_wd_with_env(server, &[], args).await
}

async fn run_wd_with_env(server: &str, env: &[(&str, &str)], args: &[&str]) -> (bool, Value, String) {
	let output = Command::new(env!("CARGO_BIN_EXE_wd"))
		.env_remove("WD_SERVER_URL")
		.env_remove("WD_SESSION_ID")
		.env_remove("WD_BROWSER")
		.env_remove("WD_TIMEOUT_MS")
		.env_remove("WD_FILE_DETECTOR")
		.env_remove("RUST_LOG")
		.envs(env.iter().copied())
		.args(["-f", "ndjson", "--server", server])
		.args(args)
		.output()
		.await
		.expect("failed to execute wd");

	let stdout = String::from_utf8_lossy(&output.stdout).to_string();
	let stderr = String::from_utf8_lossy(&output.stderr).to_string();
	let parsed = serde_json::from_str::<Value>(stdout.trim()).unwrap_or_else(|_| json!({ "raw": stdout }));
	(output.status.success(), parsed, stderr)
}

#[tokio::test]
async fn install_local_directory_uploads_then_installs() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(format!("/session/{SESSION}/se/file")))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": "/tmp/upload/addon.zip"})))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("POST"))
		.and(path(format!("/session/{SESSION}/moz/addon/install")))
		.and(body_json(json!({"path": "/tmp/upload/addon.zip", "temporary": false})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": "addon@example.com"})))
		.expect(1)
		.mount(&server)
		.await;

	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("manifest.json"), br#"{"manifest_version": 2}"#).unwrap();
	let addon = dir.path().to_str().unwrap();

	let (ok, json, stderr) = run_wd(&server.uri(), &["--session", SESSION, "addon", "install", addon]).await;
	assert!(ok, "install failed: {stderr}");
	assert_eq!(json["ok"], true);
	assert_eq!(json["command"], "addon.install");
	assert_eq!(json["data"]["id"], "addon@example.com");
	assert_eq!(json["inputs"]["sessionId"], SESSION);
}

#[tokio::test]
async fn remote_detector_sends_path_verbatim() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(format!("/session/{SESSION}/moz/addon/install")))
		.and(body_json(json!({"path": "/srv/addons/ext.xpi", "temporary": false})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": "ext@srv"})))
		.expect(1)
		.mount(&server)
		.await;

	let (ok, json, stderr) = run_wd(
		&server.uri(),
		&["--session", SESSION, "--file-detector", "remote", "addon", "install", "/srv/addons/ext.xpi"],
	)
	.await;
	assert!(ok, "install failed: {stderr}");
	assert_eq!(json["data"]["id"], "ext@srv");
}

#[tokio::test]
async fn file_detector_and_session_from_environment() {
	let dir = tempfile::tempdir().unwrap();
	let xpi = dir.path().join("env.xpi");
	std::fs::write(&xpi, b"addon payload").unwrap();
	let xpi = xpi.to_str().unwrap();

	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(format!("/session/{SESSION}/moz/addon/install")))
		.and(body_json(json!({"path": xpi, "temporary": false})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": "env@srv"})))
		.expect(1)
		.mount(&server)
		.await;

	// the file exists locally, so only the remote detector skips the upload
	let (ok, json, stderr) = run_wd_with_env(
		&server.uri(),
		&[("WD_SESSION_ID", SESSION), ("WD_FILE_DETECTOR", "remote")],
		&["addon", "install", xpi],
	)
	.await;
	assert!(ok, "install failed: {stderr}");
	assert_eq!(json["data"]["id"], "env@srv");
	let requests = server.received_requests().await.unwrap();
	assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn uninstall_reports_id() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(format!("/session/{SESSION}/moz/addon/uninstall")))
		.and(body_json(json!({"id": "ext@srv"})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": null})))
		.expect(1)
		.mount(&server)
		.await;

	let (ok, json, stderr) = run_wd(&server.uri(), &["--session", SESSION, "addon", "uninstall", "ext@srv"]).await;
	assert!(ok, "uninstall failed: {stderr}");
	assert_eq!(json["command"], "addon.uninstall");
	assert_eq!(json["data"]["id"], "ext@srv");
}

#[tokio::test]
async fn remote_rejection_is_reported() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(format!("/session/{SESSION}/moz/addon/uninstall")))
		.respond_with(ResponseTemplate::new(500).set_body_json(json!({
			"value": {"error": "unknown error", "message": "Failed to uninstall add-on", "stacktrace": ""}
		})))
		.mount(&server)
		.await;

	let (ok, json, stderr) = run_wd(&server.uri(), &["--session", SESSION, "addon", "uninstall", "gone@srv"]).await;
	assert!(!ok);
	assert_eq!(json["ok"], false);
	assert_eq!(json["command"], "addon.uninstall");
	assert_eq!(json["error"]["code"], "REMOTE_ERROR");
	assert_eq!(json["error"]["details"]["error"], "unknown error");
	assert!(stderr.contains("Failed to uninstall add-on"));
}

#[tokio::test]
async fn non_firefox_session_is_unsupported() {
	let server = MockServer::start().await;

	let (ok, json, _) = run_wd(
		&server.uri(),
		&["--session", SESSION, "--browser", "chrome", "addon", "install", "/srv/ext.xpi"],
	)
	.await;
	assert!(!ok);
	assert_eq!(json["error"]["code"], "UNSUPPORTED");
	assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_session_is_invalid_input() {
	let server = MockServer::start().await;

	let (ok, json, _) = run_wd(&server.uri(), &["addon", "uninstall", "ext@srv"]).await;
	assert!(!ok);
	assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn commands_lists_vendor_commands() {
	let (ok, json, stderr) = run_wd("http://localhost:4444", &["commands"]).await;
	assert!(ok, "commands failed: {stderr}");
	assert_eq!(json["data"]["count"], 3);
	let names: Vec<&str> = json["data"]["commands"]
		.as_array()
		.unwrap()
		.iter()
		.map(|c| c["name"].as_str().unwrap())
		.collect();
	assert!(names.contains(&"installExtension"));
	assert!(names.contains(&"uninstallExtension"));
	assert!(names.contains(&"uploadFile"));
}
