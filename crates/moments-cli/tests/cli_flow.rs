//! End-to-end tests driving the `moments` binary.
//!
//! Each test runs with HOME and XDG_CONFIG_HOME pointed at a temp directory
//! so no user configuration leaks in.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn moments_binary() -> String {
    env!("CARGO_BIN_EXE_moments").to_string()
}

fn moments(home: &Path) -> Command {
    let mut cmd = Command::new(moments_binary());
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("MOMENTS_EPSILON_MINUTES")
        .env_remove("MOMENTS_MIN_POINTS")
        .env_remove("MOMENTS_AUTO_EPSILON")
        .env_remove("RUST_LOG");
    cmd
}

fn write_album(dir: &Path, name: &str, times: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let lines: Vec<String> = times
        .iter()
        .enumerate()
        .map(|(i, t)| {
            format!(r#"{{"id": "{name}-{i}", "capturedAt": "{t}", "deviceModel": "X100V"}}"#)
        })
        .collect();
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "moments should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

const AFTERNOON: [&str; 4] = [
    "2024-06-15T14:00:00Z",
    "2024-06-15T14:05:00Z",
    "2024-06-15T14:10:00Z",
    "2024-06-15T23:00:00Z",
];

#[test]
fn test_cluster_text_output() {
    let temp = TempDir::new().unwrap();
    let album = write_album(temp.path(), "album.jsonl", &AFTERNOON);

    let output = moments(temp.path())
        .arg("cluster")
        .arg(&album)
        .output()
        .unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("(epsilon 60m, min 3 photos)"), "{stdout}");
    assert!(stdout.contains("14:00-14:10"), "{stdout}");
    assert!(stdout.contains("3 photos"), "{stdout}");
    assert!(stdout.contains("devices: X100V (3)"), "{stdout}");
}

#[test]
fn test_cluster_json_output() {
    let temp = TempDir::new().unwrap();
    let album = write_album(temp.path(), "album.jsonl", &AFTERNOON);

    let output = moments(temp.path())
        .args(["cluster", "--json"])
        .arg(&album)
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();

    let events = parsed[0]["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["photo_count"], 3);
    assert_eq!(events[0]["duration_minutes"], 10.0);
    assert_eq!(
        events[0]["photo_ids"],
        serde_json::json!(["album.jsonl-0", "album.jsonl-1", "album.jsonl-2"])
    );
}

#[test]
fn test_cluster_reads_stdin() {
    let temp = TempDir::new().unwrap();
    let content = std::fs::read_to_string(write_album(temp.path(), "a.jsonl", &AFTERNOON)).unwrap();

    let mut child = moments(temp.path())
        .args(["cluster", "--assignments", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 3);
    assert!(!stdout.contains("a.jsonl-3"));
}

#[test]
fn test_config_file_sets_min_points() {
    let temp = TempDir::new().unwrap();
    let album = write_album(temp.path(), "album.jsonl", &AFTERNOON);
    let config = temp.path().join("moments.toml");
    std::fs::write(&config, "min_points = 4\n").unwrap();

    let output = moments(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("cluster")
        .arg(&album)
        .output()
        .unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("min 4 photos"), "{stdout}");
    assert!(stdout.contains("No events found."), "{stdout}");
}

#[test]
fn test_env_overrides_epsilon() {
    let temp = TempDir::new().unwrap();
    let album = write_album(temp.path(), "album.jsonl", &AFTERNOON);

    let output = moments(temp.path())
        .env("MOMENTS_EPSILON_MINUTES", "2")
        .arg("cluster")
        .arg(&album)
        .output()
        .unwrap();
    let stdout = stdout_of(&output);

    // 5-minute gaps exceed a 2-minute epsilon
    assert!(stdout.contains("No events found."), "{stdout}");
}

#[test]
fn test_invalid_epsilon_fails() {
    let temp = TempDir::new().unwrap();
    let album = write_album(temp.path(), "album.jsonl", &AFTERNOON);

    let output = moments(temp.path())
        .args(["cluster", "--epsilon", "0"])
        .arg(&album)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("epsilon must be a positive number"), "{stderr}");
}

#[test]
fn test_bad_timestamp_fails() {
    let temp = TempDir::new().unwrap();
    let album = temp.path().join("bad.json");
    std::fs::write(
        &album,
        r#"[{"id": "good", "capturedAt": "2024-06-15T14:00:00Z"}, {"id": "broken", "capturedAt": "yesterday"}]"#,
    )
    .unwrap();

    let output = moments(temp.path())
        .arg("cluster")
        .arg(&album)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken"), "{stderr}");
}

#[test]
fn test_suggest_epsilon() {
    let temp = TempDir::new().unwrap();
    let album = write_album(
        temp.path(),
        "album.jsonl",
        &[
            "2024-06-15T10:00:00Z",
            "2024-06-15T10:40:00Z",
            "2024-06-15T11:20:00Z",
            "2024-06-15T12:00:00Z",
            "2024-06-15T16:00:00Z",
        ],
    );

    let output = moments(temp.path())
        .arg("suggest-epsilon")
        .arg(&album)
        .output()
        .unwrap();

    assert_eq!(stdout_of(&output), "180\n");
}

#[test]
fn test_split_then_merge() {
    let temp = TempDir::new().unwrap();
    let album = write_album(temp.path(), "album.jsonl", &AFTERNOON[..3]);

    let output = moments(temp.path())
        .args(["split", "--json", "--at", "2024-06-15T14:05:00Z"])
        .arg(&album)
        .output()
        .unwrap();
    let halves: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(halves[0]["photo_count"], 2);
    assert_eq!(halves[1]["photo_count"], 1);

    let later = write_album(temp.path(), "later.jsonl", &["2024-06-15T18:00:00Z"]);
    let output = moments(temp.path())
        .args(["merge", "--json"])
        .arg(&album)
        .arg(&later)
        .output()
        .unwrap();
    let merged: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(merged["photo_count"], 4);
    assert_eq!(merged["duration_minutes"], 240.0);
    assert_eq!(
        merged["photo_ids"],
        serde_json::json!([
            "album.jsonl-0",
            "album.jsonl-1",
            "album.jsonl-2",
            "later.jsonl-0"
        ])
    );
}
