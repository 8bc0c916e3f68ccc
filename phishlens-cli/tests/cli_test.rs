//! Runs the `phishlens` binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const PHISHING_HTML: &str = r##"<html><head><meta name="keywords" content="facebook, login"></head>
<body><a href="#">Continue</a><form action=""></form></body></html>"##;

/// Run the binary with a clean environment: empty HOME, no PHISHLENS_* vars,
/// config rooted at `root`.
fn phishlens(root: &TempDir, args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_phishlens"));
    cmd.arg("--config-root")
        .arg(root.path())
        .args(args)
        .env("HOME", root.path())
        .env_remove("USERPROFILE")
        .env_remove("PHISHLENS_ANALYSIS_MAX_HTML_BYTES")
        .env_remove("PHISHLENS_OUTPUT_FORMAT")
        .env_remove("PHISHLENS_OUTPUT_COLOR")
        .env_remove("PHISHLENS_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().unwrap();
    if let Some(text) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(text.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_phishing_page_from_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("page.html");
    std::fs::write(&page, PHISHING_HTML).unwrap();

    let out = phishlens(
        &dir,
        &[
            "check",
            "http://facebook-alertt-com-securitys.com/",
            "--html",
            page.to_str().unwrap(),
            "--no-color",
        ],
        None,
    );
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("Phishing"));
    assert!(text.contains("MetaKeyword"));
}

#[test]
fn test_legitimate_page_exits_zero() {
    let dir = TempDir::new().unwrap();
    let out = phishlens(
        &dir,
        &["check", "https://www.example.com/", "--no-color"],
        None,
    );
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Legitimate"));
}

#[test]
fn test_markup_from_stdin_as_json() {
    let dir = TempDir::new().unwrap();
    let out = phishlens(
        &dir,
        &[
            "check",
            "http://facebook-alertt-com-securitys.com/",
            "--html",
            "-",
            "--format",
            "json",
        ],
        Some(PHISHING_HTML),
    );
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("\"label\": \"Phishing\""));
    assert!(text.contains("\"credibility_laundering\""));
}

#[test]
fn test_missing_html_file_is_unable_to_analyze() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.html");
    let out = phishlens(
        &dir,
        &["check", "http://example.com/", "--html", missing.to_str().unwrap()],
        None,
    );
    assert_eq!(out.status.code(), Some(2));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("unable to analyze"));
    assert!(err.contains("[INPUT_ERROR]"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_non_utf8_markup_is_rejected() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("bad.html");
    std::fs::write(&page, [0x3c, 0x61, 0xff, 0xfe, 0x3e]).unwrap();
    let out = phishlens(
        &dir,
        &["check", "http://example.com/", "--html", page.to_str().unwrap()],
        None,
    );
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_project_config_selects_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("phishlens.toml"), "[output]\nformat = \"json\"\n").unwrap();
    let out = phishlens(&dir, &["check", "https://www.example.com/"], None);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).trim_start().starts_with('{'));
}

#[test]
fn test_invalid_project_config_is_unable_to_analyze() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("phishlens.toml"), "[output\nformat = ").unwrap();
    let out = phishlens(&dir, &["check", "https://www.example.com/"], None);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("[CONFIG_ERROR]"));
}

#[test]
fn test_unknown_format_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    let out = phishlens(
        &dir,
        &["check", "https://www.example.com/", "--format", "xml"],
        None,
    );
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_demo_reports_both_samples() {
    let dir = TempDir::new().unwrap();
    let out = phishlens(&dir, &["demo", "--no-color"], None);
    // one of the two samples is phishing
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("http://facebook-Alertt-Com-Securitys.Com/"));
    assert!(text.contains("https://www.example.com/account/profile"));
    assert!(text.contains("2 page(s) analyzed: 1 phishing, 1 legitimate"));
}

#[test]
fn test_usage_error_exits_two() {
    let dir = TempDir::new().unwrap();
    let out = phishlens(&dir, &["check"], None);
    assert_eq!(out.status.code(), Some(2));
}
