use super::utils;

const CHROME_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[test]
fn test_parse_default_sample() {
    let output = utils::run(vec![]).unwrap();
    let mut lines = output.lines();
    assert!(lines.next().unwrap().starts_with("input: Mozilla/5.0 (Linux; U; en-US)"));
    assert_eq!(
        lines.next().unwrap(),
        "result: browser=Kindle/3.0 engine=AppleWebKit/528.5 os=Linux device=ereader (Kindle)"
    );
    assert!(lines.next().is_none());
}

#[test]
fn test_parse_input_text() {
    let output = utils::run(vec![CHROME_LINUX]).unwrap();
    assert_eq!(
        output,
        format!(
            "input: {CHROME_LINUX}\nresult: browser=Chrome/124.0.0.0 engine=AppleWebKit/537.36 os=Linux device=desktop\n"
        )
    );
}

#[test]
fn test_parse_empty_input() {
    let output = utils::run(vec!["--format", "short", ""]).unwrap();
    assert_eq!(output, "input: \nresult: ;;;\n");
}

#[test]
fn test_parse_json() {
    let output = utils::run(vec!["--format", "json", "Googlebot/2.1"]).unwrap();
    let json = output
        .lines()
        .find_map(|line| line.strip_prefix("result: "))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["deviceType"], "bot");
    assert_eq!(value["browserName"], "unknown");
}

#[test]
fn test_parse_max_length() {
    let output = utils::run(vec!["--format", "short", "--max-length", "5", CHROME_LINUX]).unwrap();
    assert!(output.ends_with("result: ;;;\n"), "{output}");
}

#[test]
fn test_parse_stdin_lines() {
    let output = utils::run_with_stdin(
        vec!["--stdin", "--format", "short"],
        "Googlebot/2.1\nRoku/DVP-9.0 (289.00E04144A)\n",
    )
    .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "input: Googlebot/2.1\nresult: bot;;;\ninput: Roku/DVP-9.0 (289.00E04144A)\nresult: tv;roku;;\n"
    );
}

#[test]
fn test_parse_stdin_raw_bytes() {
    let output = utils::run_with_stdin(
        vec!["--stdin", "--format", "short"],
        b"Chrome/1.0 \xff\r\nGooglebot/2.1\n".as_slice(),
    )
    .unwrap();
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "input: Chrome/1.0 \u{FFFD}\nresult: desktop;;;chrome\ninput: Googlebot/2.1\nresult: bot;;;\n"
    );
}

#[cfg(unix)]
#[test]
fn test_parse_input_raw_bytes() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt as _};

    let output = utils::run_os(vec![
        OsStr::new("--format"),
        OsStr::new("short"),
        OsStr::from_bytes(b"Mozilla/5.0 \xff Chrome/1.0"),
    ])
    .unwrap();
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "input: Mozilla/5.0 \u{FFFD} Chrome/1.0\nresult: desktop;;;chrome\n"
    );
}

#[test]
fn test_parse_custom_rules() {
    let dir = std::env::temp_dir().join(format!("uasig-cli-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rules.json");
    std::fs::write(
        &path,
        r#"{ "browsers": [{ "token": "MyBrowser" }], "devices": [{ "token": "MyPhone", "device": "mobile", "device_name": "MyPhone" }] }"#,
    )
    .unwrap();

    let output = utils::run(vec![
        "--format",
        "short",
        "--rules",
        path.to_str().unwrap(),
        "MyBrowser/1.2 (MyPhone) Chrome/124.0",
    ])
    .unwrap();
    assert!(output.ends_with("result: mobile;myphone;;mybrowser\n"), "{output}");
}

#[test]
fn test_parse_invalid_rules() {
    let output = utils::run_with_stdin(
        vec!["--rules", "./this/file/does/not/exist.json", "Googlebot/2.1"],
        "",
    )
    .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("exit with error"), "{stderr}");
    assert!(stderr.contains("open rules file"), "{stderr}");
}
