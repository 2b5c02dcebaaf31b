use super::utils;

#[test]
fn test_help() {
    let lines = utils::run(vec!["--help"]).unwrap();
    assert!(lines.contains("uasig cli to classify user-agent strings"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Arguments:"));
    assert!(lines.contains("Options:"));
    assert!(lines.contains("--max-length"));
    assert!(lines.contains("--rules"));
}

#[test]
fn test_version() {
    let lines = utils::run(vec!["--version"]).unwrap();
    assert!(lines.starts_with("uasig "));
}
