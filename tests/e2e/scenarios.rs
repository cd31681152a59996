use super::helpers::TestProject;

#[test]
fn test_plain_text_without_urls_writes_empty_document() {
    let project = TestProject::new();
    project.write("deps.txt", "no links here\nhttps://gitlab.com/acme/widget\n");

    let output = project.run_credits(&["deps.txt", "-o", "Credits.rtf"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Extracted 0 URLs"));
    let document = project.read("Credits.rtf");
    assert!(document.starts_with("{\\rtf1"));
    assert!(!document.contains("\\par}"));
    assert!(!document.contains("\\b\\fs"));
}

#[test]
fn test_excluded_and_invalid_references_need_no_network() {
    let project = TestProject::new();
    project.write(
        "deps.txt",
        "https://github.com/acme/widget\nhttps://github.com/acme/gadget\nhttps://github.com/onlyowner\n",
    );

    let output = project.run_credits(&[
        "deps.txt", "-o", "Credits.rtf", "-x", "widget", "--exclude", "gadget",
        "--report", "report.json",
    ]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Extracted 3 URLs"));
    assert!(stderr.contains("0 found  0 absent  1 invalid  2 excluded"));

    let report: serde_json::Value = serde_json::from_str(&project.read("report.json")).unwrap();
    let outcomes: Vec<&str> = report["references"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["outcome"].as_str().unwrap())
        .collect();
    assert_eq!(outcomes, vec!["excluded", "excluded", "invalid"]);
    assert_eq!(report["summary"]["excluded"], 2);
}

#[test]
fn test_config_file_exclusions_apply() {
    let project = TestProject::new();
    project.write("credits.toml", "exclude = [\"widget\"]\nexclude_patterns = [\"swift-*\"]\n");
    project.write(
        "deps.txt",
        "https://github.com/acme/widget\nhttps://github.com/apple/swift-log\n",
    );

    let output = project.run_credits(&["deps.txt", "-o", "Credits.rtf"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("2 excluded"));
}

#[test]
fn test_write_failure_is_an_error() {
    let project = TestProject::new();
    project.write("deps.txt", "");

    let output = project.run_credits(&["deps.txt", "-o", "missing/Credits.rtf"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot write output"));
}

#[test]
fn test_invalid_arguments_are_rejected() {
    let project = TestProject::new();
    project.write("deps.txt", "");

    let missing_output = project.run_credits(&["deps.txt"]);
    assert!(!missing_output.status.success());

    let zero_font = project.run_credits(&["deps.txt", "-o", "Credits.rtf", "--font-size", "0"]);
    assert!(!zero_font.status.success());
}

#[test]
fn test_malformed_config_is_an_error() {
    let project = TestProject::new();
    project.write("credits.toml", "font_size = \"big\"\n");
    project.write("deps.txt", "");

    let output = project.run_credits(&["deps.txt", "-o", "Credits.rtf"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid configuration"));
}
