use ivie_tools::parser::{flatten_str, FlattenConfig};
use ivie_tools::report::{generate_report, prettify_html, ReportConfig};

const DUMP: &str = r#"<root>
    <thread id="0" name="Main &amp; UI">
        <frame start="2000" elapsed="300">
            <event start="0" elapsed="300" name="BaseApplication::loop">
                <event start="2050" elapsed="120" name="Image&lt;Webm&gt;::decode" />
            </event>
        </frame>
        <frame start="2300" elapsed="4" />
    </thread>
</root>"#;

#[test]
fn test_generate_report_structure() {
    let model = flatten_str(DUMP, &FlattenConfig::default()).unwrap();
    let html = generate_report(&model, None).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
    assert!(html.contains("<title>Ivie Zone Profile</title>"));
    assert!(html.contains("<h2>Thread 0: Main &amp; UI</h2>"));
    assert!(html.contains("Frame 1: start 2000, elapsed 300"));
    // One retained frame only
    assert!(!html.contains("Frame 2:"));
    assert!(html.contains(">Image&lt;Webm&gt;::decode</div>"));
    assert!(html.contains("left: 5px; width: 12px"));
}

#[test]
fn test_generate_report_is_indented() {
    let model = flatten_str(DUMP, &FlattenConfig::default()).unwrap();
    let html = generate_report(&model, None).unwrap();

    assert!(html.contains("\n <head>\n"));
    assert!(html.contains("\n  <meta charset=\"utf-8\"/>\n"));
    assert!(html.lines().all(|line| !line.trim().is_empty()));
}

#[test]
fn test_generate_report_is_stable_under_reformatting() {
    let model = flatten_str(DUMP, &FlattenConfig::default()).unwrap();
    let html = generate_report(&model, Some(&ReportConfig::new().with_title("Stable"))).unwrap();

    assert_eq!(prettify_html(&html).unwrap(), html);
}

#[test]
fn test_report_for_thread_without_frames() {
    let model = flatten_str(
        r#"<root><thread id="0" name="Main"><frame start="0" elapsed="3"/></thread></root>"#,
        &FlattenConfig::default(),
    )
    .unwrap();
    let html = generate_report(&model, None).unwrap();

    assert!(html.contains("No frames above the noise threshold."));
}
