use std::fs;

use kwic_core::pipeline::{IndexConfig, KwicIndexer, Sources};
use kwic_core::render::{render_text, write_atomic, ReportFormat, ReportRenderer};
use kwic_core::types::IndexReport;
use serde_json::Value;
use tempfile::tempdir;

fn quick_fox(config: IndexConfig) -> IndexReport {
    let sources = Sources::from_text("the quick fox", "the");
    KwicIndexer::with_config(config).index(&sources)
}

#[test]
fn reference_text_puts_blank_line_before_each_rotation() {
    let report = quick_fox(IndexConfig::v0());
    let text = ReportRenderer::new(ReportFormat::Text).render_to_string(&report).unwrap();

    assert_eq!(text, "\nfox the quick\n\nquick fox the\n");
}

#[test]
fn compact_text_is_one_rotation_per_line() {
    let report = quick_fox(IndexConfig::compact());
    let text = ReportRenderer::new(ReportFormat::Text).render_to_string(&report).unwrap();

    assert_eq!(text, "fox the quick\nquick fox the\n");
}

#[test]
fn trailing_separator_is_a_rendering_choice() {
    let config = IndexConfig {
        trailing_separator: true,
        ..IndexConfig::compact()
    };
    let report = quick_fox(config.clone());

    let mut buf = Vec::new();
    render_text(&report.rotations, &config, &mut buf).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), "fox the quick \nquick fox the \n");
    // Ordering is unaffected.
    assert_eq!(report.rotations.texts(), vec!["fox the quick", "quick fox the"]);
}

#[test]
fn empty_index_renders_nothing() {
    let sources = Sources::from_text("the", "the");
    let report = KwicIndexer::default().index(&sources);
    let text = ReportRenderer::new(ReportFormat::Text).render_to_string(&report).unwrap();

    assert_eq!(text, "");
}

#[test]
fn json_report_shape() {
    let report = quick_fox(IndexConfig::v0());
    let json = ReportRenderer::new(ReportFormat::Json).render_to_string(&report).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let index = &value["index"];
    assert_eq!(index["config"]["report_version"], 1);
    assert_eq!(index["config"]["blank_line_separator"], true);
    assert_eq!(index["line_count"], 1);
    assert_eq!(index["rotations_emitted"], 2);
    assert_eq!(index["rotations_excluded_as_noise"], 1);
    assert!(index["document_version"].as_str().unwrap().starts_with("sha256:"));
    assert!(index["noise_words_version"].as_str().unwrap().starts_with("sha256:"));
    assert!(index.get("generated_at").is_some());

    let rotations = value["rotations"].as_array().unwrap();
    assert_eq!(rotations.len(), 2);
    assert_eq!(rotations[0]["text"], "fox the quick");
    assert_eq!(rotations[0]["line_number"], 1);
    assert_eq!(rotations[0]["offset"], 2);
    assert_eq!(rotations[1]["text"], "quick fox the");
    assert_eq!(rotations[1]["offset"], 1);
}

#[test]
fn json_report_round_trips_rotations() {
    let report = quick_fox(IndexConfig::v0());
    let json = ReportRenderer::new(ReportFormat::Json).render_to_string(&report).unwrap();
    let back: IndexReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.rotations, report.rotations);
    assert_eq!(back.index.document_version, report.index.document_version);
}

#[test]
fn atomic_write_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(&path, "stale").unwrap();

    write_atomic(&path, b"fresh\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    assert!(!dir.path().join("report.txt.tmp").exists());
}

#[test]
fn atomic_write_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("report.txt");

    assert!(write_atomic(&path, b"x").is_err());
    assert!(!path.exists());
}

#[test]
fn with_trailing_separator_keeps_other_settings() {
    let config = IndexConfig::compact().with_trailing_separator();

    assert!(config.trailing_separator);
    assert!(!config.blank_line_separator);
    assert_eq!(config.report_version, IndexConfig::v0().report_version);

    let text = ReportRenderer::new(ReportFormat::Text)
        .render_to_string(&quick_fox(config))
        .unwrap();
    assert_eq!(text, "fox the quick \nquick fox the \n");
}

#[test]
fn atomic_write_overwrites_leftover_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(dir.path().join("report.txt.tmp"), "leftover from an earlier run, longer than the report").unwrap();

    write_atomic(&path, b"fresh\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    assert!(!dir.path().join("report.txt.tmp").exists());
}
