//! Integration tests for the flexclip binary.

mod common;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use common::{
    ABC_TWO_PHRASES, NO_ABBREVIATION, SAMPLE_RATE, TWO_TEXTS, file_names, write_flextext,
    write_wav,
};
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// A command isolated from the user's config file and environment defaults.
fn flexclip(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("flexclip"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("FLEXCLIP_OUT_DIR")
        .env_remove("FLEXCLIP_TEXT")
        .env_remove("FLEXCLIP_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_extracts_clips_into_out_dir() {
    let dir = TempDir::new().unwrap();
    let annotation = write_flextext(dir.path(), "story.flextext", ABC_TWO_PHRASES);
    let audio = dir.path().join("story.wav");
    write_wav(&audio, 1, SAMPLE_RATE * 3);
    let out_dir = dir.path().join("clips");

    flexclip(&dir)
        .arg(&annotation)
        .arg(&audio)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--no-progress")
        .assert()
        .success();

    assert_eq!(file_names(&out_dir), vec!["ABC-1.wav", "ABC-2.wav"]);
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let annotation = write_flextext(dir.path(), "story.flextext", ABC_TWO_PHRASES);
    let audio = dir.path().join("story.wav");
    write_wav(&audio, 1, SAMPLE_RATE * 3);

    flexclip(&dir)
        .arg(&annotation)
        .arg(&audio)
        .arg("-o")
        .arg(dir.path().join("clips"))
        .arg("--output-mode")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result_type\":\"clip_extraction\""))
        .stdout(predicate::str::contains("\"identifier\":\"ABC-2\""));
}

#[test]
fn test_unknown_text_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let annotation = write_flextext(dir.path(), "story.flextext", ABC_TWO_PHRASES);
    let audio = dir.path().join("story.wav");
    write_wav(&audio, 1, SAMPLE_RATE * 3);
    let out_dir = dir.path().join("clips");

    flexclip(&dir)
        .arg(&annotation)
        .arg(&audio)
        .arg("-o")
        .arg(&out_dir)
        .arg("--text")
        .arg("XYZ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("XYZ"))
        .stderr(predicate::str::contains("story.flextext"));

    assert!(!out_dir.exists());
}

#[test]
fn test_unsupported_annotation_extension() {
    let dir = TempDir::new().unwrap();
    let annotation = write_flextext(dir.path(), "story.eaf", ABC_TWO_PHRASES);
    let audio = dir.path().join("story.wav");
    write_wav(&audio, 1, SAMPLE_RATE);

    flexclip(&dir)
        .arg(&annotation)
        .arg(&audio)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".eaf"));
}

#[test]
fn test_warns_about_text_without_abbreviation() {
    let dir = TempDir::new().unwrap();
    let annotation = write_flextext(dir.path(), "story.flextext", NO_ABBREVIATION);
    let audio = dir.path().join("story.wav");
    write_wav(&audio, 1, SAMPLE_RATE);
    let out_dir = dir.path().join("clips");

    flexclip(&dir)
        .arg(&annotation)
        .arg(&audio)
        .arg("-o")
        .arg(&out_dir)
        .arg("--no-progress")
        .assert()
        .success()
        .stderr(predicate::str::contains("no title-abbreviation"));

    assert_eq!(file_names(&out_dir), vec!["-1.wav"]);
}

#[test]
fn test_unknown_export_format_is_rejected() {
    let dir = TempDir::new().unwrap();

    flexclip(&dir)
        .arg("story.flextext")
        .arg("story.wav")
        .arg("--format")
        .arg("mp3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported export format: mp3"));
}

#[test]
fn test_texts_lists_abbreviations() {
    let dir = TempDir::new().unwrap();
    let annotation = write_flextext(dir.path(), "story.flextext", TWO_TEXTS);

    flexclip(&dir)
        .arg("texts")
        .arg(&annotation)
        .assert()
        .success()
        .stdout(predicate::str::contains("FIRST"))
        .stdout(predicate::str::contains("My Text"))
        .stdout(predicate::str::contains("(2 phrases)"));
}

#[test]
fn test_no_inputs_prints_usage() {
    let dir = TempDir::new().unwrap();

    flexclip(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("flexclip texts"));
}
