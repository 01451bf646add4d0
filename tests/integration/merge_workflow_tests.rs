/*!
 * Integration tests for the load, shift, merge and write workflow
 */

use anyhow::Result;
use std::path::PathBuf;

use assmerge::app_config::{InputFile, MergeConfig};
use assmerge::app_controller::Controller;
use assmerge::document::Timestamp;
use assmerge::merge::style_digest;
use assmerge::subtitle_processor::parse_ass;

use crate::common;

fn two_files(dir: &std::path::Path) -> Result<(PathBuf, PathBuf)> {
    let a =
        common::create_test_subtitle(dir, "a.ass", "First", "from a", "0:00:01.00", "0:00:02.00")?;
    let b =
        common::create_test_subtitle(dir, "b.ass", "Second", "from b", "0:00:03.00", "0:00:04.00")?;
    Ok((a, b))
}

fn run_to_string(config: MergeConfig) -> Result<String> {
    let controller = Controller::with_config(config)?;
    let mut out = Vec::new();
    controller.run(&mut out, &mut std::io::sink())?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_run_shouldWriteProgressBlockPerFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let (a, b) = two_files(temp_dir.path())?;

    let controller = Controller::with_config(MergeConfig {
        inputs: vec![InputFile::with_sync(&a, -40), InputFile::new(&b)],
        global_sync_us: 7,
        ..MergeConfig::default()
    })?;
    let mut out = Vec::new();
    let mut progress = Vec::new();
    controller.run(&mut out, &mut progress)?;

    let progress = String::from_utf8(progress)?;
    let expected = format!(
        "\nFile: {}\n  Sync: -40\n\n\nFile: {}\n  Sync: 7\n\n",
        a.display(),
        b.display()
    );
    assert_eq!(progress, expected);
    assert!(!out.is_empty());
    Ok(())
}

#[test]
fn test_run_withGlobalSync_shouldShiftEveryFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let (a, b) = two_files(temp_dir.path())?;

    let output = run_to_string(MergeConfig {
        inputs: vec![InputFile::new(a), InputFile::new(b)],
        global_sync_us: 2_000_000,
        ..MergeConfig::default()
    })?;
    let merged = parse_ass(&output)?;

    let starts: Vec<Timestamp> = merged.events.iter().map(|e| e.fields().start).collect();
    assert_eq!(starts, vec![Timestamp::from_millis(3_000), Timestamp::from_millis(5_000)]);
    Ok(())
}

#[test]
fn test_run_withFileSync_shouldOverrideGlobalSync() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let (a, b) = two_files(temp_dir.path())?;

    let output = run_to_string(MergeConfig {
        inputs: vec![InputFile::with_sync(a, 5_000), InputFile::new(b)],
        global_sync_us: 1_000,
        ..MergeConfig::default()
    })?;
    let merged = parse_ass(&output)?;

    let starts: Vec<i64> = merged.events.iter().map(|e| e.fields().start.as_micros()).collect();
    assert_eq!(starts, vec![1_005_000, 3_001_000]);
    Ok(())
}

#[test]
fn test_run_withTitle_shouldOverrideFirstFileTitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let (a, b) = two_files(temp_dir.path())?;

    let output = run_to_string(MergeConfig {
        inputs: vec![InputFile::new(a), InputFile::new(b)],
        title: Some("Combined".to_string()),
        ..MergeConfig::default()
    })?;
    let merged = parse_ass(&output)?;

    assert_eq!(merged.info.get("Title"), Some("Combined"));
    assert_eq!(output.matches("Title:").count(), 1);
    Ok(())
}

#[test]
fn test_run_shouldSeedMetadataFromFirstFileOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let (a, b) = two_files(temp_dir.path())?;

    let output = run_to_string(MergeConfig {
        inputs: vec![InputFile::new(a), InputFile::new(b)],
        ..MergeConfig::default()
    })?;
    let merged = parse_ass(&output)?;

    assert_eq!(merged.info.get("Title"), Some("First"));
    assert_eq!(merged.info.get("PlayResX"), Some("1280"));
    assert_eq!(merged.info.get("ScriptType"), Some("v4.00+"));
    // not on the allow-list
    assert_eq!(merged.info.get("Collisions"), None);
    Ok(())
}

#[test]
fn test_run_shouldDropUnusedStyles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let (a, b) = two_files(temp_dir.path())?;

    let output = run_to_string(MergeConfig {
        inputs: vec![InputFile::new(a), InputFile::new(b)],
        ..MergeConfig::default()
    })?;
    let merged = parse_ass(&output)?;

    assert!(merged.styles.iter().all(|s| s.name != "Unused"));
    assert_eq!(merged.styles.len(), 2);
    assert_eq!(merged.events.len(), 2);
    Ok(())
}

#[test]
fn test_run_withRename_shouldWriteDigestStyleNames() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let (a, b) = two_files(temp_dir.path())?;

    let output = run_to_string(MergeConfig {
        inputs: vec![InputFile::new(a), InputFile::new(b)],
        rename_styles: true,
        ..MergeConfig::default()
    })?;
    let merged = parse_ass(&output)?;

    let first = style_digest("Default", 0);
    let second = style_digest("Default", 1);
    let names: Vec<&str> = merged.styles.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec![first.as_str(), second.as_str()]);
    assert_eq!(merged.events[0].style(), first);
    assert_eq!(merged.events[1].style(), second);
    common::assert_styles_resolve(&merged);
    Ok(())
}

#[test]
fn test_run_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = MergeConfig {
        inputs: vec![InputFile::new(temp_dir.path().join("absent.ass"))],
        ..MergeConfig::default()
    };

    let controller = Controller::with_config(config)?;
    let mut out = Vec::new();
    let mut progress = Vec::new();
    assert!(controller.run(&mut out, &mut progress).is_err());
    // the file is announced before it is read
    assert!(String::from_utf8(progress)?.contains("absent.ass"));
    assert!(out.is_empty());
    Ok(())
}
