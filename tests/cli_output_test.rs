#![cfg(feature = "cli")]

use anyhow::Result;
use chronoforge::RunReport;
use std::process::{Command, Output};
use tempfile::TempDir;

fn chronoforge(args: &[&str], rust_log: Option<&str>) -> Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chronoforge"));
    cmd.args(args).env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        cmd.env("RUST_LOG", filter);
    }
    Ok(cmd.output()?)
}

#[test]
fn test_json_flag_stdout_is_single_report() -> Result<()> {
    let output = chronoforge(&["--json"], Some("info"))?;

    assert!(output.status.success());
    let report: RunReport = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report.subject, "chronoforge");
    assert!(report.success);

    // logs still emitted, on stderr
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Starting chronoforge"));
    Ok(())
}

#[test]
fn test_json_format_in_config_gives_json_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("forge.toml");
    std::fs::write(
        &config_path,
        "[forge]\nname = \"from-file\"\n[logging]\nformat = \"json\"\n",
    )?;
    let config_arg = config_path.to_str().unwrap_or_default();

    let output = chronoforge(&["--config", config_arg], None)?;

    assert!(output.status.success());
    let report: RunReport = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report.subject, "from-file");
    Ok(())
}

#[test]
fn test_invalid_level_reported_before_logger_setup() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("forge.toml");
    std::fs::write(
        &config_path,
        "[forge]\nname = \"x\"\n[logging]\nlevel = \"loud\"\n",
    )?;
    let config_arg = config_path.to_str().unwrap_or_default();

    let output = chronoforge(&["--config", config_arg], None)?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.contains("ignoring"));
    assert!(stderr.contains("logging.level"));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_plain_run_prints_success_line() -> Result<()> {
    let output = chronoforge(&["--name", "plain"], None)?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.trim(), "✅ 'plain' ran successfully");
    Ok(())
}
