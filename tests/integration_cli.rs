//! Runs the binary against the shipped scenario files.

use std::process::Command;

fn run_scenario(path: &str) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_pv-sizer"))
        .args(["--scenario", path])
        .output()
        .expect("pv-sizer process should run");

    assert!(
        output.status.success(),
        "scenario run failed for {path}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

#[test]
fn shipped_scenarios_run_end_to_end() {
    for path in [
        "scenarios/apartment.toml",
        "scenarios/family_home.toml",
        "scenarios/offgrid_farm.toml",
    ] {
        let stdout = run_scenario(path);
        assert!(stdout.contains("Solar System Estimate"), "missing report header for {path}");
        assert!(stdout.contains("Published size"), "missing sizing line for {path}");
        assert!(stdout.contains("Simple payback"), "missing economics line for {path}");
        assert!(stdout.contains("January"), "missing production table for {path}");
    }
}

#[test]
fn offgrid_farm_selects_a_lithium_bank() {
    let stdout = run_scenario("scenarios/offgrid_farm.toml");
    assert!(
        stdout.contains("Lithium Iron Phosphate"),
        "expected a lithium bank in: {stdout}"
    );
}

#[test]
fn preset_flag_runs_without_a_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_pv-sizer"))
        .args(["--preset", "apartment"])
        .output()
        .expect("pv-sizer process should run");
    assert!(output.status.success());
}

#[test]
fn unknown_preset_exits_nonzero_with_message() {
    let output = Command::new(env!("CARGO_BIN_EXE_pv-sizer"))
        .args(["--preset", "mansion"])
        .output()
        .expect("pv-sizer process should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset"));
}

#[test]
fn production_export_writes_a_csv() {
    let dir = std::env::temp_dir();
    let out = dir.join("pv_sizer_production_test.csv");
    let out_str = out.to_string_lossy().to_string();
    let output = Command::new(env!("CARGO_BIN_EXE_pv-sizer"))
        .args(["--preset", "family_home", "--production-out", &out_str])
        .output()
        .expect("pv-sizer process should run");
    assert!(output.status.success());

    let csv = std::fs::read_to_string(&out).expect("CSV file should exist");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("month,production_kwh,daily_average_kwh,irradiance_kwh_m2,days")
    );
    assert_eq!(lines.count(), 12);
    std::fs::remove_file(&out).ok();
}
