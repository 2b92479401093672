// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual lfc-msgs binary and verify its behavior.

use std::{
    path::PathBuf,
    process::{Command, Output},
};

use lfc_msgs::{Contact, Control, JointState, JsonCodec, MsgConversion, Sensor, Vector7};
use nalgebra::{DMatrix, DVector, Vector6};

/// Get the path to the built lfc-msgs binary
fn lfc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lfc-msgs"))
}

/// Write a temporary input file and return its path
fn temp_input(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lfc_cli_{}_{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run lfc-msgs with arguments
fn run(args: &[&str]) -> Output {
    let bin = lfc_bin();
    Command::new(&bin)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run lfc-msgs and assert success
fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run lfc-msgs and assert failure
fn run_err(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn sample_control() -> Control {
    let mut joint_state = JointState::zeros(vec!["hip".to_string(), "knee".to_string()]);
    joint_state.position = DVector::from_vec(vec![0.5, -0.25]);

    Control {
        feedback_gain: DMatrix::from_element(2, 4, 1.5),
        feedforward: DVector::from_vec(vec![0.1, -0.1]),
        initial_state: Sensor {
            base_pose: Vector7::from([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]),
            base_twist: Vector6::zeros(),
            joint_state,
            contacts: vec![Contact {
                active: true,
                name: "left_foot".to_string(),
                wrench: Vector6::new(0.0, 0.0, 300.0, 0.0, 0.0, 0.0),
                pose: Vector7::from([0.0, 0.1, 0.0, 0.0, 0.0, 0.0, 1.0]),
            }],
        },
    }
}

fn control_json() -> String {
    JsonCodec::new()
        .encode(&sample_control().to_msg(), true)
        .unwrap()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_ok(&["--help"]);
    assert!(output.contains("Linear feedback controller message toolkit"));
    assert!(output.contains("inspect"));
    assert!(output.contains("pack"));
    assert!(output.contains("unpack"));
    assert!(output.contains("roundtrip"));
}

#[test]
fn test_cli_version() {
    let output = run_ok(&["--version"]);
    assert!(output.contains("lfc-msgs"));
}

#[test]
fn test_cli_invalid_subcommand() {
    let stderr = run_err(&["nonexistent"]);
    assert!(stderr.contains("unrecognized") || stderr.contains("unknown"));
}

#[test]
fn test_cli_invalid_kind() {
    let path = temp_input("kind.json", "{}");
    let stderr = run_err(&["inspect", "joint_state", &path.to_string_lossy()]);
    assert!(stderr.contains("sensor"));
}

// ============================================================================
// Inspect Tests
// ============================================================================

#[test]
fn test_inspect_control() {
    let path = temp_input("inspect_control.json", &control_json());
    let output = run_ok(&["inspect", "control", &path.to_string_lossy()]);

    assert!(output.contains("linear_feedback_controller_msgs/msg/Control"));
    assert!(output.contains("Feedback gain: 2x4"));
    assert!(output.contains("Feedforward: 2 entries"));
    assert!(output.contains("hip"));
    assert!(output.contains("left_foot (active)"));
}

#[test]
fn test_inspect_sensor() {
    let msg = sample_control().initial_state.to_msg();
    let json = JsonCodec::new().encode(&msg, false).unwrap();
    let path = temp_input("inspect_sensor.json", &json);

    let output = run_ok(&["inspect", "sensor", &path.to_string_lossy()]);
    assert!(output.contains("Joints: 2"));
    assert!(output.contains("Contacts: 1"));
    assert!(output.contains("1970-01-01 00:00:00"));
}

#[test]
fn test_inspect_rejects_short_joint_arrays() {
    let mut msg = sample_control().to_msg();
    msg.initial_state.joint_state.velocity.clear();
    let json = JsonCodec::new().encode(&msg, false).unwrap();
    let path = temp_input("inspect_short.json", &json);

    let stderr = run_err(&["inspect", "control", &path.to_string_lossy()]);
    assert!(stderr.contains("Length mismatch in 'velocity'"));

    let config = temp_input("lenient.toml", "joint_lengths = \"allow_empty\"\n");
    let output = run_ok(&[
        "inspect",
        "control",
        &path.to_string_lossy(),
        "--config",
        &config.to_string_lossy(),
    ]);
    assert!(output.contains("v=-"));
}

#[test]
fn test_inspect_missing_file() {
    let stderr = run_err(&["inspect", "sensor", "/nonexistent/sensor.json"]);
    assert!(stderr.contains("Failed to read"));
}

// ============================================================================
// Pack / Unpack Tests
// ============================================================================

#[test]
fn test_pack_rows() {
    let path = temp_input("pack.json", "[[1, 2, 3], [4, 5, 6]]");
    let output = run_ok(&["pack", &path.to_string_lossy()]);

    let msg: lfc_msgs::Float64MultiArrayMsg = JsonCodec::new().decode(&output).unwrap();
    assert_eq!(msg.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(msg.layout.dim[0].stride, 6);
    assert_eq!(msg.layout.dim[1].label, "cols");
}

#[test]
fn test_pack_ragged_rows() {
    let path = temp_input("ragged.json", "[[1, 2], [3]]");
    let stderr = run_err(&["pack", &path.to_string_lossy()]);
    assert!(stderr.contains("Row 1 has 1 entries"));
}

#[test]
fn test_pack_then_unpack() {
    let rows = temp_input("rows.json", "[[0.5, -1.0], [2.0, 3.25], [4.0, 5.0]]");
    let packed = run_ok(&["pack", &rows.to_string_lossy(), "--pretty"]);

    let msg = temp_input("packed.json", &packed);
    let output = run_ok(&["unpack", &msg.to_string_lossy()]);
    let back: Vec<Vec<f64>> = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(back, vec![vec![0.5, -1.0], vec![2.0, 3.25], vec![4.0, 5.0]]);
}

#[test]
fn test_unpack_bad_stride() {
    let mut msg = sample_control().to_msg().feedback_gain;
    msg.layout.dim[0].stride = 7;
    let path = temp_input("bad_stride.json", &JsonCodec::new().encode(&msg, false).unwrap());

    let stderr = run_err(&["unpack", &path.to_string_lossy()]);
    assert!(stderr.contains("dim[0].stride is 7, expected 8"));
}

// ============================================================================
// Roundtrip Tests
// ============================================================================

#[test]
fn test_roundtrip_identical() {
    let path = temp_input("roundtrip.json", &control_json());
    let output = run_ok(&["roundtrip", "control", &path.to_string_lossy()]);
    assert!(output.contains("identical"));
}

#[test]
fn test_roundtrip_reports_frame_id() {
    let mut msg = sample_control().initial_state.to_msg();
    msg.joint_state.header.frame_id = "base_link".to_string();
    let json = JsonCodec::new().encode(&msg, false).unwrap();
    let path = temp_input("roundtrip_frame.json", &json);

    let output = run(&["roundtrip", "sensor", &path.to_string_lossy()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("joint_state.header"));
}
