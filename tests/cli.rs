use std::process::{Command, Output};

fn spdm_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spdm-sim"))
        .args(args)
        .output()
        .expect("failed to launch spdm-sim")
}

#[test]
fn no_arguments_prints_one_number() {
    let out = spdm_sim(&[]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let max: f64 = lines[0].parse().unwrap();
    // mu + peak of sin on the 0.1 s grid, within ten sigma of noise
    assert!(max > 2.3 && max < 4.3);
}

#[test]
fn noiseless_run_prints_reference_value() {
    let out = spdm_sim(&["--sigma", "0"]);
    assert!(out.status.success());

    let max: f64 = String::from_utf8(out.stdout).unwrap().trim().parse().unwrap();
    assert!((max - (2.3 + 1.6f64.sin())).abs() < 1e-9);
}

#[test]
fn negative_sigma_fails_validation() {
    let out = spdm_sim(&["--sigma", "-0.1"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("sigma must be >= 0"), "stderr: {stderr}");
}

#[test]
fn empty_horizon_exits_non_zero() {
    let out = spdm_sim(&["--tmax", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("empty run"));
}
