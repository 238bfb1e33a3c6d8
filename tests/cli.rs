use std::process::Command;

const EXPECTED: &'static str = "362880\n362880\n362880\n";

fn ycomb() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ycomb"));
    cmd.env_remove("YCOMB_LOG");
    cmd
}

#[test]
fn prints_three_factorials() {
    let output = ycomb().output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
    assert!(output.stderr.is_empty());
}

#[test]
fn logging_stays_off_stdout() {
    let output = ycomb().env("YCOMB_LOG", "trace").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("evaluated factorial"), "stderr: {}", stderr);
    assert!(stderr.contains("constructing fixed point"), "stderr: {}", stderr);
}

#[test]
fn ignores_arguments() {
    let output = ycomb().arg("--anything").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
}
