use std::process::Command;

// With stdout piped to the test harness there is no terminal to
// measure, so the probe must exit with status 1 and still print both
// diagnostic lines, but no dimensions line.
#[test]
fn redirected_stdout_fails_after_the_diagnostic_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_termprobe"))
        .output()
        .expect("failed to run termprobe");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("TIOCGWINSZ = 0x"));
    assert!(lines.next().unwrap().starts_with("sizeof winsize "));
    assert_eq!(lines.next(), None);
}
