// MD5 Chess - Free and Open Source Software Statement
//
// File: tests/cli_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Runs the md5chess binary and checks its stdout/stderr contract.

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use std::process::Output;

    fn run(args: &[&str]) -> Output {
        Command::cargo_bin("md5chess")
            .expect("md5chess binary should be built")
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("md5chess binary should start")
    }

    #[test]
    fn test_prints_both_parts() {
        let output = run(&["--door", "abc", "--len", "1"]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "Part 1: 1\nPart 2: 0\n");
    }

    #[test]
    fn test_quiet_without_debug() {
        let output = run(&["--door", "abc", "--len", "1"]);
        assert!(output.stderr.is_empty(), "Progress should be discarded without --debug");
    }

    #[test]
    fn test_debug_progress_on_stderr() {
        let output = run(&["--door", "abc", "--len", "1", "--debug"]);
        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("pt1 partial: 1"));
        assert!(stderr.contains("pt2 partial: 0"));
        assert!(stderr.contains("door id: abc"));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("partial"), "Progress must not reach stdout");
    }

    #[test]
    fn test_zero_length() {
        let output = run(&["--len", "0"]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "Part 1: \nPart 2: \n");
    }

    #[test]
    fn test_length_too_long_exits_with_error() {
        let output = run(&["--len", "11"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Error: password length 11 is too long (maximum 10)"));
    }
}
