/// Process-level behaviour of the server binary
use std::io::Write;
use std::process::{Command, Stdio};

#[cfg(test)]
mod binary_exit_tests {
    use super::*;

    fn run_with_input(input: &[u8]) -> std::process::Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_basic-mcp-server"))
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start server binary");

        child
            .stdin
            .take()
            .unwrap()
            .write_all(input)
            .expect("Failed to write to server stdin");

        child.wait_with_output().expect("Failed to wait for server")
    }

    #[test]
    fn test_closed_stdin_exits_cleanly() {
        let output = run_with_input(b"");

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_fatal_error_is_reported_once() {
        // Invalid UTF-8 makes the line reader fail
        let output = run_with_input(&[0xff, 0xfe, b'\n']);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stderr.matches("Server error").count(), 1, "stderr: {}", stderr);
        assert!(!stderr.contains("Error: Io"), "stderr: {}", stderr);
    }
}
