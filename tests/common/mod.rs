use std::process::{Command, Output};

/// Command for the probe binary under test.
pub fn probe_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_uri-env-probe"))
}

pub fn stderr_str(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

/// Expected dump line for one snapshot entry.
#[allow(dead_code)]
pub fn env_line(key: &str, value: &str) -> String {
    format!("  ENV: {} = {}", key, value)
}
