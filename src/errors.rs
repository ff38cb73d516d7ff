//! Error mapping guide:
//! - Every probe failure maps to exit code 1.
//! - Prefer ProbeError for internal clarity; user-visible strings live in
//!   display_for_probe_error.
use std::io;

use crate::probe::URI_COMPAT_VAR;

/// Probe failures: the diagnostic sink broke, or the compatibility switch
/// held something other than the expected value.
#[derive(Debug)]
pub enum ProbeError {
    Io(io::Error),
    Mismatch {
        expected: &'static str,
        /// Observed value; `None` means the variable was not set at all.
        actual: Option<String>,
    },
}

impl From<io::Error> for ProbeError {
    fn from(e: io::Error) -> Self {
        ProbeError::Io(e)
    }
}

/// Convert ProbeError to a process exit code.
pub fn exit_code_for_probe_error(e: &ProbeError) -> u8 {
    match e {
        ProbeError::Io(_) => 1,
        ProbeError::Mismatch { .. } => 1,
    }
}

/// Render a user-facing string for ProbeError. An unset variable renders as
/// `(unset)` so it cannot be confused with an empty string.
pub fn display_for_probe_error(e: &ProbeError) -> String {
    match e {
        ProbeError::Io(ioe) => format!("diagnostic stream failed: {ioe}"),
        ProbeError::Mismatch { expected, actual } => {
            let shown = match actual {
                Some(v) => format!("\"{v}\""),
                None => "(unset)".to_string(),
            };
            format!("{URI_COMPAT_VAR}: expected \"{expected}\", actual {shown}")
        }
    }
}
