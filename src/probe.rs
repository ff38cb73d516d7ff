//! Environment probe for the legacy URI-compatibility switch.
//!
//! The probe dumps the full environment snapshot to the diagnostic sink
//! before checking anything, so a failing run still leaves a complete dump
//! for manual inspection.

use std::io::{self, Write};

use crate::envvar;
use crate::errors::ProbeError;

/// Environment variable toggling legacy relative-or-absolute URI parsing.
pub const URI_COMPAT_VAR: &str = "MONO_URI_DOTNETRELATIVEORABSOLUTE";

/// Value the switch must hold for the probe to pass. Exact match; `"TRUE"`,
/// `"1"` and friends do not count.
pub const EXPECTED_VALUE: &str = "true";

/// First line written to the diagnostic sink on every run.
pub const MARKER_LINE: &str = "uri-env-probe: environment snapshot";

/// Run the probe against an explicit snapshot, writing diagnostics to `out`.
pub fn run_probe<W: Write>(snapshot: &[(String, String)], out: &mut W) -> Result<(), ProbeError> {
    writeln!(out, "{MARKER_LINE}")?;
    for (key, value) in snapshot {
        writeln!(out, "  ENV: {key} = {value}")?;
    }

    let actual = envvar::lookup(snapshot, URI_COMPAT_VAR);
    if actual.as_deref() != Some(EXPECTED_VALUE) {
        return Err(ProbeError::Mismatch {
            expected: EXPECTED_VALUE,
            actual,
        });
    }
    Ok(())
}

/// Snapshot the ambient process environment and probe it, diagnostics on
/// stderr.
pub fn run() -> Result<(), ProbeError> {
    let snapshot = envvar::snapshot();
    let stderr = io::stderr();
    let mut out = stderr.lock();
    run_probe(&snapshot, &mut out)
}
